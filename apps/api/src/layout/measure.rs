//! Lays out a `ResumeDocument` in a fixed-width container.
//!
//! This is the measurement the browser would do on a hidden element: every
//! text line and rule gets a position, and the final cursor is the content
//! height `H` fed to the paginator. The export rasterizer paints the same
//! elements, so preview and PDF never disagree about height.
//!
//! Coordinates are CSS pixels relative to the top-left of the content box
//! (page padding excluded), y growing downwards.

use crate::document::model::ResumeDocument;
use crate::layout::font_metrics::{get_metrics, FontMetricTable, FontWeight};
use crate::layout::page::PageGeometry;
use crate::layout::style::{self, TextStyle};
use crate::render::templates::{Color, Template, DIVIDER, MUTED, TEXT};

/// One laid-out line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    /// Top of the line box.
    pub y: f32,
    pub font_size: f32,
    pub line_box: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextRun {
    /// Alphabetic baseline, with the glyphs centred in the line box.
    pub fn baseline(&self) -> f32 {
        self.y + (self.line_box - self.font_size) / 2.0 + self.font_size * 0.8
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextRun),
    Rule(Rule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub template: Template,
    pub width: f32,
    pub content_height: f32,
    pub elements: Vec<LayoutElement>,
}

impl DocumentLayout {
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            LayoutElement::Text(run) => Some(run),
            LayoutElement::Rule(_) => None,
        })
    }
}

/// Lays out the full, unpaginated document at the page's content width.
pub fn layout_document(
    doc: &ResumeDocument,
    template: Template,
    page: &PageGeometry,
) -> DocumentLayout {
    let mut layouter = Layouter {
        metrics: get_metrics(template.font()),
        width: page.content_width(),
        cursor: 0.0,
        elements: Vec::new(),
    };
    let accent = template.accent();
    let info = &doc.personal_info;

    // Header
    layouter.paragraph(&info.name, style::NAME, TEXT, 0.0);
    layouter.paragraph(&info.title, style::TITLE, accent, 0.0);
    layouter.paragraph(
        &info.contact_items().join(style::CONTACT_SEPARATOR),
        style::CONTACT,
        MUTED,
        0.0,
    );
    layouter.gap(style::HEADER_GAP);
    layouter.rule(style::HEADER_RULE, accent);

    layouter.section_heading("Professional Summary", accent);
    layouter.paragraph(&info.summary, style::BODY, TEXT, 0.0);

    layouter.section_heading("Experience", accent);
    for (i, item) in doc.experience.iter().enumerate() {
        if i > 0 {
            layouter.gap(style::ITEM_GAP);
        }
        layouter.paragraph(
            &format!("{} — {}", item.title, item.company),
            style::ITEM_HEADING,
            TEXT,
            0.0,
        );
        if let Some(meta) = item.meta_line() {
            layouter.paragraph(&meta, style::META, MUTED, 0.0);
        }
        for highlight in &item.highlights {
            layouter.bullet(highlight, accent);
        }
    }

    layouter.section_heading("Education", accent);
    for (i, item) in doc.education.iter().enumerate() {
        if i > 0 {
            layouter.gap(style::ITEM_GAP);
        }
        layouter.paragraph(&item.degree, style::ITEM_HEADING, TEXT, 0.0);
        if let Some(meta) = item.meta_line() {
            layouter.paragraph(&meta, style::META, MUTED, 0.0);
        }
    }

    layouter.section_heading("Skills", accent);
    layouter.paragraph(&doc.skills.join(style::SKILL_SEPARATOR), style::BODY, TEXT, 0.0);

    DocumentLayout {
        template,
        width: layouter.width,
        content_height: layouter.cursor,
        elements: layouter.elements,
    }
}

struct Layouter {
    metrics: &'static FontMetricTable,
    width: f32,
    cursor: f32,
    elements: Vec<LayoutElement>,
}

impl Layouter {
    fn gap(&mut self, px: f32) {
        self.cursor += px;
    }

    fn rule(&mut self, thickness: f32, color: Color) {
        self.elements.push(LayoutElement::Rule(Rule {
            x: 0.0,
            y: self.cursor,
            width: self.width,
            thickness,
            color,
        }));
        self.cursor += thickness;
    }

    fn paragraph(&mut self, text: &str, style: TextStyle, color: Color, indent: f32) {
        let lines = self.metrics.wrap_text(
            text,
            style.font_size,
            style.weight,
            (self.width - indent).max(0.0),
        );
        for line in lines {
            self.push_line(line, indent, style, color);
        }
    }

    fn bullet(&mut self, text: &str, color: Color) {
        let first_line_top = self.cursor;
        let before = self.elements.len();
        self.paragraph(text, style::BODY, TEXT, style::HIGHLIGHT_INDENT);
        if self.elements.len() > before {
            self.elements.insert(
                before,
                LayoutElement::Text(TextRun {
                    text: "•".to_string(),
                    x: style::BULLET_INDENT,
                    y: first_line_top,
                    font_size: style::BODY.font_size,
                    line_box: style::BODY.line_box(),
                    weight: FontWeight::Regular,
                    color,
                }),
            );
        }
    }

    fn section_heading(&mut self, title: &str, accent: Color) {
        self.gap(style::SECTION_GAP);
        self.paragraph(&title.to_uppercase(), style::SECTION_HEADING, accent, 0.0);
        self.rule(style::SECTION_RULE, DIVIDER);
        self.gap(style::SECTION_BODY_GAP);
    }

    fn push_line(&mut self, text: String, x: f32, style: TextStyle, color: Color) {
        let line_box = style.line_box();
        self.elements.push(LayoutElement::Text(TextRun {
            text,
            x,
            y: self.cursor,
            font_size: style.font_size,
            line_box,
            weight: style.weight,
            color,
        }));
        self.cursor += line_box;
    }
}
