//! HTML Renderer: serializes a `ResumeDocument` into styled markup.
//!
//! The CSS is generated from `layout::style`, so the browser lays the preview
//! out with the same sizes the measurer used to compute the page count.

use std::fmt::Write;

use crate::document::model::ResumeDocument;
use crate::layout::font_metrics::FontWeight;
use crate::layout::navigator::PageNavigator;
use crate::layout::page::PageGeometry;
use crate::layout::paginator::PageDescriptor;
use crate::layout::style::{self, TextStyle};
use crate::render::templates::{Template, DIVIDER, MUTED, TEXT};

/// Stylesheet plus the full, unpaginated resume content.
pub fn render_document_html(doc: &ResumeDocument, template: Template, page: &PageGeometry) -> String {
    let mut html = stylesheet(template, page);
    html.push_str(&render_content(doc));
    html
}

/// One fixed-size container per page, each clipping an absolutely positioned
/// copy of the full content shifted up by the page's offset. Only the
/// navigator's current page is displayed.
pub fn render_paginated_html(
    doc: &ResumeDocument,
    template: Template,
    page: &PageGeometry,
    pages: &[PageDescriptor],
    navigator: &PageNavigator,
) -> String {
    let content = render_content(doc);
    let mut html = stylesheet(template, page);

    let _ = write!(
        html,
        r#"<div class="resume-pages" data-page-count="{}">"#,
        pages.len()
    );
    for descriptor in pages {
        let display = if navigator.is_visible(descriptor.index) {
            "block"
        } else {
            "none"
        };
        let _ = write!(
            html,
            concat!(
                r#"<div class="resume-page" data-page="{index}" style="display:{display}">"#,
                r#"<div class="resume-page-window">"#,
                r#"<div class="resume-page-shift" style="top:-{offset}px">{content}</div>"#,
                "</div></div>"
            ),
            index = descriptor.index,
            display = display,
            offset = descriptor.vertical_offset,
            content = content,
        );
    }
    html.push_str("</div>");
    html
}

fn render_content(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut html = String::from(r#"<div class="resume-content">"#);

    let separator = style::CONTACT_SEPARATOR.replace(' ', "&nbsp;");
    let contact = info
        .contact_items()
        .into_iter()
        .map(html_escape)
        .collect::<Vec<_>>()
        .join(separator.as_str());
    let _ = write!(
        html,
        r#"<header class="resume-header"><h1>{}</h1><p class="resume-title">{}</p><p class="resume-contact">{}</p></header>"#,
        html_escape(&info.name),
        html_escape(&info.title),
        contact,
    );

    open_section(&mut html, "Professional Summary");
    let _ = write!(html, r#"<p class="resume-body">{}</p>"#, html_escape(&info.summary));
    close_section(&mut html);

    open_section(&mut html, "Experience");
    for item in &doc.experience {
        let _ = write!(
            html,
            r#"<div class="resume-item"><h3>{} — {}</h3>"#,
            html_escape(&item.title),
            html_escape(&item.company)
        );
        if let Some(meta) = item.meta_line() {
            let _ = write!(html, r#"<p class="resume-meta">{}</p>"#, html_escape(&meta));
        }
        if !item.highlights.is_empty() {
            html.push_str(r#"<ul class="resume-highlights">"#);
            for highlight in &item.highlights {
                let _ = write!(html, "<li>{}</li>", html_escape(highlight));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    close_section(&mut html);

    open_section(&mut html, "Education");
    for item in &doc.education {
        let _ = write!(
            html,
            r#"<div class="resume-item"><h3>{}</h3>"#,
            html_escape(&item.degree)
        );
        if let Some(meta) = item.meta_line() {
            let _ = write!(html, r#"<p class="resume-meta">{}</p>"#, html_escape(&meta));
        }
        html.push_str("</div>");
    }
    close_section(&mut html);

    open_section(&mut html, "Skills");
    let _ = write!(
        html,
        r#"<p class="resume-body">{}</p>"#,
        html_escape(&doc.skills.join(style::SKILL_SEPARATOR))
    );
    close_section(&mut html);

    html.push_str("</div>");
    html
}

fn open_section(html: &mut String, title: &str) {
    let _ = write!(
        html,
        r#"<section class="resume-section"><h2>{}</h2><div class="resume-section-body">"#,
        html_escape(title)
    );
}

fn close_section(html: &mut String) {
    html.push_str("</div></section>");
}

fn font_rule(style: TextStyle) -> String {
    let weight = match style.weight {
        FontWeight::Regular => 400,
        FontWeight::Bold => 700,
    };
    format!(
        "margin:0;font-size:{}px;line-height:{};font-weight:{}",
        style.font_size, style.line_height, weight
    )
}

fn stylesheet(template: Template, page: &PageGeometry) -> String {
    let accent = template.accent().to_css();
    let mut css = String::from("<style>");
    let _ = write!(
        css,
        ".resume-content{{width:{width}px;font-family:{font};color:{text};word-wrap:break-word}}\
         .resume-header{{padding-bottom:{header_gap}px;border-bottom:{header_rule}px solid {accent}}}\
         .resume-header h1{{{name}}}\
         .resume-title{{{title};color:{accent}}}\
         .resume-contact{{{contact};color:{muted}}}\
         .resume-section{{margin-top:{section_gap}px}}\
         .resume-section h2{{{heading};text-transform:uppercase;color:{accent};border-bottom:{section_rule}px solid {divider}}}\
         .resume-section-body{{margin-top:{body_gap}px}}\
         .resume-item+.resume-item{{margin-top:{item_gap}px}}\
         .resume-item h3{{{item}}}\
         .resume-meta{{{meta};color:{muted}}}\
         .resume-body{{{body}}}\
         .resume-highlights{{list-style:none;margin:0;padding:0}}\
         .resume-highlights li{{{body};position:relative;padding-left:{indent}px}}\
         .resume-highlights li::before{{content:'\\2022';position:absolute;left:{bullet}px;color:{accent}}}\
         .resume-page{{width:{page_w}px;height:{page_h}px;padding:{padding}px;box-sizing:border-box;background:#fff;overflow:hidden}}\
         .resume-page-window{{position:relative;width:{content_w}px;height:{content_h}px;overflow:hidden}}\
         .resume-page-shift{{position:absolute;left:0}}",
        width = page.content_width(),
        font = template.font_stack(),
        text = TEXT.to_css(),
        muted = MUTED.to_css(),
        divider = DIVIDER.to_css(),
        accent = accent,
        header_gap = style::HEADER_GAP,
        header_rule = style::HEADER_RULE,
        name = font_rule(style::NAME),
        title = font_rule(style::TITLE),
        contact = font_rule(style::CONTACT),
        section_gap = style::SECTION_GAP,
        heading = font_rule(style::SECTION_HEADING),
        section_rule = style::SECTION_RULE,
        body_gap = style::SECTION_BODY_GAP,
        item_gap = style::ITEM_GAP,
        item = font_rule(style::ITEM_HEADING),
        meta = font_rule(style::META),
        body = font_rule(style::BODY),
        indent = style::HIGHLIGHT_INDENT,
        bullet = style::BULLET_INDENT,
        page_w = page.width,
        page_h = page.height,
        padding = page.padding,
        content_w = page.content_width(),
        content_h = page.content_height(),
    );
    css.push_str("</style>");
    css
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
