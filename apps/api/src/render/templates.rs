//! Template gallery. Each template fixes a font family (used for measurement),
//! a CSS font stack for the preview, the PDF base fonts used at export, and an
//! accent colour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::font_metrics::FontFamily;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components in 0.0–1.0, as PDF fill operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

pub const TEXT: Color = Color::rgb(0x1f, 0x29, 0x37);
pub const MUTED: Color = Color::rgb(0x6b, 0x72, 0x80);
pub const DIVIDER: Color = Color::rgb(0xd1, 0xd5, 0xdb);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Modern,
    Classic,
    Professional,
}

/// PDF standard-14 font names used when exporting a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFonts {
    pub regular: &'static str,
    pub bold: &'static str,
}

/// Gallery entry returned by `GET /api/v1/templates`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: Template,
    pub name: &'static str,
    pub description: &'static str,
    pub accent: String,
    pub font_stack: &'static str,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Professional];

    pub fn font(self) -> FontFamily {
        match self {
            Template::Modern => FontFamily::Inter,
            Template::Classic => FontFamily::EbGaramond,
            Template::Professional => FontFamily::Lato,
        }
    }

    pub fn font_stack(self) -> &'static str {
        match self {
            Template::Modern => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            Template::Classic => "'EB Garamond', Georgia, 'Times New Roman', serif",
            Template::Professional => "'Lato', 'Helvetica Neue', Arial, sans-serif",
        }
    }

    pub fn base_fonts(self) -> BaseFonts {
        match self {
            Template::Classic => BaseFonts {
                regular: "Times-Roman",
                bold: "Times-Bold",
            },
            Template::Modern | Template::Professional => BaseFonts {
                regular: "Helvetica",
                bold: "Helvetica-Bold",
            },
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Template::Modern => Color::rgb(0x25, 0x63, 0xeb),
            Template::Classic => Color::rgb(0x37, 0x41, 0x51),
            Template::Professional => Color::rgb(0x04, 0x78, 0x57),
        }
    }

    /// Resolves a requested template name, falling back (with a warning) when the
    /// name is unknown. Absent names use `fallback` silently.
    pub fn resolve(requested: Option<&str>, fallback: Template) -> Template {
        match requested {
            None => fallback,
            Some(name) => name.parse().unwrap_or_else(|e: UnknownTemplate| {
                warn!(error = %e, %fallback, "Falling back to default template");
                fallback
            }),
        }
    }

    pub fn info(self) -> TemplateInfo {
        let (name, description) = match self {
            Template::Modern => ("Modern", "Clean sans-serif layout with a blue accent"),
            Template::Classic => ("Classic", "Traditional serif layout, ATS friendly"),
            Template::Professional => ("Professional", "Balanced sans-serif layout with a green accent"),
        };
        TemplateInfo {
            id: self,
            name,
            description,
            accent: self.accent().to_css(),
            font_stack: self.font_stack(),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Modern
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Professional => "professional",
        };
        f.write_str(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "classic" => Ok(Template::Classic),
            "professional" => Ok(Template::Professional),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}
