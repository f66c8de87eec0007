use anyhow::{ensure, Context, Result};

use crate::render::templates::Template;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Download filename offered for every export.
    pub export_filename: String,
    /// Rasterization scale (device pixels per CSS pixel).
    pub raster_scale: f32,
    pub default_template: Template,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let raster_scale = lookup("RASTER_SCALE")
            .unwrap_or_else(|| "2".to_string())
            .parse::<f32>()
            .context("RASTER_SCALE must be a number")?;
        ensure!(
            raster_scale.is_finite() && raster_scale > 0.0,
            "RASTER_SCALE must be positive, got {raster_scale}"
        );

        let export_filename = lookup("EXPORT_FILENAME").unwrap_or_else(|| "resume.pdf".to_string());
        ensure!(
            !export_filename.trim().is_empty()
                && !export_filename.contains(['"', '/', '\\', '\r', '\n']),
            "EXPORT_FILENAME must be a plain file name, got {export_filename:?}"
        );

        let default_template = match lookup("DEFAULT_TEMPLATE") {
            Some(name) => name
                .parse::<Template>()
                .context("DEFAULT_TEMPLATE must be one of modern, classic, professional")?,
            None => Template::default(),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            export_filename,
            raster_scale,
            default_template,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            export_filename: "resume.pdf".to_string(),
            raster_scale: 2.0,
            default_template: Template::default(),
        }
    }
}
