//! Static glyph-width tables for the template font families.
//!
//! Widths are in em units (multiply by the font size in px for CSS pixels).
//! Tables cover ASCII 0x20..=0x7E; index = (char as usize) - 32. Anything
//! outside that range is measured at `average_char_width`.
//!
//! Measurement stands in for the browser's layout engine: the preview and the
//! export both wrap text with `wrap_text`, so page counts agree between them.

use serde::{Deserialize, Serialize};

/// Bold runs are measured wider than regular ones by this factor.
const BOLD_WIDTH_FACTOR: f32 = 1.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Inter,
    EbGaramond,
    Lato,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of `s` in CSS pixels at `font_px`.
    pub fn width_px(&self, s: &str, font_px: f32, weight: FontWeight) -> f32 {
        self.measure_str(s) * font_px * weight_factor(weight)
    }

    /// Greedy word-wrap into lines no wider than `max_width_px`.
    ///
    /// A single word wider than the line stays on its own line and overflows.
    /// Whitespace-only input yields no lines.
    pub fn wrap_text(
        &self,
        text: &str,
        font_px: f32,
        weight: FontWeight,
        max_width_px: f32,
    ) -> Vec<String> {
        let space_w = self.space_width * font_px * weight_factor(weight);
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.width_px(word, font_px, weight);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_px {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

fn weight_factor(weight: FontWeight) -> f32 {
    match weight {
        FontWeight::Regular => 1.0,
        FontWeight::Bold => BOLD_WIDTH_FACTOR,
    }
}

// Modern template.
static INTER_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

// Classic template.
static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

// Professional template.
static LATO_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.32, 0.40, 0.59, 0.59, 0.94, 0.70, 0.23, 0.35, 0.35, 0.41, 0.62, 0.29, 0.35, 0.29, 0.33,
        // 0     1     2     3     4     5     6     7     8     9
        0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59,
        // :     ;     <     =     >     ?     @
        0.29, 0.29, 0.62, 0.62, 0.62, 0.53, 1.07,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.70, 0.64, 0.64, 0.70, 0.59, 0.53, 0.70, 0.70, 0.26, 0.41, 0.64, 0.56, 0.82,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.70, 0.76, 0.59, 0.76, 0.64, 0.53, 0.59, 0.70, 0.70, 0.94, 0.64, 0.64, 0.59,
        // [     \     ]     ^     _     `
        0.29, 0.33, 0.29, 0.49, 0.59, 0.36,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.59, 0.59, 0.53, 0.59, 0.59, 0.33, 0.59, 0.59, 0.23, 0.23, 0.56, 0.23, 0.87,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.59, 0.59, 0.59, 0.59, 0.35, 0.46, 0.41, 0.59, 0.53, 0.76, 0.53, 0.53, 0.46,
        // {     |     }     ~
        0.35, 0.27, 0.35, 0.62,
    ],
    average_char_width: 0.55,
    space_width: 0.26,
};

pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Lato => &LATO_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(get_metrics(FontFamily::Inter).measure_str(""), 0.0);
    }

    #[test]
    fn test_width_px_scales_with_font_size() {
        let metrics = get_metrics(FontFamily::Inter);
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00em
        let w12 = metrics.width_px("Rust", 12.0, FontWeight::Regular);
        let w24 = metrics.width_px("Rust", 24.0, FontWeight::Regular);
        assert!((w12 - 24.0).abs() < 1e-3, "got {w12}");
        assert!((w24 - 2.0 * w12).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider() {
        let metrics = get_metrics(FontFamily::Lato);
        assert!(
            metrics.width_px("Engineer", 13.0, FontWeight::Bold)
                > metrics.width_px("Engineer", 13.0, FontWeight::Regular)
        );
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let metrics = get_metrics(FontFamily::EbGaramond);
        assert!((metrics.measure_str("é") - metrics.average_char_width).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(FontFamily::Inter).wrap_text(
            "Senior Engineer",
            12.0,
            FontWeight::Regular,
            694.0,
        );
        assert_eq!(lines, vec!["Senior Engineer"]);
    }

    #[test]
    fn test_wrap_long_text_respects_width() {
        let metrics = get_metrics(FontFamily::Inter);
        let text = "Architected a distributed caching layer using consistent hashing ".repeat(6);
        let lines = metrics.wrap_text(&text, 12.0, FontWeight::Regular, 300.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.width_px(line, 12.0, FontWeight::Regular) <= 300.0, "{line}");
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_wrap_overlong_word_kept_whole() {
        let word = "x".repeat(200);
        let lines =
            get_metrics(FontFamily::Inter).wrap_text(&word, 12.0, FontWeight::Regular, 50.0);
        assert_eq!(lines, vec![word]);
    }

    #[test]
    fn test_wrap_blank_yields_nothing() {
        let lines = get_metrics(FontFamily::Inter).wrap_text("  \n ", 12.0, FontWeight::Regular, 100.0);
        assert!(lines.is_empty());
    }
}
