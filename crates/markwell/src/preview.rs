//! ANSI preview rendering for quick terminal inspection.

use console::Style;

use crate::color::Rgba;
use crate::font::{Slant, Weight};
use crate::text::StyledText;

/// Converts a color to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```
/// use markwell::{rgb_to_ansi256, Rgba};
///
/// assert_eq!(rgb_to_ansi256(Rgba::opaque(255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256(Rgba::BLACK), 16);
/// ```
pub fn rgb_to_ansi256(color: Rgba) -> u8 {
    let Rgba { r, g, b, .. } = color;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

impl StyledText {
    /// Renders the resolved runs with ANSI escapes.
    ///
    /// Bold, italic, and underline map to the matching terminal attributes;
    /// colors map through [`rgb_to_ansi256`]. Styling is forced on so the
    /// output is stable away from a terminal. This is a debugging and
    /// snapshot aid; real layout belongs to the host toolkit.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for run in self.runs() {
            let segment = &self.plain()[run.range.clone()];
            let mut style = Style::new().force_styling(true);
            if let Some(font) = &run.font {
                if font.weight == Weight::Bold {
                    style = style.bold();
                }
                if font.slant == Slant::Italic {
                    style = style.italic();
                }
            }
            if run.underline {
                style = style.underlined();
            }
            if let Some(color) = run.color {
                style = style.color256(rgb_to_ansi256(color));
            }
            out.push_str(&style.apply_to(segment).to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::text::Attr;

    #[test]
    fn test_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(Rgba::opaque(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgba::opaque(255, 255, 255)), 231);
        let mid = rgb_to_ansi256(Rgba::opaque(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256(Rgba::opaque(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgba::opaque(0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256(Rgba::opaque(0, 0, 255)), 21);
    }

    #[test]
    fn test_to_ansi_emits_attributes() {
        let mut text = StyledText::new("hi there");
        text.apply(0..2, Attr::Font(Font::new("Test").bold()));
        text.apply(3..8, Attr::Underline);

        let out = text.to_ansi();
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[4m"));
        assert!(out.contains("hi"));
        assert!(out.contains("there"));
    }

    #[test]
    fn test_to_ansi_unstyled_is_plain() {
        let text = StyledText::new("plain");
        assert_eq!(text.to_ansi(), "plain");
    }

    #[test]
    fn test_to_ansi_emits_color() {
        let mut text = StyledText::new("red");
        text.apply(0..3, Attr::Color(Rgba::opaque(255, 0, 0)));
        let out = text.to_ansi();
        assert!(out.contains("\x1b[38;5;196m"));
    }
}
