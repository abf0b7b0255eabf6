//! Markup-driven formatting.
//!
//! Turns a tagged string into a [`LabelContent`] in two passes over the
//! parsed spans, mirroring how the attributes layer:
//!
//! 1. **Font pass** — `b`, `i` and the size tags (`tiny`/`small`/`large`/
//!    `huge`) pick the face and size for their range. Bold beats italic when
//!    both are active, and size deltas stack.
//! 2. **Decoration pass** — `u` underlines, `a` underlines and recolors with
//!    the link tint and attaches the target, `left`/`center`/`right` set
//!    alignment, and `font color="..."` recolors.
//!
//! The tag vocabulary itself is documented in [`markwell_tagparser`].

mod ext;

pub use ext::MarkupExt;

use markwell_tagparser::{parse_with_diagnostics, Diagnostic, ParseOutcome, Tag, TagSpan};

use crate::color::Rgba;
use crate::config::TextConfig;
use crate::font::{Font, FontProfile, MIN_TEXT_SIZE};
use crate::label::LabelContent;
use crate::text::{Align, Attr, StyledText};

// Point deltas the size tags add to the base size.
const TINY_DELTA: f32 = -4.0;
const SMALL_DELTA: f32 = -2.0;
const LARGE_DELTA: f32 = 2.0;
const HUGE_DELTA: f32 = 4.0;

/// Formats markup strings into label content.
///
/// Configuration is chainable and defaults to a snapshot of the process
/// [`TextConfig`]:
///
/// ```
/// use markwell::{FontProfile, MarkupFormatter};
///
/// let content = MarkupFormatter::new()
///     .profile(FontProfile::from_family("Avenir"))
///     .text_size(17.0)
///     .base_color_spec("#333333")
///     .format("Save with <b>one tap</b>");
///
/// assert_eq!(content.text.plain(), "Save with one tap");
/// ```
#[derive(Debug, Clone)]
pub struct MarkupFormatter {
    profile: FontProfile,
    text_size: f32,
    base_color: Rgba,
    link_color: Rgba,
    allow_links: bool,
    lines: usize,
}

impl MarkupFormatter {
    /// Creates a formatter from the current process configuration.
    pub fn new() -> Self {
        let config = TextConfig::current();
        Self {
            profile: config.profile,
            text_size: config.text_size,
            base_color: config.text_color,
            link_color: config.link_color,
            allow_links: true,
            lines: 0,
        }
    }

    /// Overrides the font profile.
    pub fn profile(mut self, profile: FontProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the base point size, clamped to a minimum of one point.
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size.max(MIN_TEXT_SIZE);
        self
    }

    /// Sets the base text color.
    pub fn base_color(mut self, color: Rgba) -> Self {
        self.base_color = color;
        self
    }

    /// Sets the base text color from a hex spec; unparseable specs fall back
    /// to opaque black.
    pub fn base_color_spec(self, spec: &str) -> Self {
        let color = Rgba::parse_or_black(spec);
        self.base_color(color)
    }

    /// Sets the tint used for link ranges.
    pub fn link_color(mut self, color: Rgba) -> Self {
        self.link_color = color;
        self
    }

    /// Enables or disables link handling. With links disabled, `a` tags
    /// still vanish from the text but contribute neither styling nor targets.
    pub fn links(mut self, allow: bool) -> Self {
        self.allow_links = allow;
        self
    }

    /// Sets the label's line-count hint (0 = unbounded).
    pub fn lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Formats a markup string, discarding parse diagnostics.
    pub fn format(&self, raw: &str) -> LabelContent {
        self.format_with_diagnostics(raw).0
    }

    /// Formats a markup string, reporting any markup problems alongside the
    /// result. Malformed markup never fails the call; it degrades to less
    /// styling.
    pub fn format_with_diagnostics(&self, raw: &str) -> (LabelContent, Vec<Diagnostic>) {
        let (outcome, diagnostics) = parse_with_diagnostics(raw);
        let text = self.style(outcome);
        (
            LabelContent {
                text,
                lines: self.lines,
            },
            diagnostics,
        )
    }

    fn style(&self, outcome: ParseOutcome) -> StyledText {
        let spans = outcome.spans;
        let mut styled = StyledText::new(outcome.text);

        let body = 0..styled.len();
        styled.apply(
            body.clone(),
            Attr::Font(self.profile.regular.clone().with_size(self.text_size)),
        );
        styled.apply(body, Attr::Color(self.base_color));

        for span in &spans {
            if matches!(
                span.tag,
                Tag::Bold | Tag::Italic | Tag::Tiny | Tag::Small | Tag::Large | Tag::Huge
            ) {
                let font = self.effective_font(span.range.start, &spans);
                styled.apply(span.range.clone(), Attr::Font(font));
            }
        }

        for span in &spans {
            match span.tag {
                Tag::Underline => {
                    styled.apply(span.range.clone(), Attr::Underline);
                }
                Tag::Link => {
                    if !self.allow_links {
                        continue;
                    }
                    let Some(target) = span.value.clone() else {
                        continue;
                    };
                    styled.apply(span.range.clone(), Attr::Underline);
                    styled.apply(span.range.clone(), Attr::Color(self.link_color));
                    styled.apply(span.range.clone(), Attr::Link(target));
                }
                Tag::Left => {
                    styled.apply(span.range.clone(), Attr::Align(Align::Left));
                }
                Tag::Center => {
                    styled.apply(span.range.clone(), Attr::Align(Align::Center));
                }
                Tag::Right => {
                    styled.apply(span.range.clone(), Attr::Align(Align::Right));
                }
                Tag::FontColor => {
                    let Some(color) = span.value.as_deref().and_then(Rgba::parse) else {
                        continue;
                    };
                    styled.apply(span.range.clone(), Attr::Color(color));
                }
                _ => {}
            }
        }

        styled
    }

    /// The face and size for a range starting at `offset`, considering every
    /// tag active there. Bold beats italic; size deltas stack per active tag.
    fn effective_font(&self, offset: usize, spans: &[TagSpan]) -> Font {
        let active: Vec<&TagSpan> = spans
            .iter()
            .filter(|span| span.range.start <= offset && offset < span.range.end)
            .collect();

        let base = if active.iter().any(|span| span.tag == Tag::Bold) {
            &self.profile.bold
        } else if active.iter().any(|span| span.tag == Tag::Italic) {
            &self.profile.italic
        } else {
            &self.profile.regular
        };

        let mut size = self.text_size;
        for span in &active {
            size += match span.tag {
                Tag::Tiny => TINY_DELTA,
                Tag::Small => SMALL_DELTA,
                Tag::Large => LARGE_DELTA,
                Tag::Huge => HUGE_DELTA,
                _ => 0.0,
            };
        }

        base.clone().with_size(size)
    }
}

impl Default for MarkupFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a markup string with the process default configuration.
pub fn format_markup(raw: &str) -> LabelContent {
    MarkupFormatter::new().format(raw)
}
