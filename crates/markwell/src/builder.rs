//! Styled text construction from raw text and link metadata.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::config::TextConfig;
use crate::error::StyleError;
use crate::font::FontProfile;
use crate::text::{Attr, StyledText};

/// A hyperlink over a byte range of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub target: String,
    pub range: Range<usize>,
}

impl Link {
    pub fn new(target: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            target: target.into(),
            range,
        }
    }
}

/// Builds styled text from a raw string, a point size, and link spans.
///
/// The builder styles the whole text with the regular font and a base color,
/// then marks each link range with the bold font, the link tint, an
/// underline, and the link target, so links read differently from body text
/// without relying on widget defaults.
///
/// Fonts come from an injected [`FontProfile`]; [`StyledTextBuilder::new`]
/// snapshots the process configuration once, so later reconfiguration does
/// not affect an existing builder. Building is pure: inputs are left
/// untouched and every call allocates a fresh value.
///
/// # Example
///
/// ```
/// use markwell::{Link, StyledTextBuilder};
///
/// let builder = StyledTextBuilder::new();
/// let styled = builder.build(
///     "Hello world",
///     17.0,
///     &[Link::new("http://x", 0..5)],
///     "#000000",
/// );
///
/// assert_eq!(styled.plain(), "Hello world");
/// assert_eq!(styled.links().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StyledTextBuilder {
    profile: FontProfile,
    link_color: Rgba,
}

impl StyledTextBuilder {
    /// Creates a builder from the current process configuration.
    pub fn new() -> Self {
        let config = TextConfig::current();
        Self {
            profile: config.profile,
            link_color: config.link_color,
        }
    }

    /// Creates a builder with an explicit font profile.
    pub fn with_profile(profile: FontProfile) -> Self {
        Self {
            profile,
            link_color: Rgba::LINK_BLUE,
        }
    }

    /// Overrides the tint links are drawn with.
    pub fn link_color(mut self, color: Rgba) -> Self {
        self.link_color = color;
        self
    }

    /// Builds a styled value from `raw`.
    ///
    /// The whole text gets the regular font at `text_size` (clamped to a
    /// minimum of one point) and the base color; `base_color` specs that do
    /// not parse fall back to opaque black. Each link is then applied in
    /// order over its range. A link whose range leaves the text, inverts, or
    /// splits a UTF-8 character is skipped entirely; where link ranges
    /// overlap, the one applied later wins (see [`StyledText::runs`]).
    pub fn build(
        &self,
        raw: &str,
        text_size: f32,
        links: &[Link],
        base_color: &str,
    ) -> StyledText {
        let mut styled = StyledText::new(raw);
        let body = 0..styled.len();
        styled.apply(
            body.clone(),
            Attr::Font(self.profile.regular.clone().with_size(text_size)),
        );
        styled.apply(body, Attr::Color(Rgba::parse_or_black(base_color)));

        for link in links {
            let range = link.range.clone();
            let marker = Attr::Font(self.profile.bold.clone().with_size(text_size));
            if !styled.apply(range.clone(), marker) {
                continue;
            }
            styled.apply(range.clone(), Attr::Color(self.link_color));
            styled.apply(range.clone(), Attr::Underline);
            styled.apply(range, Attr::Link(link.target.clone()));
        }
        styled
    }

    /// Parallel-sequence form of [`StyledTextBuilder::build`].
    ///
    /// `targets[i]` pairs with `locations[i]`, a `(start, len)` byte
    /// descriptor into `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::LinkCountMismatch`] when the two sequences have
    /// different lengths. The check happens before any styling, so no partial
    /// result is ever produced.
    pub fn build_split(
        &self,
        raw: &str,
        text_size: f32,
        targets: &[&str],
        locations: &[(usize, usize)],
        base_color: &str,
    ) -> Result<StyledText, StyleError> {
        if targets.len() != locations.len() {
            return Err(StyleError::LinkCountMismatch {
                targets: targets.len(),
                locations: locations.len(),
            });
        }
        let links: Vec<Link> = targets
            .iter()
            .zip(locations)
            .map(|(target, &(start, len))| Link::new(*target, start..start.saturating_add(len)))
            .collect();
        Ok(self.build(raw, text_size, &links, base_color))
    }
}

impl Default for StyledTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
