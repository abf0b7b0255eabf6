//! Font handles and the shared font profile.

use serde::{Deserialize, Serialize};

/// Smallest point size a font handle will carry. Requested sizes at or below
/// zero clamp here instead of producing an unusable handle.
pub const MIN_TEXT_SIZE: f32 = 1.0;

/// Point size used when nothing else is configured.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

const SYSTEM_FAMILY: &str = "System";

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weight {
    Normal,
    Bold,
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slant {
    Upright,
    Italic,
}

/// An opaque font handle: family, weight, slant, and point size.
///
/// The host toolkit resolves this to a concrete face; this crate only carries
/// the description around and sizes it per styling call.
///
/// # Example
///
/// ```
/// use markwell::{Font, Weight};
///
/// let font = Font::new("Avenir").bold().with_size(17.0);
/// assert_eq!(font.weight, Weight::Bold);
/// assert_eq!(font.size, 17.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub weight: Weight,
    pub slant: Slant,
    pub size: f32,
}

impl Font {
    /// Creates an upright, normal-weight handle at the default size.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: Weight::Normal,
            slant: Slant::Upright,
            size: DEFAULT_TEXT_SIZE,
        }
    }

    /// Returns this handle with bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    /// Returns this handle with an italic slant.
    pub fn italic(mut self) -> Self {
        self.slant = Slant::Italic;
        self
    }

    /// Returns this handle at `size` points, clamped to [`MIN_TEXT_SIZE`].
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(MIN_TEXT_SIZE);
        self
    }
}

/// The three shared font handles every styling call reads.
///
/// All three are present by construction, so a builder can never observe a
/// half-configured profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontProfile {
    pub regular: Font,
    pub bold: Font,
    pub italic: Font,
}

impl FontProfile {
    /// Derives the regular/bold/italic triplet from a single family.
    pub fn from_family(family: &str) -> Self {
        Self {
            regular: Font::new(family),
            bold: Font::new(family).bold(),
            italic: Font::new(family).italic(),
        }
    }
}

impl Default for FontProfile {
    fn default() -> Self {
        Self::from_family(SYSTEM_FAMILY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_clamps_non_positive() {
        assert_eq!(Font::new("X").with_size(0.0).size, MIN_TEXT_SIZE);
        assert_eq!(Font::new("X").with_size(-12.0).size, MIN_TEXT_SIZE);
        assert_eq!(Font::new("X").with_size(0.5).size, MIN_TEXT_SIZE);
    }

    #[test]
    fn test_with_size_clamps_nan() {
        assert_eq!(Font::new("X").with_size(f32::NAN).size, MIN_TEXT_SIZE);
    }

    #[test]
    fn test_with_size_keeps_valid_sizes() {
        assert_eq!(Font::new("X").with_size(17.0).size, 17.0);
    }

    #[test]
    fn test_default_profile_variants() {
        let profile = FontProfile::default();
        assert_eq!(profile.regular.weight, Weight::Normal);
        assert_eq!(profile.regular.slant, Slant::Upright);
        assert_eq!(profile.bold.weight, Weight::Bold);
        assert_eq!(profile.italic.slant, Slant::Italic);
        assert_eq!(profile.regular.family, profile.bold.family);
    }
}
