//! Tag vocabulary and tag-text parsing.

use std::fmt;

/// The markup tags understood by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Bold,
    Italic,
    Underline,
    Tiny,
    Small,
    Large,
    Huge,
    Left,
    Center,
    Right,
    Link,
    FontColor,
}

impl Tag {
    /// Parses a tag word (the part before any attributes) into a tag kind.
    pub fn from_word(word: &str) -> Option<Tag> {
        match word {
            "b" => Some(Tag::Bold),
            "i" => Some(Tag::Italic),
            "u" => Some(Tag::Underline),
            "tiny" => Some(Tag::Tiny),
            "small" => Some(Tag::Small),
            "large" => Some(Tag::Large),
            "huge" => Some(Tag::Huge),
            "left" => Some(Tag::Left),
            "center" => Some(Tag::Center),
            "right" => Some(Tag::Right),
            "a" => Some(Tag::Link),
            "font" => Some(Tag::FontColor),
            _ => None,
        }
    }

    /// The canonical tag word.
    pub fn word(&self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Underline => "u",
            Tag::Tiny => "tiny",
            Tag::Small => "small",
            Tag::Large => "large",
            Tag::Huge => "huge",
            Tag::Left => "left",
            Tag::Center => "center",
            Tag::Right => "right",
            Tag::Link => "a",
            Tag::FontColor => "font",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// One scanned tag occurrence, before pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// The tag kind.
    pub tag: Tag,
    /// Whether this is an opening tag (`<b>`) rather than a closing one (`</b>`).
    pub is_open: bool,
    /// The first `"`-quoted chunk of the tag body, if any.
    pub value: Option<String>,
    /// Byte offset into the cleaned text where the tag sits.
    pub offset: usize,
}

impl TagToken {
    /// Parses the text between `<` and `>` into a token.
    ///
    /// Returns `None` when the tag word is not in the vocabulary.
    pub(crate) fn from_raw(raw: &str, offset: usize) -> Option<Self> {
        let (body, is_open) = match raw.strip_prefix('/') {
            Some(rest) => (rest, false),
            None => (raw, true),
        };
        let word = body.split_whitespace().next().unwrap_or("");
        let tag = Tag::from_word(word)?;
        let value = if is_open { quoted_value(body) } else { None };
        Some(Self {
            tag,
            is_open,
            value,
            offset,
        })
    }
}

/// Extracts the first `"`-quoted chunk of a tag body, e.g. the `x` of
/// `a href="x"`. The attribute name is not checked; each tag has one
/// meaningful argument.
fn quoted_value(body: &str) -> Option<String> {
    let mut parts = body.split('"');
    parts.next()?;
    parts.next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_known() {
        assert_eq!(Tag::from_word("b"), Some(Tag::Bold));
        assert_eq!(Tag::from_word("a"), Some(Tag::Link));
        assert_eq!(Tag::from_word("font"), Some(Tag::FontColor));
        assert_eq!(Tag::from_word("center"), Some(Tag::Center));
    }

    #[test]
    fn test_from_word_unknown() {
        assert_eq!(Tag::from_word("bold"), None);
        assert_eq!(Tag::from_word("B"), None);
        assert_eq!(Tag::from_word(""), None);
    }

    #[test]
    fn test_token_open() {
        let token = TagToken::from_raw("b", 3).unwrap();
        assert_eq!(token.tag, Tag::Bold);
        assert!(token.is_open);
        assert_eq!(token.value, None);
        assert_eq!(token.offset, 3);
    }

    #[test]
    fn test_token_close() {
        let token = TagToken::from_raw("/b", 7).unwrap();
        assert_eq!(token.tag, Tag::Bold);
        assert!(!token.is_open);
    }

    #[test]
    fn test_token_with_argument() {
        let token = TagToken::from_raw("a href=\"https://example.com\"", 0).unwrap();
        assert_eq!(token.tag, Tag::Link);
        assert_eq!(token.value.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_token_close_discards_argument() {
        let token = TagToken::from_raw("/a href=\"x\"", 0).unwrap();
        assert_eq!(token.value, None);
    }

    #[test]
    fn test_token_unknown_word() {
        assert_eq!(TagToken::from_raw("blink", 0), None);
        assert_eq!(TagToken::from_raw("/blink", 0), None);
    }

    #[test]
    fn test_quoted_value_missing() {
        let token = TagToken::from_raw("font color=", 0).unwrap();
        assert_eq!(token.value, None);
    }
}
