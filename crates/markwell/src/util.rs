//! Width-aware helpers for label text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::text::StyledText;

/// Truncates styled text to a maximum display width, appending `…`.
///
/// Widths are measured in terminal columns so CJK and other wide characters
/// count properly. If the text fits it is returned unchanged. Otherwise the
/// kept prefix carries its styling across: spans that start beyond the cut
/// are dropped, spans that straddle it are shortened, and the ellipsis
/// itself is unstyled.
///
/// # Example
///
/// ```
/// use markwell::{truncate_to_width, StyledText};
///
/// let text = StyledText::new("Hello World");
/// assert_eq!(truncate_to_width(&text, 20).plain(), "Hello World");
/// assert_eq!(truncate_to_width(&text, 6).plain(), "Hello…");
/// ```
pub fn truncate_to_width(styled: &StyledText, max_width: usize) -> StyledText {
    let text = styled.plain();
    if text.width() <= max_width {
        return styled.clone();
    }

    // Reserve one column for the ellipsis.
    let limit = max_width.saturating_sub(1);
    let mut cut = 0;
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > limit {
            break;
        }
        cut += ch.len_utf8();
        width += ch_width;
    }

    let mut out = StyledText::new(format!("{}…", &text[..cut]));
    for span in styled.spans() {
        if span.range.start >= cut {
            continue;
        }
        let end = span.range.end.min(cut);
        out.apply(span.range.start..end, span.attr.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::text::Attr;

    #[test]
    fn test_fits_unchanged() {
        let mut text = StyledText::new("Hello");
        text.apply(0..5, Attr::Underline);
        let kept = truncate_to_width(&text, 10);
        assert_eq!(kept, text);
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let text = StyledText::new("Hello World");
        assert_eq!(truncate_to_width(&text, 6).plain(), "Hello…");
        assert_eq!(truncate_to_width(&text, 7).plain(), "Hello …");
    }

    #[test]
    fn test_zero_and_one_width() {
        let text = StyledText::new("Hello");
        assert_eq!(truncate_to_width(&text, 0).plain(), "…");
        assert_eq!(truncate_to_width(&text, 1).plain(), "…");
    }

    #[test]
    fn test_empty_text() {
        let text = StyledText::new("");
        assert_eq!(truncate_to_width(&text, 5).plain(), "");
    }

    #[test]
    fn test_spans_clip_at_cut() {
        let mut text = StyledText::new("Hello World");
        text.apply(0..11, Attr::Color(Rgba::BLACK));
        text.apply(6..11, Attr::Underline);
        text.apply(0..5, Attr::Link("app://x".into()));

        let kept = truncate_to_width(&text, 6);
        assert_eq!(kept.plain(), "Hello…");

        // The base color shortens to the kept prefix; the underline starting
        // past the cut is gone; the link survives whole.
        let spans: Vec<_> = kept.spans().collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].range, 0..5);
        assert!(matches!(spans[0].attr, Attr::Color(_)));
        assert_eq!(spans[1].range, 0..5);
        assert!(matches!(spans[1].attr, Attr::Link(_)));
    }

    #[test]
    fn test_wide_chars_count_double() {
        // Each CJK char is two columns wide.
        let text = StyledText::new("漢字漢字");
        let kept = truncate_to_width(&text, 5);
        assert_eq!(kept.plain(), "漢字…");
    }
}
