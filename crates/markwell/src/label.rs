//! Label content: everything a text widget needs to show rich text.

use serde::{Deserialize, Serialize};

use crate::text::StyledText;

/// Styled text plus the display hints a label consumes alongside it.
///
/// Link targets travel inside the styled text and are reachable through
/// [`StyledText::links`]; `lines` is the widget's line-count hint, where 0
/// means unbounded. Values clone deeply and serialize losslessly, so content
/// can be cached or handed across process boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelContent {
    pub text: StyledText,
    pub lines: usize,
}

impl LabelContent {
    /// Wraps styled text with an unbounded line count.
    pub fn new(text: StyledText) -> Self {
        Self { text, lines: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Attr;

    #[test]
    fn test_new_defaults_to_unbounded() {
        let content = LabelContent::new(StyledText::new("x"));
        assert_eq!(content.lines, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut text = StyledText::new("tap here");
        text.apply(4..8, Attr::Link("app://x".into()));
        let content = LabelContent { text, lines: 1 };

        let json = serde_json::to_string(&content).unwrap();
        let back: LabelContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
        assert_eq!(back.text.links().count(), 1);
    }
}
