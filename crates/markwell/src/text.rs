//! The attributed text model: style spans over a plain string, resolved into
//! contiguous runs.
//!
//! [`StyledText`] stores annotations in application order and never merges
//! them on insert. Overlap resolution happens on read: [`StyledText::runs`]
//! splits the text at every span boundary and replays the spans in order, so
//! the last applied attribute of each kind wins.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::font::Font;

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single style annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attr {
    Font(Font),
    Color(Rgba),
    Underline,
    Link(String),
    Align(Align),
}

/// One annotation applied over a byte range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub range: Range<usize>,
    pub attr: Attr,
}

/// Plain text with ordered style spans.
///
/// The plain text round-trips exactly: styling only ever annotates, it never
/// edits. Values are cheap to clone and compare, and serialize with the spans
/// intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    /// Wraps a plain string with no annotations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// The text with all styling stripped.
    pub fn plain(&self) -> &str {
        &self.text
    }

    /// Length of the plain text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` when the plain text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `attr` over `range` (byte offsets into the plain text).
    ///
    /// Ranges that invert, leave the text, or split a UTF-8 character are
    /// skipped and `false` is returned; the text itself is never touched.
    pub fn apply(&mut self, range: Range<usize>, attr: Attr) -> bool {
        if range.start > range.end
            || range.end > self.text.len()
            || !self.text.is_char_boundary(range.start)
            || !self.text.is_char_boundary(range.end)
        {
            return false;
        }
        self.spans.push(Span { range, attr });
        true
    }

    /// Spans in application order.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    /// Link targets and their ranges, in application order.
    pub fn links(&self) -> impl Iterator<Item = (&str, Range<usize>)> {
        self.spans.iter().filter_map(|span| match &span.attr {
            Attr::Link(target) => Some((target.as_str(), span.range.clone())),
            _ => None,
        })
    }

    /// Resolves the spans into contiguous, non-overlapping runs.
    ///
    /// The text is split at every span boundary; within each piece the spans
    /// are replayed in application order, so where two spans disagree the one
    /// applied later wins.
    ///
    /// # Example
    ///
    /// ```
    /// use markwell::{Attr, Rgba, StyledText};
    ///
    /// let mut text = StyledText::new("abcdef");
    /// text.apply(0..4, Attr::Color(Rgba::BLACK));
    /// text.apply(2..6, Attr::Color(Rgba::WHITE));
    ///
    /// let runs = text.runs();
    /// assert_eq!(runs[0].range, 0..2);
    /// assert_eq!(runs[0].color, Some(Rgba::BLACK));
    /// assert_eq!(runs[1].range, 2..4);
    /// assert_eq!(runs[1].color, Some(Rgba::WHITE));
    /// ```
    pub fn runs(&self) -> Vec<StyleRun> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let mut boundaries = vec![0, self.text.len()];
        for span in &self.spans {
            boundaries.push(span.range.start);
            boundaries.push(span.range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut runs = Vec::with_capacity(boundaries.len() - 1);
        for piece in boundaries.windows(2) {
            let (start, end) = (piece[0], piece[1]);
            let mut run = StyleRun::unstyled(start..end);
            for span in &self.spans {
                if span.range.start <= start && end <= span.range.end {
                    run.absorb(&span.attr);
                }
            }
            runs.push(run);
        }
        runs
    }
}

/// The resolved style of one contiguous segment of a [`StyledText`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub font: Option<Font>,
    pub color: Option<Rgba>,
    pub underline: bool,
    pub link: Option<String>,
    pub align: Option<Align>,
}

impl StyleRun {
    fn unstyled(range: Range<usize>) -> Self {
        Self {
            range,
            font: None,
            color: None,
            underline: false,
            link: None,
            align: None,
        }
    }

    fn absorb(&mut self, attr: &Attr) {
        match attr {
            Attr::Font(font) => self.font = Some(font.clone()),
            Attr::Color(color) => self.color = Some(*color),
            Attr::Underline => self.underline = true,
            Attr::Link(target) => self.link = Some(target.clone()),
            Attr::Align(align) => self.align = Some(*align),
        }
    }
}
