//! Markup scanning and tag pairing.

use std::collections::HashMap;

use crate::tag::{Tag, TagToken};
use crate::{Diagnostic, TagSpan};

enum ScanState {
    Text,
    InTag,
}

/// Walks the input once, splitting it into cleaned text and tag tokens.
///
/// Everything between `<` and the next `>` is tag text and never reaches the
/// cleaned output. Offsets recorded on tokens are byte offsets into the
/// cleaned text, which always land on char boundaries because the text is
/// built by appending whole chars.
pub(crate) fn scan(raw: &str) -> (String, Vec<TagToken>, Vec<Diagnostic>) {
    let mut clean = String::with_capacity(raw.len());
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut tag_text = String::new();
    let mut state = ScanState::Text;

    for ch in raw.chars() {
        match state {
            ScanState::Text => {
                if ch == '<' {
                    tag_text.clear();
                    state = ScanState::InTag;
                } else {
                    clean.push(ch);
                }
            }
            ScanState::InTag => {
                if ch == '>' {
                    match TagToken::from_raw(&tag_text, clean.len()) {
                        Some(token) => tokens.push(token),
                        None => diagnostics.push(Diagnostic::UnknownTag {
                            tag: tag_text.clone(),
                            offset: clean.len(),
                        }),
                    }
                    state = ScanState::Text;
                } else {
                    tag_text.push(ch);
                }
            }
        }
    }

    if let ScanState::InTag = state {
        diagnostics.push(Diagnostic::UnterminatedTag {
            tag: tag_text,
            offset: clean.len(),
        });
    }

    (clean, tokens, diagnostics)
}

/// Pairs opening and closing tokens into spans.
///
/// Each tag kind keeps its own stack, so `<b>x<b>y</b>z</b>` nests and a
/// close always matches the most recent open of the same kind. Unmatched
/// tokens become diagnostics. Spans are sorted by start ascending, then by
/// length descending, putting enclosing tags before the tags they contain.
pub(crate) fn pair(tokens: Vec<TagToken>, diagnostics: &mut Vec<Diagnostic>) -> Vec<TagSpan> {
    let mut stacks: HashMap<Tag, Vec<TagToken>> = HashMap::new();
    let mut spans = Vec::new();

    for token in tokens {
        if token.is_open {
            stacks.entry(token.tag).or_default().push(token);
        } else {
            match stacks.get_mut(&token.tag).and_then(Vec::pop) {
                Some(open) => spans.push(TagSpan {
                    tag: open.tag,
                    value: open.value,
                    range: open.offset..token.offset,
                }),
                None => diagnostics.push(Diagnostic::UnexpectedClose {
                    tag: token.tag,
                    offset: token.offset,
                }),
            }
        }
    }

    let mut unclosed: Vec<TagToken> = stacks.into_values().flatten().collect();
    unclosed.sort_by_key(|token| token.offset);
    for open in unclosed {
        diagnostics.push(Diagnostic::UnclosedTag {
            tag: open.tag,
            offset: open.offset,
        });
    }

    spans.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(b.range.len().cmp(&a.range.len()))
    });
    spans
}
