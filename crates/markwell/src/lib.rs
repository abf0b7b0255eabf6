//! Styled text construction for native labels.
//!
//! `markwell` turns plain or lightly-marked-up strings into attributed text
//! values: the plain characters plus fonts, colors, underlines, alignment,
//! and hyperlinks annotated over byte ranges, ready for a text-display
//! widget. It has two front doors:
//!
//! - [`StyledTextBuilder`] styles a raw string directly from explicit
//!   [`Link`] spans.
//! - [`MarkupFormatter`] (or the [`format_markup`] shorthand) styles a
//!   tagged string like `Tap <a href="app://x">here</a>`, with the
//!   [`MarkupExt`] helpers building such strings safely.
//!
//! Fonts come from a shared [`FontProfile`] configured once at application
//! startup through [`configure`]; every builder snapshots the configuration
//! when it is created. Overlapping annotations resolve on read with
//! last-applied-wins semantics via [`StyledText::runs`].
//!
//! # Example
//!
//! ```
//! use markwell::{format_markup, MarkupExt};
//!
//! let content = format_markup(&format!(
//!     "Tap {} to continue",
//!     "here".linked("app://settings")
//! ));
//!
//! assert_eq!(content.text.plain(), "Tap here to continue");
//! let (target, range) = content.text.links().next().unwrap();
//! assert_eq!(target, "app://settings");
//! assert_eq!(&content.text.plain()[range], "here");
//! ```

mod builder;
mod color;
mod config;
mod error;
mod font;
mod label;
mod markup;
mod preview;
mod text;
mod util;

pub use builder::{Link, StyledTextBuilder};
pub use color::Rgba;
pub use config::{configure, TextConfig};
pub use error::StyleError;
pub use font::{Font, FontProfile, Slant, Weight, DEFAULT_TEXT_SIZE, MIN_TEXT_SIZE};
pub use label::LabelContent;
pub use markup::{format_markup, MarkupExt, MarkupFormatter};
pub use preview::rgb_to_ansi256;
pub use text::{Align, Attr, Span, StyleRun, StyledText};
pub use util::truncate_to_width;

// The markup front end, re-exported for consumers that work with raw spans.
pub use markwell_tagparser::{Diagnostic, ParseOutcome, Tag, TagSpan};
