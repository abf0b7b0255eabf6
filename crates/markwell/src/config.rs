//! Process-wide text configuration.
//!
//! A host application configures fonts and colors once during startup via
//! [`configure`]; builders and formatters snapshot the configuration when
//! they are created and never read it again. Replacing the configuration at
//! runtime is safe but only affects builders created afterwards.

use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::color::Rgba;
use crate::font::{FontProfile, DEFAULT_TEXT_SIZE};

/// The shared styling defaults read by builders and formatters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    /// The regular/bold/italic font handles.
    pub profile: FontProfile,
    /// Base point size when a call does not specify one.
    pub text_size: f32,
    /// Base text color.
    pub text_color: Rgba,
    /// Tint for hyperlink ranges.
    pub link_color: Rgba,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            profile: FontProfile::default(),
            text_size: DEFAULT_TEXT_SIZE,
            text_color: Rgba::BLACK,
            link_color: Rgba::LINK_BLUE,
        }
    }
}

static CONFIG: Lazy<Mutex<TextConfig>> = Lazy::new(|| Mutex::new(TextConfig::default()));

/// Replaces the process-wide configuration.
///
/// Intended for application startup, before any builder is created.
pub fn configure(config: TextConfig) {
    let mut guard = CONFIG.lock().unwrap();
    *guard = config;
}

impl TextConfig {
    /// A snapshot of the current process-wide configuration.
    pub fn current() -> Self {
        CONFIG.lock().unwrap().clone()
    }
}
