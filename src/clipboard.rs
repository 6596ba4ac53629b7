//! Copying the suggested replacement password.

use std::time::{Duration, Instant};
use thiserror::Error;

use crate::display::DetailedDisplay;

/// Label shown on the copy control after a successful copy.
pub const COPIED_LABEL: &str = "✓ Copied!";
/// How long [`COPIED_LABEL`] stays before the original label returns.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);
/// Message surfaced to the user when copying fails.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy password to clipboard";

/// Copy failure. Displays as [`COPY_FAILED_MESSAGE`]; the platform reason is
/// kept in [`ClipboardError::reason`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Failed to copy password to clipboard")]
    Unavailable(String),
}

impl ClipboardError {
    pub fn reason(&self) -> &str {
        match self {
            ClipboardError::Unavailable(reason) => reason,
        }
    }
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NothingToCopy,
}

/// Copies the detailed check's suggested password, if there is one.
pub fn copy_suggestion<W: ClipboardWriter + ?Sized>(
    clipboard: &mut W,
    display: &DetailedDisplay,
) -> Result<CopyOutcome, ClipboardError> {
    let Some(suggestion) = display.suggestion.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(CopyOutcome::NothingToCopy);
    };

    clipboard.write_text(suggestion).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to copy text: {}", _e.reason());
    })?;
    Ok(CopyOutcome::Copied)
}

/// Label of the copy control: [`COPIED_LABEL`] for
/// [`COPY_FEEDBACK_DURATION`] after a copy, the original label otherwise.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    label: String,
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            copied_at: None,
        }
    }

    /// Records a copy outcome at `now`. Only `Copied` changes the label.
    pub fn record(&mut self, outcome: CopyOutcome, now: Instant) {
        if outcome == CopyOutcome::Copied {
            self.copied_at = Some(now);
        }
    }

    pub fn label(&self, now: Instant) -> &str {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION => COPIED_LABEL,
            _ => &self.label,
        }
    }
}

/// Process-local clipboard keeping the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Native system clipboard.
///
/// Wraps [arboard::Clipboard](https://docs.rs/arboard/latest/arboard/struct.Clipboard.html).
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` if the platform clipboard cannot
    /// be opened (e.g. no display server).
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}
