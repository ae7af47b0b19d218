use shared::domain::Severity;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ui::{Notifier, TextSurface};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const NOTHING_TO_COPY_MESSAGE: &str = "Nothing to copy";
pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait ClipboardStrategy {
    fn name(&self) -> &'static str;
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    NothingToCopy,
    Preferred,
    Fallback,
    Failed,
}

/// Copies the source text with the preferred strategy, falling back once.
/// Both strategies report the same success notification.
pub fn copy_to_clipboard(
    source: &dyn TextSurface,
    preferred: &dyn ClipboardStrategy,
    fallback: &dyn ClipboardStrategy,
    notifier: &dyn Notifier,
) -> CopyOutcome {
    let text = source.text();
    if text.trim().is_empty() {
        notifier.notify(NOTHING_TO_COPY_MESSAGE, Severity::Error);
        return CopyOutcome::NothingToCopy;
    }

    let outcome = match preferred.write_text(&text) {
        Ok(()) => CopyOutcome::Preferred,
        Err(err) => {
            debug!(strategy = preferred.name(), error = %err, "preferred clipboard failed");
            match fallback.write_text(&text) {
                Ok(()) => CopyOutcome::Fallback,
                Err(err) => {
                    warn!(strategy = fallback.name(), error = %err, "fallback clipboard failed");
                    CopyOutcome::Failed
                }
            }
        }
    };

    if outcome == CopyOutcome::Failed {
        notifier.notify(COPY_FAILED_MESSAGE, Severity::Error);
    } else {
        notifier.notify(COPIED_MESSAGE, Severity::Success);
    }
    outcome
}
