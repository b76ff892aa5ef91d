//! Clipboard port - write-only plain text sink

use crate::ports::errors::ClipboardError;

/// Platform clipboard, used as a sink for plain text.
pub trait ClipboardPort: Send + Sync {
    /// Replace the primary clip with `content`.
    ///
    /// `label` is a user-invisible description of the clip; platforms
    /// without labelled clips ignore it.
    fn set_plain_text(&self, label: &str, content: &str) -> Result<(), ClipboardError>;
}
