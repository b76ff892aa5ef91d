use std::sync::{Mutex, PoisonError};

use clipboard_rs::{Clipboard, ClipboardContext};
use lp_core::ports::{ClipboardError, ClipboardPort};
use tracing::{debug, debug_span};

/// System clipboard backed by clipboard-rs.
///
/// The platform context is opened on first write, so headless environments
/// only fail when something is actually copied. Desktop clipboards have no
/// clip labels; the label is only logged.
pub struct SystemClipboard {
    inner: Mutex<Option<ClipboardContext>>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }
}

impl ClipboardPort for SystemClipboard {
    fn set_plain_text(&self, label: &str, content: &str) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.clipboard.set_plain_text", label);
        span.in_scope(|| {
            let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

            let ctx = match guard.take() {
                Some(ctx) => ctx,
                None => ClipboardContext::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
            };
            let ctx = guard.insert(ctx);

            ctx.set_text(content.to_string())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

            debug!(bytes = content.len(), "Wrote plain text to system clipboard");
            Ok(())
        })
    }
}
