use std::sync::Arc;

use lp_core::home::{InfoCard, CLIPBOARD_LABEL};
use lp_core::ports::{ClipboardError, ClipboardPort, StringsPort};
use lp_core::strings::StringKey;
use tracing::{info, info_span};

#[derive(Debug, thiserror::Error)]
pub enum CopyInfoError {
    #[error("Failed to copy info to clipboard: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Copies the info card text to the clipboard.
///
/// Returns the localized confirmation shown to the user (snackbar text).
pub struct CopyInfoToClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    strings: Arc<dyn StringsPort>,
}

impl CopyInfoToClipboard {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, strings: Arc<dyn StringsPort>) -> Self {
        Self { clipboard, strings }
    }

    pub fn execute(&self, card: &InfoCard) -> Result<String, CopyInfoError> {
        let _span = info_span!("usecase.copy_info_to_clipboard.execute").entered();

        let text = card.clipboard_text();
        self.clipboard.set_plain_text(CLIPBOARD_LABEL, &text)?;

        info!(bytes = text.len(), "Info card copied to clipboard");
        Ok(self.strings.lookup(StringKey::HomeInfoCopied))
    }
}
