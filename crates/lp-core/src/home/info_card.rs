use serde::{Deserialize, Serialize};

/// Clipboard label attached to copied info text.
pub const CLIPBOARD_LABEL: &str = "LSPatch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

impl InfoEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Version and device facts, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub entries: Vec<InfoEntry>,
    /// Label of the copy action
    pub copy_label: String,
}

impl InfoCard {
    /// Plain text written to the clipboard: each entry as label line, value
    /// line, blank line.
    pub fn clipboard_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.label);
            text.push('\n');
            text.push_str(&entry.value);
            text.push_str("\n\n");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_text_separates_entries_with_blank_lines() {
        let card = InfoCard {
            entries: vec![
                InfoEntry::new("API Version", "93"),
                InfoEntry::new("Device", "Google Pixel 8"),
            ],
            copy_label: "Copy".into(),
        };

        assert_eq!(
            card.clipboard_text(),
            "API Version\n93\n\nDevice\nGoogle Pixel 8\n\n"
        );
    }

    #[test]
    fn empty_card_copies_nothing() {
        assert_eq!(InfoCard::default().clipboard_text(), "");
    }
}
