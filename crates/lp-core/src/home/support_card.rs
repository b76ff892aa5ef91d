use serde::{Deserialize, Serialize};

pub const GITHUB_URL: &str = "https://github.com/LSPosed/LSPatch";
pub const TELEGRAM_URL: &str = "https://t.me/LSPosed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub label: String,
    pub href: String,
}

impl SourceLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Bold anchor, as embedded in the "view source code" string.
    pub fn to_html(&self) -> String {
        format!("<b><a href=\"{}\">{}</a></b>", self.href, self.label)
    }

    /// Fallback for surfaces that cannot render HTML.
    pub fn to_plain(&self) -> String {
        format!("{} ({})", self.label, self.href)
    }
}

/// Support / about card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportCard {
    pub title: String,
    pub description: String,
    /// `home_view_source_code` interpolated with HTML anchors
    pub source_html: String,
    /// Same sentence with plain-text links
    pub source_plain: String,
    pub links: Vec<SourceLink>,
}

impl SupportCard {
    pub fn default_links() -> Vec<SourceLink> {
        vec![
            SourceLink::new("GitHub", GITHUB_URL),
            SourceLink::new("Telegram", TELEGRAM_URL),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_anchor_is_bold_link() {
        let link = SourceLink::new("GitHub", GITHUB_URL);
        assert_eq!(
            link.to_html(),
            "<b><a href=\"https://github.com/LSPosed/LSPatch\">GitHub</a></b>"
        );
        assert_eq!(link.to_plain(), "GitHub (https://github.com/LSPosed/LSPatch)");
    }

    #[test]
    fn default_links_are_github_then_telegram() {
        let links = SupportCard::default_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, GITHUB_URL);
        assert_eq!(links[1].href, TELEGRAM_URL);
    }
}
