use std::sync::Arc;

use lp_core::home::SupportCard;
use lp_core::ports::StringsPort;
use lp_core::strings::StringKey;

pub struct BuildSupportCard {
    strings: Arc<dyn StringsPort>,
}

impl BuildSupportCard {
    pub fn new(strings: Arc<dyn StringsPort>) -> Self {
        Self { strings }
    }

    pub fn execute(&self) -> SupportCard {
        let links = SupportCard::default_links();
        let html: Vec<String> = links.iter().map(|l| l.to_html()).collect();
        let plain: Vec<String> = links.iter().map(|l| l.to_plain()).collect();

        SupportCard {
            title: self.strings.lookup(StringKey::HomeSupport),
            description: self.strings.lookup(StringKey::HomeDescription),
            source_html: self.format_source(&html),
            source_plain: self.format_source(&plain),
            links,
        }
    }

    fn format_source(&self, links: &[String]) -> String {
        let args: Vec<&str> = links.iter().map(String::as_str).collect();
        self.strings.format(StringKey::HomeViewSourceCode, &args)
    }
}
