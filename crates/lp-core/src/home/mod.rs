//! View models of the home page cards.
//!
//! These are pure facts assembled by the application layer; the presentation
//! layer only renders them.

mod info_card;
mod status_card;
mod support_card;

pub use info_card::{InfoCard, InfoEntry, CLIPBOARD_LABEL};
pub use status_card::{StatusCard, StatusIcon};
pub use support_card::{SourceLink, SupportCard, GITHUB_URL, TELEGRAM_URL};

use serde::{Deserialize, Serialize};

/// Everything the home page shows, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
    pub title: String,
    pub status: StatusCard,
    pub info: InfoCard,
    pub support: SupportCard,
}
