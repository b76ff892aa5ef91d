//! Home page use cases: one per card, plus the page presenter.

mod copy_info;
mod home_page;
mod info_card;
mod status_card;
mod support_card;

pub use copy_info::{CopyInfoError, CopyInfoToClipboard};
pub use home_page::HomePage;
pub use info_card::BuildInfoCard;
pub use status_card::BuildStatusCard;
pub use support_card::BuildSupportCard;
