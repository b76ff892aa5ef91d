//! Plain-text rendering of the home cards for the terminal.

use std::fmt::Write;

use lp_core::home::{HomeView, InfoCard, StatusCard, StatusIcon, SupportCard};

fn icon_glyph(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::CheckCircle => "[ok]",
        StatusIcon::Warning => "[!]",
    }
}

pub fn status_card(card: &StatusCard) -> String {
    let mut out = format!("{} {}\n    {}\n", icon_glyph(card.icon), card.title, card.subtitle);
    if card.clickable {
        out.push_str("    (run `request` to ask for permission)\n");
    }
    out
}

pub fn info_card(card: &InfoCard) -> String {
    let width = card
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for entry in &card.entries {
        let _ = writeln!(out, "{:<width$}  {}", entry.label, entry.value);
    }
    out
}

pub fn support_card(card: &SupportCard) -> String {
    format!("{}\n{}\n{}\n", card.title, card.description, card.source_plain)
}

pub fn home_view(view: &HomeView) -> String {
    [
        format!("== {} ==\n", view.title),
        status_card(&view.status),
        info_card(&view.info),
        support_card(&view.support),
    ]
    .join("\n")
}
