//! CLI command handlers.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use lp_app::RequestOutcome;
use lp_core::PermissionState;
use tokio::time::{interval, timeout};
use tracing::{info, warn};

use crate::bootstrap::wiring::WiredHome;
use crate::cli::Commands;
use crate::render;

const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run one command against the wired home page, writing its output to `out`.
pub async fn run_command(
    home: &WiredHome,
    command: &Commands,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    // The page is visible for the duration of the command.
    let _session = home.page.open();

    match command {
        Commands::Home { json } => {
            let view = home.page.render();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                write!(out, "{}", render::home_view(&view))?;
            }
        }
        Commands::Status { json } => {
            let card = home.page.render().status;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&card)?)?;
            } else {
                write!(out, "{}", render::status_card(&card))?;
            }
        }
        Commands::Request { wait_ms, resolve } => {
            let outcome = home.page.on_status_card_clicked();
            info!(?outcome, "Status card clicked");

            if outcome == RequestOutcome::Issued {
                if let Some(granted) = resolve {
                    let answered = home.broker.resolve_pending(*granted);
                    info!(answered, granted, "Resolved held requests");
                }
                let state = wait_for_result(home, Duration::from_millis(*wait_ms)).await;
                writeln!(out, "{}", describe_state(state))?;
            } else {
                writeln!(out, "{}", describe_outcome(outcome))?;
            }
            write!(out, "{}", render::status_card(&home.page.render().status))?;
        }
        Commands::Info => {
            write!(out, "{}", render::info_card(&home.page.render().info))?;
        }
        Commands::CopyInfo => {
            let message = home.page.copy_info().context("Failed to copy info")?;
            writeln!(out, "{message}")?;
        }
        Commands::About => {
            write!(out, "{}", render::support_card(&home.page.render().support))?;
        }
    }
    Ok(())
}

/// Wait until the issued request is answered or `limit` passes.
async fn wait_for_result(home: &WiredHome, limit: Duration) -> Option<PermissionState> {
    let monitor = home.page.monitor();
    let answered = timeout(limit, async {
        let mut ticker = interval(RESULT_POLL_INTERVAL);
        while monitor.is_request_in_flight() {
            ticker.tick().await;
        }
    })
    .await;

    match answered {
        Ok(()) => Some(monitor.current_state()),
        Err(_) => {
            warn!(limit_ms = limit.as_millis() as u64, "No permission result before timeout");
            None
        }
    }
}

fn describe_state(state: Option<PermissionState>) -> &'static str {
    match state {
        Some(state) if state.permission_granted => "Permission granted",
        Some(_) => "Permission denied",
        None => "No answer yet, the request is still pending",
    }
}

fn describe_outcome(outcome: RequestOutcome) -> &'static str {
    match outcome {
        RequestOutcome::Issued => "Permission requested",
        RequestOutcome::NotStarted => "Monitor is not running",
        RequestOutcome::TransportUnavailable => "Privileged service is not running",
        RequestOutcome::AlreadyGranted => "Permission already granted",
        RequestOutcome::InFlight => "A permission request is already pending",
    }
}
