//! Tracing configuration for the LSPatch manager
//!
//! Structured logging through `tracing-subscriber`:
//!
//! - **Environment filter**: respects `RUST_LOG`, with defaults per build type
//! - **stderr layer**: keeps stdout free for command output
//! - **File layer**: optional, non-blocking, in the app logs directory

use std::path::Path;
use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "lspatch-manager.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for workspace crates
/// - **Production**: info for workspace crates, warn for everything else
fn build_filter_directives(is_dev: bool, verbose: bool) -> Vec<String> {
    let app_level = if is_dev || verbose { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("lspatch_manager={app_level}"),
        format!("lp_app={app_level}"),
        format!("lp_platform={app_level}"),
        format!("lp_core={app_level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once, before anything logs. `logs_dir` enables the file layer; a
/// directory that cannot be created only disables file logging.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: Build environment filter
    let filter_directives = build_filter_directives(is_dev, verbose);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Create writers
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    // Step 3: Create fmt layers
    // "2025-01-15 10:30:45.123  INFO [file.rs:42] target: message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    // Step 4: Register the global subscriber
    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true, false);
        assert!(dev_directives.contains(&"warn".to_string()));
        assert!(dev_directives.contains(&"lp_app=debug".to_string()));
        assert!(dev_directives.contains(&"lp_platform=debug".to_string()));

        let prod_directives = build_filter_directives(false, false);
        assert!(prod_directives.contains(&"lp_app=info".to_string()));
        assert!(prod_directives.contains(&"lspatch_manager=info".to_string()));
    }

    #[test]
    fn test_verbose_raises_app_level_in_production() {
        let directives = build_filter_directives(false, true);
        assert!(directives.contains(&"lp_app=debug".to_string()));
        assert!(directives.contains(&"warn".to_string()));
    }
}
