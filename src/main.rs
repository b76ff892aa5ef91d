use anyhow::Context;
use clap::Parser;
use lp_core::ports::AppDirsPort;
use lp_platform::app_dirs::DirsAppDirsAdapter;
use lspatch_manager::bootstrap::config::load_effective_config;
use lspatch_manager::bootstrap::tracing::init_tracing_subscriber;
use lspatch_manager::cli::Cli;
use lspatch_manager::commands::run_command;
use lspatch_manager::wire_home;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Without per-user directories the manager still runs: no log file, no default config.
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs().ok();
    let logs_dir = app_dirs.as_ref().map(|dirs| dirs.logs_dir());
    init_tracing_subscriber(logs_dir.as_deref(), cli.verbose)?;

    let config = load_effective_config(
        cli.config.as_deref(),
        app_dirs.as_ref().map(|dirs| dirs.config_file()),
    )?;
    let home = wire_home(&config).context("Failed to wire home page")?;

    let mut stdout = std::io::stdout().lock();
    run_command(&home, &cli.command, &mut stdout).await
}
