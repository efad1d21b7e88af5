// IPL Encyclopedia entry point.
//
// Startup sequence:
// 1. Parse CLI arguments
// 2. Initialize tracing (log to file, not the terminal)
// 3. Load config (config/app.toml + IPL_API_URL override)
// 4. Build the API client
// 5. Create mpsc channels
// 6. Initialize AppState at the start route (fires its first fetches)
// 7. Spawn the orchestrator task
// 8. Run the TUI event loop until the user quits
// 9. Cleanup on exit

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info};

use ipl_encyclopedia::api::ApiClient;
use ipl_encyclopedia::app;
use ipl_encyclopedia::config;
use ipl_encyclopedia::routes::Route;
use ipl_encyclopedia::tui;

/// Terminal browser for cricket-league reference data.
#[derive(Debug, Parser)]
#[command(name = "iplpedia", version, about)]
struct Cli {
    /// Start route, e.g. /teams or /players/mi-rohit-sharma.
    #[arg(default_value = "/")]
    path: String,

    /// Directory containing app.toml (defaults to ./config).
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CLI arguments
    let cli = Cli::parse();

    // 2. Initialize tracing (log to file, not the terminal)
    init_tracing()?;
    info!("iplpedia starting up");

    // 3. Load config
    let app_config = config::load_config(cli.config_dir.as_deref())
        .context("failed to load configuration")?;
    info!(base_url = %app_config.api.base_url, "config loaded");

    // 4. Build the API client
    let api = ApiClient::new(&app_config.api).context("failed to build API client")?;
    let api = Arc::new(api);

    // 5. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (data_tx, data_rx) = mpsc::channel(256);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 6. Initialize AppState at the start route
    let start_route = Route::parse(&cli.path);
    info!(route = %start_route, "start route");
    let state = app::AppState::new(api, data_tx, start_route);

    // 7. Spawn the orchestrator task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, data_rx, ui_tx, state).await {
            error!("orchestrator error: {e}");
        }
    });

    // 8. Run the TUI event loop (blocks until the user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx, app_config.ui.tick_millis).await {
        error!("TUI error: {e}");
    }

    // 9. Cleanup: wait for the orchestrator to drain (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("iplpedia shut down cleanly");
    Ok(())
}

/// Initialize tracing to a log file; the terminal belongs to the TUI.
///
/// Logs go to the platform data directory when available, `./logs`
/// otherwise.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = directories::ProjectDirs::from("", "", "iplpedia")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("iplpedia.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ipl_encyclopedia=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
