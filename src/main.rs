// Courtside entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Open the snapshot store
// 4. Restore the league repository and the session
// 5. Run the TUI event loop

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use courtside::app::App;
use courtside::auth::{SessionManager, StaticAuthenticator};
use courtside::config;
use courtside::repository::LeagueRepository;
use courtside::store::{self, JsonFileStore, SnapshotStore};
use courtside::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Courtside starting up");

    let config = config::load_config().context("failed to load configuration")?;

    let data_dir = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(store::default_data_dir);
    let store: Arc<dyn SnapshotStore> = Arc::new(
        JsonFileStore::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?,
    );
    info!("Snapshot store opened at {}", data_dir.display());

    // Mimic the initial fetch from a remote backend.
    tokio::time::sleep(config.initial_load_delay()).await;

    let repo = LeagueRepository::open(Arc::clone(&store), config.mutation_delay());
    info!("League loaded: {} players", repo.players().len());

    let session = SessionManager::restore(store);
    if let Some(user) = session.user() {
        info!("Session restored for {}", user.username);
    }

    let authenticator = Box::new(StaticAuthenticator::new(config.login_delay()));
    let mut app = App::new(repo, session, authenticator);

    tui::run(&mut app, config.tick_interval()).await?;

    info!("Courtside shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("courtside.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courtside=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
