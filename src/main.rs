use anyhow::Context as _;
use minitrackr::config::Config;
use minitrackr::http::{router, AppState};
use minitrackr::logging::init_logging;
use minitrackr::render::build_engine;
use minitrackr::storage::SqliteStorage;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    init_logging(&config.log_filter)?;

    let storage = SqliteStorage::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

    let engine = build_engine().context("failed to build template engine")?;

    let state = AppState::new(storage, engine);
    let app = router(state);

    let addr = config.bind_addr();
    info!("minitrackr listening on http://{addr} (db: {})", config.db_path.display());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
