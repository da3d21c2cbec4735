//! Detective game server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use detective_game::adapters::ai::select_provider;
use detective_game::adapters::game_master::{LlmGameMaster, ScriptedGameMaster};
use detective_game::adapters::http::{app_router, GameHandlers};
use detective_game::adapters::storage::InMemoryGameRepository;
use detective_game::application::SuspectLimits;
use detective_game::config::{AppConfig, LogFormat, ServerConfig};
use detective_game::ports::GameMaster;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;
    config.validate()?;

    let game_master: Arc<dyn GameMaster> = match select_provider(&config.llm)? {
        Some(provider) => Arc::new(LlmGameMaster::new(provider)),
        None => Arc::new(ScriptedGameMaster),
    };
    let repository = Arc::new(InMemoryGameRepository::new());
    let handlers = GameHandlers::new(
        game_master.clone(),
        repository,
        SuspectLimits::from(&config.game),
    );

    let app = app_router(handlers, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        game_master = %game_master.name(),
        static_dir = %config.server.static_dir.display(),
        "detective game listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(&server.log_level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match server.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    installed.map_err(|err| -> Box<dyn std::error::Error> { err })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
