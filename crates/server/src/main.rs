use anyhow::Result;
use nexora_server::{build_app, ChatService, ServerConfig};
use nexora_store::{MemoryStore, TimedStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let store = match &config.seed_path {
        Some(path) => {
            log::info!("Seeding store from {}", path.display());
            MemoryStore::from_seed_file(path).await?
        }
        None => {
            log::warn!("NEXORA_SEED not set; starting with an empty store");
            MemoryStore::new()
        }
    };
    let store = Arc::new(TimedStore::new(store, config.store_timeout));

    let service = Arc::new(ChatService::new(store));
    let app = build_app(service);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    log::info!("Chat service listening on {}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
