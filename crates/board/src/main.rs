use anyhow::{bail, Result};
use board::{setup_logging, start_server, AppState, Args, MemoryStore, StoreContext};
use clap::Parser;
use log::{error, info};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    setup_logging(&args.log_level, args.environment)?;

    if args.api_token.trim().is_empty() {
        error!("API_TOKEN must not be empty");
        bail!("API_TOKEN must not be empty");
    }

    let store = Arc::new(MemoryStore::new());
    let store_context = Arc::new(StoreContext::new(store));
    if args.seed_demo {
        let (card, list) = store_context.seed_demo()?;
        info!("Seeded demo card {} and list {}", card.id, list.id);
    }

    let app_state = AppState::new(store_context, args.environment, args.public_url.clone());
    if let Err(err) = start_server(&args.host, args.port, app_state, args.api_token).await {
        error!("❌ Failed to start server: {err}");
        return Err(err);
    }

    Ok(())
}
