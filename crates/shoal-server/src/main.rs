use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use shoal_ai::Assistant;
use shoal_api::router::router;
use shoal_api::state::AppStateInner;
use shoal_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoal=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("SHOAL_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("SHOAL_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // State: in-memory store with demo data, assistant from env.
    // Restarting the process discards everything — that's the deal.
    let state = Arc::new(AppStateInner {
        store: Store::with_seed_data(),
        assistant: Assistant::from_env(),
    });

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Shoal server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
