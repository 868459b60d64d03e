// src/main.rs
use offer_for_you::{config::AppConfig, database, routes, state};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use dotenvy::dotenv;
use std::net::SocketAddr;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize logging
    init_tracing(&config.log_level);

    // Create database pool (migrates and seeds on first start)
    let db_pool = match database::create_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Failed to open database");
            std::process::exit(1);
        }
    };

    // Create application state
    let app_state = state::AppState::new(db_pool, &config.models_base_url);
    let app = routes::build_app(app_state, &config.cors_allowed_origins);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on http://{}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
        std::process::exit(1);
    }
}
