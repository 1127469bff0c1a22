use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waitlist_api::config::Config;
use waitlist_api::db::{MemoryWaitlistStore, PgWaitlistStore, WaitlistStore};
use waitlist_api::services::AuthService;
use waitlist_api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,admin_auth=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        ttl_seconds = config.admin.jwt_ttl_seconds,
        "Configuration loaded successfully"
    );

    let auth = AuthService::new(&config.admin)?;

    let store: Arc<dyn WaitlistStore> = match &config.database.url {
        Some(url) => {
            let pg = PgWaitlistStore::connect(url, config.database.max_connections).await?;
            pg.run_migrations().await?;
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE__URL not set; signups are kept in memory only");
            Arc::new(MemoryWaitlistStore::new())
        }
    };

    let app = build_router(AppState::new(store, auth));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
