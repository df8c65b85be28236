use std::sync::Arc;

use propflow::api::api_routes;
use propflow::config::{EngineSettings, ServerConfig};
use propflow::integrations::LoggingGateway;
use propflow::service::PropFlowService;
use propflow::store::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env()?;
    let settings = EngineSettings::from_env()?;
    let addr = server_config.socket_addr()?;

    eprintln!("🏠 PropFlow v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Dashboard API: http://{}/api/dashboard/{{host_id}}", addr);
    eprintln!("   Guest messages: http://{}/api/guest-message", addr);
    eprintln!("   Escalations: http://{}/api/escalations", addr);
    eprintln!(
        "   CORS: {}",
        if server_config.cors_origins.is_empty() {
            "any origin".to_string()
        } else {
            server_config.cors_origins.join(", ")
        }
    );
    eprintln!(
        "   Auto-respond: {}, auto-apply pricing: {}",
        settings.auto_respond_to_common_questions, settings.auto_apply_small_price_changes
    );

    // ── Service ──────────────────────────────────────────────────────────
    let service = Arc::new(PropFlowService::new(
        settings,
        Arc::new(InMemoryStore::demo()),
        Arc::new(LoggingGateway::new()),
    ));

    let app = api_routes(service, &server_config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "PropFlow server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
