use ferrous_dnscheck_api::{create_api_routes, AppState};
use ferrous_dnscheck_domain::Config;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let web_addr: SocketAddr = config.server.socket_addr()?;

    let app = create_api_routes(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(web_addr).await?;
    info!(
        bind_address = %web_addr,
        static_dir = %config.server.static_dir,
        "Web server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
