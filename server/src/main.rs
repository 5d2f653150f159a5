mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use identity::toolkit::ToolkitClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let authority = ToolkitClient::new(config.identity.clone()).expect("identity client init failed");
    tracing::info!(base_url = %config.identity.base_url, "identity service configured");

    let verifier = services::verify::TokenVerifier::new(Arc::new(authority));
    let state = state::AppState::new(verifier);

    let app = routes::app(state, config.cors_allow_any);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "auth gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
