mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    if config.auth_api_origin.is_none() {
        tracing::warn!("AUTH_API_ORIGIN not set; /auth requests will not be forwarded");
    }

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "hopin listening");
    axum::serve(listener, app).await.expect("server failed");
}
