mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::StorefrontConfig::from_env().expect("invalid configuration");
    let catalog = services::catalog::CatalogSource::from_config(&config.catalog).expect("catalog client init failed");
    tracing::info!(endpoint = %config.catalog.endpoint, limit = config.catalog.page_limit, "catalog source configured");

    let state = state::AppState::new(catalog);
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
