mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::load()?;
    let addr = config.addr;
    let site_root = config.leptos_options.site_root.to_string();
    let app = routes::app(config.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, %site_root, api = client::config::api_base_url(), "research-brief listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)?;
    Ok(())
}
