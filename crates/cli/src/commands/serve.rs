use std::sync::Arc;

use anyhow::Result;
use page_analyzer_http::{AppState, create_router};

use crate::{build_services, load_config};

pub(crate) async fn run(port: Option<u16>, host: Option<String>) -> Result<()> {
    let mut config = load_config()?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    tracing::debug!(?config, "loaded configuration");

    let services = build_services(&config).await?;
    let state = Arc::new(AppState {
        url_service: Arc::new(services.urls),
        check_service: Arc::new(services.checks),
    });

    let router = create_router(state);
    let addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
