use anyhow::Result;
use catalog_insights::application::{
    ports::catalog::CatalogSource, queries::articles::CatalogDefaults,
    services::ApplicationServices,
};
use catalog_insights::config::AppConfig;
use catalog_insights::infrastructure::catalog::HttpCatalogSource;
use catalog_insights::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let catalog_source: Arc<dyn CatalogSource> =
        Arc::new(HttpCatalogSource::new(config.catalog_timeout())?);
    let defaults = CatalogDefaults {
        url: config.catalog_url().to_string(),
        price: config.default_price(),
    };

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&catalog_source),
        defaults,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        catalog_url = config.catalog_url(),
        default_price = %config.default_price(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
