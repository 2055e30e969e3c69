use std::sync::Arc;

use microdrama_intel::{
    dashboard_config_from_env, dashboard_router, init_logging, log_app_bind, log_app_start,
    log_app_stop, log_source_selected, release_source, DataSourceConfig, DatasetProvider,
    DatasetSource, StaticDatasetSource,
};

const COMPONENT: &str = "dashboard_server";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = dashboard_config_from_env()?;
    init_logging(&config.logging)?;
    log_app_start(COMPONENT, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let bound_addr = listener.local_addr()?;

    log_source_selected(COMPONENT, &config.source);
    let source = source_from_config(config.source.clone()).await?;
    let app = dashboard_router(Arc::clone(&source), config.theme);

    log_app_bind(bound_addr);
    let served = axum::serve(listener, app).await;

    release_source(source).await?;
    log_app_stop(COMPONENT);
    served?;

    Ok(())
}

async fn source_from_config(
    cfg: DataSourceConfig,
) -> Result<Arc<dyn DatasetSource>, Box<dyn std::error::Error>> {
    if !cfg.remote_enabled() {
        return Ok(Arc::new(StaticDatasetSource::defaults()));
    }

    // The blocking HTTP client must not be built on a runtime worker.
    let provider = tokio::task::spawn_blocking(move || DatasetProvider::new(cfg)).await??;
    Ok(Arc::new(provider))
}
