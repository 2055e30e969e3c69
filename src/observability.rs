//! Subscriber installation and the lifecycle events the binaries emit.

use std::net::SocketAddr;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{DashboardConfig, LogFormat, LoggingConfig};
use crate::source::DataSourceConfig;

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("log filter rejected: {0}")]
    Filter(#[from] ParseError),
    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(fmt.json().with_ansi(false).finish())?
        }
        LogFormat::Pretty => tracing::subscriber::set_global_default(fmt.pretty().finish())?,
    }
    Ok(())
}

pub fn log_app_start(component: &'static str, config: &DashboardConfig) {
    info!(
        component,
        event = "app.start",
        theme = config.theme.as_str(),
        bind_addr = %config.bind_addr,
        export_dir = %config.export_dir.display(),
        log_filter = %config.logging.filter,
        log_format = config.logging.format.as_str()
    );
}

pub fn log_app_bind(bound_addr: SocketAddr) {
    info!(
        component = "dashboard_server",
        event = "app.bind",
        bind_addr = %bound_addr,
        route = "/dashboard"
    );
}

pub fn log_app_stop(component: &'static str) {
    info!(component, event = "app.stop");
}

/// Logs which dataset source the binary will read and why.
pub fn log_source_selected(component: &'static str, source: &DataSourceConfig) {
    let (choice, reason) = source_choice(source);
    if source.remote_enabled() {
        info!(
            component,
            event = "source.selected",
            source = choice,
            reason,
            cache_ttl_secs = source.cache_ttl.as_secs(),
            http_timeout_ms = source.http_timeout_ms
        );
    } else {
        info!(component, event = "source.selected", source = choice, reason);
    }
}

fn source_choice(source: &DataSourceConfig) -> (&'static str, &'static str) {
    match (source.use_remote, source.remote_enabled()) {
        (_, true) => ("remote", "MDI_USE_REMOTE"),
        (true, false) => ("default", "no_sheet_urls"),
        (false, false) => ("default", "MDI_USE_REMOTE_disabled"),
    }
}
