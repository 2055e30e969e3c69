//! Environment-driven configuration for the dashboard binaries.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::render::Theme;
use crate::source::{DataSourceConfig, SheetEndpoints, DEFAULT_CACHE_TTL, DEFAULT_HTTP_TIMEOUT_MS};

pub const DEFAULT_DASHBOARD_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_EXPORT_DIR: &str = "exports";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub theme: Theme,
    pub source: DataSourceConfig,
    pub export_dir: PathBuf,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

/// Subscriber settings; `filter` is an `EnvFilter` directive string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} address '{value}'")]
    InvalidAddr { var: &'static str, value: String },
    #[error("invalid {var} number '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("invalid {var} flag '{value}', expected true/false")]
    InvalidFlag { var: &'static str, value: String },
    #[error("unknown theme '{0}', expected dark or light")]
    InvalidTheme(String),
    #[error("invalid MDI_LOG_LEVEL filter '{value}'")]
    InvalidLogFilter { value: String },
    #[error("unknown MDI_LOG_FORMAT '{0}', expected json or pretty")]
    InvalidLogFormat(String),
}

pub fn dashboard_config_from_env() -> Result<DashboardConfig, ConfigError> {
    let bind_raw = env_trimmed("MDI_DASHBOARD_ADDR")
        .unwrap_or_else(|| DEFAULT_DASHBOARD_ADDR.to_string());
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidAddr {
            var: "MDI_DASHBOARD_ADDR",
            value: bind_raw.clone(),
        })?;

    let theme = match env_trimmed("MDI_THEME") {
        Some(raw) => Theme::parse(&raw).ok_or(ConfigError::InvalidTheme(raw))?,
        None => Theme::Light,
    };

    let use_remote = match env_trimmed("MDI_USE_REMOTE") {
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidFlag {
            var: "MDI_USE_REMOTE",
            value: raw,
        })?,
        None => false,
    };

    let endpoints = SheetEndpoints {
        platforms: env_trimmed("MDI_SHEET_URL_PLATFORMS").unwrap_or_default(),
        titles: env_trimmed("MDI_SHEET_URL_TITLES").unwrap_or_default(),
        genres: env_trimmed("MDI_SHEET_URL_GENRES").unwrap_or_default(),
        regions: env_trimmed("MDI_SHEET_URL_REGIONS").unwrap_or_default(),
    };

    let cache_ttl = match env_trimmed("MDI_CACHE_TTL_SECS") {
        Some(raw) => Duration::from_secs(parse_u64("MDI_CACHE_TTL_SECS", &raw)?),
        None => DEFAULT_CACHE_TTL,
    };
    let http_timeout_ms = match env_trimmed("MDI_HTTP_TIMEOUT_MS") {
        Some(raw) => parse_u64("MDI_HTTP_TIMEOUT_MS", &raw)?,
        None => DEFAULT_HTTP_TIMEOUT_MS,
    };

    let export_dir = env_trimmed("MDI_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
    let logging = logging_config_from_env()?;

    Ok(DashboardConfig {
        bind_addr,
        theme,
        source: DataSourceConfig {
            use_remote,
            endpoints,
            http_timeout_ms,
            cache_ttl,
        },
        export_dir,
        logging,
    })
}

fn logging_config_from_env() -> Result<LoggingConfig, ConfigError> {
    let mut logging = LoggingConfig::default();

    if let Some(raw) = env_trimmed("MDI_LOG_LEVEL") {
        if EnvFilter::try_new(&raw).is_err() {
            return Err(ConfigError::InvalidLogFilter { value: raw });
        }
        logging.filter = raw;
    }
    if let Some(raw) = env_trimmed("MDI_LOG_FORMAT") {
        logging.format = LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?;
    }
    if let Some(raw) = env_trimmed("MDI_LOG_TARGET") {
        logging.with_target = parse_bool(&raw).ok_or(ConfigError::InvalidFlag {
            var: "MDI_LOG_TARGET",
            value: raw,
        })?;
    }

    Ok(logging)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}

fn env_trimmed(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::test_env::with_env_vars;
    use super::*;

    const ALL_VARS: [&str; 13] = [
        "MDI_DASHBOARD_ADDR",
        "MDI_THEME",
        "MDI_USE_REMOTE",
        "MDI_SHEET_URL_PLATFORMS",
        "MDI_SHEET_URL_TITLES",
        "MDI_SHEET_URL_GENRES",
        "MDI_SHEET_URL_REGIONS",
        "MDI_CACHE_TTL_SECS",
        "MDI_HTTP_TIMEOUT_MS",
        "MDI_EXPORT_DIR",
        "MDI_LOG_LEVEL",
        "MDI_LOG_FORMAT",
        "MDI_LOG_TARGET",
    ];

    fn cleared_with(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS
            .iter()
            .map(|key| {
                let value = overrides
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[test]
    fn defaults_when_env_missing() {
        let cfg = with_env_vars(&cleared_with(&[]), dashboard_config_from_env).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_DASHBOARD_ADDR);
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.source, DataSourceConfig::default());
        assert_eq!(cfg.export_dir, PathBuf::from("exports"));
        assert_eq!(cfg.logging, LoggingConfig::default());
        assert!(!cfg.source.remote_enabled());
    }

    #[test]
    fn parses_logging_settings() {
        let vars = cleared_with(&[
            ("MDI_LOG_LEVEL", "microdrama_intel=debug,warn"),
            ("MDI_LOG_FORMAT", "JSON"),
            ("MDI_LOG_TARGET", "off"),
        ]);
        let cfg = with_env_vars(&vars, dashboard_config_from_env).unwrap();

        assert_eq!(cfg.logging.filter, "microdrama_intel=debug,warn");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(!cfg.logging.with_target);
    }

    #[test]
    fn invalid_logging_values_fail_startup() {
        let err = with_env_vars(
            &cleared_with(&[("MDI_LOG_FORMAT", "yaml")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogFormat("yaml".to_string()));

        let err = with_env_vars(
            &cleared_with(&[("MDI_LOG_TARGET", "maybe")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: "MDI_LOG_TARGET", .. }));

        let err = with_env_vars(
            &cleared_with(&[("MDI_LOG_LEVEL", "microdrama_intel=loud")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter { .. }));
    }

    #[test]
    fn parses_remote_source_settings() {
        let vars = cleared_with(&[
            ("MDI_THEME", "dark"),
            ("MDI_USE_REMOTE", "yes"),
            ("MDI_SHEET_URL_PLATFORMS", " https://sheets.test/p.csv "),
            ("MDI_SHEET_URL_TITLES", "https://sheets.test/t.csv"),
            ("MDI_CACHE_TTL_SECS", "60"),
            ("MDI_HTTP_TIMEOUT_MS", "2500"),
        ]);
        let cfg = with_env_vars(&vars, dashboard_config_from_env).unwrap();

        assert_eq!(cfg.theme, Theme::Dark);
        assert!(cfg.source.remote_enabled());
        assert_eq!(cfg.source.endpoints.platforms, "https://sheets.test/p.csv");
        assert_eq!(cfg.source.endpoints.genres, "");
        assert_eq!(cfg.source.cache_ttl, Duration::from_secs(60));
        assert_eq!(cfg.source.http_timeout_ms, 2_500);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = with_env_vars(
            &cleared_with(&[("MDI_THEME", "neon")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTheme("neon".to_string()));

        let err = with_env_vars(
            &cleared_with(&[("MDI_CACHE_TTL_SECS", "five")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "MDI_CACHE_TTL_SECS", .. }));

        let err = with_env_vars(
            &cleared_with(&[("MDI_DASHBOARD_ADDR", "localhost")]),
            dashboard_config_from_env,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }
}
