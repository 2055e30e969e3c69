//! Micro-drama market intelligence core crate.
//!
//! Current implemented scope:
//! - default market tables and a remote CSV provider with cached fallback
//! - display formatting, aggregates and chart series
//! - CSV/zip export and the HTTP dashboard in dark or light theme

mod config;
mod dashboard;
mod defaults;
mod export;
mod format;
mod model;
mod observability;
mod render;
mod source;
mod summary;

pub use config::{
    dashboard_config_from_env, ConfigError, DashboardConfig, LogFormat, LoggingConfig,
    DEFAULT_DASHBOARD_ADDR, DEFAULT_EXPORT_DIR, DEFAULT_LOG_FILTER,
};
pub use dashboard::{
    build_snapshot, dashboard_router, release_source, DashboardQuery, DashboardSnapshot,
};
pub use defaults::{
    default_dataset, default_genres, default_platforms, default_regions, default_titles,
};
pub use export::{
    bundle_file_name, dataset_fingerprint, export_csv, export_file_name, export_zip, read_table,
    write_exports, write_table, ExportError, CSV_CONTENT_TYPE, ZIP_CONTENT_TYPE,
};
pub use format::{
    format_millions_usd, format_number, format_percent, format_rating, format_thousands,
    RankChange,
};
pub use model::{
    Dataset, GenreRecord, IntegrityIssue, PlatformRecord, RegionRecord, TableKind, TitleRecord,
    ALL_TABLES, GENRE_COLUMNS, PLATFORM_COLUMNS, REGION_COLUMNS, TITLE_COLUMNS,
};
pub use observability::{
    init_logging, log_app_bind, log_app_start, log_app_stop, log_source_selected,
    LoggingInitError,
};
pub use render::{
    escape_html, platform_color, render_dashboard_html, Theme, DASHBOARD_TITLE, PLATFORM_COLORS,
    RANKING_HEADERS,
};
pub use source::{
    fetch_remote_dataset, CacheStatus, Clock, CsvFetcher, DataOrigin, DataSourceConfig,
    DatasetCache, DatasetError, DatasetProvider, DatasetSource, LoadedDataset, ManualClock,
    ReqwestCsvFetcher, SheetEndpoints, StaticDatasetSource, SystemClock, DEFAULT_CACHE_TTL,
    DEFAULT_HTTP_TIMEOUT_MS,
};
pub use summary::{
    fastest_growing_genre, genre_series, market_summary, ranking_rows, region_growth_series,
    region_share_series, revenue_series, title_breakdown, title_revenue_series, us_share_series,
    GenreCount, GenreMetric, MarketSummary, RankingRow, SeriesPoint, TitleBreakdown,
};
