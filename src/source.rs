//! Dataset provider: published-sheet CSV endpoints behind a freshness cache,
//! with an all-or-nothing fallback to the built-in tables.

use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::defaults::default_dataset;
use crate::export::read_table;
use crate::model::{Dataset, TableKind};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetEndpoints {
    pub platforms: String,
    pub titles: String,
    pub genres: String,
    pub regions: String,
}

impl SheetEndpoints {
    pub fn url(&self, table: TableKind) -> &str {
        match table {
            TableKind::Platforms => &self.platforms,
            TableKind::Titles => &self.titles,
            TableKind::Genres => &self.genres,
            TableKind::Regions => &self.regions,
        }
    }

    pub fn any_configured(&self) -> bool {
        [&self.platforms, &self.titles, &self.genres, &self.regions]
            .iter()
            .any(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceConfig {
    pub use_remote: bool,
    pub endpoints: SheetEndpoints,
    pub http_timeout_ms: u64,
    pub cache_ttl: Duration,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            use_remote: false,
            endpoints: SheetEndpoints::default(),
            http_timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl DataSourceConfig {
    /// Remote loading needs the flag and at least one endpoint.
    pub fn remote_enabled(&self) -> bool {
        self.use_remote && self.endpoints.any_configured()
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP client build error: {0}")]
    HttpClientBuild(String),
    #[error("HTTP request failed for {url}: {message}")]
    HttpRequest { url: String, message: String },
    #[error("no endpoint configured for the {0} table")]
    MissingEndpoint(TableKind),
    #[error("failed to parse the {table} table: {source}")]
    Parse {
        table: TableKind,
        #[source]
        source: csv::Error,
    },
}

pub trait CsvFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DatasetError>;
}

pub struct ReqwestCsvFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestCsvFetcher {
    pub fn new(timeout_ms: u64) -> Result<Self, DatasetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|err| DatasetError::HttpClientBuild(err.to_string()))?;
        Ok(Self { client })
    }
}

impl CsvFetcher for ReqwestCsvFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DatasetError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| DatasetError::HttpRequest {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::HttpRequest {
                url: url.to_string(),
                message: format!("unexpected HTTP status {status}"),
            });
        }

        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|err| DatasetError::HttpRequest {
                url: url.to_string(),
                message: err.to_string(),
            })
    }
}

/// Fetches and parses all four tables. The first failure aborts the load.
pub fn fetch_remote_dataset(
    endpoints: &SheetEndpoints,
    fetcher: &dyn CsvFetcher,
) -> Result<Dataset, DatasetError> {
    Ok(Dataset {
        platforms: fetch_table(endpoints, fetcher, TableKind::Platforms)?,
        titles: fetch_table(endpoints, fetcher, TableKind::Titles)?,
        genres: fetch_table(endpoints, fetcher, TableKind::Genres)?,
        regions: fetch_table(endpoints, fetcher, TableKind::Regions)?,
    })
}

fn fetch_table<T: serde::de::DeserializeOwned>(
    endpoints: &SheetEndpoints,
    fetcher: &dyn CsvFetcher,
    table: TableKind,
) -> Result<Vec<T>, DatasetError> {
    let url = endpoints.url(table).trim();
    if url.is_empty() {
        return Err(DatasetError::MissingEndpoint(table));
    }

    debug!(
        component = "dataset_source",
        event = "dataset.remote.fetch",
        table = table.as_str(),
        url
    );
    let body = fetcher.fetch(url)?;
    read_table(&body).map_err(|source| DatasetError::Parse { table, source })
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self
            .offset
            .lock()
            .expect("manual clock lock should not be poisoned");
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self
            .offset
            .lock()
            .expect("manual clock lock should not be poisoned");
        self.origin + offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Refreshed,
}

/// Holds the last successful value and when it was fetched.
#[derive(Debug)]
pub struct DatasetCache<T> {
    ttl: Duration,
    entry: Option<(Arc<T>, Instant)>,
}

impl<T> DatasetCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn fetched_at(&self) -> Option<Instant> {
        self.entry.as_ref().map(|(_, at)| *at)
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        self.entry
            .as_ref()
            .map(|(_, at)| now.saturating_duration_since(*at) < self.ttl)
            .unwrap_or(false)
    }

    /// Returns the cached value while fresh, otherwise runs `refresh`.
    /// A failed refresh leaves the previous entry untouched.
    pub fn get_or_refresh<E>(
        &mut self,
        now: Instant,
        refresh: impl FnOnce() -> Result<T, E>,
    ) -> Result<(Arc<T>, CacheStatus), E> {
        if self.is_fresh(now) {
            if let Some((value, _)) = &self.entry {
                return Ok((Arc::clone(value), CacheStatus::Hit));
            }
        }

        let value = Arc::new(refresh()?);
        self.entry = Some((Arc::clone(&value), now));
        Ok((value, CacheStatus::Refreshed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Remote,
    Cached,
    Default,
}

impl DataOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Cached => "cached",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Arc<Dataset>,
    pub origin: DataOrigin,
    /// Viewer-facing notice when remote loading failed.
    pub warning: Option<String>,
}

pub trait DatasetSource: Send + Sync + 'static {
    fn load(&self) -> LoadedDataset;
}

/// Fixed tables, swappable at runtime.
#[derive(Clone)]
pub struct StaticDatasetSource {
    inner: Arc<RwLock<Arc<Dataset>>>,
}

impl StaticDatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    pub fn defaults() -> Self {
        Self::new(default_dataset())
    }

    pub fn replace_dataset(&self, dataset: Dataset) {
        let mut guard = self
            .inner
            .write()
            .expect("static dataset lock should not be poisoned");
        *guard = Arc::new(dataset);
    }
}

impl DatasetSource for StaticDatasetSource {
    fn load(&self) -> LoadedDataset {
        let guard = self
            .inner
            .read()
            .expect("static dataset lock should not be poisoned");
        let dataset = Arc::clone(&*guard);
        LoadedDataset {
            dataset,
            origin: DataOrigin::Default,
            warning: None,
        }
    }
}

pub struct DatasetProvider {
    config: DataSourceConfig,
    fetcher: Box<dyn CsvFetcher>,
    clock: Arc<dyn Clock>,
    cache: Mutex<DatasetCache<Dataset>>,
    defaults: Arc<Dataset>,
}

impl DatasetProvider {
    pub fn new(config: DataSourceConfig) -> Result<Self, DatasetError> {
        let fetcher = ReqwestCsvFetcher::new(config.http_timeout_ms)?;
        Ok(Self::with_parts(
            config,
            Box::new(fetcher),
            Arc::new(SystemClock),
        ))
    }

    pub fn with_parts(
        config: DataSourceConfig,
        fetcher: Box<dyn CsvFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = Mutex::new(DatasetCache::new(config.cache_ttl));
        Self {
            config,
            fetcher,
            clock,
            cache,
            defaults: Arc::new(default_dataset()),
        }
    }

    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    fn default_load(&self, warning: Option<String>) -> LoadedDataset {
        LoadedDataset {
            dataset: Arc::clone(&self.defaults),
            origin: DataOrigin::Default,
            warning,
        }
    }
}

impl DatasetSource for DatasetProvider {
    fn load(&self) -> LoadedDataset {
        if !self.config.remote_enabled() {
            return self.default_load(None);
        }

        // Held across the fetch so concurrent passes share one refresh.
        let mut cache = self
            .cache
            .lock()
            .expect("dataset cache lock should not be poisoned");
        let now = self.clock.now();

        match cache.get_or_refresh(now, || {
            fetch_remote_dataset(&self.config.endpoints, self.fetcher.as_ref())
        }) {
            Ok((dataset, CacheStatus::Hit)) => {
                debug!(
                    component = "dataset_source",
                    event = "dataset.cache.hit",
                    ttl_secs = cache.ttl().as_secs()
                );
                LoadedDataset {
                    dataset,
                    origin: DataOrigin::Cached,
                    warning: None,
                }
            }
            Ok((dataset, CacheStatus::Refreshed)) => {
                info!(
                    component = "dataset_source",
                    event = "dataset.remote.loaded",
                    platforms = dataset.platforms.len(),
                    titles = dataset.titles.len(),
                    genres = dataset.genres.len(),
                    regions = dataset.regions.len()
                );
                for issue in dataset.integrity_issues() {
                    warn!(
                        component = "dataset_source",
                        event = "dataset.integrity.issue",
                        issue = %issue
                    );
                }
                LoadedDataset {
                    dataset,
                    origin: DataOrigin::Remote,
                    warning: None,
                }
            }
            Err(err) => {
                warn!(
                    component = "dataset_source",
                    event = "dataset.fallback",
                    error = %err
                );
                self.default_load(Some(format!(
                    "Failed to load from Google Sheets ({err}). Using default data."
                )))
            }
        }
    }
}
