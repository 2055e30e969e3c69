#![cfg(feature = "live-sheet-tests")]

// Needs MDI_SHEET_URL_PLATFORMS|TITLES|GENRES|REGIONS pointing at published CSV sheets.

use microdrama_intel::{
    dashboard_config_from_env, fetch_remote_dataset, market_summary, DataOrigin, DatasetProvider,
    DatasetSource, ReqwestCsvFetcher,
};

#[test]
fn live_sheets_parse_into_a_complete_dataset() {
    let mut config = dashboard_config_from_env().expect("environment config should parse");
    config.source.use_remote = true;
    assert!(
        config.source.remote_enabled(),
        "set the MDI_SHEET_URL_* variables to run live sheet tests"
    );

    let fetcher = ReqwestCsvFetcher::new(config.source.http_timeout_ms)
        .expect("HTTP client should build");
    let data = fetch_remote_dataset(&config.source.endpoints, &fetcher)
        .expect("published sheets should load");

    assert!(!data.platforms.is_empty());
    assert!(!data.titles.is_empty());
    assert!(!data.genres.is_empty());
    assert!(!data.regions.is_empty());
    assert!(market_summary(&data).total_installs > 0);

    let provider = DatasetProvider::new(config.source).expect("provider should build");
    let first = provider.load();
    assert_eq!(first.origin, DataOrigin::Remote);
    assert!(first.warning.is_none());
    assert_eq!(provider.load().origin, DataOrigin::Cached);
}
