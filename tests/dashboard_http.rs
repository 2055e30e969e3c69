use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use microdrama_intel::{
    dashboard_router, default_dataset, export_csv, release_source, CsvFetcher, DataSourceConfig,
    DatasetError, DatasetProvider, DatasetSource, ManualClock, SheetEndpoints,
    StaticDatasetSource, TableKind, Theme,
};
use regex::Regex;
use tower::util::ServiceExt;

struct FixedFetcher {
    bodies: HashMap<String, Vec<u8>>,
}

impl CsvFetcher for FixedFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DatasetError> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| DatasetError::HttpRequest {
                url: url.to_string(),
                message: "unexpected HTTP status 404 Not Found".to_string(),
            })
    }
}

fn sheet_endpoints() -> SheetEndpoints {
    SheetEndpoints {
        platforms: "https://sheets.test/platforms.csv".to_string(),
        titles: "https://sheets.test/titles.csv".to_string(),
        genres: "https://sheets.test/genres.csv".to_string(),
        regions: "https://sheets.test/regions.csv".to_string(),
    }
}

fn remote_provider(bodies: HashMap<String, Vec<u8>>) -> Arc<DatasetProvider> {
    let config = DataSourceConfig {
        use_remote: true,
        endpoints: sheet_endpoints(),
        ..DataSourceConfig::default()
    };
    Arc::new(DatasetProvider::with_parts(
        config,
        Box::new(FixedFetcher { bodies }),
        Arc::new(ManualClock::new()),
    ))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn dashboard_page_renders_in_both_themes() {
    let source = Arc::new(StaticDatasetSource::defaults());

    for (uri, class) in [
        ("/dashboard", "theme-light"),
        ("/dashboard?theme=dark", "theme-dark"),
        ("/dashboard?theme=light", "theme-light"),
    ] {
        let app = dashboard_router(source.clone(), Theme::Light);
        let (status, headers, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let text = String::from_utf8(body).unwrap();
        assert!(text.contains(class), "{uri}");
        assert!(text.contains("📱 Platform Rankings"));
        assert!(text.contains("ReelShort"));
        assert!(text.contains("🟢 +3"));
    }
}

#[tokio::test]
async fn configured_default_theme_applies_without_query() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Dark);
    let (status, _, body) = get(app, "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("theme-dark"));
}

#[tokio::test]
async fn unknown_theme_is_a_bad_request() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Light);
    let (status, _, _) = get(app, "/dashboard?theme=neon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn snapshot_reports_default_origin_and_summary() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Light);
    let (status, _, body) = get(app, "/dashboard/snapshot").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["origin"], "default");
    assert!(json["warning"].is_null());
    assert_eq!(json["summary"]["total_installs"], 214_000_000u64);
    assert_eq!(json["summary"]["platforms_tracked"], 10);
    assert_eq!(json["tables"]["platforms"].as_array().unwrap().len(), 10);
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn snapshot_reflects_replaced_dataset() {
    let source = Arc::new(StaticDatasetSource::defaults());
    let mut data = default_dataset();
    data.platforms.truncate(3);
    source.replace_dataset(data);

    let app = dashboard_router(source, Theme::Light);
    let (_, _, body) = get(app, "/dashboard/snapshot").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["summary"]["platforms_tracked"], 3);
    assert_eq!(json["rankings"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn remote_failure_serves_defaults_with_warning() {
    // Only the platforms sheet answers, so the load is partial and must fall back.
    let mut bodies = HashMap::new();
    bodies.insert(
        sheet_endpoints().platforms,
        export_csv(&default_dataset(), TableKind::Platforms)
            .unwrap()
            .into_bytes(),
    );
    let app = dashboard_router(remote_provider(bodies), Theme::Light);

    let (status, _, body) = get(app.clone(), "/dashboard/snapshot").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["origin"], "default");
    let warning = json["warning"].as_str().unwrap();
    assert!(warning.starts_with("Failed to load from Google Sheets"));
    assert!(warning.ends_with("Using default data."));
    assert_eq!(
        serde_json::to_value(default_dataset()).unwrap(),
        json["tables"]
    );

    let (_, _, page) = get(app, "/dashboard").await;
    let page = String::from_utf8(page).unwrap();
    assert!(page.contains("banner-warning"));
    assert!(page.contains("📋 Using default dataset"));
}

#[tokio::test]
async fn remote_success_is_served_then_cached() {
    let mut data = default_dataset();
    data.genres[0].market_share = 40.0;
    let mut bodies = HashMap::new();
    for (table, url) in [
        (TableKind::Platforms, sheet_endpoints().platforms),
        (TableKind::Titles, sheet_endpoints().titles),
        (TableKind::Genres, sheet_endpoints().genres),
        (TableKind::Regions, sheet_endpoints().regions),
    ] {
        bodies.insert(url, export_csv(&data, table).unwrap().into_bytes());
    }
    let app = dashboard_router(remote_provider(bodies), Theme::Light);

    let (_, _, first) = get(app.clone(), "/dashboard/snapshot").await;
    let first: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(first["origin"], "remote");
    assert_eq!(first["tables"]["genres"][0]["market_share"], 40.0);

    let (_, _, second) = get(app, "/dashboard/snapshot").await;
    let second: serde_json::Value = serde_json::from_slice(&second).unwrap();
    assert_eq!(second["origin"], "cached");
    assert_eq!(first["fingerprint"], second["fingerprint"]);
}

#[tokio::test]
async fn table_export_is_a_dated_csv_attachment() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Light);
    let (status, headers, body) = get(app, "/dashboard/export/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    let pattern = Regex::new(r#"^attachment; filename="microdrama_regional_\d{8}\.csv"$"#).unwrap();
    assert!(pattern.is_match(disposition), "{disposition}");

    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("region,market_share,revenue_q1,growth,top_platform\n"));
    assert_eq!(text.lines().count(), 7);
}

#[tokio::test]
async fn export_accepts_stem_and_file_suffix() {
    let source = Arc::new(StaticDatasetSource::defaults());
    for uri in ["/dashboard/export/regional", "/dashboard/export/platforms.csv"] {
        let app = dashboard_router(source.clone(), Theme::Light);
        let (status, _, _) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn unknown_export_table_is_not_found() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Light);
    let (status, _, _) = get(app, "/dashboard/export/episodes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn zip_export_bundles_all_tables() {
    let app = dashboard_router(Arc::new(StaticDatasetSource::defaults()), Theme::Light);
    let (status, headers, body) = get(app, "/dashboard/export.zip").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/zip");

    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    let pattern = Regex::new(r#"microdrama_tables_\d{8}\.zip"#).unwrap();
    assert!(pattern.is_match(disposition));
    // Zip local file header magic.
    assert_eq!(&body[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn reqwest_backed_source_is_released_off_the_runtime() {
    let cfg = DataSourceConfig {
        use_remote: true,
        endpoints: SheetEndpoints {
            platforms: "http://127.0.0.1:9/platforms.csv".to_string(),
            ..SheetEndpoints::default()
        },
        ..DataSourceConfig::default()
    };
    let provider = tokio::task::spawn_blocking(move || DatasetProvider::new(cfg))
        .await
        .expect("blocking task should join")
        .expect("HTTP client should build");
    let source: Arc<dyn DatasetSource> = Arc::new(provider);

    let app = dashboard_router(Arc::clone(&source), Theme::Light);
    drop(app);
    assert_eq!(Arc::strong_count(&source), 1);

    release_source(source)
        .await
        .expect("source should drop on the blocking pool");
}
