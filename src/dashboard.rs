//! Dashboard snapshot assembly and HTTP routes.

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::export::{
    bundle_file_name, dataset_fingerprint, export_csv, export_file_name, export_zip,
    ExportError, CSV_CONTENT_TYPE, ZIP_CONTENT_TYPE,
};
use crate::model::{Dataset, GenreRecord, TableKind};
use crate::render::{render_dashboard_html, Theme};
use crate::source::{DataOrigin, DatasetSource, LoadedDataset};
use crate::summary::{
    fastest_growing_genre, market_summary, ranking_rows, title_breakdown, MarketSummary,
    RankingRow, TitleBreakdown,
};

/// Everything one render pass needs, derived from a single load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub origin: DataOrigin,
    pub warning: Option<String>,
    pub fingerprint: String,
    pub generated_on: NaiveDate,
    pub summary: MarketSummary,
    pub title_breakdown: TitleBreakdown,
    pub rankings: Vec<RankingRow>,
    pub fastest_growing_genre: Option<GenreRecord>,
    pub tables: Dataset,
}

pub fn build_snapshot(
    loaded: &LoadedDataset,
    generated_on: NaiveDate,
) -> Result<DashboardSnapshot, ExportError> {
    let data = loaded.dataset.as_ref();
    Ok(DashboardSnapshot {
        origin: loaded.origin,
        warning: loaded.warning.clone(),
        fingerprint: dataset_fingerprint(data)?,
        generated_on,
        summary: market_summary(data),
        title_breakdown: title_breakdown(&data.titles),
        rankings: ranking_rows(&data.platforms),
        fastest_growing_genre: fastest_growing_genre(&data.genres).cloned(),
        tables: data.clone(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub theme: Option<String>,
}

pub fn dashboard_router(source: Arc<dyn DatasetSource>, default_theme: Theme) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard_html))
        .route("/dashboard/snapshot", get(get_dashboard_snapshot))
        .route("/dashboard/export.zip", get(get_export_bundle))
        .route("/dashboard/export/{table}", get(get_table_export))
        .with_state(DashboardAppState {
            source,
            default_theme,
        })
}

/// Drops the server's handle on the blocking pool. A remote provider owns a
/// blocking HTTP client, which panics if dropped on a runtime worker.
pub async fn release_source(
    source: Arc<dyn DatasetSource>,
) -> Result<(), tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || drop(source)).await
}

#[derive(Clone)]
struct DashboardAppState {
    source: Arc<dyn DatasetSource>,
    default_theme: Theme,
}

async fn get_dashboard_html(
    State(state): State<DashboardAppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let theme = match query.theme.as_deref() {
        None => state.default_theme,
        Some(raw) => match Theme::parse(raw) {
            Some(theme) => theme,
            None => {
                warn!(
                    component = "dashboard_http",
                    event = "http.dashboard.bad_theme",
                    theme = raw
                );
                return (
                    StatusCode::BAD_REQUEST,
                    format!("unknown theme '{raw}', expected dark or light"),
                )
                    .into_response();
            }
        },
    };

    let loaded = match load_dataset(&state).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };
    info!(
        component = "dashboard_http",
        event = "http.dashboard.request",
        theme = theme.as_str(),
        origin = loaded.origin.as_str()
    );

    match build_snapshot(&loaded, today()) {
        Ok(snapshot) => Html(render_dashboard_html(&snapshot, theme)).into_response(),
        Err(err) => internal_error("dashboard", err),
    }
}

async fn get_dashboard_snapshot(State(state): State<DashboardAppState>) -> Response {
    let loaded = match load_dataset(&state).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };
    info!(
        component = "dashboard_http",
        event = "http.snapshot.request",
        origin = loaded.origin.as_str()
    );

    match build_snapshot(&loaded, today()) {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(err) => internal_error("snapshot", err),
    }
}

async fn get_table_export(
    State(state): State<DashboardAppState>,
    Path(table): Path<String>,
) -> Response {
    let Some(kind) = TableKind::parse(&table) else {
        warn!(
            component = "dashboard_http",
            event = "http.export.unknown_table",
            table = %table
        );
        return (StatusCode::NOT_FOUND, format!("unknown table '{table}'")).into_response();
    };

    let loaded = match load_dataset(&state).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };
    let file_name = export_file_name(kind, today());
    info!(
        component = "dashboard_http",
        event = "http.export.request",
        table = kind.as_str(),
        rows = loaded.dataset.row_count(kind),
        file_name = %file_name,
        origin = loaded.origin.as_str()
    );

    match export_csv(&loaded.dataset, kind) {
        Ok(body) => attachment(CSV_CONTENT_TYPE, &file_name, body.into_bytes()),
        Err(err) => internal_error("export", err),
    }
}

async fn get_export_bundle(State(state): State<DashboardAppState>) -> Response {
    let loaded = match load_dataset(&state).await {
        Ok(loaded) => loaded,
        Err(response) => return response,
    };
    let date = today();
    let file_name = bundle_file_name(date);
    info!(
        component = "dashboard_http",
        event = "http.export.request",
        table = "all",
        file_name = %file_name,
        origin = loaded.origin.as_str()
    );

    match export_zip(&loaded.dataset, date) {
        Ok(bytes) => attachment(ZIP_CONTENT_TYPE, &file_name, bytes),
        Err(err) => internal_error("export", err),
    }
}

/// Remote loads block on HTTP, so every load goes through the blocking pool.
async fn load_dataset(state: &DashboardAppState) -> Result<LoadedDataset, Response> {
    let source = Arc::clone(&state.source);
    tokio::task::spawn_blocking(move || source.load())
        .await
        .map_err(|err| internal_error("load", err))
}

fn attachment(content_type: &str, file_name: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

fn internal_error(route: &'static str, err: impl Display) -> Response {
    error!(
        component = "dashboard_http",
        event = "http.request.error",
        route,
        error = %err
    );
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
