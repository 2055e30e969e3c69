//! CSV serialization and parsing of the market tables, plus download bundles.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;
use zip::write::SimpleFileOptions;

use crate::model::{Dataset, TableKind, ALL_TABLES};

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV writer flush failed: {0}")]
    Flush(String),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// `microdrama_platforms_20250301.csv`
pub fn export_file_name(table: TableKind, date: NaiveDate) -> String {
    format!(
        "microdrama_{}_{}.csv",
        table.export_stem(),
        date.format("%Y%m%d")
    )
}

pub fn bundle_file_name(date: NaiveDate) -> String {
    format!("microdrama_tables_{}.zip", date.format("%Y%m%d"))
}

pub fn export_csv(data: &Dataset, table: TableKind) -> Result<String, ExportError> {
    match table {
        TableKind::Platforms => write_table(&data.platforms, table.columns()),
        TableKind::Titles => write_table(&data.titles, table.columns()),
        TableKind::Genres => write_table(&data.genres, table.columns()),
        TableKind::Regions => write_table(&data.regions, table.columns()),
    }
}

/// Serializes rows with a header line. An empty table still gets its header.
pub fn write_table<T: Serialize>(rows: &[T], columns: &[&str]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(columns)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parses a headed CSV body. Header and cell whitespace is trimmed, and rows
/// whose cells are all blank (padding rows in published sheets) are skipped.
pub fn read_table<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}

/// All four tables as CSV files inside one zip archive.
pub fn export_zip(data: &Dataset, date: NaiveDate) -> Result<Vec<u8>, ExportError> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for table in ALL_TABLES {
        let body = export_csv(data, table)?;
        zip.start_file(export_file_name(table, date), SimpleFileOptions::default())?;
        zip.write_all(body.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

pub fn write_exports(
    data: &Dataset,
    dir: &Path,
    date: NaiveDate,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(ALL_TABLES.len());
    for table in ALL_TABLES {
        let path = dir.join(export_file_name(table, date));
        let body = export_csv(data, table)?;
        fs::write(&path, body.as_bytes())?;
        info!(
            component = "export",
            event = "export.file.written",
            table = table.as_str(),
            rows = data.row_count(table),
            path = %path.display()
        );
        written.push(path);
    }
    Ok(written)
}

/// SHA-256 over the exported CSV of every table, in table order.
pub fn dataset_fingerprint(data: &Dataset) -> Result<String, ExportError> {
    let mut hasher = Sha256::new();
    for table in ALL_TABLES {
        hasher.update(table.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(export_csv(data, table)?.as_bytes());
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_dataset;
    use crate::model::{GenreRecord, PlatformRecord, RegionRecord, TitleRecord};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
    }

    #[test]
    fn file_names_follow_table_stems() {
        assert_eq!(
            export_file_name(TableKind::Platforms, date()),
            "microdrama_platforms_20250301.csv"
        );
        assert_eq!(
            export_file_name(TableKind::Regions, date()),
            "microdrama_regional_20250301.csv"
        );
        assert_eq!(bundle_file_name(date()), "microdrama_tables_20250301.zip");
    }

    #[test]
    fn exported_header_matches_column_list() {
        let data = default_dataset();
        for table in ALL_TABLES {
            let body = export_csv(&data, table).unwrap();
            let header = body.lines().next().unwrap();
            assert_eq!(header, table.columns().join(","), "header for {table}");
            assert_eq!(body.lines().count(), data.row_count(table) + 1);
        }
    }

    #[test]
    fn every_default_table_round_trips() {
        let data = default_dataset();

        let platforms: Vec<PlatformRecord> =
            read_table(export_csv(&data, TableKind::Platforms).unwrap().as_bytes()).unwrap();
        let titles: Vec<TitleRecord> =
            read_table(export_csv(&data, TableKind::Titles).unwrap().as_bytes()).unwrap();
        let genres: Vec<GenreRecord> =
            read_table(export_csv(&data, TableKind::Genres).unwrap().as_bytes()).unwrap();
        let regions: Vec<RegionRecord> =
            read_table(export_csv(&data, TableKind::Regions).unwrap().as_bytes()).unwrap();

        assert_eq!(platforms, data.platforms);
        assert_eq!(titles, data.titles);
        assert_eq!(genres, data.genres);
        assert_eq!(regions, data.regions);
    }

    #[test]
    fn empty_table_exports_header_only() {
        let body = export_csv(&Dataset::default(), TableKind::Genres).unwrap();
        assert_eq!(body, "genre,market_share,growth_rate,avg_completion\n");
        let parsed: Vec<GenreRecord> = read_table(body.as_bytes()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn blank_sheet_rows_are_skipped() {
        let body = "genre,market_share,growth_rate,avg_completion\n\
                    Romance,35,25,78\n\
                    ,,,\n\
                    \u{20}, , ,\n\
                    Revenge,20,40,82\n";
        let parsed: Vec<GenreRecord> = read_table(body.as_bytes()).unwrap();
        let names: Vec<&str> = parsed.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(names, vec!["Romance", "Revenge"]);
    }

    #[test]
    fn partially_blank_row_is_still_an_error() {
        let body = "genre,market_share,growth_rate,avg_completion\nRomance,,25,78\n";
        assert!(read_table::<GenreRecord>(body.as_bytes()).is_err());
    }

    #[test]
    fn sheet_without_optional_platform_columns_parses() {
        let body = "platform,company,origin,score,installs,revenue_2024,revenue_q1_2025,rank_current,rank_last_week,us_share,content_count,monetization,threat_level\n\
                    ReelShort,Crazy Maple Studio,China,4.2,50000000,400,180,1,1,55,500,Coins + Subscription,Market Leader\n";
        let parsed: Vec<PlatformRecord> = read_table(body.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].launched, None);
        assert!(parsed[0].top_genres.is_empty());
        assert_eq!(parsed[0].revenue_q1_2025, 180.0);
    }

    #[test]
    fn zip_bundle_contains_four_csv_files() {
        let bytes = export_zip(&default_dataset(), date()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 4);
        let names: Vec<String> = (0..archive.len())
            .map(|idx| archive.by_index(idx).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"microdrama_titles_20250301.csv".to_string()));
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let data = default_dataset();
        let a = dataset_fingerprint(&data).unwrap();
        assert_eq!(a.len(), 64);
        assert_eq!(a, dataset_fingerprint(&default_dataset()).unwrap());

        let mut changed = data.clone();
        changed.genres[0].growth_rate = 26.0;
        assert_ne!(a, dataset_fingerprint(&changed).unwrap());
    }
}
