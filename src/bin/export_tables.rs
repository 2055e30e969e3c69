use chrono::{Local, NaiveDate};
use microdrama_intel::{
    dashboard_config_from_env, init_logging, log_app_start, log_source_selected, write_exports,
    DatasetProvider, DatasetSource,
};
use tracing::info;

const COMPONENT: &str = "export_tables";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = dashboard_config_from_env()?;
    init_logging(&config.logging)?;
    log_app_start(COMPONENT, &config);
    let export_date = parse_export_date()?;

    let provider = DatasetProvider::new(config.source.clone())?;
    log_source_selected(COMPONENT, provider.config());

    let loaded = provider.load();
    let written = write_exports(&loaded.dataset, &config.export_dir, export_date)?;
    info!(
        component = COMPONENT,
        event = "export.complete",
        origin = loaded.origin.as_str(),
        files = written.len(),
        export_dir = %config.export_dir.display()
    );

    println!(
        "Exported {} tables | origin={} dir={} date={}",
        written.len(),
        loaded.origin.as_str(),
        config.export_dir.display(),
        export_date
    );
    if let Some(warning) = &loaded.warning {
        println!("warning: {warning}");
    }
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}

/// `MDI_EXPORT_DATE=YYYY-MM-DD` pins the date stamped into file names.
fn parse_export_date() -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match std::env::var("MDI_EXPORT_DATE") {
        Ok(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|err| format!("MDI_EXPORT_DATE must be YYYY-MM-DD: {err}").into()),
        _ => Ok(Local::now().date_naive()),
    }
}
