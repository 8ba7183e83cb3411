use catalog::{
    config::{FACULTIES_ARCHIVE_FILE, init_logging},
    store::write_json,
};
use datafetcher::{archive::extract_archive_rows, config::FetcherConfig, util::PageClient};
use log::info;

/// Collects the subject code → owning faculty table from the archived calendar
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();

    let client = PageClient::new()?;
    let html = client.fetch_html(&config.archive_url).await?;
    info!("Archive page loaded");

    let rows = extract_archive_rows(&html);
    info!("Found {} subjects", rows.len());

    let output = config.file(FACULTIES_ARCHIVE_FILE);
    write_json(&output, &rows)?;
    info!("Rows saved to {}", output.display());

    Ok(())
}
