use catalog::{
    config::{SUBJECT_LINKS_FILE, init_logging},
    store::write_json,
};
use datafetcher::{config::FetcherConfig, pages::extract_links, util::PageClient};
use log::{debug, info};
use reqwest::Url;
use scraper::Html;

/// Collects the link to every subject listed on the catalog index
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();

    let client = PageClient::new()?;
    let html = client.fetch_html(&config.catalog_url).await?;
    info!("Calendar loaded");

    let base = Url::parse(&config.catalog_url)?;
    let links = extract_links(&Html::parse_document(&html), &base);

    info!("Found {} links", links.len());
    for link in &links {
        debug!("  {} -> {}", link.text, link.href);
    }

    let output = config.file(SUBJECT_LINKS_FILE);
    write_json(&output, &links)?;
    info!("Links saved to {}", output.display());

    Ok(())
}
