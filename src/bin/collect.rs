// src/bin/collect.rs
use color_eyre::eyre::Result;
use log::LevelFilter;
use shoe_deals::{collect, config::options::CollectOptions, progress::ConsoleProgress};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    shoe_deals::log::init(LevelFilter::Debug);

    let opts = CollectOptions::default();
    let mut progress = ConsoleProgress::default();

    let summary = collect::run(&opts, Some(&mut progress)).await?;

    log::info!(
        "Collect: {} pages, {} scraped, {} unique",
        summary.pages,
        summary.scraped,
        summary.unique
    );
    Ok(())
}
