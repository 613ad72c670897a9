// src/collect/collector.rs
use std::collections::HashSet;
use std::future::Future;
use std::path::PathBuf;

use tokio::time::sleep;

use super::browser::{Browser, ChromeSession};
use super::extract::scrape_page;
use super::scroll::{scroll_until_stable, ScrollState};
use crate::config::{consts::SEL_CARD, options::CollectOptions};
use crate::error::{Error, Result};
use crate::listing::RawListing;
use crate::progress::Progress;

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectSummary {
    pub pages: u32,
    pub scraped: usize,
    pub unique: usize,
    pub with_links: usize,
    pub out_path: PathBuf,
}

/// Top-level collector: launch Chrome, walk the pages, always close the
/// session, then dedup and write the raw file.
///
/// Only a launch failure, a page-level failure (navigation, scrolling,
/// card lookup) or Ctrl-C aborts the run; nothing is written in that case.
pub async fn run(
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary> {
    let session = ChromeSession::launch(opts).await?;
    run_session(session, opts, progress, ctrl_c()).await
}

/// Resolves on Ctrl-C. If the handler can't be installed, never resolves.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Collect: no Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
}

/// Drive an already-open browser until the pages are done or `interrupt`
/// resolves. The browser is quit on every path.
pub async fn run_session<B: Browser>(
    browser: B,
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
    interrupt: impl Future<Output = ()>,
) -> Result<CollectSummary> {
    let scraped = tokio::select! {
        res = collect_pages(&browser, opts, progress.as_deref_mut()) => res,
        _ = interrupt => {
            log::warn!("Collect: interrupted, closing the browser");
            Err(Error::Interrupted)
        }
    };

    if let Err(e) = browser.quit().await {
        log::warn!("Browser: quit failed: {e}");
    }

    finish_run(scraped?, opts, progress)
}

/// Visit pages 1..=N in order and gather every extracted listing.
pub async fn collect_pages<B: Browser>(
    browser: &B,
    opts: &CollectOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<RawListing>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages as usize);
    }

    let mut all: Vec<RawListing> = Vec::new();

    for page in 1..=opts.pages {
        let url = opts.page_url(page);
        log::debug!("Page {page}: {url}");

        browser.goto(&url).await?;
        sleep(opts.settle_wait).await;

        let scroll = scroll_until_stable(browser, SEL_CARD, &opts.scroll).await?;
        if let ScrollState::BudgetExhausted { count } = scroll {
            let msg = format!("Page {page}: scroll budget used up at {count} cards");
            log::debug!("{msg}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&msg);
            }
        }

        let items = scrape_page(browser).await?;
        let found = items.len();
        all.extend(items);

        log::info!("Page {page}: {found} items (total {})", all.len());
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, found, all.len());
        }

        sleep(opts.page_pause).await;
    }

    Ok(all)
}

/// Drop repeats of the exact (title, displayed price) pair, keeping the
/// first occurrence and the original order.
pub fn dedup(listings: Vec<RawListing>) -> Vec<RawListing> {
    let mut seen: HashSet<(Option<String>, Option<String>)> = HashSet::new();
    listings
        .into_iter()
        .filter(|l| {
            let (t, p) = l.dedup_key();
            seen.insert((t.map(String::from), p.map(String::from)))
        })
        .collect()
}

/// Dedup, write the raw file and report.
pub fn finish_run(
    scraped: Vec<RawListing>,
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary> {
    let scraped_count = scraped.len();
    let unique = dedup(scraped);
    crate::csv::write_path(&opts.out_path, &unique)?;

    let with_links = unique.iter().filter(|l| l.product_url.is_some()).count();
    log::info!(
        "Collect: wrote {} unique rows of {} scraped → {}",
        unique.len(),
        scraped_count,
        opts.out_path.display()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish(unique.len(), with_links, &opts.out_path);
    }

    Ok(CollectSummary {
        pages: opts.pages,
        scraped: scraped_count,
        unique: unique.len(),
        with_links,
        out_path: opts.out_path.clone(),
    })
}
