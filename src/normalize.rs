// src/normalize.rs
//
// Raw → Cleaned. Pure row transform plus a file driver; row order is kept.

use crate::config::options::NormalizeOptions;
use crate::core::numeric::{first_decimal, first_integer, first_word_lower};
use crate::error::Result;
use crate::listing::{CleanedListing, RawListing};

/// Counts reported by a normalizer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub read: usize,
    pub kept: usize,
}

/// Derive typed fields for one row. `None` when the row has no title or
/// no parseable current price; every other field may be absent.
pub fn clean_row(raw: &RawListing) -> Option<CleanedListing> {
    let title = raw.title.as_deref().filter(|t| !t.trim().is_empty())?;
    let price = raw.price_now.as_deref().and_then(first_decimal)?;

    Some(CleanedListing {
        title: s!(title),
        price_now: raw.price_now.clone(),
        price_orig: raw.price_orig.clone(),
        discount_pct: raw.discount_pct.as_deref().and_then(first_integer),
        shipping: raw.shipping.clone(),
        rating: raw.rating.clone(),
        image_url: raw.image_url.clone(),
        product_url: raw.product_url.clone(),
        price,
        original_price: raw.price_orig.as_deref().and_then(first_decimal),
        brand: first_word_lower(title),
        rating_num: raw.rating.as_deref().and_then(first_decimal),
    })
}

/// Clean every admissible row, preserving input order.
pub fn clean_all(rows: &[RawListing]) -> Vec<CleanedListing> {
    rows.iter().filter_map(clean_row).collect()
}

/// Read the raw file, write the cleaned file. A missing raw file is fatal.
pub fn run(opts: &NormalizeOptions) -> Result<NormalizeSummary> {
    let raw: Vec<RawListing> = crate::csv::read_path(&opts.raw_path)?;
    let cleaned = clean_all(&raw);
    crate::csv::write_path(&opts.clean_path, &cleaned)?;

    log::info!(
        "Normalize: {} of {} rows kept → {}",
        cleaned.len(),
        raw.len(),
        opts.clean_path.display()
    );
    Ok(NormalizeSummary { read: raw.len(), kept: cleaned.len() })
}
