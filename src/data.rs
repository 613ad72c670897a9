// src/data.rs
//
// Dashboard data: the presented dataset (loaded once, read-only) and the
// filtered view over it.
//
// - Dataset: cleaned rows plus the two shipping fields, brands narrowed to
//            the known-brand list. Never mutated after load.
// - FilteredView: row indexes into the Dataset that pass the current
//                 FilterState. Rebuilt on every filter change.

use std::borrow::Cow;
use std::path::Path;

use regex::Regex;

use crate::config::consts::{ALL_BRANDS, KNOWN_BRANDS};
use crate::config::state::FilterState;
use crate::core::numeric::first_decimal;
use crate::error::{Error, Result};
use crate::listing::{CleanedListing, PresentedListing};

/// `(free_shipping, shipping_cost)` from the shipping text.
/// Free → `(true, Some(0.0))`; otherwise the first number, if any.
pub fn shipping_fields(shipping: Option<&str>) -> (bool, Option<f64>) {
    match shipping {
        Some(s) if s.to_lowercase().contains("free") => (true, Some(0.0)),
        Some(s) => (false, first_decimal(s)),
        None => (false, None),
    }
}

/// Keep a brand label only when it is on the known-brand list.
pub fn known_brand(brand: Option<&str>) -> Option<String> {
    brand.filter(|b| KNOWN_BRANDS.contains(b)).map(String::from)
}

pub fn present(c: CleanedListing) -> PresentedListing {
    let (free_shipping, shipping_cost) = shipping_fields(c.shipping.as_deref());
    PresentedListing {
        brand: known_brand(c.brand.as_deref()),
        title: c.title,
        price: c.price,
        original_price: c.original_price,
        discount_pct: c.discount_pct,
        rating_num: c.rating_num,
        shipping: c.shipping,
        free_shipping,
        shipping_cost,
        image_url: c.image_url,
        product_url: c.product_url,
    }
}

/// The presented table. Loaded once at startup.
#[derive(Clone, Debug)]
pub struct Dataset {
    rows: Vec<PresentedListing>,
    price_bounds: (f64, f64),
}

impl Dataset {
    pub fn from_cleaned(rows: Vec<CleanedListing>) -> Self {
        let rows: Vec<PresentedListing> = rows.into_iter().map(present).collect();
        let price_bounds = rows.iter().fold(None, |acc: Option<(f64, f64)>, r| match acc {
            None => Some((r.price, r.price)),
            Some((lo, hi)) => Some((lo.min(r.price), hi.max(r.price))),
        });
        Self { rows, price_bounds: price_bounds.unwrap_or((0.0, 0.0)) }
    }

    /// Read the cleaned file. Missing or empty input is fatal.
    /// Rows with a blank title are dropped before anything else sees them.
    pub fn load(path: &Path) -> Result<Self> {
        let mut cleaned: Vec<CleanedListing> = crate::csv::read_path(path)?;
        let before = cleaned.len();
        cleaned.retain(|c| !c.title.trim().is_empty());
        let dropped = before - cleaned.len();
        if dropped > 0 {
            log::warn!("Data: dropped {dropped} untitled row(s) from {}", path.display());
        }
        if cleaned.is_empty() {
            return Err(Error::EmptyDataset(path.to_path_buf()));
        }
        let ds = Self::from_cleaned(cleaned);
        log::info!(
            "Data: loaded {} listings from {} (price {:.2}..{:.2})",
            ds.len(),
            path.display(),
            ds.price_bounds.0,
            ds.price_bounds.1
        );
        Ok(ds)
    }

    #[inline] pub fn rows(&self) -> &[PresentedListing] { &self.rows }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Observed (min, max) price; the price filter's default.
    #[inline] pub fn price_bounds(&self) -> (f64, f64) { self.price_bounds }

    /// Brand choices: the "All" sentinel, then observed known brands, sorted.
    pub fn brand_options(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.rows.iter().filter_map(|r| r.brand.clone()).collect();
        brands.sort_unstable();
        brands.dedup();
        brands.insert(0, s!(ALL_BRANDS));
        brands
    }
}

/// Whole-word, case-insensitive matcher for a keyword. Blank → `None`.
pub fn keyword_pattern(keyword: &str) -> Option<Regex> {
    let kw = keyword.trim();
    if kw.is_empty() {
        return None;
    }
    match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Filter: keyword {kw:?} ignored ({e})");
            None
        }
    }
}

/// All four filter dimensions, ANDed.
pub fn matches(row: &PresentedListing, filters: &FilterState, keyword: Option<&Regex>) -> bool {
    if !filters.all_brands() {
        let hit = row
            .brand
            .as_deref()
            .is_some_and(|b| filters.brands.iter().any(|s| s == b));
        if !hit {
            return false;
        }
    }
    let (lo, hi) = filters.price_range;
    if row.price < lo || row.price > hi {
        return false;
    }
    if filters.free_only && !row.free_shipping {
        return false;
    }
    if let Some(re) = keyword {
        if !re.is_match(&row.title) {
            return false;
        }
    }
    true
}

/// Zero-copy filtered view: positions of kept rows in the Dataset.
/// Owns its indices when freshly filtered, borrows them when rebuilt from
/// a cached list.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    row_ix: Cow<'a, [usize]>,
    raw: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    pub fn new(raw: &'a Dataset, filters: &FilterState) -> Self {
        let keyword = keyword_pattern(&filters.keyword);
        let row_ix: Vec<usize> = raw
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| matches(r, filters, keyword.as_ref()))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix: Cow::Owned(row_ix), raw }
    }

    /// View over indices kept from an earlier filter pass. No copy.
    pub fn from_indices(raw: &'a Dataset, row_ix: &'a [usize]) -> Self {
        Self { row_ix: Cow::Borrowed(row_ix), raw }
    }

    pub fn indices(&self) -> &[usize] { &self.row_ix }

    /// Hand the indices back for caching between frames.
    pub fn into_indices(self) -> Vec<usize> { self.row_ix.into_owned() }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index.
    pub fn row(&self, i: usize) -> Option<&'a PresentedListing> {
        let raw = self.raw;
        self.row_ix.get(i).and_then(|&ix| raw.rows.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PresentedListing> + '_ {
        let raw = self.raw;
        self.row_ix.iter().filter_map(move |&ix| raw.rows.get(ix))
    }
}
