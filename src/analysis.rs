// src/analysis.rs
//
// Aggregates behind the KPI row, the three charts and the deals list.
// Everything takes the rows of the current filtered view.

use std::collections::HashMap;

use crate::listing::PresentedListing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kpis {
    pub total: usize,
    pub median_price: Option<f64>,
    /// Share of rows with free shipping, 0..=100.
    pub free_shipping_pct: Option<f64>,
}

pub fn kpis<'a>(rows: impl IntoIterator<Item = &'a PresentedListing>) -> Kpis {
    let mut prices = Vec::new();
    let mut free = 0usize;
    for r in rows {
        prices.push(r.price);
        if r.free_shipping { free += 1; }
    }
    let total = prices.len();
    Kpis {
        total,
        median_price: median(&mut prices),
        free_shipping_pct: (total > 0).then(|| free as f64 * 100.0 / total as f64),
    }
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/* ---------------- Price vs discount ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint<'a> {
    pub discount: f64,
    pub price: f64,
    pub brand: Option<&'a str>,
    pub title: &'a str,
}

/// One point per row that carries a discount.
pub fn scatter_points<'a>(rows: impl IntoIterator<Item = &'a PresentedListing>) -> Vec<ScatterPoint<'a>> {
    rows.into_iter()
        .filter_map(|r| {
            r.discount_pct.map(|d| ScatterPoint {
                discount: d as f64,
                price: r.price,
                brand: r.brand.as_deref(),
                title: &r.title,
            })
        })
        .collect()
}

/* ---------------- Mean discount per brand ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct BrandDiscount {
    pub brand: String,
    pub listings: usize,
    pub mean_discount: f64,
}

/// Mean discount of the `top_n` most-listed brands, highest mean first.
/// Brands with no discounted rows are left out.
pub fn brand_discounts<'a>(
    rows: impl IntoIterator<Item = &'a PresentedListing>,
    top_n: usize,
) -> Vec<BrandDiscount> {
    // brand → (listings, discount sum, discounted listings)
    let mut acc: HashMap<&str, (usize, i64, usize)> = HashMap::new();
    for r in rows {
        let Some(brand) = r.brand.as_deref() else { continue };
        let e = acc.entry(brand).or_default();
        e.0 += 1;
        if let Some(d) = r.discount_pct {
            e.1 += d;
            e.2 += 1;
        }
    }

    let mut by_count: Vec<(&str, (usize, i64, usize))> = acc.into_iter().collect();
    by_count.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));
    by_count.truncate(top_n);

    let mut out: Vec<BrandDiscount> = by_count
        .into_iter()
        .filter(|(_, (_, _, n))| *n > 0)
        .map(|(brand, (listings, sum, n))| BrandDiscount {
            brand: s!(brand),
            listings,
            mean_discount: sum as f64 / n as f64,
        })
        .collect();
    out.sort_by(|a, b| {
        b.mean_discount
            .total_cmp(&a.mean_discount)
            .then_with(|| a.brand.cmp(&b.brand))
    });
    out
}

/* ---------------- Shipping cost histogram ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over the observed shipping costs. Rows without a
/// cost are ignored; a single distinct value gives a single bin.
pub fn shipping_histogram<'a>(
    rows: impl IntoIterator<Item = &'a PresentedListing>,
    bins: usize,
) -> Vec<Bin> {
    let costs: Vec<f64> = rows.into_iter().filter_map(|r| r.shipping_cost).collect();
    if costs.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi <= lo {
        return vec![Bin { lo, hi, count: costs.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lo: lo + width * i as f64,
            hi: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for c in costs {
        let ix = (((c - lo) / width) as usize).min(bins - 1);
        out[ix].count += 1;
    }
    out
}

/* ---------------- Top deals ---------------- */

/// Rows discounted by at least `threshold`, biggest discount first, then
/// cheapest; at most `limit` of them.
pub fn top_deals<'a>(
    rows: impl IntoIterator<Item = &'a PresentedListing>,
    threshold: i64,
    limit: usize,
) -> Vec<&'a PresentedListing> {
    let mut deals: Vec<&PresentedListing> = rows
        .into_iter()
        .filter(|r| r.discount_pct.is_some_and(|d| d >= threshold))
        .collect();
    deals.sort_by(|a, b| {
        b.discount_pct
            .cmp(&a.discount_pct)
            .then_with(|| a.price.total_cmp(&b.price))
    });
    deals.truncate(limit);
    deals
}
