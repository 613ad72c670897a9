// src/listing.rs
//
// The three shapes a listing takes on its way through the pipeline.
// Raw and Cleaned map 1:1 onto CSV columns (serde field order = column order).

use serde::{Deserialize, Deserializer, Serialize};

/// As scraped: every field is the text the page rendered, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price_now: Option<String>,
    #[serde(default)]
    pub price_orig: Option<String>,
    #[serde(default)]
    pub discount_pct: Option<String>,
    #[serde(default)]
    pub shipping: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
}

impl RawListing {
    /// Key used to collapse duplicates: exact (title, displayed price) text.
    pub fn dedup_key(&self) -> (Option<&str>, Option<&str>) {
        (self.title.as_deref(), self.price_now.as_deref())
    }
}

/// Raw columns plus typed values. `title` and `price` are always present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedListing {
    pub title: String,
    #[serde(default)]
    pub price_now: Option<String>,
    #[serde(default)]
    pub price_orig: Option<String>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub discount_pct: Option<i64>,
    #[serde(default)]
    pub shipping: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating_num: Option<f64>,
}

/// What the dashboard works with: cleaned row plus shipping fields, with
/// `brand` narrowed to the known-brand list.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentedListing {
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_pct: Option<i64>,
    pub brand: Option<String>,
    pub rating_num: Option<f64>,
    pub shipping: Option<String>,
    pub free_shipping: bool,
    pub shipping_cost: Option<f64>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
}

/// Accept "35" as well as "35.0" (spreadsheet round-trips turn ints into floats).
fn de_opt_int<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(d)? else {
        return Ok(None);
    };
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    if let Ok(v) = t.parse::<i64>() {
        return Ok(Some(v));
    }
    t.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| Some(v as i64))
        .ok_or_else(|| serde::de::Error::custom(format!("not an integer: {t:?}")))
}
