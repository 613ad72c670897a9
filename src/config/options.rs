// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CollectOptions {
    pub pages: u32,
    /// Search URL with `{}` where the page number goes.
    pub url_template: String,
    pub webdriver_url: String,
    pub headless: bool,
    pub scroll: ScrollOptions,
    pub settle_wait: Duration,
    pub page_pause: Duration,
    pub out_path: PathBuf,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            pages: NUM_PAGES,
            url_template: s!(BASE_URL),
            webdriver_url: s!(WEBDRIVER_URL),
            headless: HEADLESS,
            scroll: ScrollOptions::default(),
            settle_wait: Duration::from_secs_f64(PAGE_SETTLE_SECS),
            page_pause: Duration::from_secs_f64(PAGE_PAUSE_SECS),
            out_path: raw_path(),
        }
    }
}

impl CollectOptions {
    pub fn page_url(&self, page: u32) -> String {
        self.url_template.replace("{}", &page.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollOptions {
    /// Hard cap on scroll/wait cycles per page.
    pub max_loops: u32,
    /// Consecutive unchanged counts needed to call the page converged.
    pub stable_rounds: u32,
    pub wait: Duration,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            max_loops: SCROLL_LOOPS,
            stable_rounds: STABLE_ROUNDS,
            wait: Duration::from_secs_f64(SCROLL_WAIT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub raw_path: PathBuf,
    pub clean_path: PathBuf,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { raw_path: raw_path(), clean_path: clean_path() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub clean_path: PathBuf,
    pub thumbnail_timeout: Duration,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            clean_path: clean_path(),
            thumbnail_timeout: Duration::from_secs(THUMBNAIL_TIMEOUT_SECS),
        }
    }
}

pub fn raw_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(RAW_FILE)
}

pub fn clean_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(CLEAN_FILE)
}
