// src/config/consts.rs

// Source site
pub const BASE_URL: &str = "https://www.ebay.com/sch/i.html?_nkw=shoes&_pgn={}";
pub const PLACEHOLDER_MARKER: &str = "Shop on eBay";

// Browser
pub const WEBDRIVER_URL: &str = "http://localhost:9515";
pub const HEADLESS: bool = true;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124 Safari/537.36";

// Collector pacing
pub const NUM_PAGES: u32 = 20;
pub const SCROLL_LOOPS: u32 = 15;
pub const STABLE_ROUNDS: u32 = 1;
pub const SCROLL_WAIT_SECS: f64 = 2.0;
pub const PAGE_SETTLE_SECS: f64 = 4.0;
pub const PAGE_PAUSE_SECS: f64 = 1.0;

// Listing card selectors
pub const SEL_CARD: &str = "li.s-item";
pub const SEL_TITLE: &str = ".s-item__title";
pub const SEL_PRICE: &str = ".s-item__price";
pub const SEL_PRICE_ORIG: &str = ".s-item__original-price";
pub const SEL_DISCOUNT: &str = ".s-item__discount";
pub const SEL_SHIPPING: &str = ".s-item__shipping, .s-item__logisticsCost";
pub const SEL_RATING: &str = ".b-starrating .clipped";
pub const SEL_IMAGE: &str = ".s-item__image-wrapper img";
pub const SEL_LINK: &str = "a.s-item__link";

// Files
pub const DATA_DIR: &str = "data";
pub const RAW_FILE: &str = "ebay_raw.csv";
pub const CLEAN_FILE: &str = "ebay_cleaned.csv";
pub const LOG_FILE: &str = "debug.log";

// Dashboard
pub const KNOWN_BRANDS: &[&str] = &[
    "nike", "adidas", "puma", "reebok", "asics", "converse", "skechers", "vans", "new", "balance",
];
pub const ALL_BRANDS: &str = "All";
pub const DEAL_THRESHOLD: i64 = 40;
pub const DEAL_LIMIT: usize = 12;
pub const TOP_BRANDS: usize = 10;
pub const HISTOGRAM_BINS: usize = 10;
pub const THUMBNAIL_TIMEOUT_SECS: u64 = 5;
pub const THUMBNAIL_PX: f32 = 100.0;
