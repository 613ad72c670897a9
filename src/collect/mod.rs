// src/collect/mod.rs
//
// Collector: drive a browser over the search result pages and write the
// raw listing file.

mod browser;
mod collector;
mod extract;
mod scroll;

pub use browser::{Browser, Card, ChromeSession};
pub use collector::{collect_pages, dedup, finish_run, run, run_session, CollectSummary};
pub use extract::{extract_card, scrape_page};
pub use scroll::{scroll_until_stable, transition, ScrollState};
