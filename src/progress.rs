// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for the collector's page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been scraped.
    fn page_done(&mut self, _page: u32, _found: usize, _total_so_far: usize) {}

    /// Called once the output file is written.
    fn finish(&mut self, _unique: usize, _with_links: usize, _out_path: &Path) {}
}

/// Prints one line per page and a closing summary to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Collecting {total} page(s)…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, page: u32, found: usize, total_so_far: usize) {
        println!("✅ Page {page}/{}: {found} items (total {total_so_far})", self.total);
    }
    fn finish(&mut self, unique: usize, with_links: usize, out_path: &Path) {
        println!("\n🎉 Done! Saved {unique} unique rows → {}", out_path.display());
        println!("{with_links} links captured");
    }
}
