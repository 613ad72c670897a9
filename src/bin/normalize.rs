// src/bin/normalize.rs
use color_eyre::eyre::Result;
use log::LevelFilter;
use shoe_deals::{config::options::NormalizeOptions, normalize};

fn main() -> Result<()> {
    color_eyre::install()?;
    shoe_deals::log::init(LevelFilter::Info);

    let opts = NormalizeOptions::default();
    let summary = normalize::run(&opts)?;

    println!(
        "✅ Cleaned data saved to {} — {} rows",
        opts.clean_path.display(),
        summary.kept
    );
    Ok(())
}
