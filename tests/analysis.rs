// tests/analysis.rs
use std::fs;
use std::path::PathBuf;

use shoe_deals::analysis::{brand_discounts, kpis, scatter_points, shipping_histogram, top_deals};
use shoe_deals::config::consts::{DEAL_LIMIT, DEAL_THRESHOLD, TOP_BRANDS};
use shoe_deals::data::Dataset;
use shoe_deals::listing::{CleanedListing, PresentedListing};
use shoe_deals::Error;

fn row(brand: Option<&str>, price: f64, discount: Option<i64>, shipping_cost: Option<f64>) -> PresentedListing {
    PresentedListing {
        title: format!("{} shoe {}", brand.unwrap_or("generic"), price),
        price,
        original_price: None,
        discount_pct: discount,
        brand: brand.map(String::from),
        rating_num: None,
        shipping: None,
        free_shipping: shipping_cost == Some(0.0),
        shipping_cost,
        image_url: None,
        product_url: None,
    }
}

#[test]
fn top_deals_threshold_order_and_cap() {
    let mut rows = vec![
        row(Some("nike"), 80.0, Some(39), None),
        row(Some("nike"), 60.0, Some(40), None),
        row(Some("puma"), 50.0, Some(55), None),
        row(Some("vans"), 45.0, Some(55), None),
        row(None, 10.0, None, None),
    ];
    let deals = top_deals(&rows, DEAL_THRESHOLD, DEAL_LIMIT);
    let got: Vec<(Option<i64>, f64)> = deals.iter().map(|r| (r.discount_pct, r.price)).collect();
    assert_eq!(got, vec![(Some(55), 45.0), (Some(55), 50.0), (Some(40), 60.0)]);

    for i in 0..20 {
        rows.push(row(Some("asics"), 100.0 + i as f64, Some(70), None));
    }
    let deals = top_deals(&rows, DEAL_THRESHOLD, DEAL_LIMIT);
    assert_eq!(deals.len(), 12);
    assert!(deals.iter().all(|r| r.discount_pct == Some(70)));
    assert_eq!(deals[0].price, 100.0);
    assert_eq!(deals[11].price, 111.0);
}

#[test]
fn top_deals_empty_when_nothing_qualifies() {
    let rows = vec![row(Some("nike"), 80.0, Some(10), None)];
    assert!(top_deals(&rows, DEAL_THRESHOLD, DEAL_LIMIT).is_empty());
}

#[test]
fn brand_discount_uses_top_brands_by_count() {
    let mut rows = Vec::new();
    // nike: 3 listings, mean 20; adidas: 2 listings, mean 50; puma: 1 listing
    rows.push(row(Some("nike"), 10.0, Some(10), None));
    rows.push(row(Some("nike"), 10.0, Some(30), None));
    rows.push(row(Some("nike"), 10.0, None, None));
    rows.push(row(Some("adidas"), 10.0, Some(40), None));
    rows.push(row(Some("adidas"), 10.0, Some(60), None));
    rows.push(row(Some("puma"), 10.0, Some(90), None));
    rows.push(row(None, 10.0, Some(99), None));

    let bars = brand_discounts(&rows, 2);
    let got: Vec<(&str, f64)> = bars.iter().map(|b| (b.brand.as_str(), b.mean_discount)).collect();
    assert_eq!(got, vec![("adidas", 50.0), ("nike", 20.0)]);
    assert_eq!(bars[1].listings, 3);

    let all = brand_discounts(&rows, TOP_BRANDS);
    assert_eq!(all[0].brand, "puma");
    assert_eq!(all.len(), 3);
}

#[test]
fn brand_without_discounts_has_no_bar() {
    let rows = vec![row(Some("vans"), 10.0, None, None), row(Some("nike"), 10.0, Some(5), None)];
    let bars = brand_discounts(&rows, TOP_BRANDS);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].brand, "nike");
}

#[test]
fn histogram_covers_every_cost() {
    let rows: Vec<_> = [0.0, 0.0, 5.0, 9.99, 10.0, 20.0]
        .into_iter()
        .map(|c| row(None, 1.0, None, Some(c)))
        .chain(std::iter::once(row(None, 1.0, None, None)))
        .collect();

    let bins = shipping_histogram(&rows, 4);
    assert_eq!(bins.len(), 4);
    assert_eq!(bins[0].lo, 0.0);
    assert_eq!(bins[3].hi, 20.0);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 6);
    // [0,5) [5,10) [10,15) [15,20]
    assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![2, 2, 1, 1]);
}

#[test]
fn histogram_single_value_is_one_bin() {
    let rows = vec![row(None, 1.0, None, Some(0.0)), row(None, 2.0, None, Some(0.0))];
    let bins = shipping_histogram(&rows, 10);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 2);
    assert!(shipping_histogram(&[], 10).is_empty());
}

#[test]
fn kpis_and_scatter_follow_the_view() {
    let rows = vec![
        row(Some("nike"), 30.0, Some(10), Some(0.0)),
        row(Some("puma"), 10.0, None, Some(4.0)),
        row(None, 20.0, Some(50), None),
    ];
    let k = kpis(&rows);
    assert_eq!(k.total, 3);
    assert_eq!(k.median_price, Some(20.0));
    let pct = k.free_shipping_pct.unwrap();
    assert!((pct - 100.0 / 3.0).abs() < 1e-9);

    let empty = kpis(&[]);
    assert_eq!(empty.total, 0);
    assert_eq!(empty.median_price, None);
    assert_eq!(empty.free_shipping_pct, None);

    let pts = scatter_points(&rows);
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[1].brand, None);
    assert_eq!(pts[1].discount, 50.0);
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shoe_deals_analysis_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn dataset_load_rejects_missing_and_empty_files() {
    let dir = tmp_dir("load");

    let missing = dir.join("missing.csv");
    assert!(matches!(Dataset::load(&missing), Err(Error::MissingInput(_))));

    let empty = dir.join("empty.csv");
    shoe_deals::csv::write_path::<CleanedListing>(&empty, &[]).unwrap();
    assert!(matches!(Dataset::load(&empty), Err(Error::EmptyDataset(_))));

    let ok = dir.join("ok.csv");
    let rows = vec![CleanedListing {
        title: "Nike Dunk".into(),
        price: 99.0,
        brand: Some("nike".into()),
        shipping: Some("Free shipping".into()),
        discount_pct: Some(45),
        ..CleanedListing::default()
    }];
    shoe_deals::csv::write_path(&ok, &rows).unwrap();
    let ds = Dataset::load(&ok).unwrap();
    assert_eq!(ds.len(), 1);
    assert!(ds.rows()[0].free_shipping);
    assert_eq!(ds.rows()[0].discount_pct, Some(45));
    assert_eq!(ds.price_bounds(), (99.0, 99.0));
}

#[test]
fn dataset_load_drops_untitled_rows() {
    let dir = tmp_dir("untitled");

    let mixed = dir.join("mixed.csv");
    let rows = vec![
        CleanedListing { title: "   ".into(), price: 5.0, ..CleanedListing::default() },
        CleanedListing { title: "Adidas Samba".into(), price: 100.0, ..CleanedListing::default() },
        CleanedListing { title: String::new(), price: 400.0, ..CleanedListing::default() },
    ];
    shoe_deals::csv::write_path(&mixed, &rows).unwrap();
    let ds = Dataset::load(&mixed).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.rows()[0].title, "Adidas Samba");
    // bounds ignore the dropped rows
    assert_eq!(ds.price_bounds(), (100.0, 100.0));

    let only_blank = dir.join("only_blank.csv");
    let rows = vec![CleanedListing { title: " ".into(), price: 5.0, ..CleanedListing::default() }];
    shoe_deals::csv::write_path(&only_blank, &rows).unwrap();
    assert!(matches!(Dataset::load(&only_blank), Err(Error::EmptyDataset(_))));
}
