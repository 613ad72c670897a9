// tests/filters.rs
//
// Presenter filtering over a small in-memory dataset.

use shoe_deals::config::consts::ALL_BRANDS;
use shoe_deals::config::state::{AppState, FilterState};
use shoe_deals::data::{shipping_fields, Dataset, FilteredView};
use shoe_deals::listing::CleanedListing;

fn cleaned(title: &str, price: f64, shipping: Option<&str>) -> CleanedListing {
    CleanedListing {
        title: title.into(),
        price,
        brand: title.split_whitespace().next().map(|w| w.to_lowercase()),
        shipping: shipping.map(String::from),
        ..CleanedListing::default()
    }
}

fn sample() -> Dataset {
    Dataset::from_cleaned(vec![
        cleaned("Nike Air Max 90", 89.99, Some("Free shipping")),
        cleaned("Adidas Superstar", 70.0, Some("+$9.99 shipping")),
        cleaned("Nike Pegasus 40", 120.0, None),
        cleaned("Timberland Boot", 150.0, Some("Free shipping")),
        cleaned("Puma Super Liga", 55.0, Some("$5.99 shipping")),
    ])
}

fn titles(view: &FilteredView<'_>) -> Vec<String> {
    view.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn defaults_keep_everything() {
    let ds = sample();
    let filters = FilterState::defaults(ds.price_bounds());
    let view = FilteredView::new(&ds, &filters);
    assert_eq!(view.len(), ds.len());
    assert_eq!(ds.price_bounds(), (55.0, 150.0));
}

#[test]
fn brand_selection_is_exact_match() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.brands = vec!["nike".into()];

    let view = FilteredView::new(&ds, &filters);
    assert_eq!(titles(&view), ["Nike Air Max 90", "Nike Pegasus 40"]);
}

#[test]
fn unknown_brands_only_pass_under_all() {
    let ds = sample();
    // not on the known-brand list, so no brand at presentation time
    assert_eq!(ds.rows()[3].brand, None);
    assert_eq!(ds.brand_options(), [ALL_BRANDS, "adidas", "nike", "puma"]);

    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.brands = vec!["timberland".into()];
    assert!(FilteredView::new(&ds, &filters).is_empty());

    filters.brands.push(ALL_BRANDS.into());
    assert_eq!(FilteredView::new(&ds, &filters).len(), 5);
}

#[test]
fn empty_brand_selection_keeps_nothing() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.toggle_brand(ALL_BRANDS);
    assert!(filters.brands.is_empty());
    assert!(FilteredView::new(&ds, &filters).is_empty());
}

#[test]
fn keyword_is_whole_word_and_case_insensitive() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());

    filters.keyword = "super".into();
    assert_eq!(titles(&FilteredView::new(&ds, &filters)), ["Puma Super Liga"]);

    filters.keyword = "SUPERSTAR".into();
    assert_eq!(titles(&FilteredView::new(&ds, &filters)), ["Adidas Superstar"]);

    filters.keyword = "   ".into();
    assert_eq!(FilteredView::new(&ds, &filters).len(), 5);
}

#[test]
fn keyword_with_regex_metacharacters_is_literal() {
    let ds = Dataset::from_cleaned(vec![
        cleaned("Nike Air Max 90 (2024)", 100.0, None),
        cleaned("Nike Air Max 2024", 100.0, None),
    ]);
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.keyword = "max 90 (2024".into();
    assert_eq!(titles(&FilteredView::new(&ds, &filters)), ["Nike Air Max 90 (2024)"]);

    filters.keyword = "(2024)".into();
    assert!(FilteredView::new(&ds, &filters).is_empty());
}

#[test]
fn price_range_is_inclusive() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.price_range = (70.0, 120.0);
    assert_eq!(
        titles(&FilteredView::new(&ds, &filters)),
        ["Nike Air Max 90", "Adidas Superstar", "Nike Pegasus 40"]
    );
}

#[test]
fn free_only_uses_derived_flag() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.free_only = true;
    assert_eq!(
        titles(&FilteredView::new(&ds, &filters)),
        ["Nike Air Max 90", "Timberland Boot"]
    );
}

#[test]
fn filters_combine_with_and() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.brands = vec!["nike".into()];
    filters.free_only = true;
    filters.keyword = "air".into();
    assert_eq!(titles(&FilteredView::new(&ds, &filters)), ["Nike Air Max 90"]);

    filters.price_range = (90.0, 150.0);
    assert!(FilteredView::new(&ds, &filters).is_empty());
}

#[test]
fn reset_returns_defaults_for_the_dataset() {
    let ds = sample();
    let mut state = AppState::new(ds.price_bounds());
    state.filters.brands = vec!["puma".into()];
    state.filters.free_only = true;
    state.filters.keyword = "liga".into();
    state.filters.price_range = (60.0, 61.0);

    state.filters = FilterState::defaults(ds.price_bounds());
    assert_eq!(state.filters, AppState::new(ds.price_bounds()).filters);
    assert!(state.filters.all_brands());
}

#[test]
fn toggling_a_brand_twice_restores_selection() {
    let mut filters = FilterState::defaults((0.0, 1.0));
    filters.toggle_brand("vans");
    assert_eq!(filters.brands, [ALL_BRANDS, "vans"]);
    filters.toggle_brand("vans");
    assert_eq!(filters.brands, [ALL_BRANDS]);
}

#[test]
fn shipping_text_maps_to_flag_and_cost() {
    assert_eq!(shipping_fields(Some("Free shipping")), (true, Some(0.0)));
    assert_eq!(shipping_fields(Some("FREE 2-day delivery")), (true, Some(0.0)));
    assert_eq!(shipping_fields(Some("$5.99 shipping")), (false, Some(5.99)));
    assert_eq!(shipping_fields(Some("+$12.50 delivery")), (false, Some(12.5)));
    assert_eq!(shipping_fields(Some("Shipping not specified")), (false, None));
    assert_eq!(shipping_fields(None), (false, None));
}

#[test]
fn cached_indices_rebuild_the_same_view() {
    let ds = sample();
    let mut filters = FilterState::defaults(ds.price_bounds());
    filters.free_only = true;

    let cached = FilteredView::new(&ds, &filters).into_indices();
    assert_eq!(cached, [0, 3]);

    let view = FilteredView::from_indices(&ds, &cached);
    // borrowed, not copied
    assert!(std::ptr::eq(view.indices(), cached.as_slice()));
    assert_eq!(titles(&view), ["Nike Air Max 90", "Timberland Boot"]);
    assert_eq!(view.row(1).map(|r| r.price), Some(150.0));
    assert!(view.row(2).is_none());
}
