// src/config/state.rs
use super::consts::ALL_BRANDS;

/// Dashboard filter widgets. Passed by reference into the pure filter;
/// reset means replacing it with `FilterState::defaults`.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Selected brand labels. Holding the "All" sentinel disables the filter.
    pub brands: Vec<String>,
    /// Inclusive price bounds.
    pub price_range: (f64, f64),
    pub free_only: bool,
    /// Whole-word, case-insensitive title match. Blank = off.
    pub keyword: String,
}

impl FilterState {
    /// Defaults for a dataset whose observed prices span `price_bounds`.
    pub fn defaults(price_bounds: (f64, f64)) -> Self {
        Self {
            brands: vec![s!(ALL_BRANDS)],
            price_range: price_bounds,
            free_only: false,
            keyword: s!(),
        }
    }

    #[inline]
    pub fn all_brands(&self) -> bool {
        self.brands.iter().any(|b| b == ALL_BRANDS)
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if let Some(pos) = self.brands.iter().position(|b| b == brand) {
            self.brands.remove(pos);
        } else {
            self.brands.push(s!(brand));
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartTab {
    #[default]
    PriceVsDiscount,
    BrandDiscount,
    ShippingCost,
    Listings,
}

impl ChartTab {
    pub const ALL: [ChartTab; 4] = [
        ChartTab::PriceVsDiscount,
        ChartTab::BrandDiscount,
        ChartTab::ShippingCost,
        ChartTab::Listings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartTab::PriceVsDiscount => "📈 Price vs Discount",
            ChartTab::BrandDiscount   => "🏷 Avg Discount by Brand",
            ChartTab::ShippingCost    => "🚚 Shipping Costs",
            ChartTab::Listings        => "📋 Listings",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub current_tab: ChartTab,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: ChartTab::default(),
            window_w: 1280,
            window_h: 860,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub filters: FilterState,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(price_bounds: (f64, f64)) -> Self {
        Self {
            filters: FilterState::defaults(price_bounds),
            gui: GuiState::default(),
        }
    }
}
