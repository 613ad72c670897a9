// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    analysis,
    config::{
        consts::{DEAL_LIMIT, DEAL_THRESHOLD},
        options::DashboardOptions,
        state::{AppState, ChartTab, FilterState},
    },
    data::{Dataset, FilteredView},
};

use super::{components, thumbnails::ThumbnailCache};

pub const WINDOW_TITLE: &str = "eBay Retail Dashboard";

/// Dataset loading happens before the window opens; a missing or empty
/// cleaned file is fatal and reported by the caller.
pub fn run(
    options: eframe::NativeOptions,
    data: Dataset,
    dashboard: DashboardOptions,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(data, &dashboard)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once at startup, read-only afterwards
    pub data: Dataset,
    pub brand_options: Vec<String>,

    // filtered rows for the current FilterState
    pub row_ix: Vec<usize>,

    pub thumbnails: ThumbnailCache,
}

impl App {
    pub fn new(data: Dataset, dashboard: &DashboardOptions) -> Self {
        let state = AppState::new(data.price_bounds());
        let brand_options = data.brand_options();

        log::info!(
            "Init: rows={}, brands={}, price_bounds={:?}",
            data.len(),
            brand_options.len().saturating_sub(1),
            data.price_bounds()
        );

        let mut app = Self {
            state,
            data,
            brand_options,
            row_ix: Vec::new(),
            thumbnails: ThumbnailCache::new(dashboard.thumbnail_timeout),
        };
        app.rebuild_view();
        app
    }

    /// Recompute the filtered rows. Call after any change to the filters.
    pub fn rebuild_view(&mut self) {
        let view = FilteredView::new(&self.data, &self.state.filters);
        log::debug!("View: {} of {} rows", view.len(), self.data.len());
        self.row_ix = view.into_indices();
    }

    pub fn reset_filters(&mut self) {
        self.state.filters = FilterState::defaults(self.data.price_bounds());
        log::info!("UI: Filters reset");
        self.rebuild_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Retail Price Tracker — eBay Shoes");
                    ui.label("Scraped listings with price, discount and shipping, filtered from the side panel.");
                    ui.separator();

                    let view = FilteredView::from_indices(&self.data, &self.row_ix);

                    components::kpis::draw(ui, &analysis::kpis(view.iter()));
                    ui.separator();

                    if view.is_empty() {
                        ui.label("No listings match the selected filters.");
                        ui.separator();
                    }

                    let mut tab = self.state.gui.current_tab;
                    components::tabs::draw(ui, &mut tab);
                    if tab != self.state.gui.current_tab {
                        log::debug!("UI: Tab switch {:?} → {:?}", self.state.gui.current_tab, tab);
                        self.state.gui.current_tab = tab;
                    }

                    ui.add_space(6.0);
                    match tab {
                        ChartTab::PriceVsDiscount => {
                            components::charts::price_vs_discount(ui, &view, &self.brand_options)
                        }
                        ChartTab::BrandDiscount => components::charts::brand_discount(ui, &view),
                        ChartTab::ShippingCost => components::charts::shipping_cost(ui, &view),
                        ChartTab::Listings => components::listings_table::draw(ui, &view),
                    }

                    ui.separator();
                    let deals = analysis::top_deals(view.iter(), DEAL_THRESHOLD, DEAL_LIMIT);
                    components::deals::draw(ui, &deals, &mut self.thumbnails);
                });
        });
    }
}
