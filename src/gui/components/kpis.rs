// src/gui/components/kpis.rs

use eframe::egui::{self, RichText};
use crate::analysis::Kpis;

pub fn draw(ui: &mut egui::Ui, k: &Kpis) {
    let median = k.median_price.map_or_else(|| s!("—"), |p| format!("${:.2}", p));
    let free = k.free_shipping_pct.map_or_else(|| s!("—"), |p| format!("{:.1}%", p));

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Listings", &k.total.to_string());
        metric(&mut cols[1], "Median Price", &median);
        metric(&mut cols[2], "Free Shipping", &free);
    });
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).size(22.0).strong());
    });
}
