// src/gui/components/filter_panel.rs
//
// Left-hand filter controls. Every change writes straight into
// app.state.filters and rebuilds the filtered view.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    if ui.button("Reset filters").clicked() {
        app.reset_filters();
    }

    ui.separator();

    let mut changed = false;

    ui.label("Brand");
    egui::ScrollArea::vertical()
        .id_salt("brand_list_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for brand in &app.brand_options {
                let is_selected = app.state.filters.brands.iter().any(|b| b == brand);
                if ui.selectable_label(is_selected, brand.as_str()).clicked() {
                    app.state.filters.toggle_brand(brand);
                    log::debug!("UI: Brand toggle {} → {:?}", brand, app.state.filters.brands);
                    changed = true;
                }
            }
        });

    ui.separator();

    let (lo, hi) = app.data.price_bounds();
    let filters = &mut app.state.filters;

    ui.label("Price Range ($)");
    let min_changed = ui
        .add(egui::Slider::new(&mut filters.price_range.0, lo..=hi).prefix("$").text("min"))
        .changed();
    let max_changed = ui
        .add(egui::Slider::new(&mut filters.price_range.1, lo..=hi).prefix("$").text("max"))
        .changed();

    // Keep min <= max; the handle being dragged wins.
    if filters.price_range.0 > filters.price_range.1 {
        if min_changed {
            filters.price_range.1 = filters.price_range.0;
        } else {
            filters.price_range.0 = filters.price_range.1;
        }
    }
    changed |= min_changed || max_changed;

    ui.separator();

    changed |= ui.checkbox(&mut filters.free_only, "Free Shipping Only").changed();

    ui.separator();

    ui.label("Keyword in title");
    changed |= ui
        .add(egui::TextEdit::singleline(&mut filters.keyword).hint_text("e.g. running"))
        .changed();

    if changed {
        app.rebuild_view();
    }
}
