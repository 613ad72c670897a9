// src/gui/components/tabs.rs
//
// Chart tab strip. Writes the chosen tab back through `current`.

use eframe::egui;
use crate::config::state::ChartTab;

pub fn draw(ui: &mut egui::Ui, current: &mut ChartTab) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for tab in ChartTab::ALL {
            let selected = tab == *current;
            if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                *current = tab;
            }
        }
    });
}
