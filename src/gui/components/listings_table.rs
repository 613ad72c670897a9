// src/gui/components/listings_table.rs
//
// Read-only table of the filtered rows. Rows are virtualized by egui_extras,
// so large views stay cheap.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::data::FilteredView;
use crate::listing::PresentedListing;

const HEADERS: [&str; 7] = ["Title", "Brand", "Price", "Was", "Discount", "Shipping", "Rating"];
const ROW_HEIGHT: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.label(egui::RichText::new(format!("Listings ({})", view.len())).strong());

    if view.is_empty() {
        return;
    }

    let table = TableBuilder::new(ui)
        .id_salt("listings_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .max_scroll_height(420.0)
        .column(Column::initial(380.0).at_least(120.0).clip(true))
        .column(Column::initial(90.0).at_least(40.0))
        .columns(Column::initial(70.0).at_least(40.0), 3)
        .column(Column::initial(140.0).at_least(60.0).clip(true))
        .column(Column::remainder().at_least(50.0));

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.len(), |mut row| {
                let Some(r) = view.row(row.index()) else { return };
                for cell in cells(r) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn cells(r: &PresentedListing) -> [String; 7] {
    [
        r.title.clone(),
        r.brand.clone().unwrap_or_default(),
        format!("${:.2}", r.price),
        r.original_price.map(|p| format!("${:.2}", p)).unwrap_or_default(),
        r.discount_pct.map(|d| format!("{}%", d)).unwrap_or_default(),
        r.shipping.clone().unwrap_or_default(),
        r.rating_num.map(|x| format!("{:.1}", x)).unwrap_or_default(),
    ]
}
