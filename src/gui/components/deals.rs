// src/gui/components/deals.rs
//
// Ranked deals list with thumbnails. Thumbnail fetch failures show a
// placeholder glyph instead.

use eframe::egui::{self, RichText, Vec2};

use crate::{
    config::consts::{DEAL_THRESHOLD, THUMBNAIL_PX},
    gui::thumbnails::ThumbnailCache,
    listing::PresentedListing,
};

const PLACEHOLDER: &str = "🖼";

pub fn draw(ui: &mut egui::Ui, deals: &[&PresentedListing], thumbnails: &mut ThumbnailCache) {
    ui.heading(format!("🔥 Top Deals (≥ {}% off)", DEAL_THRESHOLD));

    if deals.is_empty() {
        ui.label("No deals found for selected filters.");
        return;
    }

    for r in deals {
        ui.horizontal(|ui| {
            thumbnail(ui, r, thumbnails);
            ui.vertical(|ui| details(ui, r));
        });
        ui.separator();
    }
}

fn thumbnail(ui: &mut egui::Ui, r: &PresentedListing, thumbnails: &mut ThumbnailCache) {
    let size = Vec2::splat(THUMBNAIL_PX);
    let texture = r
        .image_url
        .as_deref()
        .and_then(|url| thumbnails.get(ui.ctx(), url));

    match texture {
        Some(tex) => {
            let sized = egui::load::SizedTexture::from_handle(tex);
            ui.add(egui::Image::from_texture(sized).max_size(size));
        }
        None => {
            ui.allocate_ui(size, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(PLACEHOLDER).size(THUMBNAIL_PX * 0.4).weak());
                });
            });
        }
    }
}

fn details(ui: &mut egui::Ui, r: &PresentedListing) {
    match r.product_url.as_deref() {
        Some(url) => {
            ui.hyperlink_to(RichText::new(&r.title).strong(), url);
        }
        None => {
            ui.label(RichText::new(&r.title).strong());
        }
    }

    let mut price = format!("💲 Price: ${:.2}", r.price);
    if let Some(orig) = r.original_price {
        price.push_str(&format!("  (was ${:.2})", orig));
    }
    if let Some(d) = r.discount_pct {
        price.push_str(&format!("  |  🏷 Discount: {}%", d));
    }
    ui.label(price);

    let rating = r.rating_num.map_or_else(|| s!("N/A"), |x| format!("{:.1}", x));
    ui.label(format!("⭐ Rating: {}", rating));

    let shipping = match r.shipping.as_deref() {
        Some(text) => format!("🚚 {}", text),
        None => s!("🚚 Shipping: N/A"),
    };
    ui.label(RichText::new(shipping).small());
}
