// src/gui/components/charts.rs
//
// The three chart tabs, drawn straight onto a painter. Each chart is
// recomputed from the filtered view every frame.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2, pos2};

use crate::{
    analysis::{self, Bin, BrandDiscount, ScatterPoint},
    config::consts::{ALL_BRANDS, HISTOGRAM_BINS, TOP_BRANDS},
    data::FilteredView,
};

const PLOT_HEIGHT: f32 = 320.0;
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 40.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_RIGHT: f32 = 16.0;
const TICKS: usize = 4;
const HOVER_RADIUS: f32 = 8.0;

const PALETTE: [Color32; 12] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(23, 190, 207),
    Color32::from_rgb(57, 59, 121),
    Color32::from_rgb(99, 121, 57),
];
const UNBRANDED: Color32 = Color32::from_gray(150);

/// Stable color per brand: its position in the brand list.
pub fn brand_color(brand: Option<&str>, brand_options: &[String]) -> Color32 {
    brand
        .and_then(|b| {
            brand_options
                .iter()
                .filter(|o| o.as_str() != ALL_BRANDS)
                .position(|o| o == b)
        })
        .map_or(UNBRANDED, |i| PALETTE[i % PALETTE.len()])
}

/* ---------------- plot frame ---------------- */

/// Maps data coordinates into the inner plot rectangle.
struct PlotFrame {
    rect: Rect,
    x: (f64, f64),
    y: (f64, f64),
}

fn span((lo, hi): (f64, f64)) -> f64 {
    if hi > lo { hi - lo } else { 1.0 }
}

impl PlotFrame {
    fn new(outer: Rect, x: (f64, f64), y: (f64, f64)) -> Self {
        let rect = Rect::from_min_max(
            pos2(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
            pos2(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
        );
        Self { rect, x, y }
    }

    fn sx(&self, x: f64) -> f32 {
        let t = ((x - self.x.0) / span(self.x)) as f32;
        self.rect.left() + t * self.rect.width()
    }

    fn sy(&self, y: f64) -> f32 {
        let t = ((y - self.y.0) / span(self.y)) as f32;
        self.rect.bottom() - t * self.rect.height()
    }

    fn to_screen(&self, x: f64, y: f64) -> Pos2 { pos2(self.sx(x), self.sy(y)) }

    fn draw_axes(
        &self,
        painter: &egui::Painter,
        ui: &egui::Ui,
        x_ticks: bool,
        fmt_x: impl Fn(f64) -> String,
        fmt_y: impl Fn(f64) -> String,
    ) {
        let visuals = ui.visuals();
        let axis = Stroke::new(1.0, visuals.text_color());
        let grid = Stroke::new(0.5, visuals.weak_text_color().gamma_multiply(0.4));
        let font = FontId::proportional(11.0);
        let r = self.rect;

        for i in 0..=TICKS {
            let v = self.y.0 + span(self.y) * i as f64 / TICKS as f64;
            let y = self.sy(v);
            painter.line_segment([pos2(r.left(), y), pos2(r.right(), y)], grid);
            painter.text(pos2(r.left() - 6.0, y), Align2::RIGHT_CENTER, fmt_y(v), font.clone(), visuals.text_color());
        }
        if x_ticks {
            for i in 0..=TICKS {
                let v = self.x.0 + span(self.x) * i as f64 / TICKS as f64;
                let x = self.sx(v);
                painter.line_segment([pos2(x, r.bottom()), pos2(x, r.bottom() + 4.0)], axis);
                painter.text(pos2(x, r.bottom() + 6.0), Align2::CENTER_TOP, fmt_x(v), font.clone(), visuals.text_color());
            }
        }

        painter.line_segment([r.left_bottom(), r.left_top()], axis);
        painter.line_segment([r.left_bottom(), r.right_bottom()], axis);
    }

    fn axis_titles(&self, painter: &egui::Painter, ui: &egui::Ui, x_title: &str, y_title: &str) {
        let color = ui.visuals().weak_text_color();
        let font = FontId::proportional(12.0);
        painter.text(
            pos2(self.rect.center().x, self.rect.bottom() + 24.0),
            Align2::CENTER_TOP,
            x_title,
            font.clone(),
            color,
        );
        painter.text(
            pos2(self.rect.left(), self.rect.top() - 2.0),
            Align2::LEFT_BOTTOM,
            y_title,
            font,
            color,
        );
    }
}

fn allocate(ui: &mut egui::Ui) -> (egui::Response, egui::Painter) {
    let size = Vec2::new(ui.available_width(), PLOT_HEIGHT);
    ui.allocate_painter(size, Sense::hover())
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = (hi - lo).abs().max(1.0) * 0.05;
    (lo - pad, hi + pad)
}

/* ---------------- Price vs discount ---------------- */

pub fn price_vs_discount(ui: &mut egui::Ui, view: &FilteredView<'_>, brand_options: &[String]) {
    ui.label(egui::RichText::new("Price vs Discount").strong());

    let points = analysis::scatter_points(view.iter());
    if points.is_empty() {
        ui.label("No discounted listings in the current view.");
        return;
    }

    legend(ui, &points, brand_options);

    let (d_lo, d_hi) = min_max(points.iter().map(|p| p.discount));
    let (p_lo, p_hi) = min_max(points.iter().map(|p| p.price));

    let (response, painter) = allocate(ui);
    let frame = PlotFrame::new(response.rect, padded(d_lo.min(0.0), d_hi), padded(p_lo.min(0.0), p_hi));
    frame.draw_axes(&painter, ui, true, |v| format!("{:.0}%", v), |v| format!("${:.0}", v));
    frame.axis_titles(&painter, ui, "Discount (%)", "Price ($)");

    for p in &points {
        let color = brand_color(p.brand, brand_options);
        painter.circle_filled(frame.to_screen(p.discount, p.price), 3.5, color.gamma_multiply(0.8));
    }

    let hovered = response.hover_pos().and_then(|pointer| nearest(&frame, &points, pointer));
    if let Some(p) = hovered {
        let at = frame.to_screen(p.discount, p.price);
        painter.circle_stroke(at, 6.0, Stroke::new(1.5, ui.visuals().strong_text_color()));
        let text = format!(
            "{}\nBrand: {}\nPrice: ${:.2}\nDiscount: {:.0}%",
            p.title,
            p.brand.unwrap_or("Unknown"),
            p.price,
            p.discount
        );
        response.on_hover_text(text);
    }
}

fn nearest<'p, 'a>(frame: &PlotFrame, points: &'p [ScatterPoint<'a>], pointer: Pos2) -> Option<&'p ScatterPoint<'a>> {
    points
        .iter()
        .map(|p| (p, frame.to_screen(p.discount, p.price).distance(pointer)))
        .filter(|(_, d)| *d <= HOVER_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

fn legend(ui: &mut egui::Ui, points: &[ScatterPoint<'_>], brand_options: &[String]) {
    let mut present: Vec<Option<&str>> = points.iter().map(|p| p.brand).collect();
    present.sort_unstable();
    present.dedup();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        for brand in present {
            let color = brand_color(brand, brand_options);
            ui.label(egui::RichText::new("●").color(color));
            ui.label(brand.unwrap_or("Unknown"));
        }
    });
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/* ---------------- Mean discount per brand ---------------- */

pub fn brand_discount(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.label(egui::RichText::new(format!("Average Discount by Brand (top {})", TOP_BRANDS)).strong());

    let bars = analysis::brand_discounts(view.iter(), TOP_BRANDS);
    if bars.is_empty() {
        ui.label("No branded, discounted listings in the current view.");
        return;
    }

    let y_hi = bars.iter().map(|b| b.mean_discount).fold(0.0, f64::max);
    let (response, painter) = allocate(ui);
    let frame = PlotFrame::new(response.rect, (0.0, bars.len() as f64), (0.0, y_hi * 1.1));
    frame.draw_axes(&painter, ui, false, |_| s!(), |v| format!("{:.0}%", v));
    frame.axis_titles(&painter, ui, "Brand", "Avg Discount (%)");

    let slot = frame.rect.width() / bars.len() as f32;
    let font = FontId::proportional(11.0);
    let pointer = response.hover_pos();
    let mut hovered: Option<&BrandDiscount> = None;

    for (i, b) in bars.iter().enumerate() {
        let left = frame.rect.left() + slot * i as f32 + slot * 0.15;
        let right = left + slot * 0.7;
        let bar = Rect::from_min_max(pos2(left, frame.sy(b.mean_discount)), pos2(right, frame.rect.bottom()));
        let color = PALETTE[i % PALETTE.len()];

        let is_hovered = pointer.is_some_and(|p| bar.contains(p));
        painter.rect_filled(bar, 2.0, if is_hovered { color } else { color.gamma_multiply(0.85) });
        if is_hovered {
            painter.rect_stroke(bar, 2.0, Stroke::new(1.5, ui.visuals().strong_text_color()), StrokeKind::Outside);
            hovered = Some(b);
        }
        painter.text(
            pos2(bar.center().x, frame.rect.bottom() + 6.0),
            Align2::CENTER_TOP,
            &b.brand,
            font.clone(),
            ui.visuals().text_color(),
        );
    }

    if let Some(b) = hovered {
        response.on_hover_text(format!(
            "{}\nAvg discount: {:.1}%\nListings: {}",
            b.brand, b.mean_discount, b.listings
        ));
    }
}

/* ---------------- Shipping cost histogram ---------------- */

pub fn shipping_cost(ui: &mut egui::Ui, view: &FilteredView<'_>) {
    ui.label(egui::RichText::new("Shipping Cost Distribution").strong());

    let bins = analysis::shipping_histogram(view.iter(), HISTOGRAM_BINS);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        ui.label("No shipping costs in the current view.");
        return;
    };

    let y_hi = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let x = if last.hi > first.lo { (first.lo, last.hi) } else { (first.lo - 0.5, first.lo + 0.5) };

    let (response, painter) = allocate(ui);
    let frame = PlotFrame::new(response.rect, x, (0.0, (y_hi * 1.1).max(1.0)));
    frame.draw_axes(&painter, ui, true, |v| format!("${:.2}", v), |v| format!("{:.0}", v));
    frame.axis_titles(&painter, ui, "Shipping Cost ($)", "Listings");

    let pointer = response.hover_pos();
    let mut hovered: Option<&Bin> = None;
    let fill = ui.visuals().selection.bg_fill;

    for b in &bins {
        let (lo, hi) = if b.hi > b.lo { (b.lo, b.hi) } else { x };
        let bar = Rect::from_min_max(pos2(frame.sx(lo), frame.sy(b.count as f64)), pos2(frame.sx(hi), frame.rect.bottom()));
        painter.rect_filled(bar, 0.0, fill);
        painter.rect_stroke(bar, 0.0, Stroke::new(1.0, ui.visuals().panel_fill), StrokeKind::Inside);
        if pointer.is_some_and(|p| p.x >= bar.left() && p.x < bar.right() && frame.rect.contains(p)) {
            hovered = Some(b);
        }
    }

    if let Some(b) = hovered {
        response.on_hover_text(format!("${:.2} – ${:.2}\nListings: {}", b.lo, b.hi, b.count));
    }
}
