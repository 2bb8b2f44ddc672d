//! Investment comparison chart.
//!
//! Grouped bar chart of annual appreciation vs tourism growth per city,
//! drawn directly with the egui painter. The first row (the project's own
//! market) keeps the brand color; other cities are muted.

use bevy_egui::egui;

use site::market::MarketData;

use crate::theme;

const CHART_HEIGHT: f32 = 240.0;
/// Band at the bottom reserved for city labels.
const LABEL_BAND: f32 = 30.0;
const BAR_GAP: f32 = 4.0;
const PLOT_PAD: f32 = 12.0;

/// Pixel height for `value` scaled against `max` over `avail` pixels.
fn scaled_height(value: f32, max: f32, avail: f32) -> f32 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0) * avail
    }
}

/// Largest value across both series, floored at 1 so an all-zero table
/// still produces a flat (not degenerate) chart.
fn max_value(data: &[MarketData]) -> f32 {
    data.iter()
        .flat_map(|d| [d.appreciation_pct, d.tourism_growth_pct])
        .fold(1.0_f32, f32::max)
}

/// Short city label for the axis (first word, parentheticals dropped).
fn short_city(city: &str) -> &str {
    city.split([' ', '(']).next().unwrap_or(city)
}

pub fn draw_roi_chart(ui: &mut egui::Ui, data: &[MarketData]) {
    ui.label(
        egui::RichText::new("Valorización Anual Estimada vs Crecimiento Turístico (%)")
            .size(theme::FONT_BODY)
            .color(theme::SLATE_600)
            .strong(),
    );

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, theme::CARD_BG);

    if data.is_empty() {
        return;
    }

    let plot = rect.shrink(PLOT_PAD);
    let baseline = plot.max.y - LABEL_BAND;
    let avail = baseline - plot.min.y - 16.0; // headroom for value labels
    let max = max_value(data);

    let group_width = plot.width() / data.len() as f32;
    let bar_width = ((group_width - 3.0 * BAR_GAP) / 2.0).min(26.0);

    for (i, row) in data.iter().enumerate() {
        let group_center = plot.min.x + (i as f32 + 0.5) * group_width;
        let appreciation_color = if i == 0 { theme::TEAL } else { theme::SLATE_400 };

        let bars = [
            (row.appreciation_pct, appreciation_color, -1.0_f32),
            (row.tourism_growth_pct, theme::AMBER, 1.0_f32),
        ];
        for (value, color, side) in bars {
            let h = scaled_height(value, max, avail);
            let x0 = group_center + side * (BAR_GAP / 2.0) + side.min(0.0) * bar_width;
            let bar = egui::Rect::from_min_max(
                egui::pos2(x0, baseline - h),
                egui::pos2(x0 + bar_width, baseline),
            );
            painter.rect_filled(bar, 3.0, color);
            painter.text(
                bar.center_top() + egui::vec2(0.0, -2.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{value:.1}"),
                egui::FontId::proportional(10.0),
                theme::SLATE_500,
            );
        }

        painter.text(
            egui::pos2(group_center, baseline + 6.0),
            egui::Align2::CENTER_TOP,
            short_city(&row.city),
            egui::FontId::proportional(11.0),
            theme::SLATE_600,
        );
    }

    painter.line_segment(
        [egui::pos2(plot.min.x, baseline), egui::pos2(plot.max.x, baseline)],
        egui::Stroke::new(1.0, theme::SLATE_400),
    );

    // Legend, top right of the plot.
    let legend = [
        ("Valorización (%)", theme::TEAL),
        ("Turismo (%)", theme::AMBER),
    ];
    let mut y = plot.min.y + 4.0;
    for (label, color) in legend {
        let swatch = egui::Rect::from_min_size(
            egui::pos2(plot.max.x - 120.0, y),
            egui::vec2(10.0, 10.0),
        );
        painter.rect_filled(swatch, 2.0, color);
        painter.text(
            swatch.right_center() + egui::vec2(4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(10.0),
            theme::SLATE_600,
        );
        y += 14.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(city: &str, appreciation: f32, tourism: f32) -> MarketData {
        MarketData {
            city: city.to_string(),
            appreciation_pct: appreciation,
            tourism_growth_pct: tourism,
        }
    }

    #[test]
    fn test_scaled_height_proportions() {
        assert_eq!(scaled_height(10.0, 20.0, 100.0), 50.0);
        assert_eq!(scaled_height(20.0, 20.0, 100.0), 100.0);
        assert_eq!(scaled_height(0.0, 20.0, 100.0), 0.0);
        // Values above max clamp instead of overflowing the plot.
        assert_eq!(scaled_height(40.0, 20.0, 100.0), 100.0);
        assert_eq!(scaled_height(10.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_max_value_spans_both_series() {
        let data = vec![row("A", 12.5, 18.0), row("B", 8.2, 12.0)];
        assert_eq!(max_value(&data), 18.0);
        // Floored at 1 for degenerate tables.
        assert_eq!(max_value(&[]), 1.0);
        assert_eq!(max_value(&[row("C", 0.0, 0.0)]), 1.0);
    }

    #[test]
    fn test_short_city_labels() {
        assert_eq!(short_city("Cartagena (Zona Norte)"), "Cartagena");
        assert_eq!(short_city("Santa Marta"), "Santa");
        assert_eq!(short_city("Bogotá"), "Bogotá");
    }
}
