//! Page palette and egui style pass.
//!
//! Light, editorial look: warm slate text on an off-white page, teal as the
//! brand color and amber as its accent, matching the printed brochure.

use bevy_egui::{egui, EguiContexts};

pub const TEAL: egui::Color32 = egui::Color32::from_rgb(13, 148, 136);
pub const TEAL_DARK: egui::Color32 = egui::Color32::from_rgb(15, 118, 110);
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
pub const EMERALD: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
pub const WHATSAPP_GREEN: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

pub const SLATE_900: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const SLATE_600: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const SLATE_500: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const SLATE_400: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const SLATE_100: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);

/// Page background (slate-50).
pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const CARD_BG: egui::Color32 = egui::Color32::WHITE;

pub const FONT_HERO: f32 = 40.0;
pub const FONT_HEADING: f32 = 28.0;
pub const FONT_SUBHEADING: f32 = 19.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_SMALL: f32 = 12.0;

pub const WIDGET_CORNER_RADIUS: u8 = 6;

pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = PAGE_BG;
    style.visuals.window_fill = CARD_BG;
    style.visuals.extreme_bg_color = SLATE_100;
    style.visuals.faint_bg_color = SLATE_100;
    style.visuals.override_text_color = None;

    style.visuals.selection.bg_fill = TEAL;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, TEAL_DARK);
    style.visuals.hyperlink_color = TEAL_DARK;

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_palette_distinct_from_page_background() {
        for color in [TEAL, AMBER, EMERALD, SLATE_900, WHATSAPP_GREEN] {
            assert_ne!(color, PAGE_BG);
        }
    }
}
