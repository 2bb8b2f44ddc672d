//! Master-plan lot map.
//!
//! Aggregate dashboard, the 8-wide grid of status-colored lot buttons, and
//! the detail window for the selected lot. The detail view always reads the
//! lot fresh from the store, so a replace while the window is open shows the
//! new record immediately. In edit mode the window becomes a form whose
//! scratch copy is committed as a single full-record [`UpdateLotEvent`].

use bevy::prelude::*;
use bevy_egui::egui;

use site::contact;
use site::edit_mode::EditMode;
use site::lots::{Lot, LotAggregate, LotId, LotInventory, LotStatus, UpdateLotEvent};

use crate::theme;

/// Lots per grid row.
const GRID_COLUMNS: usize = 8;

/// Currently selected lot, if any.
#[derive(Resource, Default)]
pub struct SelectedLot(pub Option<LotId>);

/// Scratch copy of the selected lot while its edit form is open. Reset when
/// the selection changes or the window closes.
#[derive(Resource, Default)]
pub struct LotEditor(pub Option<Lot>);

/// Per-frame state threaded through the lot-map widgets.
pub struct LotMapCtx<'a> {
    pub edit_mode: bool,
    pub selected: &'a mut SelectedLot,
    pub editor: &'a mut LotEditor,
    /// Replace intents queued this frame; dispatched as events by the page.
    pub updates: &'a mut Vec<UpdateLotEvent>,
}

/// Drops the scratch copy whenever the global flag turns off, so reopening
/// the window in a later edit session rebuilds it from the live store
/// instead of resurrecting outdated values.
pub fn reset_lot_editor(mode: Res<EditMode>, mut editor: ResMut<LotEditor>) {
    if mode.is_changed() && !mode.0 && editor.0.is_some() {
        editor.0 = None;
    }
}

pub fn status_color(status: LotStatus) -> egui::Color32 {
    match status {
        LotStatus::Available => theme::EMERALD,
        LotStatus::Reserved => theme::AMBER,
        LotStatus::Sold => theme::SLATE_400,
    }
}

// =============================================================================
// Dashboard
// =============================================================================

pub fn draw_dashboard(ui: &mut egui::Ui, aggregate: &LotAggregate) {
    let cards = [
        (aggregate.total, "Total Lotes", theme::SLATE_600),
        (aggregate.available, "Disponibles", theme::EMERALD),
        (aggregate.reserved, "Reservados", theme::AMBER),
        (aggregate.sold, "Vendidos", theme::SLATE_400),
    ];
    ui.columns(cards.len(), |columns| {
        for (column, (count, label, color)) in columns.iter_mut().zip(cards) {
            egui::Frame::group(column.style())
                .fill(theme::CARD_BG)
                .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(count.to_string())
                                .size(theme::FONT_HEADING)
                                .color(color)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(label)
                                .size(theme::FONT_SMALL)
                                .color(theme::SLATE_500),
                        );
                    });
                });
        }
    });
}

// =============================================================================
// Grid
// =============================================================================

pub fn draw_lot_grid(ui: &mut egui::Ui, inventory: &LotInventory, ctx: &mut LotMapCtx) {
    let lots: Vec<&Lot> = inventory.iter().collect();
    for row in lots.chunks(GRID_COLUMNS) {
        ui.horizontal(|ui| {
            for lot in row {
                // Sold lots are inert for visitors but still editable inline.
                let enabled = ctx.edit_mode || lot.status != LotStatus::Sold;
                let button = egui::Button::new(
                    egui::RichText::new(&lot.number)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(status_color(lot.status))
                .min_size(egui::vec2(58.0, 44.0));
                if ui.add_enabled(enabled, button).clicked() {
                    ctx.selected.0 = Some(lot.id);
                    ctx.editor.0 = None;
                }
            }
        });
    }
}

// =============================================================================
// Detail window
// =============================================================================

pub fn detail_window(egui_ctx: &egui::Context, inventory: &LotInventory, ctx: &mut LotMapCtx) {
    let Some(id) = ctx.selected.0 else {
        return;
    };
    let Some(lot) = inventory.get(id) else {
        // Should not happen (lots are never deleted), but don't hold a
        // selection the store cannot back.
        ctx.selected.0 = None;
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Lote {}", lot.number))
        .id(egui::Id::new("lot_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(egui_ctx, |ui| {
            ui.set_min_width(300.0);
            if ctx.edit_mode {
                draw_edit_form(ui, lot, ctx);
            } else {
                draw_read_only(ui, lot);
            }
        });

    if !open {
        ctx.selected.0 = None;
        ctx.editor.0 = None;
    }
}

fn draw_read_only(ui: &mut egui::Ui, lot: &Lot) {
    ui.label(
        egui::RichText::new(lot.status.label().to_uppercase())
            .size(theme::FONT_SMALL)
            .color(status_color(lot.status))
            .strong(),
    );
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Área Total:").color(theme::SLATE_600));
        ui.label(
            egui::RichText::new(format!("{:.2} m²", lot.area_m2))
                .color(theme::SLATE_900)
                .strong(),
        );
    });
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Precio:").color(theme::SLATE_600));
        ui.label(
            egui::RichText::new(contact::format_cop(lot.price_cop))
                .size(theme::FONT_SUBHEADING)
                .color(theme::TEAL_DARK)
                .strong(),
        );
    });

    if !lot.features.is_empty() {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Características:").color(theme::SLATE_500));
        ui.horizontal_wrapped(|ui| {
            for feature in &lot.features {
                ui.label(
                    egui::RichText::new(feature)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEAL_DARK)
                        .background_color(theme::SLATE_100),
                );
            }
        });
    }

    ui.add_space(10.0);
    let cta = egui::Button::new(
        egui::RichText::new("¡Me interesa este lote!")
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(theme::WHATSAPP_GREEN)
    .min_size(egui::vec2(280.0, 36.0));
    if ui.add(cta).clicked() {
        contact::open_link(&contact::wa_link(&contact::lot_inquiry_message(lot)));
    }
}

fn draw_edit_form(ui: &mut egui::Ui, lot: &Lot, ctx: &mut LotMapCtx) {
    // (Re)build the scratch copy when the selection moved to another lot.
    if !matches!(&ctx.editor.0, Some(scratch) if scratch.id == lot.id) {
        ctx.editor.0 = Some(lot.clone());
    }
    let Some(scratch) = &mut ctx.editor.0 else {
        return;
    };

    ui.label(egui::RichText::new("Estado").size(theme::FONT_SMALL).color(theme::SLATE_500));
    egui::ComboBox::from_id_salt("lot_status")
        .selected_text(scratch.status.label())
        .show_ui(ui, |ui| {
            for status in LotStatus::ALL {
                ui.selectable_value(&mut scratch.status, status, status.label());
            }
        });

    ui.label(egui::RichText::new("Área (m²)").size(theme::FONT_SMALL).color(theme::SLATE_500));
    ui.add(
        egui::DragValue::new(&mut scratch.area_m2)
            .speed(1.0)
            .range(1.0..=100_000.0),
    );

    ui.label(
        egui::RichText::new("Precio (COP)")
            .size(theme::FONT_SMALL)
            .color(theme::SLATE_500),
    );
    ui.add(
        egui::DragValue::new(&mut scratch.price_cop)
            .speed(1_000_000)
            .range(1..=10_000_000_000_u64),
    );

    ui.add_space(8.0);
    let save = egui::Button::new(
        egui::RichText::new("Guardar Cambios")
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(theme::TEAL)
    .min_size(egui::vec2(280.0, 32.0));
    if ui.add(save).clicked() {
        ctx.updates.push(UpdateLotEvent(scratch.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_distinct() {
        let colors = [
            status_color(LotStatus::Available),
            status_color(LotStatus::Reserved),
            status_color(LotStatus::Sold),
        ];
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn test_selection_defaults_empty() {
        assert!(SelectedLot::default().0.is_none());
        assert!(LotEditor::default().0.is_none());
    }

    #[test]
    fn test_editor_scratch_clears_when_edit_mode_turns_off() {
        let mut app = App::new();
        app.insert_resource(EditMode(true));
        app.init_resource::<LotEditor>();
        app.add_systems(Update, reset_lot_editor);

        app.world_mut().resource_mut::<LotEditor>().0 = Some(Lot {
            id: LotId(4),
            number: "L-4".to_string(),
            area_m2: 480.0,
            price_cop: 265_000_000,
            status: LotStatus::Available,
            features: vec![],
        });
        app.update();
        assert!(app.world().resource::<LotEditor>().0.is_some());

        // Toggle off: the stale scratch must not survive into the next
        // edit session.
        app.world_mut().resource_mut::<EditMode>().0 = false;
        app.update();
        assert!(app.world().resource::<LotEditor>().0.is_none());

        app.world_mut().resource_mut::<EditMode>().0 = true;
        app.update();
        assert!(app.world().resource::<LotEditor>().0.is_none());
    }
}
