//! Inline-edit widget for content fields.
//!
//! Outside edit mode this is a plain label. In edit mode, idle fields show a
//! click-to-edit affordance; the field with the active [`EditSession`] shows
//! a multiline editor with AI-suggest (where the field carries a topic),
//! save, and cancel actions. The AI button disables itself while a request
//! is in flight — nothing else on the page blocks.

use bevy_egui::egui;

use site::content::{ContentField, SetContentEvent};
use site::edit_mode::{EditMode, EditSession};
use site::suggest::{SuggestConfig, SuggestionState};

use crate::theme;

/// Per-frame state threaded through the page's editable-text widgets.
pub struct EditCtx<'a> {
    pub mode: EditMode,
    pub session: &'a mut EditSession,
    pub suggestions: &'a mut SuggestionState,
    pub config: &'a SuggestConfig,
    /// Commits queued this frame; the page system dispatches them as events.
    pub saves: &'a mut Vec<SetContentEvent>,
}

enum EditorAction {
    None,
    Suggest(&'static str),
    Save,
    Cancel,
}

pub fn editable_text(
    ui: &mut egui::Ui,
    ctx: &mut EditCtx,
    field: ContentField,
    current: &str,
    size: f32,
    color: egui::Color32,
) {
    let text = egui::RichText::new(current).size(size).color(color);

    if !ctx.mode.0 {
        ui.label(text);
        return;
    }

    if ctx.session.is_editing(field) {
        draw_editor(ui, ctx, field, size);
        return;
    }

    let response = ui
        .add(egui::Label::new(text).sense(egui::Sense::click()))
        .on_hover_text("Haz clic para editar");
    if response.clicked() {
        ctx.session.begin(ctx.mode, field, current);
    }
}

fn draw_editor(ui: &mut egui::Ui, ctx: &mut EditCtx, field: ContentField, size: f32) {
    let mut action = EditorAction::None;
    let in_flight = ctx.suggestions.is_in_flight(field);
    // Titles get a single tall row, bodies a paragraph-sized box.
    let rows = if size >= theme::FONT_SUBHEADING { 2 } else { 5 };

    if let Some(active) = ctx.session.active_mut() {
        ui.add(
            egui::TextEdit::multiline(&mut active.pending)
                .desired_width(f32::INFINITY)
                .desired_rows(rows)
                .font(egui::FontId::proportional(size.min(18.0))),
        );
        ui.horizontal(|ui| {
            if let Some(topic) = field.ai_topic() {
                let label = if in_flight { "Pensando..." } else { "✨ IA Magic" };
                let button = egui::Button::new(
                    egui::RichText::new(label).color(egui::Color32::WHITE),
                )
                .fill(theme::TEAL_DARK);
                if ui.add_enabled(!in_flight, button).clicked() {
                    action = EditorAction::Suggest(topic);
                }
            }
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("Guardar").color(egui::Color32::WHITE),
                    )
                    .fill(theme::EMERALD),
                )
                .clicked()
            {
                action = EditorAction::Save;
            }
            if ui.button("Cancelar").clicked() {
                action = EditorAction::Cancel;
            }
        });
    }

    match action {
        EditorAction::Suggest(topic) => ctx.suggestions.begin(ctx.config, field, topic),
        EditorAction::Save => {
            if let Some(event) = ctx.session.save() {
                ctx.saves.push(event);
            }
        }
        EditorAction::Cancel => ctx.session.cancel(),
        EditorAction::None => {}
    }
}
