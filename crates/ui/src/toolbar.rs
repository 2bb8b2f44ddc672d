//! Floating admin toolbar and the WhatsApp call-to-action.
//!
//! Top right: edit-mode toggle and PDF/print trigger. Bottom right: the
//! prominent WhatsApp button with the prefilled project inquiry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::contact;
use site::edit_mode::EditMode;

use crate::theme;

pub fn toolbar_ui(mut contexts: EguiContexts, mut mode: ResMut<EditMode>) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("admin_toolbar"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (label, fill) = if mode.0 {
                        ("✏ Guardar Cambios", theme::TEAL)
                    } else {
                        ("✏ Modo Edición", theme::SLATE_100)
                    };
                    let text_color = if mode.0 {
                        egui::Color32::WHITE
                    } else {
                        theme::SLATE_600
                    };
                    let toggle =
                        egui::Button::new(egui::RichText::new(label).color(text_color)).fill(fill);
                    if ui
                        .add(toggle)
                        .on_hover_text(if mode.0 {
                            "Salir del modo edición"
                        } else {
                            "Editar el contenido de la página"
                        })
                        .clicked()
                    {
                        mode.0 = !mode.0;
                    }

                    if ui
                        .button("⬇ Descargar PDF")
                        .on_hover_text("Imprimir / exportar la página")
                        .clicked()
                    {
                        contact::print_page();
                    }
                });
            });
        });

    egui::Area::new(egui::Id::new("whatsapp_cta"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            let cta = egui::Button::new(
                egui::RichText::new("📞 ¡Habla con nosotros por WhatsApp!")
                    .size(theme::FONT_BODY)
                    .color(egui::Color32::WHITE)
                    .strong(),
            )
            .fill(theme::WHATSAPP_GREEN)
            .min_size(egui::vec2(0.0, 40.0));
            if ui.add(cta).clicked() {
                contact::open_link(&contact::wa_link(&contact::project_inquiry_message()));
            }
        });
}
