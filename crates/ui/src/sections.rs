//! The page itself: one scrollable column of sections.
//!
//! Hero, investment pitch (stats + chart), location & amenities, master
//! plan, and footer. Editable fields go through [`crate::editable_text`];
//! everything else is the fixed framing copy. Update intents collected
//! during the frame are dispatched as events at the end, keeping the store
//! drain systems the only writers.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::contact;
use site::content::{ContentField, EditableContent, SetContentEvent};
use site::edit_mode::{EditMode, EditSession};
use site::lots::{LotInventory, UpdateLotEvent};
use site::market::{Amenity, AmenityList, MarketData, RoiTable};
use site::suggest::{SuggestConfig, SuggestionState};

use crate::chart;
use crate::editable_text::{editable_text, EditCtx};
use crate::lot_map::{self, LotEditor, LotMapCtx, SelectedLot};
use crate::theme;

const PAGE_MAX_WIDTH: f32 = 920.0;
const SECTION_GAP: f32 = 48.0;

/// Set by the hero's "Ver Disponibilidad" button; consumed by the master
/// plan section to scroll itself into view.
#[derive(Resource, Default)]
pub struct ScrollToPlan(pub bool);

#[allow(clippy::too_many_arguments)]
pub fn page_ui(
    mut contexts: EguiContexts,
    content: Res<EditableContent>,
    inventory: Res<LotInventory>,
    roi: Res<RoiTable>,
    amenities: Res<AmenityList>,
    mode: Res<EditMode>,
    mut session: ResMut<EditSession>,
    mut suggestions: ResMut<SuggestionState>,
    config: Res<SuggestConfig>,
    mut selected: ResMut<SelectedLot>,
    mut editor: ResMut<LotEditor>,
    mut scroll: ResMut<ScrollToPlan>,
    mut set_content: EventWriter<SetContentEvent>,
    mut update_lot: EventWriter<UpdateLotEvent>,
) {
    let mut saves = Vec::new();
    let mut updates = Vec::new();
    {
        let egui_ctx = contexts.ctx_mut();
        let mut ectx = EditCtx {
            mode: *mode,
            session: &mut session,
            suggestions: &mut suggestions,
            config: &config,
            saves: &mut saves,
        };
        let mut lctx = LotMapCtx {
            edit_mode: mode.0,
            selected: &mut selected,
            editor: &mut editor,
            updates: &mut updates,
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::PAGE_BG))
            .show(egui_ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(PAGE_MAX_WIDTH.min(ui.available_width() - 32.0));
                            hero_section(ui, &mut ectx, &content, &mut scroll);
                            ui.add_space(SECTION_GAP);
                            investment_section(ui, &mut ectx, &content, &roi.0);
                            ui.add_space(SECTION_GAP);
                            location_section(ui, &mut ectx, &content, &amenities.0);
                            ui.add_space(SECTION_GAP);
                            master_plan_section(ui, &inventory, &mut lctx, &mut scroll);
                            ui.add_space(SECTION_GAP);
                            footer(ui);
                        });
                    });
            });

        lot_map::detail_window(egui_ctx, &inventory, &mut lctx);
    }

    for event in saves {
        set_content.send(event);
    }
    for event in updates {
        update_lot.send(event);
    }
}

// =============================================================================
// Sections
// =============================================================================

fn overline(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(color)
            .strong(),
    );
}

fn hero_section(
    ui: &mut egui::Ui,
    ectx: &mut EditCtx,
    content: &EditableContent,
    scroll: &mut ScrollToPlan,
) {
    ui.add_space(40.0);
    overline(ui, "CARTAGENA DE INDIAS • ZONA NORTE", theme::TEAL);
    ui.add_space(8.0);
    editable_text(
        ui,
        ectx,
        ContentField::HeroTitle,
        content.get(ContentField::HeroTitle),
        theme::FONT_HERO,
        theme::SLATE_900,
    );
    ui.add_space(8.0);
    editable_text(
        ui,
        ectx,
        ContentField::HeroSubtitle,
        content.get(ContentField::HeroSubtitle),
        theme::FONT_SUBHEADING,
        theme::SLATE_600,
    );
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        let availability = egui::Button::new(
            egui::RichText::new("Ver Disponibilidad").color(egui::Color32::WHITE),
        )
        .fill(theme::TEAL);
        if ui.add(availability).clicked() {
            scroll.0 = true;
        }
        if ui.button("Descargar Brochure").clicked() {
            contact::print_page();
        }
    });
}

fn investment_section(
    ui: &mut egui::Ui,
    ectx: &mut EditCtx,
    content: &EditableContent,
    roi: &[MarketData],
) {
    overline(ui, "📈 RETORNO DE INVERSIÓN", theme::TEAL);
    ui.add_space(6.0);
    editable_text(
        ui,
        ectx,
        ContentField::InvestmentTitle,
        content.get(ContentField::InvestmentTitle),
        theme::FONT_HEADING,
        theme::SLATE_900,
    );
    ui.add_space(6.0);
    editable_text(
        ui,
        ectx,
        ContentField::InvestmentBody,
        content.get(ContentField::InvestmentBody),
        theme::FONT_BODY,
        theme::SLATE_600,
    );

    // Headline figures come from the project's own row of the ROI table.
    if let Some(own) = roi.first() {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            for (value, label, color) in [
                (own.appreciation_pct, "Valorización Anual", theme::TEAL),
                (own.tourism_growth_pct, "Crecimiento Turismo", theme::AMBER),
            ] {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{value:.1}%"))
                            .size(theme::FONT_HEADING)
                            .color(color)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(label.to_uppercase())
                            .size(theme::FONT_SMALL)
                            .color(theme::SLATE_500),
                    );
                });
                ui.add_space(24.0);
            }
        });
    }

    ui.add_space(16.0);
    chart::draw_roi_chart(ui, roi);
}

fn amenity_card(ui: &mut egui::Ui, amenity: &Amenity) {
    egui::Frame::group(ui.style())
        .fill(theme::CARD_BG)
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(amenity.icon.glyph()).size(24.0));
            ui.label(
                egui::RichText::new(&amenity.title)
                    .size(theme::FONT_BODY)
                    .color(theme::SLATE_900)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(&amenity.description)
                    .size(theme::FONT_SMALL)
                    .color(theme::SLATE_600),
            );
        });
}

fn location_section(
    ui: &mut egui::Ui,
    ectx: &mut EditCtx,
    content: &EditableContent,
    amenities: &[Amenity],
) {
    overline(ui, "ESTILO DE VIDA", theme::TEAL);
    ui.label(
        egui::RichText::new("Amenidades de Clase Mundial")
            .size(theme::FONT_HEADING)
            .color(theme::SLATE_900)
            .strong(),
    );
    ui.add_space(12.0);
    ui.columns(amenities.len().max(1), |columns| {
        for (column, amenity) in columns.iter_mut().zip(amenities) {
            amenity_card(column, amenity);
        }
    });

    ui.add_space(24.0);
    overline(ui, "📍 UBICACIÓN PRIVILEGIADA", theme::TEAL);
    ui.add_space(6.0);
    editable_text(
        ui,
        ectx,
        ContentField::LocationTitle,
        content.get(ContentField::LocationTitle),
        theme::FONT_HEADING,
        theme::SLATE_900,
    );
    ui.add_space(6.0);
    editable_text(
        ui,
        ectx,
        ContentField::LocationBody,
        content.get(ContentField::LocationBody),
        theme::FONT_BODY,
        theme::SLATE_600,
    );
}

fn master_plan_section(
    ui: &mut egui::Ui,
    inventory: &LotInventory,
    lctx: &mut LotMapCtx,
    scroll: &mut ScrollToPlan,
) {
    if scroll.0 {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
        scroll.0 = false;
    }

    ui.label(
        egui::RichText::new("Master Plan")
            .size(theme::FONT_HEADING)
            .color(theme::SLATE_900)
            .strong(),
    );
    ui.label(
        egui::RichText::new(
            "Selecciona tu ubicación ideal. Nuestro diseño orgánico respeta la topografía \
             original, garantizando privacidad y conexión natural para cada lote.",
        )
        .size(theme::FONT_BODY)
        .color(theme::SLATE_600),
    );
    ui.add_space(16.0);

    lot_map::draw_dashboard(ui, &inventory.aggregate());
    ui.add_space(12.0);
    lot_map::draw_lot_grid(ui, inventory, lctx);

    ui.add_space(16.0);
    ui.label(
        egui::RichText::new(
            "* Los precios y disponibilidades están sujetos a cambio sin previo aviso. \
             Áreas aproximadas. Imágenes de referencia.",
        )
        .size(theme::FONT_SMALL)
        .italics()
        .color(theme::SLATE_500),
    );
}

fn footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(12.0);
    ui.label(
        egui::RichText::new("ANAIWA")
            .size(theme::FONT_SUBHEADING)
            .color(theme::SLATE_900)
            .strong(),
    );
    ui.label(
        egui::RichText::new("Eco Reserva • Cartagena")
            .size(theme::FONT_SMALL)
            .color(theme::SLATE_500),
    );
    ui.label(
        egui::RichText::new("© 2024 Anaiwa Eco Reserva. Todos los derechos reservados.")
            .size(theme::FONT_SMALL)
            .color(theme::SLATE_500),
    );
    ui.add_space(24.0);
}
