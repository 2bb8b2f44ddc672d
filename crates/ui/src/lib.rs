//! Presentation crate: the egui page, widgets, and theme.
//!
//! Reads the `site` crate's resources and dispatches update intents back as
//! events; it never writes the stores directly.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod chart;
pub mod editable_text;
pub mod lot_map;
pub mod sections;
pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<lot_map::SelectedLot>()
            .init_resource::<lot_map::LotEditor>()
            .init_resource::<sections::ScrollToPlan>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (sections::page_ui, toolbar::toolbar_ui, lot_map::reset_lot_editor),
            );
    }
}
