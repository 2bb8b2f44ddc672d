//! Domain crate for the Anaiwa Eco Reserva marketing page.
//!
//! Owns the two mutable stores (lot inventory and editable copy), the
//! edit-mode state machine, the AI copy-suggestion collaborator, the static
//! reference lists, and the outbound contact-link builders. The `ui` crate
//! reads these resources and dispatches update intents back as events; the
//! drain systems here are the only writers.

use bevy::prelude::*;

pub mod contact;
pub mod content;
pub mod edit_mode;
pub mod lots;
pub mod market;
pub mod seed;
pub mod suggest;

pub struct SitePlugin;

impl Plugin for SitePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<edit_mode::EditMode>()
            .init_resource::<edit_mode::EditSession>()
            .init_resource::<suggest::SuggestionState>()
            .insert_resource(suggest::SuggestConfig::from_env())
            .add_event::<lots::UpdateLotEvent>()
            .add_event::<content::SetContentEvent>()
            .add_systems(Startup, seed::init_site)
            .add_systems(
                Update,
                (
                    lots::apply_lot_updates,
                    content::apply_content_updates,
                    edit_mode::enforce_edit_gate,
                    suggest::poll_suggestions,
                ),
            );
    }
}
