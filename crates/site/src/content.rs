//! Editable marketing-copy store.
//!
//! The page's editable text lives in [`EditableContent`], keyed by the closed
//! [`ContentField`] enum so that `get`/`set` are exhaustive and unknown keys
//! are unrepresentable. All fields are always present; there is no notion of
//! a missing or deleted field.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Field keys
// =============================================================================

/// The fixed set of editable text fields on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentField {
    HeroTitle,
    HeroSubtitle,
    InvestmentTitle,
    InvestmentBody,
    LocationTitle,
    LocationBody,
}

impl ContentField {
    pub const ALL: [ContentField; 6] = [
        ContentField::HeroTitle,
        ContentField::HeroSubtitle,
        ContentField::InvestmentTitle,
        ContentField::InvestmentBody,
        ContentField::LocationTitle,
        ContentField::LocationBody,
    ];

    /// Topic handed to the copy-suggestion collaborator for fields that offer
    /// AI-generated text. Titles are short enough to not warrant it.
    pub fn ai_topic(self) -> Option<&'static str> {
        match self {
            ContentField::HeroSubtitle => Some(
                "Descripción corta y poética de un proyecto de lotes de lujo cerca al mar en Cartagena",
            ),
            ContentField::InvestmentBody => Some(
                "Texto persuasivo sobre por qué invertir en bienes raíces en la Zona Norte de Cartagena (valorización, turismo, seguridad)",
            ),
            ContentField::LocationBody => Some(
                "Descripción de la ubicación de Anaiwa en Zona Norte Cartagena, cerca a Manzanillo y Serena del Mar",
            ),
            ContentField::HeroTitle
            | ContentField::InvestmentTitle
            | ContentField::LocationTitle => None,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// The editable copy deck. Seeded at startup, mutated field-by-field.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableContent {
    hero_title: String,
    hero_subtitle: String,
    investment_title: String,
    investment_body: String,
    location_title: String,
    location_body: String,
}

impl EditableContent {
    pub fn new(
        hero_title: impl Into<String>,
        hero_subtitle: impl Into<String>,
        investment_title: impl Into<String>,
        investment_body: impl Into<String>,
        location_title: impl Into<String>,
        location_body: impl Into<String>,
    ) -> Self {
        Self {
            hero_title: hero_title.into(),
            hero_subtitle: hero_subtitle.into(),
            investment_title: investment_title.into(),
            investment_body: investment_body.into(),
            location_title: location_title.into(),
            location_body: location_body.into(),
        }
    }

    pub fn get(&self, field: ContentField) -> &str {
        match field {
            ContentField::HeroTitle => &self.hero_title,
            ContentField::HeroSubtitle => &self.hero_subtitle,
            ContentField::InvestmentTitle => &self.investment_title,
            ContentField::InvestmentBody => &self.investment_body,
            ContentField::LocationTitle => &self.location_title,
            ContentField::LocationBody => &self.location_body,
        }
    }

    /// Unconditional replace; the content is free-form text, no validation.
    pub fn set(&mut self, field: ContentField, value: String) {
        match field {
            ContentField::HeroTitle => self.hero_title = value,
            ContentField::HeroSubtitle => self.hero_subtitle = value,
            ContentField::InvestmentTitle => self.investment_title = value,
            ContentField::InvestmentBody => self.investment_body = value,
            ContentField::LocationTitle => self.location_title = value,
            ContentField::LocationBody => self.location_body = value,
        }
    }
}

// =============================================================================
// Update intents
// =============================================================================

/// Commit intent for a single content field.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SetContentEvent {
    pub field: ContentField,
    pub value: String,
}

/// Drains [`SetContentEvent`]s into the store.
pub fn apply_content_updates(
    mut events: EventReader<SetContentEvent>,
    mut content: ResMut<EditableContent>,
) {
    for event in events.read() {
        content.set(event.field, event.value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> EditableContent {
        EditableContent::new("a", "b", "c", "d", "e", "f")
    }

    #[test]
    fn test_set_then_get_returns_new_value() {
        let mut content = deck();
        content.set(ContentField::HeroTitle, "Y".to_string());
        assert_eq!(content.get(ContentField::HeroTitle), "Y");
    }

    #[test]
    fn test_set_leaves_other_fields_unchanged() {
        let mut content = deck();
        let before: Vec<String> = ContentField::ALL
            .iter()
            .map(|f| content.get(*f).to_string())
            .collect();

        content.set(ContentField::InvestmentBody, "nuevo texto".to_string());

        for (i, field) in ContentField::ALL.into_iter().enumerate() {
            if field == ContentField::InvestmentBody {
                assert_eq!(content.get(field), "nuevo texto");
            } else {
                assert_eq!(content.get(field), before[i]);
            }
        }
    }

    #[test]
    fn test_every_field_round_trips() {
        let mut content = deck();
        for (i, field) in ContentField::ALL.into_iter().enumerate() {
            let value = format!("value-{i}");
            content.set(field, value.clone());
            assert_eq!(content.get(field), value);
        }
    }

    #[test]
    fn test_set_event_drains_into_store() {
        let mut app = App::new();
        app.add_event::<SetContentEvent>();
        app.insert_resource(deck());
        app.add_systems(Update, apply_content_updates);

        app.world_mut().send_event(SetContentEvent {
            field: ContentField::LocationTitle,
            value: "Ubicación".to_string(),
        });
        app.update();

        let content = app.world().resource::<EditableContent>();
        assert_eq!(content.get(ContentField::LocationTitle), "Ubicación");
    }

    #[test]
    fn test_ai_topics_only_on_body_fields() {
        assert!(ContentField::HeroSubtitle.ai_topic().is_some());
        assert!(ContentField::InvestmentBody.ai_topic().is_some());
        assert!(ContentField::LocationBody.ai_topic().is_some());
        assert!(ContentField::HeroTitle.ai_topic().is_none());
        assert!(ContentField::InvestmentTitle.ai_topic().is_none());
        assert!(ContentField::LocationTitle.ai_topic().is_none());
    }
}
