//! AI copy-suggestion collaborator.
//!
//! Thin client for a Gemini-style `generateContent` endpoint. A request is
//! fired at most once per click from an active edit session, runs off the
//! main thread, and resolves back into the session's pending text through a
//! shared slot polled each frame. Failures never leave this module as
//! errors: they degrade to fixed user-facing fallback strings.
//!
//! There is no retry, no timeout policy, and no cancellation — a result that
//! arrives after its edit session ended is discarded.

use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use bevy::tasks::{AsyncComputeTaskPool, TaskPool};

use bevy::prelude::*;
#[cfg(any(not(target_arch = "wasm32"), test))]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::ContentField;
use crate::edit_mode::EditSession;

// =============================================================================
// Constants
// =============================================================================

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_BASE_ENV: &str = "GEMINI_API_BASE";

/// Shown when the API answered but produced no usable text.
pub const FALLBACK_EMPTY: &str = "No se pudo generar el contenido.";
/// Shown for every other failure (missing credential, network, bad status).
pub const FALLBACK_ERROR: &str =
    "Error al conectar con la IA. Por favor verifica tu llave API.";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("{API_KEY_ENV} is not set")]
    MissingApiKey,
    #[cfg(not(target_arch = "wasm32"))]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api returned status {status}")]
    Api { status: u16 },
    #[error("api returned no candidate text")]
    EmptyResponse,
    /// The wasm build has no blocking HTTP client.
    #[allow(dead_code)]
    #[error("copy suggestions are not available in this build")]
    Unavailable,
}

// =============================================================================
// Configuration
// =============================================================================

/// Collaborator configuration, read once at startup from the environment.
#[derive(Resource, Debug, Clone)]
pub struct SuggestConfig {
    api_base: String,
    api_key: Option<String>,
}

impl SuggestConfig {
    /// `GEMINI_API_KEY` is the credential; absence is surfaced later as the
    /// fallback string, never as a startup failure. `GEMINI_API_BASE`
    /// overrides the endpoint (used by tests).
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var(API_BASE_ENV)
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, GEMINI_MODEL
        )
    }
}

// =============================================================================
// Wire format
// =============================================================================

// The wasm build has no HTTP client, so outside of tests nothing there
// touches the wire types.

#[cfg(any(not(target_arch = "wasm32"), test))]
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[cfg(any(not(target_arch = "wasm32"), test))]
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[cfg(any(not(target_arch = "wasm32"), test))]
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[cfg(any(not(target_arch = "wasm32"), test))]
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[cfg(any(not(target_arch = "wasm32"), test))]
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Fixed system instructions around the caller's topic, mirroring the
/// original marketing persona: plain text, at most ~80 words.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Actúa como un experto en marketing inmobiliario de lujo internacional.\n\
         Escribe un texto persuasivo, moderno y comercial de máximo 80 palabras sobre: \"{topic}\".\n\
         El contexto es el proyecto \"Anaiwa Eco Reserva\" en la Zona Norte de Cartagena de Indias.\n\
         Enfócate en el retorno de inversión, plusvalía, turismo y estilo de vida.\n\
         Usa un tono inspirador y profesional.\n\
         No uses markdown, solo texto plano."
    )
}

#[cfg(any(not(target_arch = "wasm32"), test))]
fn extract_text(response: GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// One-shot request for generated copy. Blocking; callers run it on the
/// compute task pool.
#[cfg(not(target_arch = "wasm32"))]
pub fn request_copy(config: &SuggestConfig, topic: &str) -> Result<String, SuggestError> {
    let api_key = config.api_key.as_deref().ok_or(SuggestError::MissingApiKey)?;

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(topic),
            }],
        }],
    };

    let response = reqwest::blocking::Client::new()
        .post(config.endpoint())
        .query(&[("key", api_key)])
        .json(&request)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SuggestError::Api {
            status: status.as_u16(),
        });
    }

    let body: GenerateResponse = response.json()?;
    extract_text(body).ok_or(SuggestError::EmptyResponse)
}

/// Boundary conversion: errors become the fixed fallback strings and are
/// logged; nothing propagates to the caller.
pub fn resolve(result: Result<String, SuggestError>) -> String {
    match result {
        Ok(text) => text,
        Err(SuggestError::EmptyResponse) => FALLBACK_EMPTY.to_string(),
        Err(e) => {
            warn!("copy suggestion failed: {e}");
            FALLBACK_ERROR.to_string()
        }
    }
}

// =============================================================================
// Fire-and-forget task bridge
// =============================================================================

/// Shared slot bridging the request task back into the ECS world.
type SuggestSlot = Arc<Mutex<Option<Result<String, SuggestError>>>>;

struct PendingSuggestion {
    field: ContentField,
    slot: SuggestSlot,
}

/// At-most-one in-flight suggestion request.
#[derive(Resource, Default)]
pub struct SuggestionState {
    in_flight: Option<PendingSuggestion>,
}

impl SuggestionState {
    /// Whether a request for `field` is awaiting its result. The UI uses
    /// this to disable only the triggering button.
    pub fn is_in_flight(&self, field: ContentField) -> bool {
        self.in_flight.as_ref().is_some_and(|p| p.field == field)
    }

    /// Spawn the request for `field`. No-op if one is already in flight;
    /// duplicate clicks are not deduplicated beyond this guard.
    pub fn begin(&mut self, config: &SuggestConfig, field: ContentField, topic: &str) {
        if self.in_flight.is_some() {
            return;
        }
        let slot: SuggestSlot = Arc::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            let config = config.clone();
            let topic = topic.to_string();
            let task_slot = Arc::clone(&slot);
            // get_or_init so callers outside a full App (tests) still work.
            AsyncComputeTaskPool::get_or_init(TaskPool::new)
                .spawn(async move {
                    let result = request_copy(&config, &topic);
                    if let Ok(mut guard) = task_slot.lock() {
                        *guard = Some(result);
                    }
                })
                .detach();
        }

        #[cfg(target_arch = "wasm32")]
        {
            let _ = topic;
            // A missing credential reads the same as on native; anything
            // else is the platform gap.
            let error = if config.api_key.is_none() {
                SuggestError::MissingApiKey
            } else {
                SuggestError::Unavailable
            };
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(Err(error));
            }
        }

        self.in_flight = Some(PendingSuggestion { field, slot });
    }
}

/// Polls the slot each frame. A finished result resolves into the active
/// edit session's pending text — only if that session still edits the field
/// the request was fired for; otherwise the result is stale and dropped.
pub fn poll_suggestions(mut state: ResMut<SuggestionState>, mut session: ResMut<EditSession>) {
    let finished = match &state.in_flight {
        Some(pending) => match pending.slot.lock() {
            Ok(mut guard) => guard.take().map(|result| (pending.field, result)),
            Err(_) => None,
        },
        None => None,
    };
    let Some((field, result)) = finished else {
        return;
    };
    state.in_flight = None;

    let text = resolve(result);
    match session.active_mut() {
        Some(active) if active.field == field => active.pending = text,
        _ => debug!("discarding stale suggestion for {field:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit_mode::EditMode;

    #[test]
    fn test_prompt_contains_topic_and_instruction_scaffold() {
        let prompt = build_prompt("lotes junto al mar");
        assert!(prompt.contains("\"lotes junto al mar\""));
        assert!(prompt.contains("máximo 80 palabras"));
        assert!(prompt.contains("Anaiwa Eco Reserva"));
        assert!(prompt.contains("solo texto plano"));
    }

    #[test]
    fn test_extract_text_from_response_json() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "  Invierta hoy.  " } ] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(response).as_deref(), Some("Invierta hoy."));
    }

    #[test]
    fn test_extract_text_handles_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_text(response).is_none());

        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":null}]}"#).unwrap();
        assert!(extract_text(response).is_none());

        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert!(extract_text(response).is_none());
    }

    #[test]
    fn test_missing_credential_degrades_to_fallback_string() {
        let config = SuggestConfig::new("http://localhost:9", None);
        let result = request_copy(&config, "tema");
        assert!(matches!(result, Err(SuggestError::MissingApiKey)));
        assert_eq!(resolve(result), FALLBACK_ERROR);
    }

    #[test]
    fn test_resolve_maps_empty_response_to_its_own_fallback() {
        assert_eq!(resolve(Err(SuggestError::EmptyResponse)), FALLBACK_EMPTY);
        assert_eq!(
            resolve(Err(SuggestError::Api { status: 500 })),
            FALLBACK_ERROR
        );
        assert_eq!(resolve(Ok("texto".to_string())), "texto");
    }

    #[test]
    fn test_endpoint_includes_model_and_base_override() {
        let config = SuggestConfig::new("http://localhost:8080", None);
        assert_eq!(
            config.endpoint(),
            format!("http://localhost:8080/v1beta/models/{GEMINI_MODEL}:generateContent")
        );
    }

    #[test]
    fn test_poll_resolves_into_matching_session_only() {
        let mut app = App::new();
        app.init_resource::<SuggestionState>();
        app.init_resource::<EditSession>();
        app.add_systems(Update, poll_suggestions);

        // Begin a session on one field, then hand-wire a finished request.
        app.world_mut()
            .resource_mut::<EditSession>()
            .begin(EditMode(true), ContentField::HeroSubtitle, "old");
        let slot: SuggestSlot = Arc::new(Mutex::new(Some(Ok("sugerencia".to_string()))));
        app.world_mut().resource_mut::<SuggestionState>().in_flight =
            Some(PendingSuggestion {
                field: ContentField::HeroSubtitle,
                slot,
            });
        app.update();

        let session = app.world().resource::<EditSession>();
        assert_eq!(session.active().unwrap().pending, "sugerencia");
        assert!(!app
            .world()
            .resource::<SuggestionState>()
            .is_in_flight(ContentField::HeroSubtitle));
    }

    #[test]
    fn test_poll_drops_stale_result_when_session_moved_on() {
        let mut app = App::new();
        app.init_resource::<SuggestionState>();
        app.init_resource::<EditSession>();
        app.add_systems(Update, poll_suggestions);

        // The session now edits a different field than the request was for.
        app.world_mut()
            .resource_mut::<EditSession>()
            .begin(EditMode(true), ContentField::LocationBody, "ubicación");
        let slot: SuggestSlot = Arc::new(Mutex::new(Some(Ok("tarde".to_string()))));
        app.world_mut().resource_mut::<SuggestionState>().in_flight =
            Some(PendingSuggestion {
                field: ContentField::HeroSubtitle,
                slot,
            });
        app.update();

        let session = app.world().resource::<EditSession>();
        assert_eq!(session.active().unwrap().pending, "ubicación");
    }

    #[test]
    fn test_begin_ignores_duplicate_requests() {
        let config = SuggestConfig::new("http://localhost:9", None);
        let mut state = SuggestionState::default();
        state.begin(&config, ContentField::HeroSubtitle, "tema");
        assert!(state.is_in_flight(ContentField::HeroSubtitle));

        // Second click while in flight is a no-op, even for another field.
        state.begin(&config, ContentField::LocationBody, "otro");
        assert!(!state.is_in_flight(ContentField::LocationBody));
        assert!(state.is_in_flight(ContentField::HeroSubtitle));
    }
}
