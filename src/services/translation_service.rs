// src/services/translation_service.rs
//
// Translation Service - Streaming Chapter Translation
//
// Gathers the book's glossary and the global cast, composes the instruction
// prompt, and drives the streaming generation client. Fragments flow to the
// caller's sink as they arrive; the caller owns accumulation, so whatever
// was delivered before a failure or a cancellation is kept.
//
// CRITICAL RULES:
// - Empty source text is rejected before any network activity
// - Nothing here retries; a failed run is re-invoked by the user or not

use std::sync::Arc;

use crate::domain::DomainError;
use crate::error::AppResult;
use crate::events::{EventBus, TranslationCompleted};
use crate::integrations::generation::{CancelToken, GenerationClient, StreamOutcome};
use crate::repositories::{CharacterRepository, GlossaryRepository, RelationRepository};
use crate::services::prompt_builder::build_translation_prompt;

/// Request to translate one chapter's source text
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub book_id: String,
    pub source_text: String,
}

pub struct TranslationService {
    glossary_repo: Arc<dyn GlossaryRepository>,
    character_repo: Arc<dyn CharacterRepository>,
    relation_repo: Arc<dyn RelationRepository>,
    client: Arc<dyn GenerationClient>,
    event_bus: EventBus,
}

impl TranslationService {
    pub fn new(
        glossary_repo: Arc<dyn GlossaryRepository>,
        character_repo: Arc<dyn CharacterRepository>,
        relation_repo: Arc<dyn RelationRepository>,
        client: Arc<dyn GenerationClient>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            glossary_repo,
            character_repo,
            relation_repo,
            client,
            event_bus,
        }
    }

    /// Stream a translation of `source_text` into `on_fragment`
    ///
    /// Returns how the stream ended; a provider failure surfaces as
    /// `AppError::Generation` and leaves already-delivered fragments alone.
    pub async fn translate_streaming(
        &self,
        request: TranslateRequest,
        cancel: &CancelToken,
        on_fragment: &mut (dyn FnMut(&str) + Send),
    ) -> AppResult<StreamOutcome> {
        if request.source_text.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Source text cannot be empty".to_string(),
            )
            .into());
        }

        let glossary = self.glossary_repo.list_for_book(&request.book_id)?;
        let characters = self.character_repo.list_all()?;
        let relations = self.relation_repo.list_all()?;

        let prompt =
            build_translation_prompt(&glossary, &characters, &relations, &request.source_text);

        let mut fragments = 0usize;
        let mut output_chars = 0usize;
        let mut sink = |text: &str| {
            fragments += 1;
            output_chars += text.chars().count();
            on_fragment(text);
        };

        let outcome = self.client.stream_generate(&prompt, cancel, &mut sink).await?;

        if outcome == StreamOutcome::Completed {
            self.event_bus.emit(TranslationCompleted::new(
                request.book_id,
                fragments,
                output_chars,
            ));
        }

        Ok(outcome)
    }
}
