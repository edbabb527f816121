// PRD generation orchestration and lifecycle state

use std::sync::{Arc, Mutex};

use log::{error, info, warn};

use crate::config::GeneratorConfig;
use crate::models::{GeneratedPrd, PrdSection, PrdStatus, ProductInput, WebhookPayload};
use crate::templates::generate_initial_sections;
use crate::utils::lock_mutex_recover;
use crate::webhook::WebhookClient;

/// Mutable slots owned by the orchestrator: the single current document, the
/// in-flight flag, and the last error surfaced to the UI.
#[derive(Debug, Default)]
struct GeneratorState {
    current: Option<GeneratedPrd>,
    is_processing: bool,
    last_error: Option<String>,
}

/// Owns the document lifecycle: template generation, webhook enrichment,
/// manual section edits, reset.
///
/// Cloning shares the same underlying state, so a UI layer and background
/// tasks can hold separate handles. The state lock is only taken for
/// synchronous read/modify steps and never held across an await.
#[derive(Debug, Clone)]
pub struct PrdGenerator {
    state: Arc<Mutex<GeneratorState>>,
    webhook: WebhookClient,
}

impl PrdGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(GeneratorState::default())),
            webhook: WebhookClient::new(config.webhook_url, config.standin_delay),
        }
    }

    /// Generates a fresh document for `input` and runs it through webhook
    /// enrichment.
    ///
    /// Each call supersedes the previous document immediately. The eventual
    /// webhook outcome is keyed to the document id it was started for and is
    /// applied only while that document is still current; outcomes for
    /// superseded documents are discarded.
    pub async fn generate(&self, input: ProductInput) {
        let sections = generate_initial_sections(&input);
        let mut prd = GeneratedPrd::new(input, sections);
        let payload = WebhookPayload {
            input: prd.input.clone(),
            prd_id: prd.id.clone(),
            sections: prd.sections.clone(),
        };
        let prd_id = prd.id.clone();

        if let Err(e) = prd.transition_to(PrdStatus::Processing) {
            error!("Could not start generation for PRD {}: {}", prd_id, e);
            return;
        }

        {
            let mut state = lock_mutex_recover(&self.state);
            state.current = Some(prd);
            state.is_processing = true;
            state.last_error = None;
        }

        info!("Generating PRD {} ({} sections)", prd_id, payload.sections.len());

        match self.webhook.send_prd_to_webhook(&payload).await {
            Ok(response) if response.success => {
                self.apply_completion(&prd_id, response.enriched_sections);
            }
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| "Unknown error from webhook".to_string());
                self.apply_failure(&prd_id, message);
            }
            Err(e) => self.apply_failure(&prd_id, e.to_string()),
        }
    }

    /// Replaces a section's content and marks it as resolved content.
    /// Silently does nothing when no document exists or the id is unknown.
    pub fn update_section(&self, section_id: &str, content: &str) {
        let mut state = lock_mutex_recover(&self.state);
        if let Some(prd) = state.current.as_mut() {
            if let Some(section) = prd.sections.iter_mut().find(|s| s.id == section_id) {
                section.content = content.to_string();
                section.is_generated = true;
            }
        }
    }

    /// Discards the current document and clears the last error and the
    /// in-flight flag. An in-flight webhook call keeps running; its result
    /// no longer matches any current document and is discarded on arrival.
    pub fn reset(&self) {
        let mut state = lock_mutex_recover(&self.state);
        state.current = None;
        state.last_error = None;
        state.is_processing = false;
        info!("PRD state reset");
    }

    /// Snapshot of the current document, if any
    pub fn current_prd(&self) -> Option<GeneratedPrd> {
        lock_mutex_recover(&self.state).current.clone()
    }

    /// True while a generation's webhook call is in flight
    pub fn is_processing(&self) -> bool {
        lock_mutex_recover(&self.state).is_processing
    }

    /// Message from the most recent failed generation, cleared by the next
    /// generate call or by reset
    pub fn last_error(&self) -> Option<String> {
        lock_mutex_recover(&self.state).last_error.clone()
    }

    /// Applies a successful enrichment if `prd_id` still identifies the
    /// current document.
    fn apply_completion(&self, prd_id: &str, enriched_sections: Vec<PrdSection>) {
        let mut guard = lock_mutex_recover(&self.state);
        let state = &mut *guard;
        match state.current.as_mut() {
            Some(prd) if prd.id == prd_id => {
                if let Err(e) = prd.transition_to(PrdStatus::Completed) {
                    error!("Could not complete PRD {}: {}", prd_id, e);
                    return;
                }
                prd.sections = enriched_sections;
                state.is_processing = false;
                info!("PRD {} enriched and completed", prd_id);
            }
            _ => {
                warn!("Discarding enrichment result for superseded PRD {}", prd_id);
            }
        }
    }

    /// Records a failed generation if `prd_id` still identifies the current
    /// document.
    fn apply_failure(&self, prd_id: &str, message: String) {
        let mut guard = lock_mutex_recover(&self.state);
        let state = &mut *guard;
        match state.current.as_mut() {
            Some(prd) if prd.id == prd_id => {
                error!("PRD {} generation failed: {}", prd_id, message);
                if let Err(e) = prd.transition_to(PrdStatus::Error) {
                    error!("Could not mark PRD {} failed: {}", prd_id, e);
                    return;
                }
                prd.error_message = Some(message.clone());
                state.last_error = Some(message);
                state.is_processing = false;
            }
            _ => {
                warn!(
                    "Discarding failure for superseded PRD {}: {}",
                    prd_id, message
                );
            }
        }
    }
}
