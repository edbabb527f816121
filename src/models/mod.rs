// Data models matching the frontend TypeScript types

pub mod state_machine;

pub use state_machine::{
    can_transition, is_terminal_state, transition_state, StateTransitionError,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-text product-idea fields collected by the input form.
///
/// Every field is optional at the type level; the template engine substitutes
/// placeholder instructions for fields that are empty after trimming. The UI
/// requires `product_concept` and `target_persona` before submission, which
/// [`ProductInput::validate`] enforces for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub product_name: String,
    pub product_concept: String,
    pub target_persona: String,
    pub business_objectives: String,
    pub competitive_requirements: String,
    pub timeline_constraints: String,
    pub resource_considerations: String,
    pub additional_context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Product concept is required")]
    MissingProductConcept,
    #[error("Target persona is required")]
    MissingTargetPersona,
}

impl ProductInput {
    /// Submission guard used by the form layer. The generation pipeline
    /// itself tolerates empty fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_concept.trim().is_empty() {
            return Err(ValidationError::MissingProductConcept);
        }
        if self.target_persona.trim().is_empty() {
            return Err(ValidationError::MissingTargetPersona);
        }
        Ok(())
    }
}

/// One named block of the document template.
///
/// `id` and `title` are fixed at creation; only `content` and `is_generated`
/// change afterwards (enrichment or manual edits).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrdSection {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_generated: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrdStatus {
    Draft,
    Processing,
    Completed,
    Error,
}

/// One generated PRD instance.
///
/// `input` is an immutable snapshot of what the document was generated from;
/// edits only ever touch `sections`. `error_message` is set exactly when
/// `status` is [`PrdStatus::Error`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrd {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub input: ProductInput,
    pub sections: Vec<PrdSection>,
    pub status: PrdStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GeneratedPrd {
    /// Creates a draft document around `input` and its template sections.
    pub fn new(input: ProductInput, sections: Vec<PrdSection>) -> Self {
        Self {
            id: format!("prd-{}", Uuid::new_v4()),
            timestamp: Utc::now(),
            input,
            sections,
            status: PrdStatus::Draft,
            error_message: None,
        }
    }

    /// Moves the document to `next`, enforcing the lifecycle table.
    pub fn transition_to(&mut self, next: PrdStatus) -> Result<(), StateTransitionError> {
        self.status = transition_state(self.status, next)?;
        if self.status != PrdStatus::Error {
            self.error_message = None;
        }
        Ok(())
    }
}

/// Request body sent to the automation webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub input: ProductInput,
    pub prd_id: String,
    pub sections: Vec<PrdSection>,
}

/// Response shape the webhook is expected (but not guaranteed) to return.
///
/// Every field is defaulted so a partially-shaped JSON body still
/// deserializes; bodies that do not parse at all are handled by the stand-in
/// fallback instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookResponse {
    pub success: bool,
    pub prd_id: String,
    pub enriched_sections: Vec<PrdSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}
