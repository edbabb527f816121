// Local enrichment stand-in for the automation webhook

use std::sync::OnceLock;
use std::time::Duration;

use regex::{NoExpand, Regex};

use crate::models::{PrdSection, WebhookPayload, WebhookResponse};

// Compiled placeholder pattern
static PLACEHOLDER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_placeholder_pattern() -> &'static Regex {
    PLACEHOLDER_PATTERN.get_or_init(|| Regex::new(r"\[AI to [^\]]+\]").unwrap())
}

/// Replaces every `[AI to ...]` marker with the canned enrichment text for
/// that section and marks the section generated. Text outside the markers is
/// left untouched.
pub fn enrich_sections(sections: &[PrdSection]) -> Vec<PrdSection> {
    sections
        .iter()
        .map(|section| {
            let replacement = format!(
                "**AI-Enhanced Content for {}**\n\nThis section has been processed and enriched with AI-generated content based on your input. The actual content would be much more detailed and specific to your product requirements.",
                section.title
            );
            PrdSection {
                id: section.id.clone(),
                title: section.title.clone(),
                content: get_placeholder_pattern()
                    .replace_all(&section.content, NoExpand(&replacement))
                    .into_owned(),
                is_generated: true,
            }
        })
        .collect()
}

/// Deterministic fallback response used whenever the remote reply is
/// unusable. `delay` simulates remote processing time; tests pass zero.
pub async fn standin_response(payload: &WebhookPayload, delay: Duration) -> WebhookResponse {
    tokio::time::sleep(delay).await;

    WebhookResponse {
        success: true,
        prd_id: payload.prd_id.clone(),
        enriched_sections: enrich_sections(&payload.sections),
        error: None,
        message: None,
        processing_time: None,
    }
}
