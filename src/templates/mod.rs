// Section template engine for PRD generation

pub mod builtin;

use crate::models::{PrdSection, ProductInput};

/// Builds the eight canonical template sections for `input`, in document
/// order.
///
/// Total over any input: blank fields fall back to bracketed `[AI to ...]`
/// placeholder instructions, so every section comes back with non-empty
/// content and `is_generated = false`.
pub fn generate_initial_sections(input: &ProductInput) -> Vec<PrdSection> {
    vec![
        section(builtin::EXECUTIVE_SUMMARY, builtin::executive_summary(input)),
        section(builtin::STRATEGIC_CONTEXT, builtin::strategic_context(input)),
        section(builtin::USER_PERSONAS, builtin::user_personas(input)),
        section(builtin::USER_STORIES, builtin::USER_STORIES_TEMPLATE.to_string()),
        section(
            builtin::FEATURES_REQUIREMENTS,
            builtin::FEATURES_REQUIREMENTS_TEMPLATE.to_string(),
        ),
        section(builtin::SUCCESS_METRICS, builtin::SUCCESS_METRICS_TEMPLATE.to_string()),
        section(
            builtin::ACCEPTANCE_CRITERIA,
            builtin::ACCEPTANCE_CRITERIA_TEMPLATE.to_string(),
        ),
        section(builtin::TIMELINE_MILESTONES, builtin::timeline_milestones(input)),
    ]
}

fn section(id: &str, content: String) -> PrdSection {
    PrdSection {
        id: id.to_string(),
        // Canonical ids always resolve; the id doubles as the title if the
        // tables ever drift (pinned together by tests)
        title: builtin::section_title(id).unwrap_or(id).to_string(),
        content,
        is_generated: false,
    }
}
