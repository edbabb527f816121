// Built-in PRD section templates

use crate::models::ProductInput;

/// Canonical section ids
pub const EXECUTIVE_SUMMARY: &str = "executive-summary";
pub const STRATEGIC_CONTEXT: &str = "strategic-context";
pub const USER_PERSONAS: &str = "user-personas";
pub const USER_STORIES: &str = "user-stories";
pub const FEATURES_REQUIREMENTS: &str = "features-requirements";
pub const SUCCESS_METRICS: &str = "success-metrics";
pub const ACCEPTANCE_CRITERIA: &str = "acceptance-criteria";
pub const TIMELINE_MILESTONES: &str = "timeline-milestones";

/// List all canonical section ids in document order
pub fn list_section_ids() -> Vec<&'static str> {
    vec![
        EXECUTIVE_SUMMARY,
        STRATEGIC_CONTEXT,
        USER_PERSONAS,
        USER_STORIES,
        FEATURES_REQUIREMENTS,
        SUCCESS_METRICS,
        ACCEPTANCE_CRITERIA,
        TIMELINE_MILESTONES,
    ]
}

/// Get the display title for a canonical section id
pub fn section_title(id: &str) -> Option<&'static str> {
    match id {
        EXECUTIVE_SUMMARY => Some("Executive Summary & Product Overview"),
        STRATEGIC_CONTEXT => Some("Strategic Context and Background"),
        USER_PERSONAS => Some("User Personas & Target Market"),
        USER_STORIES => Some("User Stories & Use Cases"),
        FEATURES_REQUIREMENTS => Some("Features & Requirements"),
        SUCCESS_METRICS => Some("Success Metrics & KPIs"),
        ACCEPTANCE_CRITERIA => Some("Acceptance Criteria"),
        TIMELINE_MILESTONES => Some("Timeline & Milestones"),
        _ => None,
    }
}

/// Embeds `value` unless it is blank, then the bracketed AI instruction
fn field_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn executive_summary(input: &ProductInput) -> String {
    format!(
        r#"## Product Name
{name}

## Product Vision
{vision}

## Problem Statement
[AI to articulate customer/user problem from concept: "{concept}"]

## Solution Overview
[AI to develop high-level approach and value proposition]

## Target Market
{market}

## Business Objectives
{objectives}"#,
        name = field_or(&input.product_name, "[AI to generate based on concept]"),
        vision = field_or(
            &input.business_objectives,
            "[AI to transform business objectives into compelling vision]"
        ),
        concept = input.product_concept,
        market = field_or(&input.target_persona, "[AI to expand target market analysis]"),
        objectives = field_or(&input.business_objectives, "[AI to structure business goals]"),
    )
}

pub fn strategic_context(input: &ProductInput) -> String {
    format!(
        r#"## Market Analysis
[AI to analyze market context from: "{competitive}"]

## Competitive Landscape
{landscape}

## Strategic Rationale
[AI to connect product concept to business strategy]

## Resource Requirements
{resources}"#,
        competitive = input.competitive_requirements,
        landscape = field_or(
            &input.competitive_requirements,
            "[AI to research and analyze competitors]"
        ),
        resources = field_or(
            &input.resource_considerations,
            "[AI to detail resource needs and constraints]"
        ),
    )
}

pub fn user_personas(input: &ProductInput) -> String {
    format!(
        r#"## Primary Persona
{persona}

## Secondary Personas
[AI to identify additional user segments]

## User Journey Mapping
[AI to map current state user journey and pain points]

## Market Sizing
[AI to estimate addressable market for each persona]"#,
        persona = field_or(
            &input.target_persona,
            "[AI to create detailed primary user persona]"
        ),
    )
}

pub fn timeline_milestones(input: &ProductInput) -> String {
    format!(
        r#"## Project Timeline
{timeline}

## Key Milestones
[AI to identify critical project milestones]

## Dependencies
[AI to map project dependencies and risk factors]

## Resource Allocation
{resources}"#,
        timeline = field_or(
            &input.timeline_constraints,
            "[AI to create realistic project timeline]"
        ),
        resources = field_or(
            &input.resource_considerations,
            "[AI to plan resource allocation over timeline]"
        ),
    )
}

// Template definitions for sections with no direct field embedding

pub const USER_STORIES_TEMPLATE: &str = r#"## Epic User Stories
[AI to generate 5-8 epic user stories from product concept]

## Detailed User Stories
[AI to break down epics into specific, testable user stories]

## User Scenarios
[AI to create realistic usage scenarios and workflows]

## Edge Cases
[AI to identify potential edge cases and error scenarios]"#;

pub const FEATURES_REQUIREMENTS_TEMPLATE: &str = r#"## Core Features (Must Have)
[AI to identify critical features for MVP]

## Important Features (Should Have)
[AI to list important but not critical features]

## Nice-to-Have Features
[AI to suggest enhancement features for future releases]

## Technical Requirements
[AI to outline technical specifications and constraints]

## Integration Requirements
[AI to identify external system integrations needed]"#;

pub const SUCCESS_METRICS_TEMPLATE: &str = r#"## Key Performance Indicators (KPIs)
[AI to define measurable success metrics]

## User Engagement Metrics
[AI to specify user behavior and engagement tracking]

## Business Metrics
[AI to align metrics with business objectives]

## Quality Metrics
[AI to define quality and performance standards]

## Measurement Framework
[AI to establish tracking and reporting methodology]"#;

pub const ACCEPTANCE_CRITERIA_TEMPLATE: &str = r#"## Feature Acceptance Criteria
[AI to create testable acceptance criteria for each feature]

## Definition of Done
[AI to establish completion criteria]

## Quality Gates
[AI to define quality checkpoints and testing requirements]

## Launch Criteria
[AI to specify go-live requirements and conditions]"#;
