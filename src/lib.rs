// Module declarations
pub mod config;
pub mod export;
pub mod generator;
pub mod models;
pub mod templates;
mod utils;
pub mod webhook;

// Re-export the UI-facing API
pub use config::GeneratorConfig;
pub use export::{export_markdown, render_markdown, ExportArtifact};
pub use generator::PrdGenerator;
pub use models::*;
pub use templates::generate_initial_sections;
pub use webhook::{
    classify_response, validate_webhook_url, ResponseKind, WebhookClient, WebhookError,
};
