// Runtime configuration for the generation pipeline

use std::env;
use std::time::Duration;

use crate::webhook::validate_webhook_url;

/// Default enrichment endpoint; deployments point elsewhere via
/// `PRD_STUDIO_WEBHOOK_URL`.
const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/prd-studio-enrichment";

/// Simulated processing time for locally enriched responses
const DEFAULT_STANDIN_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Endpoint receiving the `{input, prdId, sections}` payload
    pub webhook_url: String,
    /// Delay awaited before a stand-in response resolves
    pub standin_delay: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            standin_delay: Duration::from_millis(DEFAULT_STANDIN_DELAY_MS),
        }
    }
}

impl GeneratorConfig {
    /// Builds a config from `PRD_STUDIO_WEBHOOK_URL` and
    /// `PRD_STUDIO_STANDIN_DELAY_MS`, falling back to defaults. Logs a
    /// warning when the endpoint is not a recognized automation host, which
    /// is expected for staging and test setups.
    pub fn from_env() -> Self {
        let webhook_url = env::var("PRD_STUDIO_WEBHOOK_URL")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        let standin_delay = env::var("PRD_STUDIO_STANDIN_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(DEFAULT_STANDIN_DELAY_MS));

        let config = Self {
            webhook_url,
            standin_delay,
        };
        config.warn_on_suspect_url();
        config
    }

    fn warn_on_suspect_url(&self) {
        if !validate_webhook_url(&self.webhook_url) {
            log::warn!(
                "Webhook URL {} is not a recognized automation endpoint",
                self.webhook_url
            );
        }
    }
}
