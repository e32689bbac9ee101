//! Simulated generator: waits a fixed latency, then renders the category
//! template.

use async_trait::async_trait;
use omni_application::ResultGenerator;
use omni_domain::{Category, Prompt, render_result};
use std::time::Duration;
use tracing::debug;

/// Mock generator with a fixed simulated latency
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    latency: Duration,
}

impl TemplateGenerator {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Generator that returns immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ResultGenerator for TemplateGenerator {
    async fn generate(&self, prompt: &Prompt, category: Category) -> String {
        debug!("Simulating {} generation ({:?})", category, self.latency);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        render_result(prompt.content(), category)
    }
}
