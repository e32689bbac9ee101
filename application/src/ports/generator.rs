//! Result generator port
//!
//! Produces the result text for a prompt. The shipped adapter is a mock that
//! waits a fixed latency and applies the category template.

use async_trait::async_trait;
use omni_domain::{Category, Prompt};

/// Generation step invoked between entering and leaving `Generating`.
///
/// Infallible and not cancellable: once started it always yields a result.
#[async_trait]
pub trait ResultGenerator: Send + Sync {
    async fn generate(&self, prompt: &Prompt, category: Category) -> String;
}
