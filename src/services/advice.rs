use crate::error::AdviceError;

/// Boundary to the generative-text service. One call per batch prompt; no
/// retry and no advice parsing here — both live in the pipeline.
#[async_trait::async_trait]
pub trait AdviceModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError>;
}
