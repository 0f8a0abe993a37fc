use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResult, InputImage, OutputFormat, RequestKind},
};
use async_trait::async_trait;

/// The remote image service as the controllers see it. One call per
/// invocation, no retries.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn edit_image(&self, image: &InputImage, prompt: &str) -> Result<GenerationResult>;

    async fn generate_from_text(&self, prompt: &str) -> Result<GenerationResult>;

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    /// Dispatches a prepared request. The default only forwards the prompt;
    /// backends that honour per-request options override it.
    async fn execute(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        match (request.kind(), request.input_image()) {
            (RequestKind::Edit, Some(image)) => self.edit_image(image, request.prompt()).await,
            _ => self.generate_from_text(request.prompt()).await,
        }
    }
}
