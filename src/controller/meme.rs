use super::{require, UseCase};
use crate::{
    error::Result,
    export::ExportFile,
    gemini::ImageBackend,
    models::{GenerationRequest, GenerationResult, MemeStyle},
    prompts,
};
use async_trait::async_trait;

pub const MEME_STEM: &str = "meme-background";

#[derive(Debug, Clone, Default)]
pub struct Meme {
    pub caption: String,
    pub style: MemeStyle,
}

#[async_trait]
impl UseCase for Meme {
    type Output = GenerationResult;

    const SUBJECT: &'static str = "meme background";
    const ACTION: &'static str = "generate meme background";

    fn validate(&self) -> Result<()> {
        require(&self.caption, "Please provide a caption for the meme.")
    }

    async fn generate(&self, backend: &dyn ImageBackend) -> Result<GenerationResult> {
        let prompt = prompts::meme_prompt(&self.caption, self.style);
        let request = GenerationRequest::text_to_image(prompt, backend.output_format());
        backend.execute(&request).await
    }

    fn export_files(output: &GenerationResult) -> Vec<ExportFile> {
        vec![ExportFile::with_stem(MEME_STEM, output.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Controller, Phase};
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn meme_uses_caption_and_style() {
        let backend = FakeBackend::new();
        let mut controller = Controller::new(Meme {
            caption: "One does not simply...".into(),
            style: MemeStyle::Surreal,
        });

        assert_eq!(controller.generate(&backend).await, Phase::Succeeded);
        assert_eq!(
            backend.prompts(),
            vec![prompts::meme_prompt("One does not simply...", MemeStyle::Surreal)]
        );
        assert_eq!(
            controller.result().map(|r| r.data_url()),
            Some("data:image/png;base64,aW1hZ2U=".to_string())
        );
    }
}
