use super::{require, UseCase};
use crate::{
    error::Result,
    export::ExportFile,
    gemini::ImageBackend,
    models::{ColorTheme, GenerationRequest, GenerationResult, PosterStyle},
    prompts,
};
use async_trait::async_trait;

pub const POSTER_STEM: &str = "poster-background";

#[derive(Debug, Clone, Default)]
pub struct Poster {
    pub text: String,
    pub style: PosterStyle,
    pub color_theme: ColorTheme,
}

#[async_trait]
impl UseCase for Poster {
    type Output = GenerationResult;

    const SUBJECT: &'static str = "poster";
    const ACTION: &'static str = "generate poster";

    fn validate(&self) -> Result<()> {
        require(&self.text, "Please provide text for the poster.")
    }

    async fn generate(&self, backend: &dyn ImageBackend) -> Result<GenerationResult> {
        let prompt = prompts::poster_prompt(&self.text, self.style, self.color_theme);
        let request = GenerationRequest::text_to_image(prompt, backend.output_format());
        backend.execute(&request).await
    }

    fn export_files(output: &GenerationResult) -> Vec<ExportFile> {
        vec![ExportFile::with_stem(POSTER_STEM, output.clone())]
    }
}
