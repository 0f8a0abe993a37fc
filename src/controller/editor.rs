use super::{require, Controller, UseCase};
use crate::{
    error::{Result, StudioError},
    export::ExportFile,
    gemini::ImageBackend,
    models::{EditStyle, GenerationRequest, GenerationResult, InputImage},
    prompts,
};
use async_trait::async_trait;

pub const EDITED_IMAGE_STEM: &str = "edited-image";

const MISSING_INPUT: &str = "Please upload an image and provide an edit prompt.";

#[derive(Debug, Clone, Default)]
pub struct ImageEdit {
    pub image: Option<InputImage>,
    pub prompt: String,
    pub style: EditStyle,
}

#[async_trait]
impl UseCase for ImageEdit {
    type Output = GenerationResult;

    const SUBJECT: &'static str = "image";
    const ACTION: &'static str = "edit image";

    fn validate(&self) -> Result<()> {
        match &self.image {
            Some(image) if !image.is_empty() => require(&self.prompt, MISSING_INPUT),
            _ => Err(StudioError::MissingInput(MISSING_INPUT.to_string())),
        }
    }

    async fn generate(&self, backend: &dyn ImageBackend) -> Result<GenerationResult> {
        let image = self
            .image
            .clone()
            .ok_or_else(|| StudioError::MissingInput(MISSING_INPUT.to_string()))?;
        let request = GenerationRequest::edit(image, prompts::edit_prompt(&self.prompt, self.style));
        backend.execute(&request).await
    }

    fn export_files(output: &GenerationResult) -> Vec<ExportFile> {
        vec![ExportFile::with_stem(EDITED_IMAGE_STEM, output.clone())]
    }
}

impl Controller<ImageEdit> {
    /// A new source image invalidates whatever was generated from the old one.
    pub fn set_image(&mut self, image: InputImage) {
        self.inputs_mut().image = Some(image);
        self.clear_output();
    }
}
