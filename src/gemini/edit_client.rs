use super::read_json;
use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    models::{
        gemini::{
            first_image, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
            InlineData, RequestContent, RequestPart,
        },
        GenerationResult, InputImage, Modality,
    },
};
use reqwest::Client;
use std::sync::Arc;

/// Multimodal edits through `generateContent`.
#[derive(Clone)]
pub struct EditClient {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl EditClient {
    pub fn new(client: Client, config: Arc<GeminiConfig>) -> Self {
        Self { client, config }
    }

    pub fn build_request(image: &InputImage, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                    RequestPart::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec![Modality::Image, Modality::Text],
            },
        }
    }

    pub fn extract_image(response: GenerateContentResponse) -> Result<GenerationResult> {
        first_image(response.into_parts()).ok_or_else(|| {
            StudioError::NoImageProduced("no inline image part in response".into())
        })
    }

    pub async fn edit(&self, image: &InputImage, prompt: &str) -> Result<GenerationResult> {
        let model = &self.config.edit_model;
        let endpoint = self.config.endpoint(model, "generateContent");
        let payload = Self::build_request(image, prompt);

        log::info!("Editing image with model: {}", model);
        log::debug!(
            "Edit request: {} input bytes ({}), prompt length {}",
            image.bytes.len(),
            image.mime_type,
            prompt.len()
        );

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini edit request failed ({}): {}", endpoint, e);
                StudioError::GenerationFailed(e.to_string())
            })?;

        let body: GenerateContentResponse = read_json("Gemini", response).await?;
        Self::extract_image(body)
    }
}
