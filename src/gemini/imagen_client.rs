use super::read_json;
use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    models::{
        gemini::{OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse},
        GenerationRequest, GenerationResult, OutputFormat,
    },
};
use reqwest::Client;
use std::sync::Arc;

/// Text-to-image through the Imagen `predict` endpoint. Always asks for a
/// single image.
#[derive(Clone)]
pub struct ImagenClient {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl ImagenClient {
    pub fn new(client: Client, config: Arc<GeminiConfig>) -> Self {
        Self { client, config }
    }

    pub fn build_request(request: &GenerationRequest) -> PredictRequest {
        PredictRequest {
            instances: vec![PredictInstance {
                prompt: request.prompt().to_string(),
            }],
            parameters: PredictParameters {
                sample_count: request.options().number_of_images,
                output_options: OutputOptions {
                    mime_type: request.options().output_format.mime_type().to_string(),
                },
            },
        }
    }

    pub fn extract_image(response: PredictResponse, format: OutputFormat) -> Result<GenerationResult> {
        response
            .first_image(format.mime_type())
            .ok_or_else(|| StudioError::NoImageProduced("predictions absent or empty".into()))
    }

    /// Generates from a bare prompt in the configured output format.
    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let request = GenerationRequest::text_to_image(prompt, self.config.output_format);
        self.submit(&request).await
    }

    /// Sends a prepared text-to-image request with its own options.
    pub async fn submit(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let model = &self.config.image_model;
        let format = request.options().output_format;
        let endpoint = self.config.endpoint(model, "predict");
        let payload = Self::build_request(request);

        log::info!("Generating image with model: {}", model);
        log::debug!("Imagen prompt: {}", request.prompt());

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Imagen request failed ({}): {}", endpoint, e);
                StudioError::GenerationFailed(e.to_string())
            })?;

        let body: PredictResponse = read_json("Imagen", response).await?;
        Self::extract_image(body, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_asks_for_one_png() {
        let request = GenerationRequest::text_to_image("a lighthouse", OutputFormat::Png);
        let value = serde_json::to_value(ImagenClient::build_request(&request)).unwrap();
        assert_eq!(
            value,
            json!({
                "instances": [{"prompt": "a lighthouse"}],
                "parameters": {
                    "sampleCount": 1,
                    "outputOptions": {"mimeType": "image/png"}
                }
            })
        );
    }

    #[test]
    fn request_options_pick_the_encoding() {
        let request = GenerationRequest::text_to_image("a lighthouse", OutputFormat::Jpeg);
        let payload = ImagenClient::build_request(&request);
        assert_eq!(payload.parameters.output_options.mime_type, "image/jpeg");
        assert_eq!(payload.parameters.sample_count, 1);
    }

    #[test]
    fn missing_predictions_is_no_image_produced() {
        let response: PredictResponse = serde_json::from_value(json!({})).unwrap();
        let err = ImagenClient::extract_image(response, OutputFormat::Png).unwrap_err();
        assert!(matches!(err, StudioError::NoImageProduced(_)));
    }

    #[test]
    fn prediction_without_mime_uses_requested_format() {
        let response: PredictResponse =
            serde_json::from_value(json!({"predictions": [{"bytesBase64Encoded": "QUJD"}]}))
                .unwrap();
        let result = ImagenClient::extract_image(response, OutputFormat::Jpeg).unwrap();
        assert_eq!(result, GenerationResult::new("QUJD", "image/jpeg"));
    }
}
