pub mod edit_client;
pub mod imagen_client;
pub mod traits;

use crate::{
    config::GeminiConfig,
    error::{Result, StudioError},
    logger,
    models::{
        gemini::ApiErrorEnvelope, GenerationRequest, GenerationResult, InputImage, OutputFormat,
        RequestKind,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub use edit_client::EditClient;
pub use imagen_client::ImagenClient;
pub use traits::ImageBackend;

/// Process-wide handle to the Gemini and Imagen endpoints. Built once at
/// startup; immutable afterwards and cheap to clone.
#[derive(Clone)]
pub struct GeminiClient {
    edit_client: EditClient,
    imagen_client: ImagenClient,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| StudioError::Config(format!("failed to build HTTP client: {}", e)))?;
        Self::with_http_client(config, client)
    }

    /// Same as `new` but over a caller-supplied `reqwest::Client`.
    pub fn with_http_client(config: GeminiConfig, client: Client) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);

        Ok(Self {
            edit_client: EditClient::new(client.clone(), config.clone()),
            imagen_client: ImagenClient::new(client, config.clone()),
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    pub fn edit(&self) -> &EditClient {
        &self.edit_client
    }

    pub fn imagen(&self) -> &ImagenClient {
        &self.imagen_client
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl ImageBackend for GeminiClient {
    async fn edit_image(&self, image: &InputImage, prompt: &str) -> Result<GenerationResult> {
        let _timer = logger::timer("gemini edit");
        self.edit_client.edit(image, prompt).await
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<GenerationResult> {
        let _timer = logger::timer("imagen generate");
        self.imagen_client.generate(prompt).await
    }

    fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    async fn execute(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        match (request.kind(), request.input_image()) {
            (RequestKind::Edit, Some(image)) => self.edit_image(image, request.prompt()).await,
            _ => {
                let _timer = logger::timer("imagen generate");
                self.imagen_client.submit(request).await
            }
        }
    }
}

/// Turns a non-success status into `GenerationFailed`, preferring the
/// service's own error message, then decodes the body.
pub(crate) async fn read_json<T: DeserializeOwned>(service: &str, response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        StudioError::GenerationFailed(format!("{} response could not be read: {}", service, e))
    })?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        log::error!("{} returned {}: {}", service, status, message);
        return Err(StudioError::GenerationFailed(format!(
            "{} returned {}: {}",
            service,
            status.as_u16(),
            message
        )));
    }

    parse_body(service, &body)
}

pub(crate) fn parse_body<T: DeserializeOwned>(service: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("{} response parse error: {}", service, e);
        StudioError::GenerationFailed(format!("{} returned malformed JSON: {}", service, e))
    })
}
