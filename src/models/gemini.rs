//! Wire types for the Gemini `generateContent` and Imagen `predict` endpoints.

use super::image::{GenerationResult, Modality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<Modality>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPart {
    #[serde(default, alias = "inline_data")]
    pub inline_data: Option<InlineData>,
    #[serde(default)]
    pub text: Option<String>,
}

/// A content part as far as image extraction cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Image(InlineData),
    Text(String),
    Other,
}

impl From<RawPart> for ResponsePart {
    fn from(part: RawPart) -> Self {
        match (part.inline_data, part.text) {
            (Some(inline), _) if !inline.data.is_empty() => ResponsePart::Image(inline),
            (_, Some(text)) => ResponsePart::Text(text),
            _ => ResponsePart::Other,
        }
    }
}

impl GenerateContentResponse {
    /// Parts of the first candidate, in response order.
    pub fn into_parts(self) -> Vec<ResponsePart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(ResponsePart::from).collect())
            .unwrap_or_default()
    }
}

/// First image-bearing part wins. Parts without a MIME type are assumed PNG.
pub fn first_image(parts: impl IntoIterator<Item = ResponsePart>) -> Option<GenerationResult> {
    parts.into_iter().find_map(|part| match part {
        ResponsePart::Image(inline) => {
            let mime_type = if inline.mime_type.is_empty() {
                "image/png".to_string()
            } else {
                inline.mime_type
            };
            Some(GenerationResult::new(inline.data, mime_type))
        }
        ResponsePart::Text(_) | ResponsePart::Other => None,
    })
}

#[derive(Debug, Serialize)]
pub struct PredictInstance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub sample_count: u32,
    pub output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Option<Vec<Prediction>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl PredictResponse {
    pub fn first_image(self, fallback_mime: &str) -> Option<GenerationResult> {
        self.predictions?.into_iter().find_map(|prediction| {
            let data = prediction.bytes_base64_encoded.filter(|b| !b.is_empty())?;
            let mime_type = prediction
                .mime_type
                .unwrap_or_else(|| fallback_mime.to_string());
            Some(GenerationResult::new(data, mime_type))
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
