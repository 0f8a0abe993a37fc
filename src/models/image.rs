use crate::error::{Result, StudioError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type.to_ascii_lowercase().as_str() {
            "image/png" => Some(OutputFormat::Png),
            "image/jpeg" | "image/jpg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Image,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Edit,
    TextToImage,
}

/// Source image for an edit, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl InputImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_for_path(path).ok_or_else(|| {
            StudioError::MissingInput(format!(
                "Unsupported image type: {}",
                path.display()
            ))
        })?;
        let bytes = std::fs::read(path)?;
        Ok(Self::new(bytes, mime_type))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub number_of_images: u32,
    pub output_format: OutputFormat,
    pub response_modalities: Vec<Modality>,
}

/// One outbound call. Only `edit` carries an input image, only
/// `text_to_image` fixes the image count and encoding.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    kind: RequestKind,
    prompt: String,
    input_image: Option<InputImage>,
    options: GenerationOptions,
}

impl GenerationRequest {
    pub fn edit(image: InputImage, prompt: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Edit,
            prompt: prompt.into(),
            input_image: Some(image),
            options: GenerationOptions {
                number_of_images: 1,
                output_format: OutputFormat::Png,
                response_modalities: vec![Modality::Image, Modality::Text],
            },
        }
    }

    pub fn text_to_image(prompt: impl Into<String>, output_format: OutputFormat) -> Self {
        Self {
            kind: RequestKind::TextToImage,
            prompt: prompt.into(),
            input_image: None,
            options: GenerationOptions {
                number_of_images: 1,
                output_format,
                response_modalities: vec![Modality::Image],
            },
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn input_image(&self) -> Option<&InputImage> {
        self.input_image.as_ref()
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub image_base64: String, // Base64 encoded
    pub mime_type: String,
}

impl GenerationResult {
    pub fn new(image_base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            image_base64: image_base64.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.image_base64)
    }

    /// File extension matching the payload encoding. Unknown types fall back
    /// to `png`.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.to_ascii_lowercase().as_str() {
            "image/webp" => "webp",
            "image/gif" => "gif",
            mime => OutputFormat::from_mime_type(mime)
                .unwrap_or_default()
                .extension(),
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(self.image_base64.as_bytes())
            .map_err(|e| StudioError::GenerationFailed(format!("invalid image payload: {}", e)))
    }
}

fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
