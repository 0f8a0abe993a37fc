//! Scripted backend for controller and studio tests.

use crate::{
    error::{Result, StudioError},
    gemini::ImageBackend,
    models::{GenerationResult, InputImage},
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NoImage,
    Transport,
}

pub struct FakeBackend {
    failures: Vec<(String, Failure)>,
    mime_type: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
            mime_type: "image/png".to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Any prompt containing `needle` fails with `failure`.
    pub fn failing_on(mut self, needle: &str, failure: Failure) -> Self {
        self.failures.push((needle.to_string(), failure));
        self
    }

    /// Successful responses are labelled with `mime_type` instead of PNG.
    pub fn answering_with(mut self, mime_type: &str) -> Self {
        self.mime_type = mime_type.to_string();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn respond(&self, prompt: &str, payload: &str) -> Result<GenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.failures.iter().find(|(needle, _)| prompt.contains(needle.as_str())) {
            Some((_, Failure::NoImage)) => {
                Err(StudioError::NoImageProduced("scripted empty response".into()))
            }
            Some((_, Failure::Transport)) => {
                Err(StudioError::GenerationFailed("scripted 503 Service Unavailable".into()))
            }
            None => Ok(GenerationResult::new(payload, self.mime_type.clone())),
        }
    }
}

#[async_trait]
impl ImageBackend for FakeBackend {
    async fn edit_image(&self, image: &InputImage, prompt: &str) -> Result<GenerationResult> {
        tokio::task::yield_now().await;
        self.respond(prompt, &image.to_base64())
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<GenerationResult> {
        tokio::task::yield_now().await;
        // "aW1hZ2U=" is base64 for "image"
        self.respond(prompt, "aW1hZ2U=")
    }
}
