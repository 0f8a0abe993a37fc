//! Core of a Gemini-backed creative suite: an image editor, a storybook
//! illustrator, and poster and meme background generators, each driven by
//! the same controller over one shared image backend.

pub mod chunker;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompts;
pub mod studio;

#[cfg(test)]
pub(crate) mod testing;

pub use config::GeminiConfig;
pub use controller::{
    Controller, ImageEdit, Meme, PendingGeneration, Phase, Poster, Storybook, UseCase,
};
pub use error::{Result, StudioError};
pub use export::{DirectorySink, ExportFile, FileSink};
pub use gemini::{GeminiClient, ImageBackend};
pub use models::{
    ColorTheme, EditStyle, GenerationRequest, GenerationResult, InputImage, MemeStyle, Modality,
    OutputFormat, PosterStyle, RequestKind, StoryStyle,
};
pub use studio::{Studio, Tab};
