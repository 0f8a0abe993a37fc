use super::{require, UseCase};
use crate::{
    chunker,
    error::{Result, StudioError},
    export::ExportFile,
    gemini::ImageBackend,
    models::{GenerationRequest, GenerationResult, StoryStyle},
    prompts,
};
use async_trait::async_trait;
use futures::future::join_all;

pub const MIN_PAGES: usize = 1;
pub const MAX_PAGES: usize = 4;
pub const DEFAULT_PAGES: usize = 2;

#[derive(Debug, Clone)]
pub struct Storybook {
    pub story_text: String,
    pub style: StoryStyle,
    page_count: usize,
}

impl Default for Storybook {
    fn default() -> Self {
        Self {
            story_text: String::new(),
            style: StoryStyle::default(),
            page_count: DEFAULT_PAGES,
        }
    }
}

impl Storybook {
    pub fn new(story_text: impl Into<String>, style: StoryStyle, page_count: usize) -> Self {
        let mut storybook = Self {
            story_text: story_text.into(),
            style,
            page_count: DEFAULT_PAGES,
        };
        storybook.set_page_count(page_count);
        storybook
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn set_page_count(&mut self, pages: usize) {
        self.page_count = pages.clamp(MIN_PAGES, MAX_PAGES);
    }

    pub fn page_prompts(&self) -> Result<Vec<String>> {
        let chunks = chunker::split_story(&self.story_text, self.page_count);
        if chunks.is_empty() {
            return Err(StudioError::EmptyChunkResult);
        }
        Ok(chunks
            .iter()
            .map(|chunk| prompts::storybook_page_prompt(chunk, self.style))
            .collect())
    }
}

#[async_trait]
impl UseCase for Storybook {
    type Output = Vec<GenerationResult>;

    const SUBJECT: &'static str = "storybook page";
    const ACTION: &'static str = "generate storybook page";

    fn validate(&self) -> Result<()> {
        require(&self.story_text, "Please provide some story text.")
    }

    /// One request per page, all in flight at once on this task. Every call
    /// is awaited; a single failure discards the whole batch.
    async fn generate(&self, backend: &dyn ImageBackend) -> Result<Vec<GenerationResult>> {
        let requests: Vec<GenerationRequest> = self
            .page_prompts()?
            .into_iter()
            .map(|prompt| GenerationRequest::text_to_image(prompt, backend.output_format()))
            .collect();

        log::info!("Generating {} storybook pages", requests.len());
        let outcomes = join_all(requests.iter().map(|request| backend.execute(request))).await;

        let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();
        if failed > 0 {
            log::warn!(
                "{} of {} storybook pages failed, discarding batch",
                failed,
                outcomes.len()
            );
        }
        outcomes.into_iter().collect()
    }

    fn export_files(output: &Vec<GenerationResult>) -> Vec<ExportFile> {
        output
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                ExportFile::with_stem(&format!("storybook-page-{}", idx + 1), page.clone())
            })
            .collect()
    }
}
