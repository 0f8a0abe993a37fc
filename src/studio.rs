use crate::{
    config::GeminiConfig,
    controller::{Controller, ImageEdit, Meme, Phase, Poster, Storybook},
    error::Result,
    export::{ExportFile, FileSink},
    gemini::{GeminiClient, ImageBackend},
    logger,
};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    ImageEditor,
    Storybook,
    Poster,
    Meme,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::ImageEditor, Tab::Storybook, Tab::Poster, Tab::Meme];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::ImageEditor => "Image Editor",
            Tab::Storybook => "Storybook",
            Tab::Poster => "Poster",
            Tab::Meme => "Meme",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four tools behind one shared backend. Each tab keeps its own state.
pub struct Studio {
    backend: Arc<dyn ImageBackend>,
    active_tab: Tab,
    pub editor: Controller<ImageEdit>,
    pub storybook: Controller<Storybook>,
    pub poster: Controller<Poster>,
    pub meme: Controller<Meme>,
}

impl Studio {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        Self {
            backend,
            active_tab: Tab::default(),
            editor: Controller::default(),
            storybook: Controller::default(),
            poster: Controller::default(),
            meme: Controller::default(),
        }
    }

    /// Startup path: reads the credential and builds the Gemini client.
    /// A missing key aborts here.
    pub fn from_env() -> Result<Self> {
        let config = GeminiConfig::from_env()?;
        Self::with_config(config)
    }

    pub fn with_config(config: GeminiConfig) -> Result<Self> {
        let client = GeminiClient::new(config)?;
        logger::log_studio_info(client.config());
        Ok(Self::new(Arc::new(client)))
    }

    pub fn tabs(&self) -> &'static [Tab] {
        &Tab::ALL
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            log::debug!("Switching tab: {} -> {}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    pub fn backend(&self) -> &Arc<dyn ImageBackend> {
        &self.backend
    }

    /// Runs the generate action of the active tab.
    pub async fn generate_active(&mut self) -> Phase {
        let backend = self.backend.clone();
        match self.active_tab {
            Tab::ImageEditor => self.editor.generate(backend.as_ref()).await,
            Tab::Storybook => self.storybook.generate(backend.as_ref()).await,
            Tab::Poster => self.poster.generate(backend.as_ref()).await,
            Tab::Meme => self.meme.generate(backend.as_ref()).await,
        }
    }

    pub fn active_phase(&self) -> Phase {
        match self.active_tab {
            Tab::ImageEditor => self.editor.phase(),
            Tab::Storybook => self.storybook.phase(),
            Tab::Poster => self.poster.phase(),
            Tab::Meme => self.meme.phase(),
        }
    }

    pub fn active_error(&self) -> Option<&str> {
        match self.active_tab {
            Tab::ImageEditor => self.editor.error(),
            Tab::Storybook => self.storybook.error(),
            Tab::Poster => self.poster.error(),
            Tab::Meme => self.meme.error(),
        }
    }

    pub fn active_exports(&self) -> Vec<ExportFile> {
        match self.active_tab {
            Tab::ImageEditor => self.editor.export_files(),
            Tab::Storybook => self.storybook.export_files(),
            Tab::Poster => self.poster.export_files(),
            Tab::Meme => self.meme.export_files(),
        }
    }

    pub fn export_active(&self, sink: &dyn FileSink) -> usize {
        match self.active_tab {
            Tab::ImageEditor => self.editor.export(sink),
            Tab::Storybook => self.storybook.export(sink),
            Tab::Poster => self.poster.export(sink),
            Tab::Meme => self.meme.export(sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;
    use crate::export::DirectorySink;
    use crate::testing::{Failure, FakeBackend};

    fn studio(backend: FakeBackend) -> (Studio, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        (Studio::new(backend.clone()), backend)
    }

    #[test]
    fn tabs_in_navigation_order() {
        let (studio, _) = studio(FakeBackend::new());
        let names: Vec<&str> = studio.tabs().iter().map(Tab::name).collect();
        assert_eq!(names, vec!["Image Editor", "Storybook", "Poster", "Meme"]);
        assert_eq!(studio.active_tab(), Tab::ImageEditor);
    }

    #[tokio::test]
    async fn generate_runs_only_the_active_tab() {
        let (mut studio, backend) = studio(FakeBackend::new());
        studio.poster.inputs_mut().text = "Grand Opening".into();
        studio.meme.inputs_mut().caption = "not me".into();

        studio.select_tab(Tab::Poster);
        assert_eq!(studio.generate_active().await, Phase::Succeeded);

        assert_eq!(backend.calls(), 1);
        assert!(studio.poster.result().is_some());
        assert!(studio.meme.result().is_none());
        assert_eq!(studio.meme.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn active_tab_reports_generating_mid_flight() {
        let (mut studio, _) = studio(FakeBackend::new());
        studio.select_tab(Tab::Poster);
        studio.poster.inputs_mut().text = "Grand Opening".into();

        let pending = studio.poster.begin().unwrap();
        assert_eq!(studio.active_phase(), Phase::Generating);
        assert!(studio.poster.is_loading());

        let outcome = pending.run(studio.backend().as_ref()).await;
        assert_eq!(studio.poster.complete(outcome), Phase::Succeeded);
        assert_eq!(studio.active_exports()[0].filename, "poster-background.png");
    }

    #[tokio::test]
    async fn errors_stay_with_their_tab() {
        let (mut studio, _) = studio(FakeBackend::new().failing_on("cat", Failure::Transport));
        studio.meme.inputs_mut().caption = "cat".into();
        studio.select_tab(Tab::Meme);
        studio.generate_active().await;
        assert!(studio.active_error().is_some());

        studio.select_tab(Tab::Storybook);
        assert_eq!(studio.active_error(), None);
        assert_eq!(studio.active_phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn storybook_export_writes_every_page() {
        let (mut studio, _) = studio(FakeBackend::new());
        studio.select_tab(Tab::Storybook);
        studio.storybook.inputs_mut().story_text = "A fox woke up. It found a hat. The end.".into();
        studio.storybook.inputs_mut().set_page_count(3);
        assert_eq!(studio.generate_active().await, Phase::Succeeded);

        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        assert_eq!(studio.export_active(&sink), 3);
        for page in 1..=3 {
            let path = dir.path().join(format!("storybook-page-{}.png", page));
            assert_eq!(std::fs::read(path).unwrap(), b"image".to_vec());
        }
    }

    #[test]
    fn startup_without_key_is_fatal() {
        let result = Studio::with_config(GeminiConfig::new(""));
        assert!(matches!(result, Err(StudioError::MissingCredential(_))));
    }
}
