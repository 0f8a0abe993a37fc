pub mod editor;
pub mod meme;
pub mod poster;
pub mod storybook;

use crate::{
    error::Result,
    export::{ExportFile, FileSink},
    gemini::ImageBackend,
};
use async_trait::async_trait;

pub use editor::ImageEdit;
pub use meme::Meme;
pub use poster::Poster;
pub use storybook::Storybook;

/// The per-tab part of a controller: its inputs, how they are checked, and
/// how they become images.
#[async_trait]
pub trait UseCase: Clone + Send + Sync {
    type Output: Clone + Send + Sync;

    /// What gets made, as in "No poster was generated."
    const SUBJECT: &'static str;
    /// What the user asked for, as in "Failed to generate poster."
    const ACTION: &'static str;

    fn validate(&self) -> Result<()>;

    async fn generate(&self, backend: &dyn ImageBackend) -> Result<Self::Output>;

    fn export_files(output: &Self::Output) -> Vec<ExportFile>;
}

/// Where a controller is in its generate action. After an action ends the
/// controller reports the terminal phase it reached (`InvalidInput`,
/// `Succeeded` or `Failed`) until the next action starts, which stands in for
/// the return to idle. `Validating` is transient and never observed outside
/// `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    InvalidInput,
    Generating,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Validating | Phase::Generating)
    }
}

/// Loading, result and error bookkeeping shared by every tab.
pub struct Controller<U: UseCase> {
    inputs: U,
    phase: Phase,
    is_loading: bool,
    result: Option<U::Output>,
    error: Option<String>,
}

impl<U: UseCase> Controller<U> {
    pub fn new(inputs: U) -> Self {
        Self {
            inputs,
            phase: Phase::Idle,
            is_loading: false,
            result: None,
            error: None,
        }
    }

    pub fn inputs(&self) -> &U {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut U {
        &mut self.inputs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&U::Output> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_output(&mut self) {
        self.result = None;
        self.error = None;
    }

    /// Runs one generate action to completion and returns the phase it ended
    /// in. Invalid input never reaches the backend.
    pub async fn generate(&mut self, backend: &dyn ImageBackend) -> Phase {
        match self.begin() {
            Some(pending) => {
                let outcome = pending.run(backend).await;
                self.complete(outcome)
            }
            None => self.phase,
        }
    }

    /// First half of a generate action. Validates the inputs, then clears the
    /// previous output and enters `Generating` with the loading flag set.
    /// Returns the work to await, or `None` when the inputs were rejected.
    ///
    /// The returned value owns a snapshot of the inputs, so the controller
    /// stays readable while the backend call is in flight. Hand the outcome
    /// back through [`Controller::complete`].
    pub fn begin(&mut self) -> Option<PendingGeneration<U>> {
        self.phase = Phase::Validating;
        if let Err(err) = self.inputs.validate() {
            log::warn!("{}: invalid input: {}", U::ACTION, err);
            self.error = Some(err.user_message(U::SUBJECT, U::ACTION));
            self.phase = Phase::InvalidInput;
            return None;
        }

        self.clear_output();
        self.is_loading = true;
        self.phase = Phase::Generating;
        Some(PendingGeneration {
            inputs: self.inputs.clone(),
        })
    }

    /// Second half of a generate action: records the outcome of the work
    /// returned by `begin`. Ignored when no action is in progress.
    pub fn complete(&mut self, outcome: Result<U::Output>) -> Phase {
        if !self.is_loading {
            log::warn!("{}: completion without a pending action ignored", U::ACTION);
            return self.phase;
        }

        self.is_loading = false;
        match outcome {
            Ok(output) => {
                log::info!("{} succeeded", U::ACTION);
                self.result = Some(output);
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                log::error!("{} failed: {}", U::ACTION, err);
                self.result = None;
                self.error = Some(err.user_message(U::SUBJECT, U::ACTION));
                self.phase = Phase::Failed;
            }
        }
        self.phase
    }

    /// Files the current result would be saved as; empty without a result.
    pub fn export_files(&self) -> Vec<ExportFile> {
        self.result
            .as_ref()
            .map(U::export_files)
            .unwrap_or_default()
    }

    /// Hands every file of the current result to `sink`. Returns how many
    /// were handed over.
    pub fn export(&self, sink: &dyn FileSink) -> usize {
        let files = self.export_files();
        for file in &files {
            sink.save(file);
        }
        files.len()
    }
}

/// Backend work for one generate action, detached from its controller.
pub struct PendingGeneration<U: UseCase> {
    inputs: U,
}

impl<U: UseCase> PendingGeneration<U> {
    pub fn inputs(&self) -> &U {
        &self.inputs
    }

    pub async fn run(&self, backend: &dyn ImageBackend) -> Result<U::Output> {
        self.inputs.generate(backend).await
    }
}

impl<U: UseCase + Default> Default for Controller<U> {
    fn default() -> Self {
        Self::new(U::default())
    }
}

pub(crate) fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(crate::error::StudioError::MissingInput(message.to_string()));
    }
    Ok(())
}
