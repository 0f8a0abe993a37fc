use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    /// A required form field was left empty. The message is shown as-is.
    #[error("{0}")]
    MissingInput(String),

    #[error("Could not split story into pages. Please provide more text.")]
    EmptyChunkResult,

    /// The service answered but carried no image payload.
    #[error("No image produced: {0}")]
    NoImageProduced(String),

    /// Transport failure, non-success status, or an unreadable response body.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("{0} environment variable not set")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    /// Short message for the error surface of a controller. `subject` names
    /// the thing being made ("poster"), `action` the verb phrase
    /// ("generate poster").
    pub fn user_message(&self, subject: &str, action: &str) -> String {
        match self {
            StudioError::MissingInput(msg) => msg.clone(),
            StudioError::EmptyChunkResult => self.to_string(),
            StudioError::NoImageProduced(_) => format!("No {} was generated.", subject),
            StudioError::GenerationFailed(_) => {
                format!("Failed to {}. Please try again.", action)
            }
            StudioError::MissingCredential(_) | StudioError::Config(_) => self.to_string(),
            StudioError::Io(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
