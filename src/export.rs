use crate::error::Result;
use crate::models::GenerationResult;
use std::path::{Path, PathBuf};

/// A generated image paired with the filename it is offered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub image: GenerationResult,
}

impl ExportFile {
    pub fn new(filename: impl Into<String>, image: GenerationResult) -> Self {
        Self {
            filename: filename.into(),
            image,
        }
    }

    /// Names the file `{stem}.{ext}`, the extension taken from the image's
    /// MIME type.
    pub fn with_stem(stem: &str, image: GenerationResult) -> Self {
        let filename = format!("{}.{}", stem, image.extension());
        Self::new(filename, image)
    }
}

/// Where exported images end up. Saving is fire-and-forget.
pub trait FileSink: Send + Sync {
    fn save(&self, file: &ExportFile);
}

/// Writes exports into a local directory, overwriting same-named files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, file: &ExportFile) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&file.filename);
        std::fs::write(&path, file.image.decode()?)?;
        Ok(path)
    }
}

impl FileSink for DirectorySink {
    fn save(&self, file: &ExportFile) {
        match self.write(file) {
            Ok(path) => log::info!("💾 Image saved to: {}", path.display()),
            Err(e) => log::error!("Failed to save {}: {}", file.filename, e),
        }
    }
}
