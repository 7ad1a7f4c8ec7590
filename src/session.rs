//! Editing session over one loaded file.
//!
//! Keeps the original decoded buffer so every render starts from the source
//! audio, never from a previous render.

use std::path::{Path, PathBuf};

use crate::audio::{load_wav, process, write_wav16};
use crate::error::{LoadError, ProcessingError, SaveError};
use crate::params::ProcessingSettings;

/// Status shown after a failed render
pub const PROCESSING_FAILED: &str = "Error: Audio processing failed.";

/// Loaded source audio plus the last status message
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    sample_rate: u32,
    samples: Vec<f32>,
    status: String,
}

impl Session {
    /// Load a WAV file into a new session
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (sample_rate, samples) = load_wav(path)?;
        Ok(Self::from_samples(path, sample_rate, samples))
    }

    /// Wrap an already decoded buffer
    pub fn from_samples(path: impl Into<PathBuf>, sample_rate: u32, samples: Vec<f32>) -> Self {
        let path = path.into();
        let status = format!("Loaded: {}", display_name(&path));
        Self {
            path,
            sample_rate,
            samples,
            status,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Original mono samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Duration of the source audio in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Last status message
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Render the source audio with the given settings
    pub fn render(&mut self, settings: &ProcessingSettings) -> Result<Vec<i16>, ProcessingError> {
        match process(&self.samples, self.sample_rate, settings) {
            Ok(output) => {
                self.status = format!("Rendered {}", display_name(&self.path));
                Ok(output)
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Processing failed");
                self.status = PROCESSING_FAILED.to_string();
                Err(e)
            }
        }
    }

    /// Render and write a 16-bit mono WAV at the source sample rate
    pub fn save(
        &mut self,
        path: impl AsRef<Path>,
        settings: &ProcessingSettings,
    ) -> Result<(), SaveError> {
        let path = path.as_ref();
        let output = self.render(settings)?;
        if let Err(e) = write_wav16(path, self.sample_rate, &output) {
            self.status = format!("Error: could not save {}", display_name(path));
            return Err(e);
        }
        self.status = format!("Saved to {}", display_name(path));
        tracing::info!(path = %path.display(), "Saved processed audio");
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
