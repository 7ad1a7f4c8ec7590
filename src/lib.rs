//! WaveShaper library - spectral EQ and compression for mono audio

pub mod audio;
pub mod cli;
pub mod error;
pub mod params;
pub mod session;

pub use error::{LoadError, ProcessingError, SaveError};
