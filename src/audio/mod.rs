//! Spectral processing of mono audio buffers.
//!
//! Forward FFT, banded equalization, magnitude-threshold compression,
//! inverse FFT and 16-bit quantization, plus WAV I/O around them.

mod bands;
mod compression;
mod engine;
mod fft;
mod quantize;
mod wav;

// Re-export public types
pub use bands::{equalize, Band, BandRanges};
pub use compression::{compress, magnitude_threshold};
pub use engine::{process, reconstruct, transform};
pub use fft::{forward, frequency_axis, inverse, Spectrum};
pub use quantize::{normalize, peak, quantize};
pub use wav::{load_wav, write_wav16};
