//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (Hz, gain factors, ratios)
//! - Documented ranges and meanings
//! - Type safety where possible

mod audio;
mod sliders;

// Re-export all types
pub use audio::{band_edges, quantization, EqSettings, Equalization, ProcessingSettings};
pub use sliders::{SliderPositions, MAX_GAIN};
