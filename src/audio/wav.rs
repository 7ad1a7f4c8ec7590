//! WAV loading (collapsed to mono) and 16-bit mono WAV writing.

use std::path::Path;

use crate::error::{LoadError, SaveError};

/// Load a WAV file as `(sample_rate, mono_samples)`
///
/// Channels are averaged per frame. Integer samples keep their raw scale
/// (a 16-bit value of 1000 loads as 1000.0); the engine normalizes later.
pub fn load_wav(path: impl AsRef<Path>) -> Result<(u32, Vec<f32>), LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let malformed = |source: hound::Error| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(malformed)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(LoadError::NoChannels(path.to_path_buf()));
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(malformed)?,
        hound::SampleFormat::Int => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f32))
            .collect::<Result<_, _>>()
            .map_err(malformed)?,
    };

    let mono: Vec<f32> = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    tracing::info!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels,
        bits = spec.bits_per_sample,
        frames = mono.len(),
        "Loaded WAV"
    );
    Ok((spec.sample_rate, mono))
}

/// Write samples as a 16-bit, single-channel PCM WAV
pub fn write_wav16(
    path: impl AsRef<Path>,
    sample_rate: u32,
    samples: &[i16],
) -> Result<(), SaveError> {
    let path = path.as_ref();
    let write_failed = |source: hound::Error| SaveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(write_failed)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(write_failed)?;
    }
    writer.finalize().map_err(write_failed)?;

    tracing::info!(
        path = %path.display(),
        sample_rate,
        frames = samples.len(),
        "Wrote WAV"
    );
    Ok(())
}
