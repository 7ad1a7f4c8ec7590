//! Property-based tests for the spectral transform
//!
//! These tests use proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use waveshaper::audio::*;
use waveshaper::params::{EqSettings, Equalization, ProcessingSettings};
use waveshaper::ProcessingError;

fn eq_strategy() -> impl Strategy<Value = Equalization> {
    prop_oneof![
        Just(Equalization::NoEqualization),
        (0.0f64..4.0, 0.0f64..4.0, 0.0f64..4.0)
            .prop_map(|(b, m, t)| Equalization::Equalize(EqSettings::new(b, m, t))),
    ]
}

proptest! {
    /// Property: output length always matches input length
    #[test]
    fn length_is_preserved(
        samples in prop::collection::vec(-32768.0f32..32767.0, 1..2000),
        sample_rate in 1u32..192_000,
        eq in eq_strategy(),
        compression in 0.0f64..1.5,
    ) {
        let output = transform(&samples, sample_rate, eq, compression).unwrap();
        prop_assert_eq!(output.len(), samples.len());
    }

    /// Property: output never exceeds full scale and any non-silent output touches it
    #[test]
    fn output_is_peak_normalized(
        samples in prop::collection::vec(-1.0f32..1.0, 1..1000),
        eq in eq_strategy(),
        compression in 0.0f64..1.0,
    ) {
        let output = transform(&samples, 44100, eq, compression).unwrap();
        let peak = output.iter().map(|&s| (s as i32).abs()).max().unwrap_or(0);
        prop_assert!(peak <= 32767);
        prop_assert!(peak == 0 || peak == 32767, "peak {}", peak);
    }

    /// Property: same input and settings give identical output
    #[test]
    fn transform_is_deterministic(
        samples in prop::collection::vec(-1000.0f32..1000.0, 1..1000),
        eq in eq_strategy(),
    ) {
        let first = transform(&samples, 48000, eq, 0.0).unwrap();
        let second = transform(&samples, 48000, eq, 0.0).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a higher ratio never keeps more bins
    #[test]
    fn compression_is_monotonic(
        samples in prop::collection::vec(-1.0f32..1.0, 1..1000),
        r1 in 0.0f64..1.0,
        delta in 0.0f64..1.0,
    ) {
        let spectrum = forward(&samples);
        let kept_low = compress(&spectrum, r1).nonzero_bins();
        let kept_high = compress(&spectrum, r1 + delta).nonzero_bins();
        prop_assert!(kept_high <= kept_low);
    }

    /// Property: every bin belongs to exactly one band
    #[test]
    fn bands_partition_every_axis(
        len in 1usize..50_000,
        sample_rate in 1u32..192_000,
    ) {
        let axis = frequency_axis(len, sample_rate);
        prop_assert_eq!(axis.len(), len / 2 + 1);

        let ranges = BandRanges::from_axis(&axis);
        for (k, &hz) in axis.iter().enumerate() {
            let owners = Band::ALL
                .iter()
                .filter(|&&band| ranges.get(band).contains(&k))
                .count();
            prop_assert_eq!(owners, 1);
            prop_assert!(ranges.get(Band::for_frequency(hz)).contains(&k));
        }
    }

    /// Property: silence in, silence out
    #[test]
    fn silence_stays_silent(
        len in 1usize..2000,
        eq in eq_strategy(),
        compression in 0.0f64..1.5,
    ) {
        let output = transform(&vec![0.0f32; len], 44100, eq, compression).unwrap();
        prop_assert!(output.iter().all(|&s| s == 0));
    }
}

#[test]
fn empty_buffer_is_an_error_for_any_settings() {
    let settings = [
        ProcessingSettings::default(),
        ProcessingSettings::new(EqSettings::new(2.0, 1.0, 0.5), 0.5),
        ProcessingSettings::new(Equalization::NoEqualization, 1.0),
    ];
    for settings in settings {
        assert_eq!(
            process(&[], 44100, &settings),
            Err(ProcessingError::EmptyBuffer)
        );
    }
}
