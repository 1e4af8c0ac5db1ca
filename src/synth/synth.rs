//! Tone generation from waveform math.
//!
//! Each sample is computed independently at time `t = i / sample_rate`:
//! no oscillator state, no lookup tables, just the wave function evaluated
//! at `t`. Amplitude is baked in at synthesis time; playback applies no
//! further gain.

use std::f64::consts::TAU;

/// Reference output rate: mono, 16-bit signed, 44.1 kHz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Waveform shape. Closed set; every shape is handled exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// Generate `round(duration * sample_rate)` samples of the given tone.
///
/// `volume` is in `[0, 1]` and scales the peak to `round(32767 * volume)`.
/// With `decay`, the instantaneous frequency falls linearly from
/// `frequency` at `t = 0` to 0 Hz at `t = duration`. A zero or negative
/// duration yields an empty buffer; no other input is an error.
pub fn synthesize(
    frequency: f64,
    duration: f64,
    volume: f64,
    waveform: Waveform,
    decay: bool,
    sample_rate: u32,
) -> Vec<i16> {
    let n_samples = (duration * sample_rate as f64).round();
    if n_samples <= 0.0 {
        return Vec::new();
    }
    let peak = (32767.0 * volume).round();

    (0..n_samples as usize)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            let f = if decay {
                frequency * (1.0 - t / duration)
            } else {
                frequency
            };
            let value = match waveform {
                Waveform::Sine => peak * (TAU * f * t).sin(),
                // Strict > 0: an exact zero crossing (including t = 0) is the low half.
                Waveform::Square => {
                    if (TAU * f * t).sin() > 0.0 {
                        peak
                    } else {
                        -peak
                    }
                }
                // Centered ramp in [-peak, peak] that resets every period 1/f.
                Waveform::Sawtooth => peak * 2.0 * (f * t - (0.5 + f * t).floor()),
            };
            value as i16
        })
        .collect()
}
