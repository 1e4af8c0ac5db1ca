//! Waveform synthesizer.
//!
//! Pure functions mapping tone parameters to finite buffers of signed 16-bit
//! mono samples. No playback here; the audio module owns the output sink.
//!
//! - **Sine**: plain `sin(2πft)`.
//! - **Square**: sign of the sine, 50% duty, no hysteresis.
//! - **Sawtooth**: centered ramp resetting every period.
//! - **Decay**: instantaneous frequency falls linearly to 0 Hz at the end
//!   of the buffer (the degenerate tail is the intended retro effect).

pub mod synth;
