//! Tone library and audio output.
//!
//! The two sound effects are synthesized once at startup and replayed by
//! reference; playback is fire-and-forget through a detached rodio sink,
//! so overlapping triggers simply overlap. Losing the audio device is a
//! startup failure, never a per-frame concern.

pub mod audio;
