//! Pre-built sound buffers and their playback sink.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::synth::synth::{SAMPLE_RATE, Waveform, synthesize};

/// "Eat" effect: a short, high square-wave blip.
pub fn eat_tone() -> Vec<i16> {
    synthesize(1200.0, 0.05, 0.4, Waveform::Square, false, SAMPLE_RATE)
}

/// "Death" effect: a longer, low sawtooth sliding down to silence.
pub fn death_tone() -> Vec<i16> {
    synthesize(400.0, 0.5, 0.5, Waveform::Sawtooth, true, SAMPLE_RATE)
}

/// Holds the process-lifetime sound buffers and the output stream they
/// play through.
pub struct ToneLibrary {
    // Dropping the stream kills all playback; keep it alive with the buffers.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat: Vec<i16>,
    death: Vec<i16>,
}

impl ToneLibrary {
    /// Open the default audio device and synthesize both effects.
    /// Fails fast: a machine without audio output can't run the game.
    pub fn new() -> Self {
        let (stream, handle) =
            OutputStream::try_default().expect("Failed to open audio output");
        Self {
            _stream: stream,
            handle,
            eat: eat_tone(),
            death: death_tone(),
        }
    }

    pub fn play_eat(&self) {
        self.play(&self.eat);
    }

    pub fn play_death(&self) {
        self.play(&self.death);
    }

    /// Start playback from sample 0 on a fresh detached sink and return
    /// immediately. Concurrent triggers overlap; nothing queues or mixes.
    fn play(&self, samples: &[i16]) {
        let source = SamplesBuffer::new(1, SAMPLE_RATE, samples.to_vec());
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(source);
            sink.detach();
        }
    }
}
