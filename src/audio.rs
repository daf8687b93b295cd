//! Recitation playback over `rodio`.
//!
//! One verse plays at a time. The handle owns both the output stream and the
//! sink; dropping or stopping it releases the device, so whoever holds the
//! handle holds the only live playback.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use tracing::debug;

pub struct VersePlayback {
    _stream: OutputStream,
    sink: Sink,
}

impl VersePlayback {
    /// Decode downloaded audio bytes and start playing them immediately.
    pub fn start(bytes: Vec<u8>, volume: f32) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        let source = Decoder::new(Cursor::new(bytes)).context("Decoding recitation audio")?;
        sink.set_volume(volume);
        sink.append(source);
        sink.play();
        Ok(Self { _stream, sink })
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    /// True once the sink has drained its queue, i.e. the verse finished.
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn stop(self) {
        debug!("Stopping playback");
        self.sink.stop();
        // stream dropped automatically
    }
}
