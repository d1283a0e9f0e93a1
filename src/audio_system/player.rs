/// Cue playback
///
/// Single-shot, latest-request-wins playback. Starting a cue releases the
/// previous sink before a new one is opened.
use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::gain::Gain;
use super::library::CueLibrary;
use super::source::Cue;
use crate::error::AudioError;

/// Audio output seam used by the plugin
pub trait CueOutput {
    /// Play a cue, replacing whatever is still playing
    fn play(&mut self, cue: Cue, gain: Gain) -> Result<(), AudioError>;

    /// Stop and release the current cue, if any
    fn stop(&mut self);

    /// Pick up a changed sound directory
    fn set_sound_dir(&mut self, _sound_dir: std::path::PathBuf) {}
}

/// rodio-backed output. The device is opened on first use.
pub struct RodioCueOutput {
    library: CueLibrary,
    stream: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
}

impl RodioCueOutput {
    pub fn new(library: CueLibrary) -> Self {
        Self {
            library,
            stream: None,
            sink: None,
        }
    }

    pub fn library(&self) -> &CueLibrary {
        &self.library
    }

    /// Check if a cue is still playing
    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().map(|sink| !sink.empty()).unwrap_or(false)
    }

    fn stream_handle(&mut self) -> Result<&OutputStreamHandle, AudioError> {
        if self.stream.is_none() {
            let pair = OutputStream::try_default()
                .map_err(|e| AudioError::DeviceUnavailable(Box::new(e)))?;
            tracing::debug!("Opened default audio output");
            self.stream = Some(pair);
        }

        self.stream
            .as_ref()
            .map(|(_, handle)| handle)
            .ok_or_else(|| AudioError::DeviceUnavailable("output stream missing".into()))
    }
}

impl CueOutput for RodioCueOutput {
    fn play(&mut self, cue: Cue, gain: Gain) -> Result<(), AudioError> {
        self.stop();

        let name = cue.resource_name();
        let data = self.library.resolve(name)?;

        // rodio's Decoder requires owned data with 'static lifetime
        let decoder = Decoder::new(Cursor::new((*data).clone())).map_err(|e| {
            AudioError::UnsupportedFormat {
                name: name.to_string(),
                source: Box::new(e),
            }
        })?;

        let handle = self.stream_handle()?;
        let sink = Sink::try_new(handle).map_err(|e| AudioError::DeviceUnavailable(Box::new(e)))?;

        sink.set_volume(gain.amplitude());
        sink.append(decoder);
        sink.play();
        self.sink = Some(sink);

        tracing::info!(cue = %cue, gain_db = gain.offset_db(), "Playing cue");
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            tracing::debug!("Releasing previous cue");
            sink.stop();
        }
    }

    fn set_sound_dir(&mut self, sound_dir: std::path::PathBuf) {
        self.library.set_sound_dir(sound_dir);
    }
}
