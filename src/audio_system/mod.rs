pub mod gain;
pub mod library;
pub mod player;
/// Audio system module
///
/// Plays the packaged callout cues.
///
/// ## Architecture
///
/// ```text
/// CalloutKind ──> Cue ──> CueOutput (RodioCueOutput)
///                           ├── CueLibrary  (registered assets, <sound_dir>/<name>.wav)
///                           └── Gain        (volume 0-100 -> -100..0 dB -> amplitude)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use audio_system::{Cue, CueLibrary, CueOutput, Gain, RodioCueOutput};
///
/// let mut output = RodioCueOutput::new(CueLibrary::new(config.sound_dir()));
/// output.play(Cue::Vents, Gain::from_volume(config.volume))?;
/// ```
pub mod source;

// Re-export commonly used types
pub use gain::Gain;
pub use library::CueLibrary;
pub use player::{CueOutput, RodioCueOutput};
pub use source::Cue;
