/// Event types for the plugin
///
/// `HostEvent`s are pushed by the game client into the plugin runtime.
/// `PluginEvent`s are broadcast by the plugin to observers.
use crate::audio_system::Cue;
use crate::config::Config;
use crate::raid::{CalloutKind, RaidPhase};
use crate::state::LifecycleState;

/// Notifications delivered by the host, in engine-tick order
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Plugin enabled
    Start,

    /// A varbit (world state) changed
    WorldStateChanged,

    /// The client played a sound effect
    SoundEffectPlayed { sound_id: u32 },

    /// User changed the plugin configuration
    ConfigChanged(Config),

    /// Plugin disabled
    Shutdown,
}

/// Things the plugin did
#[derive(Debug, Clone, PartialEq)]
pub enum PluginEvent {
    RaidEntered { phase: RaidPhase },

    RaidLeft { phase: RaidPhase },

    CalloutResolved { callout: CalloutKind },

    CuePlayed { cue: Cue },

    /// Playback failed and was skipped
    PlaybackFailed { cue: Cue, message: String },

    LifecycleChanged {
        old_state: LifecycleState,
        new_state: LifecycleState,
    },
}

impl HostEvent {
    pub fn description(&self) -> String {
        match self {
            HostEvent::Start => "Start".to_string(),
            HostEvent::WorldStateChanged => "World state changed".to_string(),
            HostEvent::SoundEffectPlayed { sound_id } => {
                format!("Sound effect {}", sound_id)
            }
            HostEvent::ConfigChanged(_) => "Config changed".to_string(),
            HostEvent::Shutdown => "Shutdown".to_string(),
        }
    }
}

impl PluginEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            PluginEvent::RaidEntered { phase } => format!("Entered raid ({})", phase),
            PluginEvent::RaidLeft { phase } => format!("Left raid ({})", phase),
            PluginEvent::CalloutResolved { callout } => format!("Callout: {}", callout),
            PluginEvent::CuePlayed { cue } => format!("Played cue: {}", cue),
            PluginEvent::PlaybackFailed { cue, message } => {
                format!("Cue {} not played: {}", cue, message)
            }
            PluginEvent::LifecycleChanged { new_state, .. } => {
                format!("Plugin state: {}", new_state.description())
            }
        }
    }
}
