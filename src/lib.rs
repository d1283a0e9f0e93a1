//! Toa Time: audio callouts for the Tombs of Amascut Apmeken room.
//!
//! The game client feeds world-state and sound-effect notifications into a
//! [`ToaTimePlugin`]; the plugin tracks raid presence, infers the current sight
//! mechanic and plays the matching cue.

pub mod audio_system;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod plugin;
pub mod raid;
pub mod state;

use anyhow::Context;

pub use audio_system::{Cue, CueLibrary, CueOutput, Gain, RodioCueOutput};
pub use client::GameClient;
pub use config::{AnimationScope, Config};
pub use error::{AppResult, AudioError};
pub use messaging::{EventBus, HostEvent, PluginEvent, PluginHandle, PluginRuntime};
pub use plugin::ToaTimePlugin;
pub use raid::{CalloutKind, RaidPhase, RaidState};

/// Host entry point: install logging, load config, spawn the plugin thread
/// with rodio output and enable the plugin.
///
/// A subscriber already installed by the host is kept.
pub fn launch<C>(client: C, event_bus: EventBus) -> AppResult<PluginHandle>
where
    C: GameClient + 'static,
{
    if let Err(e) = logging::initialize_tracing(&logging::default_log_dir()) {
        tracing::debug!("Keeping existing tracing setup: {:#}", e);
    }
    logging::log_runtime_environment();

    let config = Config::load().context("loading Toa Time config")?;
    tracing::info!(
        volume = config.volume,
        sound_dir = %config.sound_dir().display(),
        "Launching Toa Time"
    );

    let handle = PluginRuntime::spawn(move || {
        let output = RodioCueOutput::new(CueLibrary::new(config.sound_dir()));
        ToaTimePlugin::new(client, output, config).with_event_bus(event_bus)
    })
    .context("spawning plugin runtime")?;

    handle.start().context("starting plugin")?;
    Ok(handle)
}
