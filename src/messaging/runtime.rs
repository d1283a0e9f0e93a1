/// Plugin runtime
///
/// Single-threaded actor that owns the plugin. The host pushes `HostEvent`s
/// through a channel; everything is handled in arrival order on one thread.
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::events::HostEvent;
use crate::audio_system::CueOutput;
use crate::client::GameClient;
use crate::error::RuntimeError;
use crate::plugin::ToaTimePlugin;

/// Tasks the runtime posts to its own queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredTask {
    /// Presence check after start-up, once location data is valid
    StartupPresenceCheck,
}

enum Message {
    Host(HostEvent),
    Deferred(DeferredTask),
    Terminate,
}

/// Handle the host uses to feed events into the plugin thread
pub struct PluginHandle {
    sender: Sender<Message>,
    thread: Option<JoinHandle<()>>,
}

pub struct PluginRuntime;

impl PluginRuntime {
    /// Spawn the plugin thread. The plugin is built on that thread, so outputs
    /// holding a non-`Send` audio stream are fine.
    pub fn spawn<C, O, F>(make_plugin: F) -> Result<PluginHandle, RuntimeError>
    where
        C: GameClient + 'static,
        O: CueOutput + 'static,
        F: FnOnce() -> ToaTimePlugin<C, O> + Send + 'static,
    {
        let (tx, rx) = unbounded();
        let self_tx = tx.clone();

        let thread = thread::Builder::new()
            .name("toa-time-plugin".to_string())
            .spawn(move || {
                let plugin = make_plugin();
                Self::run(plugin, rx, self_tx);
            })
            .map_err(RuntimeError::ThreadSpawnFailed)?;

        Ok(PluginHandle {
            sender: tx,
            thread: Some(thread),
        })
    }

    fn run<C: GameClient, O: CueOutput>(
        mut plugin: ToaTimePlugin<C, O>,
        rx: Receiver<Message>,
        self_tx: Sender<Message>,
    ) {
        tracing::info!("Plugin runtime thread started");

        while let Ok(message) = rx.recv() {
            match message {
                Message::Host(event) => {
                    tracing::trace!("Host event: {}", event.description());
                    match event {
                        HostEvent::Start => match plugin.start_up() {
                            Ok(()) => {
                                let _ = self_tx
                                    .send(Message::Deferred(DeferredTask::StartupPresenceCheck));
                            }
                            Err(e) => tracing::warn!("Start ignored: {}", e),
                        },
                        HostEvent::WorldStateChanged => plugin.on_world_state_changed(),
                        HostEvent::SoundEffectPlayed { sound_id } => {
                            plugin.on_sound_effect_played(sound_id);
                        }
                        HostEvent::ConfigChanged(config) => plugin.update_config(config),
                        HostEvent::Shutdown => {
                            if let Err(e) = plugin.shut_down() {
                                tracing::warn!("Shutdown ignored: {}", e);
                            }
                        }
                    }
                }
                Message::Deferred(DeferredTask::StartupPresenceCheck) => plugin.startup_check(),
                Message::Terminate => {
                    if !plugin.lifecycle().is_stopped() {
                        let _ = plugin.shut_down();
                    }
                    break;
                }
            }
        }

        tracing::info!("Plugin runtime thread stopped");
    }
}

impl PluginHandle {
    /// Queue a host event
    pub fn notify(&self, event: HostEvent) -> Result<(), RuntimeError> {
        self.sender
            .send(Message::Host(event))
            .map_err(|_| RuntimeError::AlreadyStopped)
    }

    pub fn start(&self) -> Result<(), RuntimeError> {
        self.notify(HostEvent::Start)
    }

    pub fn world_state_changed(&self) -> Result<(), RuntimeError> {
        self.notify(HostEvent::WorldStateChanged)
    }

    pub fn sound_effect_played(&self, sound_id: u32) -> Result<(), RuntimeError> {
        self.notify(HostEvent::SoundEffectPlayed { sound_id })
    }

    /// Shut the plugin down, drain the queue and join the thread
    pub fn shutdown(mut self) -> Result<(), RuntimeError> {
        let thread = self.thread.take().ok_or(RuntimeError::AlreadyStopped)?;
        let _ = self.sender.send(Message::Host(HostEvent::Shutdown));
        self.sender
            .send(Message::Terminate)
            .map_err(|_| RuntimeError::AlreadyStopped)?;
        thread.join().map_err(|_| RuntimeError::Panicked)
    }
}

impl Drop for PluginHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.sender.send(Message::Terminate);
        }
    }
}
