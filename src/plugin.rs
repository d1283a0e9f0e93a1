/// Toa Time plugin
///
/// Owns the raid state and wires the presence tracker and callout classifier
/// to the client, the cue output and the event bus. Handlers take `&mut self`,
/// so a reset can never interleave with a classification pass.
use crate::audio_system::{Cue, CueOutput, Gain};
use crate::client::{ChatMessageType, GameClient};
use crate::config::Config;
use crate::messaging::{EventBus, PluginEvent};
use crate::raid::{
    CalloutClassifier, CalloutKind, PresenceChange, RaidPresenceTracker, RaidState,
};
use crate::state::{LifecycleState, PluginLifecycle, TransitionError};

/// Sender name for chat echoes
pub const CHAT_ECHO_NAME: &str = "Craig King";

pub struct ToaTimePlugin<C, O> {
    client: C,
    output: O,
    config: Config,
    state: RaidState,
    tracker: RaidPresenceTracker,
    classifier: CalloutClassifier,
    lifecycle: PluginLifecycle,
    event_bus: EventBus,
}

impl<C: GameClient, O: CueOutput> ToaTimePlugin<C, O> {
    pub fn new(client: C, output: O, config: Config) -> Self {
        let classifier = CalloutClassifier::new(config.animation_scope);
        Self {
            client,
            output,
            config,
            state: RaidState::default(),
            tracker: RaidPresenceTracker::new(),
            classifier,
            lifecycle: PluginLifecycle::new(),
            event_bus: EventBus::new(),
        }
    }

    /// Publish plugin events on a shared bus
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = event_bus;
        self
    }

    pub fn state(&self) -> RaidState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Start-up hook. The caller must follow up with [`Self::startup_check`]
    /// after the current engine tick, since location data may not be valid yet.
    pub fn start_up(&mut self) -> Result<(), TransitionError> {
        let old_state = self.lifecycle.state();
        self.lifecycle.start()?;
        self.state.reset();

        tracing::info!("Toa Time started");
        self.publish_lifecycle(old_state);
        Ok(())
    }

    /// Deferred presence check scheduled by start-up
    pub fn startup_check(&mut self) {
        if self.lifecycle.state() != LifecycleState::Starting {
            tracing::debug!("Skipping deferred start-up check, plugin no longer starting");
            return;
        }

        self.check_presence();

        let old_state = self.lifecycle.state();
        if self.lifecycle.mark_running().is_ok() {
            self.publish_lifecycle(old_state);
        }
    }

    /// Shut-down hook
    pub fn shut_down(&mut self) -> Result<(), TransitionError> {
        let old_state = self.lifecycle.state();
        self.lifecycle.stop()?;

        self.state.reset();
        self.output.stop();

        self.lifecycle.mark_stopped()?;
        tracing::info!("Toa Time stopped");
        self.publish_lifecycle(old_state);
        Ok(())
    }

    /// World state (varbit) change notification
    pub fn on_world_state_changed(&mut self) {
        if !self.lifecycle.state().accepts_events() {
            return;
        }
        self.check_presence();
    }

    /// Sound effect notification. Returns the cue that was requested, if any.
    pub fn on_sound_effect_played(&mut self, sound_id: u32) -> Option<Cue> {
        if !self.lifecycle.state().accepts_events() || !self.state.active {
            return None;
        }
        if !CalloutClassifier::is_trigger(sound_id) {
            return None;
        }

        let callout = self.classifier.classify(&self.client, &mut self.state);
        tracing::debug!(callout = %callout, "Sight callout resolved");
        self.event_bus
            .publish(PluginEvent::CalloutResolved { callout });

        self.dispatch(callout)
    }

    /// Apply a changed configuration; takes effect on the next callout
    pub fn update_config(&mut self, config: Config) {
        if let Err(e) = config.validate() {
            tracing::warn!("{}", e);
        }
        if config.sound_dir != self.config.sound_dir {
            self.output.set_sound_dir(config.sound_dir());
        }
        self.classifier.set_scope(config.animation_scope);
        self.config = config;
        tracing::debug!(volume = self.config.volume, "Config updated");
    }

    fn check_presence(&mut self) {
        match self.tracker.update(&self.client, &mut self.state) {
            PresenceChange::Entered(phase) => {
                self.event_bus.publish(PluginEvent::RaidEntered { phase })
            }
            PresenceChange::Left(phase) => {
                self.event_bus.publish(PluginEvent::RaidLeft { phase })
            }
            PresenceChange::Unchanged(_) | PresenceChange::Skipped => {}
        }
    }

    fn dispatch(&mut self, callout: CalloutKind) -> Option<Cue> {
        let cue = Cue::for_callout(callout)?;
        let gain = Gain::from_volume(self.config.volume);

        match self.output.play(cue, gain) {
            Ok(()) => self.event_bus.publish(PluginEvent::CuePlayed { cue }),
            Err(e) => {
                tracing::warn!(cue = %cue, "Cue not played: {}", e);
                self.event_bus.publish(PluginEvent::PlaybackFailed {
                    cue,
                    message: e.to_string(),
                });
            }
        }

        if self.config.chat_echo {
            if let Some(line) = cue.chat_echo() {
                self.client
                    .add_chat_message(ChatMessageType::PublicChat, CHAT_ECHO_NAME, line);
            }
        }

        Some(cue)
    }

    fn publish_lifecycle(&self, old_state: LifecycleState) {
        self.event_bus.publish(PluginEvent::LifecycleChanged {
            old_state,
            new_state: self.lifecycle.state(),
        });
    }
}
