/// Messaging module
///
/// - **Host events**: notifications from the game client (world state changed,
///   sound effect played, start/stop), delivered in engine-tick order
/// - **Plugin events**: what the plugin did, broadcast to observers
///
/// ## Architecture
///
/// ```text
/// ┌─────────┐   HostEvent    ┌───────────────┐   PluginEvent   ┌───────────┐
/// │  Game   │ ─────────────> │ PluginRuntime │ ──────────────> │ Event Bus │
/// │ client  │  PluginHandle  │ (owns plugin) │                 │           │
/// └─────────┘                └───────────────┘                 └───────────┘
///                                  │  ▲
///                                  └──┘ deferred start-up check
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let event_bus = EventBus::new();
/// let (rx, _id) = event_bus.subscribe();
///
/// let bus = event_bus.clone();
/// let handle = PluginRuntime::spawn(move || {
///     ToaTimePlugin::new(client, output, config).with_event_bus(bus)
/// })?;
///
/// handle.start()?;
/// handle.world_state_changed()?;
/// handle.sound_effect_played(6574)?;
///
/// while let Ok(event) = rx.recv() {
///     if let PluginEvent::CuePlayed { cue } = event { /* ... */ }
/// }
/// ```

pub mod bus;
pub mod events;
pub mod runtime;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use events::{HostEvent, PluginEvent};
pub use runtime::{PluginHandle, PluginRuntime};
