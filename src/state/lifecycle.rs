/// Plugin lifecycle state machine
///
/// Tracks start-up and shut-down with clear state transitions. Host events
/// are handled from the moment start-up begins (starting or running).
use std::time::Instant;

/// State of the plugin
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LifecycleState {
    /// Plugin is disabled
    #[default]
    Stopped,

    /// Start-up hook ran, deferred presence check pending
    Starting,

    /// Handling host events
    Running { since: Instant },

    /// Shut-down hook in progress
    Stopping,
}

impl LifecycleState {
    pub fn is_stopped(&self) -> bool {
        matches!(self, LifecycleState::Stopped)
    }

    /// Events are accepted once start-up began
    pub fn accepts_events(&self) -> bool {
        matches!(self, LifecycleState::Starting | LifecycleState::Running { .. })
    }

    pub fn is_running(&self) -> bool {
        matches!(self, LifecycleState::Running { .. })
    }

    pub fn description(&self) -> &'static str {
        match self {
            LifecycleState::Stopped => "Stopped",
            LifecycleState::Starting => "Starting...",
            LifecycleState::Running { .. } => "Running",
            LifecycleState::Stopping => "Stopping...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// Cannot start when already started
    AlreadyRunning,

    /// Cannot stop when already stopped
    AlreadyStopped,

    /// Cannot perform this action during a transition
    InTransition,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionError::AlreadyRunning => write!(f, "Plugin is already running"),
            TransitionError::AlreadyStopped => write!(f, "Plugin is already stopped"),
            TransitionError::InTransition => {
                write!(f, "Cannot perform action during state transition")
            }
        }
    }
}

impl std::error::Error for TransitionError {}

pub struct PluginLifecycle {
    state: LifecycleState,
}

impl PluginLifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Stopped,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Stopped -> Starting
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.state {
            LifecycleState::Stopped => {
                self.state = LifecycleState::Starting;
                Ok(())
            }
            LifecycleState::Running { .. } | LifecycleState::Starting => {
                Err(TransitionError::AlreadyRunning)
            }
            LifecycleState::Stopping => Err(TransitionError::InTransition),
        }
    }

    /// Starting -> Running, once the deferred check has run. Idempotent while running.
    pub fn mark_running(&mut self) -> Result<(), TransitionError> {
        match self.state {
            LifecycleState::Starting => {
                self.state = LifecycleState::Running {
                    since: Instant::now(),
                };
                Ok(())
            }
            LifecycleState::Running { .. } => Ok(()),
            _ => Err(TransitionError::InTransition),
        }
    }

    /// Starting/Running -> Stopping
    pub fn stop(&mut self) -> Result<(), TransitionError> {
        match self.state {
            LifecycleState::Running { .. } | LifecycleState::Starting => {
                self.state = LifecycleState::Stopping;
                Ok(())
            }
            LifecycleState::Stopped => Err(TransitionError::AlreadyStopped),
            LifecycleState::Stopping => Err(TransitionError::InTransition),
        }
    }

    /// Stopping -> Stopped
    pub fn mark_stopped(&mut self) -> Result<(), TransitionError> {
        match self.state {
            LifecycleState::Stopping => {
                self.state = LifecycleState::Stopped;
                Ok(())
            }
            _ => Err(TransitionError::InTransition),
        }
    }
}

impl Default for PluginLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(LifecycleState::Stopped.is_stopped());
        assert!(!LifecycleState::Stopped.accepts_events());

        assert!(LifecycleState::Starting.accepts_events());
        assert!(!LifecycleState::Starting.is_running());

        let running = LifecycleState::Running {
            since: Instant::now(),
        };
        assert!(running.accepts_events());
        assert!(running.is_running());

        assert!(!LifecycleState::Stopping.accepts_events());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut lifecycle = PluginLifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Stopped);

        assert!(lifecycle.start().is_ok());
        assert_eq!(lifecycle.state(), LifecycleState::Starting);
        assert_eq!(lifecycle.start(), Err(TransitionError::AlreadyRunning));

        assert!(lifecycle.mark_running().is_ok());
        assert!(lifecycle.state().is_running());
        assert!(lifecycle.mark_running().is_ok());

        assert!(lifecycle.stop().is_ok());
        assert_eq!(lifecycle.state(), LifecycleState::Stopping);

        assert!(lifecycle.mark_stopped().is_ok());
        assert_eq!(lifecycle.state(), LifecycleState::Stopped);
        assert_eq!(lifecycle.stop(), Err(TransitionError::AlreadyStopped));
    }

    #[test]
    fn test_stop_before_deferred_check() {
        let mut lifecycle = PluginLifecycle::new();
        lifecycle.start().unwrap();

        assert!(lifecycle.stop().is_ok());
        assert!(lifecycle.mark_stopped().is_ok());
        assert_eq!(lifecycle.mark_running(), Err(TransitionError::InTransition));
    }
}
