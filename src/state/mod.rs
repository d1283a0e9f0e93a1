/// State management module
///
/// Plugin lifecycle with validated transitions.

pub mod lifecycle;

// Re-export commonly used types
pub use lifecycle::{LifecycleState, PluginLifecycle, TransitionError};
