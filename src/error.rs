use thiserror::Error;

/// Plugin-level errors using thiserror for structured error handling.
///
/// None of these are fatal to the plugin. Audio errors degrade to "no sound
/// played", config errors fall back to defaults at the host boundary.

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Cue resource not found: {name}")]
    NotFound { name: String },

    #[error("Failed to load cue resource: {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported cue format: {name}")]
    UnsupportedFormat {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No audio output line available")]
    DeviceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Plugin runtime already stopped")]
    AlreadyStopped,

    #[error("Failed to start plugin runtime thread")]
    ThreadSpawnFailed(#[source] std::io::Error),

    #[error("Plugin runtime thread panicked")]
    Panicked,
}

/// Type alias for host-facing Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
