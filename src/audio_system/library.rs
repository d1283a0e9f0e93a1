/// Cue library
///
/// Resolves cue names to WAV bytes. Registered in-memory assets take
/// precedence, then `<sound_dir>/<name>.wav`. File reads are cached.
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::AudioError;

pub struct CueLibrary {
    sound_dir: PathBuf,
    registered: HashMap<String, Arc<Vec<u8>>>,
    cache: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl CueLibrary {
    pub fn new(sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            sound_dir: sound_dir.into(),
            registered: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Register cue data held in memory (packaged assets)
    pub fn register(&mut self, name: impl Into<String>, data: Vec<u8>) {
        let name = name.into();
        tracing::debug!("Registered cue {} ({} bytes)", name, data.len());
        self.registered.insert(name, Arc::new(data));
    }

    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Point at a different directory, dropping cached file reads
    pub fn set_sound_dir(&mut self, sound_dir: impl Into<PathBuf>) {
        let sound_dir = sound_dir.into();
        if sound_dir != self.sound_dir {
            self.sound_dir = sound_dir;
            self.cache.lock().clear();
        }
    }

    /// Resolve a cue name to its data
    pub fn resolve(&self, name: &str) -> Result<Arc<Vec<u8>>, AudioError> {
        if let Some(data) = self.registered.get(name) {
            return Ok(Arc::clone(data));
        }

        if let Some(data) = self.cache.lock().get(name) {
            return Ok(Arc::clone(data));
        }

        let path = self.sound_dir.join(format!("{}.wav", name));
        if !path.is_file() {
            return Err(AudioError::NotFound {
                name: name.to_string(),
            });
        }

        let data = std::fs::read(&path).map_err(|e| AudioError::LoadFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::info!("Loaded cue {}: {} ({} bytes)", name, path.display(), data.len());

        let data = Arc::new(data);
        self.cache.lock().insert(name.to_string(), Arc::clone(&data));
        Ok(data)
    }

    /// Number of cues currently available without touching disk
    pub fn loaded_count(&self) -> usize {
        self.registered.len() + self.cache.lock().len()
    }
}
