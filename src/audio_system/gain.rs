/// Volume to gain mapping
///
/// The configured volume (0-100) becomes a master gain offset in dB
/// (-100..0), which is then turned into a linear amplitude for the sink.

/// Offsets at or below this are treated as silence
const SILENCE_DB: f32 = -100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    offset_db: f32,
}

impl Gain {
    /// Build from a configured volume, clamped to 0-100
    pub fn from_volume(volume: i32) -> Self {
        let volume = volume.clamp(0, 100);
        Self {
            offset_db: (volume - 100) as f32,
        }
    }

    /// Gain offset in dB
    pub fn offset_db(&self) -> f32 {
        self.offset_db
    }

    /// Linear amplitude for the output sink (0.0-1.0)
    pub fn amplitude(&self) -> f32 {
        if self.offset_db <= SILENCE_DB {
            return 0.0;
        }
        10f32.powf(self.offset_db / 20.0).clamp(0.0, 1.0)
    }

    pub fn is_muted(&self) -> bool {
        self.amplitude() == 0.0
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self { offset_db: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_to_offset() {
        assert_eq!(Gain::from_volume(0).offset_db(), -100.0);
        assert_eq!(Gain::from_volume(100).offset_db(), 0.0);
        assert_eq!(Gain::from_volume(75).offset_db(), -25.0);
    }

    #[test]
    fn test_volume_clamping() {
        assert_eq!(Gain::from_volume(150).offset_db(), 0.0);
        assert_eq!(Gain::from_volume(-20).offset_db(), -100.0);
    }

    #[test]
    fn test_amplitude() {
        assert_eq!(Gain::from_volume(100).amplitude(), 1.0);
        assert!(Gain::from_volume(0).is_muted());

        let half = Gain::from_volume(94).amplitude();
        assert!((half - 0.501).abs() < 0.01);
    }

    #[test]
    fn test_default_gain() {
        let gain = Gain::default();
        assert_eq!(gain.offset_db(), 0.0);
        assert!(!gain.is_muted());
    }
}
