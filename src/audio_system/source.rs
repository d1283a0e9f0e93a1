/// Cue types
///
/// Packaged cue resources, resolved by name at dispatch time.
use std::fmt;

use crate::raid::CalloutKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Pillars,
    Vents,
    DoubleDamage,
}

impl Cue {
    /// Cue to play for a callout. Sight changes are deliberately silent.
    pub fn for_callout(callout: CalloutKind) -> Option<Self> {
        match callout {
            CalloutKind::Pillars => Some(Cue::Pillars),
            CalloutKind::Vents => Some(Cue::Vents),
            CalloutKind::DoubleDamage => Some(Cue::DoubleDamage),
            CalloutKind::SightChange | CalloutKind::Default => None,
        }
    }

    /// Resource name, `<name>.wav` on disk
    pub fn resource_name(&self) -> &'static str {
        match self {
            Cue::Pillars => "pillars",
            Cue::Vents => "vents",
            Cue::DoubleDamage => "DD",
        }
    }

    /// Public chat line echoed alongside the cue
    pub fn chat_echo(&self) -> Option<&'static str> {
        match self {
            Cue::Pillars => Some("Pillars, pillars, pillars."),
            Cue::Vents => Some("Vents, vents, vents."),
            Cue::DoubleDamage => None,
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_mapping() {
        assert_eq!(Cue::for_callout(CalloutKind::Pillars), Some(Cue::Pillars));
        assert_eq!(Cue::for_callout(CalloutKind::Vents), Some(Cue::Vents));
        assert_eq!(Cue::for_callout(CalloutKind::DoubleDamage), Some(Cue::DoubleDamage));
        assert_eq!(Cue::for_callout(CalloutKind::SightChange), None);
        assert_eq!(Cue::for_callout(CalloutKind::Default), None);
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(Cue::Pillars.resource_name(), "pillars");
        assert_eq!(Cue::Vents.resource_name(), "vents");
        assert_eq!(Cue::DoubleDamage.resource_name(), "DD");
    }

    #[test]
    fn test_only_mechanics_echo_to_chat() {
        assert!(Cue::Pillars.chat_echo().is_some());
        assert!(Cue::Vents.chat_echo().is_some());
        assert!(Cue::DoubleDamage.chat_echo().is_none());
    }
}
