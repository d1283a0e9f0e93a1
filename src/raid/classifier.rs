/// Callout classifier
///
/// Resolves the current mechanic from sight markers, spot animations and the
/// `sight_granted` memory. Precedence is marker > animation > hysteresis >
/// default.
use crate::client::{GameClient, GraphicsObject, LocalPoint, PlayerId};
use crate::config::AnimationScope;

use super::state::{CalloutKind, RaidState};

/// Sound effect that accompanies every sight mechanic
pub const SIGHT_SOUND_EFFECT_ID: u32 = 6574;

pub const SKULL_GRAPHICS_OBJECT_IDS: [u32; 2] = [2134, 2135];

pub const PLAYER_SIGHT_ANIMATION_ID: u32 = 2132;
pub const PLAYER_REMOVE_SIGHT_ANIMATION_ID: u32 = 2133;
pub const PLAYER_DOUBLE_DAMAGE_ANIMATION_ID: u32 = 2137;

pub const PILLAR_LOCATIONS: [LocalPoint; 2] =
    [LocalPoint::new(7744, 7232), LocalPoint::new(7744, 8256)];
pub const VENT_LOCATIONS: [LocalPoint; 2] =
    [LocalPoint::new(7232, 5696), LocalPoint::new(7232, 7744)];

/// Animation signal seen on a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationSignal {
    SightGranted,
    SightRemoved,
    DoubleDamage,
}

#[derive(Debug, Clone)]
pub struct CalloutClassifier {
    scope: AnimationScope,
}

impl CalloutClassifier {
    pub fn new(scope: AnimationScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> AnimationScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: AnimationScope) {
        self.scope = scope;
    }

    /// Whether a sound effect should trigger a classification pass
    pub fn is_trigger(sound_id: u32) -> bool {
        sound_id == SIGHT_SOUND_EFFECT_ID
    }

    /// Run one classification pass, store and return the callout
    pub fn classify(&self, client: &dyn GameClient, state: &mut RaidState) -> CalloutKind {
        state.callout = CalloutKind::Default;

        if let Some(callout) = Self::marker_callout(&client.graphics_objects()) {
            tracing::debug!(callout = %callout, "Sight marker matched");
            state.callout = callout;
            return callout;
        }

        if let Some(signal) = self.animation_signal(client) {
            tracing::debug!(?signal, "Spot animation matched");
            state.callout = match signal {
                AnimationSignal::SightGranted => {
                    state.sight_granted = true;
                    CalloutKind::SightChange
                }
                AnimationSignal::SightRemoved => {
                    state.sight_granted = false;
                    CalloutKind::SightChange
                }
                AnimationSignal::DoubleDamage => CalloutKind::DoubleDamage,
            };
            return state.callout;
        }

        if state.sight_granted {
            state.callout = CalloutKind::DoubleDamage;
        }

        state.callout
    }

    /// First skull at a known location wins, in engine order
    fn marker_callout(objects: &[GraphicsObject]) -> Option<CalloutKind> {
        objects
            .iter()
            .filter(|obj| SKULL_GRAPHICS_OBJECT_IDS.contains(&obj.id))
            .find_map(|obj| {
                if PILLAR_LOCATIONS.contains(&obj.location) {
                    Some(CalloutKind::Pillars)
                } else if VENT_LOCATIONS.contains(&obj.location) {
                    Some(CalloutKind::Vents)
                } else {
                    None
                }
            })
    }

    fn animation_signal(&self, client: &dyn GameClient) -> Option<AnimationSignal> {
        match self.scope {
            AnimationScope::LocalPlayer => {
                let player = client.local_player()?;
                Self::sight_signal(client, player)
            }
            AnimationScope::AllParticipants => {
                let mut players = client.raid_participants();
                if players.is_empty() {
                    players.extend(client.local_player());
                }
                players.into_iter().find_map(|player| {
                    Self::sight_signal(client, player).or_else(|| {
                        client
                            .has_spot_anim(player, PLAYER_DOUBLE_DAMAGE_ANIMATION_ID)
                            .then_some(AnimationSignal::DoubleDamage)
                    })
                })
            }
        }
    }

    fn sight_signal(client: &dyn GameClient, player: PlayerId) -> Option<AnimationSignal> {
        if client.has_spot_anim(player, PLAYER_SIGHT_ANIMATION_ID) {
            Some(AnimationSignal::SightGranted)
        } else if client.has_spot_anim(player, PLAYER_REMOVE_SIGHT_ANIMATION_ID) {
            Some(AnimationSignal::SightRemoved)
        } else {
            None
        }
    }
}

impl Default for CalloutClassifier {
    fn default() -> Self {
        Self::new(AnimationScope::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChatMessageType, GameState};
    use std::collections::HashMap;

    const LOCAL: PlayerId = PlayerId(1);
    const TEAMMATE: PlayerId = PlayerId(2);

    #[derive(Default)]
    struct SceneClient {
        objects: Vec<GraphicsObject>,
        participants: Vec<PlayerId>,
        anims: HashMap<PlayerId, Vec<u32>>,
    }

    impl SceneClient {
        fn with_object(mut self, id: u32, location: LocalPoint) -> Self {
            self.objects.push(GraphicsObject { id, location });
            self
        }

        fn with_anim(mut self, player: PlayerId, anim: u32) -> Self {
            self.anims.entry(player).or_default().push(anim);
            self
        }
    }

    impl GameClient for SceneClient {
        fn game_state(&self) -> GameState {
            GameState::LoggedIn
        }
        fn local_region_id(&self) -> Option<u32> {
            None
        }
        fn graphics_objects(&self) -> Vec<GraphicsObject> {
            self.objects.clone()
        }
        fn local_player(&self) -> Option<PlayerId> {
            Some(LOCAL)
        }
        fn raid_participants(&self) -> Vec<PlayerId> {
            self.participants.clone()
        }
        fn has_spot_anim(&self, player: PlayerId, anim_id: u32) -> bool {
            self.anims
                .get(&player)
                .map(|anims| anims.contains(&anim_id))
                .unwrap_or(false)
        }
        fn add_chat_message(&self, _kind: ChatMessageType, _name: &str, _message: &str) {}
    }

    fn active_state() -> RaidState {
        RaidState {
            active: true,
            ..RaidState::default()
        }
    }

    #[test]
    fn test_no_signal_yields_default() {
        let classifier = CalloutClassifier::default();
        let mut state = active_state();
        state.callout = CalloutKind::Vents;

        let result = classifier.classify(&SceneClient::default(), &mut state);
        assert_eq!(result, CalloutKind::Default);
        assert_eq!(state.callout, CalloutKind::Default);
    }

    #[test]
    fn test_markers_at_every_known_location() {
        let classifier = CalloutClassifier::default();

        for (id, location, expected) in [
            (2134, PILLAR_LOCATIONS[0], CalloutKind::Pillars),
            (2135, PILLAR_LOCATIONS[1], CalloutKind::Pillars),
            (2134, VENT_LOCATIONS[0], CalloutKind::Vents),
            (2135, VENT_LOCATIONS[1], CalloutKind::Vents),
        ] {
            let client = SceneClient::default().with_object(id, location);
            let mut state = active_state();
            assert_eq!(classifier.classify(&client, &mut state), expected);
        }
    }

    #[test]
    fn test_marker_requires_skull_id_and_known_location() {
        let classifier = CalloutClassifier::default();
        let client = SceneClient::default()
            .with_object(1999, VENT_LOCATIONS[0])
            .with_object(2134, LocalPoint::new(6000, 6000));
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::Default);
    }

    #[test]
    fn test_first_marker_wins() {
        let classifier = CalloutClassifier::default();
        let client = SceneClient::default()
            .with_object(2135, VENT_LOCATIONS[1])
            .with_object(2134, PILLAR_LOCATIONS[0]);
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::Vents);
    }

    #[test]
    fn test_marker_beats_animation() {
        let classifier = CalloutClassifier::default();
        let client = SceneClient::default()
            .with_object(2134, PILLAR_LOCATIONS[0])
            .with_anim(LOCAL, PLAYER_REMOVE_SIGHT_ANIMATION_ID);
        let mut state = active_state();
        state.sight_granted = true;

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::Pillars);
        assert!(state.sight_granted);
    }

    #[test]
    fn test_sight_granted_then_double_damage() {
        let classifier = CalloutClassifier::default();
        let mut state = active_state();

        let granted = SceneClient::default().with_anim(LOCAL, PLAYER_SIGHT_ANIMATION_ID);
        assert_eq!(classifier.classify(&granted, &mut state), CalloutKind::SightChange);
        assert!(state.sight_granted);

        let quiet = SceneClient::default();
        assert_eq!(classifier.classify(&quiet, &mut state), CalloutKind::DoubleDamage);
        assert_eq!(classifier.classify(&quiet, &mut state), CalloutKind::DoubleDamage);
    }

    #[test]
    fn test_sight_removed_clears_hysteresis() {
        let classifier = CalloutClassifier::default();
        let mut state = active_state();
        state.sight_granted = true;

        let removed = SceneClient::default().with_anim(LOCAL, PLAYER_REMOVE_SIGHT_ANIMATION_ID);
        assert_eq!(classifier.classify(&removed, &mut state), CalloutKind::SightChange);
        assert!(!state.sight_granted);

        assert_eq!(
            classifier.classify(&SceneClient::default(), &mut state),
            CalloutKind::Default
        );
    }

    #[test]
    fn test_local_scope_ignores_teammates() {
        let classifier = CalloutClassifier::new(AnimationScope::LocalPlayer);
        let mut client = SceneClient::default().with_anim(TEAMMATE, PLAYER_SIGHT_ANIMATION_ID);
        client.participants = vec![LOCAL, TEAMMATE];
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::Default);
        assert!(!state.sight_granted);
    }

    #[test]
    fn test_all_participants_scope() {
        let classifier = CalloutClassifier::new(AnimationScope::AllParticipants);
        let mut client = SceneClient::default().with_anim(TEAMMATE, PLAYER_SIGHT_ANIMATION_ID);
        client.participants = vec![LOCAL, TEAMMATE];
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::SightChange);
        assert!(state.sight_granted);
    }

    #[test]
    fn test_all_participants_direct_double_damage() {
        let classifier = CalloutClassifier::new(AnimationScope::AllParticipants);
        let mut client =
            SceneClient::default().with_anim(TEAMMATE, PLAYER_DOUBLE_DAMAGE_ANIMATION_ID);
        client.participants = vec![LOCAL, TEAMMATE];
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::DoubleDamage);
        assert!(!state.sight_granted);
    }

    #[test]
    fn test_all_participants_falls_back_to_local_player() {
        let classifier = CalloutClassifier::new(AnimationScope::AllParticipants);
        let client = SceneClient::default().with_anim(LOCAL, PLAYER_SIGHT_ANIMATION_ID);
        assert!(client.participants.is_empty());
        let mut state = active_state();

        assert_eq!(classifier.classify(&client, &mut state), CalloutKind::SightChange);
        assert!(state.sight_granted);
    }

    #[test]
    fn test_trigger_id() {
        assert!(CalloutClassifier::is_trigger(6574));
        assert!(!CalloutClassifier::is_trigger(6573));
    }
}
