/// Game client seam
///
/// Everything the plugin reads from (or posts to) the host game client. The
/// host owns the real engine handles; the plugin only sees this trait.

/// Session state reported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    LoginScreen,
    Loading,
    LoggedIn,
    Hopping,
    ConnectionLost,
}

/// Scene-local tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A currently drawn transient graphics object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsObject {
    pub id: u32,
    pub location: LocalPoint,
}

/// Opaque handle for a player known to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMessageType {
    PublicChat,
    GameMessage,
}

pub trait GameClient: Send {
    fn game_state(&self) -> GameState;

    /// Region id of the local player's world location, if there is a local player
    fn local_region_id(&self) -> Option<u32>;

    /// Active graphics objects in the engine's iteration order
    fn graphics_objects(&self) -> Vec<GraphicsObject>;

    fn local_player(&self) -> Option<PlayerId>;

    /// Players taking part in the current raid (local player included)
    fn raid_participants(&self) -> Vec<PlayerId>;

    fn has_spot_anim(&self, player: PlayerId, anim_id: u32) -> bool;

    fn add_chat_message(&self, kind: ChatMessageType, name: &str, message: &str);
}
