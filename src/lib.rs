//! Monster Battle - a single-screen arena brawler
//!
//! Core modules:
//! - `sim`: Frame simulation (phases, motion, combat, pickups)
//! - `renderer`: Turns session state into draw/sound requests
//! - `platform`: Input boundary and the headless native runner
//! - `audio`: Sound/music identifiers and volume mixing
//! - `settings` / `tuning`: JSON-loadable configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use renderer::RenderRequest;
pub use settings::{Settings, SettingsError};
pub use sim::{FrameInput, RandomSource, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (window size)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Sprite extents used for clamping and overlap tests
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const MONSTER_WIDTH: f32 = 80.0;
    pub const MONSTER_HEIGHT: f32 = 80.0;
    pub const PICKUP_WIDTH: f32 = 32.0;
    pub const PICKUP_HEIGHT: f32 = 32.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 360.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Units per second, per held direction key
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_ATTACK_DAMAGE: i32 = 10;
    pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.5;
    /// Red tint duration after a landed hit (cosmetic)
    pub const PLAYER_ATTACK_FLASH: f32 = 0.2;

    /// Monster defaults
    pub const MONSTER_START_X: f32 = 1000.0;
    pub const MONSTER_START_Y: f32 = 360.0;
    pub const MONSTER_MAX_HEALTH: i32 = 50;
    pub const MONSTER_SPEED: f32 = 100.0;
    pub const MONSTER_ATTACK_DAMAGE: i32 = 5;
    pub const MONSTER_ATTACK_COOLDOWN: f32 = 0.5;
    /// Respawn height range (inclusive)
    pub const MONSTER_RESPAWN_Y_MIN: f32 = 100.0;
    pub const MONSTER_RESPAWN_Y_MAX: f32 = 620.0;

    /// Points per monster kill
    pub const KILL_SCORE: u64 = 100;

    /// Pickup spawn roll: a draw in [0, 100) below this spawns a pickup
    pub const PICKUP_SPAWN_CHANCE: i32 = 50;
    pub const PICKUP_HEAL: i32 = 20;
    /// Spawn area: [MIN, arena - right/bottom margin] on each axis
    pub const PICKUP_MIN_X: f32 = 100.0;
    pub const PICKUP_MIN_Y: f32 = 100.0;
    pub const PICKUP_RIGHT_MARGIN: f32 = 20.0;
    pub const PICKUP_BOTTOM_MARGIN: f32 = 180.0;

    /// Frame delta used by the headless runner (60 Hz)
    pub const HEADLESS_DT: f32 = 1.0 / 60.0;
}

/// Advance the session by one frame and describe what to draw and play.
///
/// This is the single per-frame entry point: simulation first, then the
/// render request is composed from the resulting state.
pub fn advance<R: RandomSource + ?Sized>(
    session: &mut Session,
    input: &FrameInput,
    dt: f32,
    rng: &mut R,
) -> RenderRequest {
    let outcome = sim::tick(session, input, dt, rng);
    renderer::compose(session, &outcome)
}
