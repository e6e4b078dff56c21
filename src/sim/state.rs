//! Session state and core simulation types
//!
//! Everything the frame loop mutates lives in [`Session`]. There is exactly
//! one player, one monster and one pickup slot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::RandomSource;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen
    Paused,
    /// Player ran out of health
    GameOver,
}

/// Inputs and conditions that can move the session between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Confirm,
    Cancel,
    PauseToggle,
    /// Player health reached zero during a Playing frame
    PlayerDefeated,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::Confirm,
        Trigger::Cancel,
        Trigger::PauseToggle,
        Trigger::PlayerDefeated,
    ];
}

/// Result of feeding a trigger to the phase table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Trigger has no meaning in this phase
    Stay,
    Enter(Phase),
    /// Leave the game entirely (only from the menu)
    Exit,
}

impl Phase {
    /// The phase transition table. Every (phase, trigger) pair is spelled out.
    pub fn on(self, trigger: Trigger) -> Transition {
        use Transition::*;
        match self {
            Phase::Menu => match trigger {
                Trigger::Confirm => Enter(Phase::Playing),
                Trigger::Cancel => Exit,
                Trigger::PauseToggle | Trigger::PlayerDefeated => Stay,
            },
            Phase::Playing => match trigger {
                Trigger::PauseToggle => Enter(Phase::Paused),
                Trigger::PlayerDefeated => Enter(Phase::GameOver),
                Trigger::Confirm | Trigger::Cancel => Stay,
            },
            Phase::Paused => match trigger {
                Trigger::PauseToggle => Enter(Phase::Playing),
                Trigger::Cancel => Enter(Phase::Menu),
                Trigger::Confirm | Trigger::PlayerDefeated => Stay,
            },
            Phase::GameOver => match trigger {
                Trigger::Confirm => Enter(Phase::Menu),
                Trigger::Cancel | Trigger::PauseToggle | Trigger::PlayerDefeated => Stay,
            },
        }
    }

    /// Whether any trigger leads directly from `self` to `next`
    pub fn allows(self, next: Phase) -> bool {
        Trigger::ALL
            .iter()
            .any(|&t| self.on(t) == Transition::Enter(next))
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Upper-left corner of the sprite
    pub position: Vec2,
    pub size: Vec2,
    /// Always within `[0, max_health]`
    pub health: i32,
    pub max_health: i32,
    /// Units per second per held direction key
    pub speed: f32,
    /// Seconds until the next attack may land
    pub attack_cooldown: f32,
    /// Seconds of red tint left after a hit (cosmetic)
    pub attack_flash: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            position: tuning.player_start,
            size: tuning.player_size,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            speed: tuning.player_speed,
            attack_cooldown: 0.0,
            attack_flash: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Apply damage (negative) or healing (positive), keeping health in range
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, self.max_health);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// The monster. Only one exists; it respawns the instant it dies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub position: Vec2,
    pub size: Vec2,
    /// May dip to zero or below only inside the frame it dies
    pub health: i32,
    pub speed: f32,
    pub alive: bool,
    pub attack_cooldown: f32,
}

impl Monster {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            position: tuning.monster_start,
            size: tuning.monster_size,
            health: tuning.monster_max_health,
            speed: tuning.monster_speed,
            alive: true,
            attack_cooldown: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Bring the monster back at full health on the spawn column
    pub fn respawn<R: RandomSource + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        let (min_y, max_y) = tuning.monster_respawn_y;
        let y = rng.random_int(min_y as i32, (max_y as i32).saturating_add(1));
        self.health = tuning.monster_max_health;
        self.alive = true;
        self.attack_cooldown = 0.0;
        self.position = Vec2::new(tuning.monster_start.x, y as f32);
    }
}

/// The health pickup slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    /// Meaningless while inactive
    pub position: Vec2,
    pub size: Vec2,
    pub active: bool,
}

impl Pickup {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            position: Vec2::ZERO,
            size: tuning.pickup_size,
            active: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

/// Things that happened during a tick, for sound cues and logging
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: Phase, to: Phase },
    /// Player landed a hit on the monster
    PlayerAttacked { monster_health: i32 },
    /// Monster landed a hit on the player
    PlayerHit { player_health: i32 },
    MonsterKilled { score: u64 },
    PickupSpawned { position: Vec2 },
    PickupCollected { player_health: i32 },
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    /// Accumulates across restarts; never reset
    pub score: u64,
    pub player: Player,
    pub monster: Monster,
    pub pickup: Pickup,
    /// Balance values the entities were built from
    pub tuning: Tuning,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: Phase::Menu,
            score: 0,
            player: Player::new(&tuning),
            monster: Monster::new(&tuning),
            pickup: Pickup::new(&tuning),
            tuning,
        }
    }

    /// Put every entity back to its starting state. Score survives.
    pub fn reset_entities(&mut self) {
        self.player = Player::new(&self.tuning);
        self.monster = Monster::new(&self.tuning);
        self.pickup = Pickup::new(&self.tuning);
    }
}
