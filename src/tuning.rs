//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a settings file can
//! override it. `Tuning::default()` reproduces the stock game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::SettingsError;

/// Largest arena or spawn coordinate accepted from a settings file
const MAX_ARENA_EXTENT: f32 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena size (width, height)
    pub arena: Vec2,

    // === Sprite extents ===
    pub player_size: Vec2,
    pub monster_size: Vec2,
    pub pickup_size: Vec2,

    // === Player ===
    pub player_start: Vec2,
    pub player_max_health: i32,
    pub player_speed: f32,
    pub player_attack_damage: i32,
    pub player_attack_cooldown: f32,
    pub player_attack_flash: f32,

    // === Monster ===
    pub monster_start: Vec2,
    pub monster_max_health: i32,
    pub monster_speed: f32,
    pub monster_attack_damage: i32,
    pub monster_attack_cooldown: f32,
    /// Inclusive y range for respawns (x is always `monster_start.x`)
    pub monster_respawn_y: (f32, f32),

    // === Scoring / pickups ===
    pub kill_score: u64,
    /// Percent chance (0-100) of a pickup dropping on a kill
    pub pickup_spawn_chance: i32,
    pub pickup_heal: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),

            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            monster_size: Vec2::new(MONSTER_WIDTH, MONSTER_HEIGHT),
            pickup_size: Vec2::new(PICKUP_WIDTH, PICKUP_HEIGHT),

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_max_health: PLAYER_MAX_HEALTH,
            player_speed: PLAYER_SPEED,
            player_attack_damage: PLAYER_ATTACK_DAMAGE,
            player_attack_cooldown: PLAYER_ATTACK_COOLDOWN,
            player_attack_flash: PLAYER_ATTACK_FLASH,

            monster_start: Vec2::new(MONSTER_START_X, MONSTER_START_Y),
            monster_max_health: MONSTER_MAX_HEALTH,
            monster_speed: MONSTER_SPEED,
            monster_attack_damage: MONSTER_ATTACK_DAMAGE,
            monster_attack_cooldown: MONSTER_ATTACK_COOLDOWN,
            monster_respawn_y: (MONSTER_RESPAWN_Y_MIN, MONSTER_RESPAWN_Y_MAX),

            kill_score: KILL_SCORE,
            pickup_spawn_chance: PICKUP_SPAWN_CHANCE,
            pickup_heal: PICKUP_HEAL,
        }
    }
}

impl Tuning {
    /// Upper-left corner range a pickup may spawn in (inclusive on both ends)
    pub fn pickup_spawn_area(&self) -> (Vec2, Vec2) {
        let min = Vec2::new(PICKUP_MIN_X, PICKUP_MIN_Y);
        let max = Vec2::new(
            self.arena.x - PICKUP_RIGHT_MARGIN,
            self.arena.y - PICKUP_BOTTOM_MARGIN,
        );
        (min, max.max(min))
    }

    /// Largest position the player's upper-left corner may take
    pub fn player_max_position(&self) -> Vec2 {
        (self.arena - self.player_size).max(Vec2::ZERO)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if self.arena.x <= 0.0 || self.arena.y <= 0.0 {
            return invalid("arena size must be positive");
        }
        if self.arena.max_element() > MAX_ARENA_EXTENT {
            return invalid("arena is larger than the supported extent");
        }
        for (name, size) in [
            ("player", self.player_size),
            ("monster", self.monster_size),
            ("pickup", self.pickup_size),
        ] {
            if size.x <= 0.0 || size.y <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} sprite size must be positive"
                )));
            }
            if size.x > self.arena.x || size.y > self.arena.y {
                return Err(SettingsError::Invalid(format!(
                    "{name} sprite does not fit in the arena"
                )));
            }
        }
        if self.player_speed <= 0.0 || self.monster_speed <= 0.0 {
            return invalid("speeds must be positive");
        }
        if self.player_max_health <= 0 || self.monster_max_health <= 0 {
            return invalid("max health must be positive");
        }
        if !(0..=100).contains(&self.pickup_spawn_chance) {
            return invalid("pickup spawn chance must be within 0..=100");
        }
        if self.monster_respawn_y.0 > self.monster_respawn_y.1 {
            return invalid("monster respawn range is inverted");
        }
        if self.monster_respawn_y.0 < 0.0 || self.monster_respawn_y.1 > MAX_ARENA_EXTENT {
            return invalid("monster respawn range is out of bounds");
        }
        Ok(())
    }
}
