//! Melee exchange between player and monster
//!
//! Both sides attack on contact, each gated by its own cooldown. The two
//! directions are independent and can both land in the same frame.

use super::state::{Monster, Player};
use crate::tuning::Tuning;

/// What the exchange did this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub player_struck: bool,
    pub monster_struck: bool,
}

impl CombatResult {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Resolve one frame of combat.
///
/// `attack_pressed` must be a fresh press this frame, not a held key.
/// Death of the monster is left to the caller, which owns score and spawns.
pub fn resolve(
    player: &mut Player,
    monster: &mut Monster,
    attack_pressed: bool,
    tuning: &Tuning,
) -> CombatResult {
    if !monster.alive || !player.rect().overlaps(&monster.rect()) {
        return CombatResult::none();
    }

    let mut result = CombatResult::none();

    if attack_pressed && player.attack_cooldown <= 0.0 {
        monster.health -= tuning.player_attack_damage;
        player.attack_cooldown = tuning.player_attack_cooldown;
        player.attack_flash = tuning.player_attack_flash;
        result.monster_struck = true;
    }

    if monster.attack_cooldown <= 0.0 {
        player.adjust_health(-tuning.monster_attack_damage);
        monster.attack_cooldown = tuning.monster_attack_cooldown;
        result.player_struck = true;
    }

    result
}
