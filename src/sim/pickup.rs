//! Health pickup spawning and collection

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Pickup, Player};
use crate::tuning::Tuning;

/// Roll for a pickup drop after a kill.
///
/// Draws once from `[0, 100)`; below the spawn chance the pickup is
/// (re)placed at a random spot. A failed roll leaves an existing pickup
/// untouched. Returns the new position on success.
pub fn roll_spawn<R: RandomSource + ?Sized>(
    pickup: &mut Pickup,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Vec2> {
    let roll = rng.random_int(0, 100);
    if roll >= tuning.pickup_spawn_chance {
        log::debug!("Pickup roll {} missed", roll);
        return None;
    }

    let (min, max) = tuning.pickup_spawn_area();
    let x = rng.random_int(min.x as i32, (max.x as i32).saturating_add(1));
    let y = rng.random_int(min.y as i32, (max.y as i32).saturating_add(1));
    pickup.position = Vec2::new(x as f32, y as f32);
    pickup.active = true;
    Some(pickup.position)
}

/// Heal the player if they are touching an active pickup
pub fn try_collect(pickup: &mut Pickup, player: &mut Player, tuning: &Tuning) -> bool {
    if !pickup.active || !player.rect().overlaps(&pickup.rect()) {
        return false;
    }
    player.adjust_health(tuning.pickup_heal);
    pickup.active = false;
    true
}
