//! Player movement, monster seek steering and cooldown decay

use glam::Vec2;

use super::state::{Monster, Player};
use super::tick::FrameInput;

/// Move the player by held direction keys, then clamp into the arena.
///
/// Axes are independent, so holding two keys moves diagonally at
/// `speed * sqrt(2)`.
pub fn move_player(player: &mut Player, input: &FrameInput, dt: f32, max_position: Vec2) {
    let step = player.speed * dt;
    if input.right {
        player.position.x += step;
    }
    if input.left {
        player.position.x -= step;
    }
    if input.up {
        player.position.y -= step;
    }
    if input.down {
        player.position.y += step;
    }
    player.position = player.position.clamp(Vec2::ZERO, max_position);
}

/// Steer the monster straight at `target` at its fixed speed
pub fn seek(monster: &mut Monster, target: Vec2, dt: f32) {
    if !monster.alive {
        return;
    }
    let to_target = target - monster.position;
    let distance = to_target.length();
    if distance > 0.0 {
        monster.position += to_target / distance * monster.speed * dt;
    }
}

/// Count down every timer that is still running.
///
/// A timer is only decremented while above zero, so it can end a little
/// below zero on the frame it expires.
pub fn decay_cooldowns(player: &mut Player, monster: &mut Monster, dt: f32) {
    if player.attack_cooldown > 0.0 {
        player.attack_cooldown -= dt;
    }
    if player.attack_flash > 0.0 {
        player.attack_flash -= dt;
    }
    if monster.attack_cooldown > 0.0 {
        monster.attack_cooldown -= dt;
    }
}
