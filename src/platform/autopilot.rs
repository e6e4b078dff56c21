//! Autopilot - a simple AI that plays the game
//!
//! Drives the headless runner: starts a game, chases and fights the monster,
//! detours for pickups when hurt, restarts after a loss, and once its play
//! budget is spent walks back out through the menu.

use glam::Vec2;

use super::input::{Action, KeyState};
use crate::sim::{Phase, Session};

/// Distance (on each axis) considered "close enough" to a target
const STEER_DEADZONE: f32 = 4.0;
/// Go for an active pickup at or below this health
const SEEK_PICKUP_HEALTH: i32 = 70;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Playing frames before the autopilot heads for the exit
    play_budget: u64,
    frames_played: u64,
}

impl Autopilot {
    pub fn new(play_budget: u64) -> Self {
        Self {
            play_budget,
            frames_played: 0,
        }
    }

    pub fn frames_played(&self) -> u64 {
        self.frames_played
    }

    /// True once the play budget is used up
    pub fn wants_to_quit(&self) -> bool {
        self.frames_played >= self.play_budget
    }

    /// Choose this frame's keys from the current session state
    pub fn drive(&mut self, session: &Session, keys: &mut KeyState) {
        keys.begin_frame();
        let quitting = self.wants_to_quit();

        match session.phase {
            Phase::Menu => keys.tap(if quitting {
                Action::Cancel
            } else {
                Action::Confirm
            }),
            Phase::Paused => keys.tap(if quitting {
                Action::Cancel
            } else {
                Action::PauseToggle
            }),
            Phase::GameOver => keys.tap(Action::Confirm),
            Phase::Playing => {
                if quitting {
                    keys.tap(Action::PauseToggle);
                    return;
                }
                self.frames_played += 1;
                self.fight(session, keys);
            }
        }
    }

    fn fight(&self, session: &Session, keys: &mut KeyState) {
        let player = &session.player;
        let monster = &session.monster;
        let pickup = &session.pickup;

        let target = if pickup.active && player.health <= SEEK_PICKUP_HEALTH {
            pickup.position + pickup.size / 2.0
        } else if monster.alive {
            monster.position + monster.size / 2.0
        } else {
            return;
        };
        steer_toward(keys, player.position + player.size / 2.0, target);

        if monster.alive
            && player.attack_cooldown <= 0.0
            && player.rect().overlaps(&monster.rect())
        {
            keys.tap(Action::Attack);
        }
    }
}

fn steer_toward(keys: &mut KeyState, from: Vec2, to: Vec2) {
    let delta = to - from;
    if delta.x > STEER_DEADZONE {
        keys.hold(Action::MoveRight);
    } else if delta.x < -STEER_DEADZONE {
        keys.hold(Action::MoveLeft);
    }
    if delta.y > STEER_DEADZONE {
        keys.hold(Action::MoveDown);
    } else if delta.y < -STEER_DEADZONE {
        keys.hold(Action::MoveUp);
    }
}
