//! Per-frame simulation tick
//!
//! Runs the phase table against this frame's input, then (only while
//! Playing) movement, combat, kills, pickups and the defeat check, in that
//! order.

use super::combat;
use super::motion;
use super::pickup;
use super::rng::RandomSource;
use super::state::{GameEvent, Phase, Session, Transition, Trigger};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    // Held this frame
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    // Pressed this frame (edge-triggered)
    pub attack: bool,
    pub pause: bool,
    pub confirm: bool,
    pub cancel: bool,
}

/// What a tick produced besides the state change itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Cancel was pressed on the menu; the caller should shut down
    pub exit_requested: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick<R: RandomSource + ?Sized>(
    session: &mut Session,
    input: &FrameInput,
    dt: f32,
    rng: &mut R,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    match pressed_transition(session.phase, input) {
        Transition::Exit => {
            log::info!("Exit requested from menu");
            outcome.exit_requested = true;
            return outcome;
        }
        Transition::Enter(next) if session.phase == Phase::Playing => {
            // The pausing frame still plays out; a defeat on it wins over the pause
            play_frame(session, input, dt, rng, &mut outcome);
            if session.phase == Phase::Playing {
                enter_phase(session, next, &mut outcome);
            }
            return outcome;
        }
        Transition::Enter(next) => {
            // Any other phase change consumes the frame
            enter_phase(session, next, &mut outcome);
            return outcome;
        }
        Transition::Stay => {}
    }

    match session.phase {
        Phase::Playing => play_frame(session, input, dt, rng, &mut outcome),
        Phase::Menu | Phase::Paused | Phase::GameOver => {}
    }

    outcome
}

/// First pressed trigger that means something in this phase.
/// Cancel is checked first so it wins when keys are mashed together.
fn pressed_transition(phase: Phase, input: &FrameInput) -> Transition {
    [
        (input.cancel, Trigger::Cancel),
        (input.pause, Trigger::PauseToggle),
        (input.confirm, Trigger::Confirm),
    ]
    .into_iter()
    .filter(|&(pressed, _)| pressed)
    .map(|(_, trigger)| phase.on(trigger))
    .find(|t| *t != Transition::Stay)
    .unwrap_or(Transition::Stay)
}

fn enter_phase(session: &mut Session, next: Phase, outcome: &mut TickOutcome) {
    let from = session.phase;
    debug_assert!(from.allows(next), "illegal transition {from:?} -> {next:?}");

    if from == Phase::GameOver && next == Phase::Menu {
        session.reset_entities();
        log::info!("Session reset (score kept at {})", session.score);
    }

    session.phase = next;
    log::info!("Phase {:?} -> {:?}", from, next);
    outcome.events.push(GameEvent::PhaseChanged { from, to: next });
}

fn play_frame<R: RandomSource + ?Sized>(
    session: &mut Session,
    input: &FrameInput,
    dt: f32,
    rng: &mut R,
    outcome: &mut TickOutcome,
) {
    let max_position = session.tuning.player_max_position();
    motion::move_player(&mut session.player, input, dt, max_position);
    motion::decay_cooldowns(&mut session.player, &mut session.monster, dt);

    if session.monster.alive {
        motion::seek(&mut session.monster, session.player.position, dt);

        let result = combat::resolve(
            &mut session.player,
            &mut session.monster,
            input.attack,
            &session.tuning,
        );
        if result.monster_struck {
            log::debug!("Player hit monster ({} hp left)", session.monster.health);
            outcome.events.push(GameEvent::PlayerAttacked {
                monster_health: session.monster.health,
            });
        }
        if result.player_struck {
            log::debug!("Monster hit player ({} hp left)", session.player.health);
            outcome.events.push(GameEvent::PlayerHit {
                player_health: session.player.health,
            });
        }

        if session.monster.health <= 0 {
            kill_monster(session, rng, outcome);
        }
    }

    if pickup::try_collect(&mut session.pickup, &mut session.player, &session.tuning) {
        log::info!("Pickup collected, player at {} hp", session.player.health);
        outcome.events.push(GameEvent::PickupCollected {
            player_health: session.player.health,
        });
    }

    if session.player.is_defeated()
        && let Transition::Enter(next) = session.phase.on(Trigger::PlayerDefeated)
    {
        log::info!("Game over! Final score: {}", session.score);
        enter_phase(session, next, outcome);
    }
}

/// Score the kill, roll for a drop and respawn, all within this frame
fn kill_monster<R: RandomSource + ?Sized>(
    session: &mut Session,
    rng: &mut R,
    outcome: &mut TickOutcome,
) {
    session.monster.alive = false;
    session.score += session.tuning.kill_score;
    log::info!("Monster killed! Score: {}", session.score);
    outcome.events.push(GameEvent::MonsterKilled {
        score: session.score,
    });

    if let Some(position) = pickup::roll_spawn(&mut session.pickup, &session.tuning, rng) {
        log::info!("Health pickup spawned at ({}, {})", position.x, position.y);
        outcome.events.push(GameEvent::PickupSpawned { position });
    }

    session.monster.respawn(&session.tuning, rng);
    log::debug!(
        "Monster respawned at ({}, {})",
        session.monster.position.x,
        session.monster.position.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::session_rng;
    use crate::sim::state::{Monster, Player};
    use crate::sim::testing::ScriptedRandom;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn playing() -> Session {
        let mut session = Session::default();
        session.phase = Phase::Playing;
        session
    }

    /// Park the monster on top of the player so they are in contact
    fn in_contact(session: &mut Session) {
        session.monster.position = session.player.position + Vec2::new(30.0, 10.0);
    }

    fn press(f: impl FnOnce(&mut FrameInput)) -> FrameInput {
        let mut input = FrameInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_menu_confirm_starts_game() {
        let mut session = Session::default();
        let mut rng = ScriptedRandom::default();
        let outcome = tick(&mut session, &press(|i| i.confirm = true), DT, &mut rng);

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(
            outcome.events,
            vec![GameEvent::PhaseChanged {
                from: Phase::Menu,
                to: Phase::Playing
            }]
        );
        assert_eq!(session.player.health, 100);
        assert_eq!(session.player.position, Vec2::new(200.0, 360.0));
        assert_eq!(session.monster.health, 50);
        assert!(session.monster.alive);
        assert_eq!(session.monster.position, Vec2::new(1000.0, 360.0));
    }

    #[test]
    fn test_menu_cancel_requests_exit() {
        let mut session = Session::default();
        let mut rng = ScriptedRandom::default();
        let input = press(|i| {
            i.cancel = true;
            i.confirm = true;
        });
        let outcome = tick(&mut session, &input, DT, &mut rng);
        assert!(outcome.exit_requested);
        assert_eq!(session.phase, Phase::Menu);
    }

    #[test]
    fn test_menu_ignores_movement() {
        let mut session = Session::default();
        let mut rng = ScriptedRandom::default();
        tick(&mut session, &press(|i| i.right = true), 1.0, &mut rng);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut session = playing();
        let mut rng = ScriptedRandom::default();
        let pause = press(|i| {
            i.pause = true;
            i.right = true;
        });

        let outcome = tick(&mut session, &pause, DT, &mut rng);
        assert_eq!(session.phase, Phase::Paused);
        assert!(outcome.events.contains(&GameEvent::PhaseChanged {
            from: Phase::Playing,
            to: Phase::Paused
        }));
        // The pausing frame still moves everything once
        let paused_at = session.player.position;
        assert_eq!(paused_at, Vec2::new(200.0 + 200.0 * DT, 360.0));
        assert!(session.monster.position.x < 1000.0);

        // Frozen while paused
        let monster_before = session.monster.clone();
        tick(&mut session, &press(|i| i.down = true), DT, &mut rng);
        assert_eq!(session.monster, monster_before);
        assert_eq!(session.player.position, paused_at);

        tick(&mut session, &press(|i| i.pause = true), DT, &mut rng);
        assert_eq!(session.phase, Phase::Playing);
    }

    #[test]
    fn test_lethal_hit_on_pause_frame_ends_game() {
        let mut session = playing();
        in_contact(&mut session);
        session.player.health = 5;
        let mut rng = ScriptedRandom::default();
        let input = press(|i| {
            i.pause = true;
            i.right = true;
        });

        let outcome = tick(&mut session, &input, DT, &mut rng);

        assert_eq!(session.phase, Phase::GameOver);
        assert_eq!(session.player.health, 0);
        assert_eq!(session.player.position.x, 200.0 + 200.0 * DT);
        assert!(outcome.events.contains(&GameEvent::PhaseChanged {
            from: Phase::Playing,
            to: Phase::GameOver
        }));
        assert!(!outcome.events.contains(&GameEvent::PhaseChanged {
            from: Phase::Playing,
            to: Phase::Paused
        }));
    }

    #[test]
    fn test_paused_cancel_returns_to_menu_without_reset() {
        let mut session = playing();
        session.player.health = 40;
        session.score = 200;
        session.phase = Phase::Paused;
        let mut rng = ScriptedRandom::default();

        let input = press(|i| {
            i.cancel = true;
            i.pause = true;
        });
        tick(&mut session, &input, DT, &mut rng);
        assert_eq!(session.phase, Phase::Menu);
        assert_eq!(session.player.health, 40);
        assert_eq!(session.score, 200);
    }

    #[test]
    fn test_paused_never_goes_to_game_over() {
        let mut session = playing();
        session.phase = Phase::Paused;
        session.player.health = 0;
        let mut rng = ScriptedRandom::default();

        for input in [
            FrameInput::default(),
            press(|i| i.confirm = true),
            press(|i| i.attack = true),
        ] {
            tick(&mut session, &input, DT, &mut rng);
            assert_eq!(session.phase, Phase::Paused);
        }
    }

    #[test]
    fn test_player_attack_scenario() {
        let mut session = playing();
        in_contact(&mut session);
        session.monster.attack_cooldown = 0.4;
        let mut rng = ScriptedRandom::default();

        let outcome = tick(&mut session, &press(|i| i.attack = true), DT, &mut rng);

        assert_eq!(session.monster.health, 40);
        assert_eq!(session.player.attack_cooldown, 0.5);
        assert_eq!(session.player.attack_flash, 0.2);
        let attacks = outcome
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerAttacked { .. }))
            .count();
        assert_eq!(attacks, 1);
    }

    #[test]
    fn test_held_attack_respects_cooldown() {
        let mut session = playing();
        in_contact(&mut session);
        let mut rng = ScriptedRandom::default();
        let attack = press(|i| i.attack = true);

        tick(&mut session, &attack, DT, &mut rng);
        tick(&mut session, &attack, DT, &mut rng);
        assert_eq!(session.monster.health, 40);

        // 0.5s later the cooldown has run out
        for _ in 0..30 {
            tick(&mut session, &FrameInput::default(), DT, &mut rng);
        }
        tick(&mut session, &attack, DT, &mut rng);
        assert_eq!(session.monster.health, 30);
    }

    #[test]
    fn test_kill_respawns_same_frame_with_pickup() {
        let mut session = playing();
        in_contact(&mut session);
        session.monster.health = 10;
        let mut rng = ScriptedRandom::new([49, 640, 300, 250]);

        let outcome = tick(&mut session, &press(|i| i.attack = true), DT, &mut rng);

        assert!(session.monster.alive);
        assert_eq!(session.monster.health, 50);
        assert_eq!(session.monster.attack_cooldown, 0.0);
        assert_eq!(session.monster.position, Vec2::new(1000.0, 250.0));
        assert_eq!(session.score, 100);
        assert!(session.pickup.active);
        assert_eq!(session.pickup.position, Vec2::new(640.0, 300.0));
        assert_eq!(
            rng.calls(),
            &[(0, 100), (100, 1181), (100, 621), (100, 621)]
        );
        assert!(outcome
            .events
            .contains(&GameEvent::MonsterKilled { score: 100 }));
        assert!(outcome.events.contains(&GameEvent::PickupSpawned {
            position: Vec2::new(640.0, 300.0)
        }));
    }

    #[test]
    fn test_kill_with_missed_roll_leaves_pickup_unchanged() {
        let mut session = playing();
        in_contact(&mut session);
        session.monster.health = 5;
        session.score = 300;
        let mut rng = ScriptedRandom::new([50, 620]);

        tick(&mut session, &press(|i| i.attack = true), DT, &mut rng);

        assert!(!session.pickup.active);
        assert_eq!(session.score, 400);
        assert_eq!(session.monster.position, Vec2::new(1000.0, 620.0));

        // An existing pickup survives a missed roll
        in_contact(&mut session);
        session.monster.health = 10;
        session.player.attack_cooldown = 0.0;
        session.pickup.active = true;
        session.pickup.position = Vec2::new(900.0, 100.0);
        let mut rng = ScriptedRandom::new([50, 100]);
        tick(&mut session, &press(|i| i.attack = true), DT, &mut rng);
        assert!(session.pickup.active);
        assert_eq!(session.pickup.position, Vec2::new(900.0, 100.0));
        assert_eq!(session.score, 500);
    }

    #[test]
    fn test_respawn_height_in_range() {
        let mut session = playing();
        let (mut rng, _) = session_rng(Some(2024));
        for _ in 0..200 {
            in_contact(&mut session);
            session.monster.health = 1;
            session.player.attack_cooldown = 0.0;
            session.player.health = 100;
            tick(&mut session, &press(|i| i.attack = true), DT, &mut rng);
            let pos = session.monster.position;
            assert_eq!(pos.x, 1000.0);
            assert!((100.0..=620.0).contains(&pos.y), "y = {}", pos.y);
        }
    }

    #[test]
    fn test_pickup_collected_in_play() {
        let mut session = playing();
        session.player.health = 70;
        session.pickup.active = true;
        session.pickup.position = session.player.position;
        let mut rng = ScriptedRandom::default();

        let outcome = tick(&mut session, &FrameInput::default(), DT, &mut rng);
        assert_eq!(session.player.health, 90);
        assert!(!session.pickup.active);
        assert!(outcome
            .events
            .contains(&GameEvent::PickupCollected { player_health: 90 }));
    }

    #[test]
    fn test_defeat_ends_game_same_frame() {
        let mut session = playing();
        in_contact(&mut session);
        session.player.health = 5;
        let mut rng = ScriptedRandom::default();

        let outcome = tick(&mut session, &FrameInput::default(), DT, &mut rng);
        assert_eq!(session.player.health, 0);
        assert_eq!(session.phase, Phase::GameOver);
        assert!(outcome.events.contains(&GameEvent::PhaseChanged {
            from: Phase::Playing,
            to: Phase::GameOver
        }));

        // Nothing moves after the game ends
        let frozen = session.clone();
        tick(&mut session, &press(|i| i.left = true), DT, &mut rng);
        assert_eq!(session, frozen);
    }

    #[test]
    fn test_game_over_confirm_resets_but_keeps_score() {
        let mut session = playing();
        session.phase = Phase::GameOver;
        session.score = 1200;
        session.player.health = 0;
        session.player.position = Vec2::new(5.0, 5.0);
        session.player.attack_cooldown = 0.3;
        session.monster.position = Vec2::new(50.0, 50.0);
        session.monster.health = 20;
        session.pickup.active = true;
        let mut rng = ScriptedRandom::default();

        tick(&mut session, &press(|i| i.confirm = true), DT, &mut rng);

        assert_eq!(session.phase, Phase::Menu);
        assert_eq!(session.score, 1200);
        assert_eq!(session.player, Player::new(&session.tuning));
        assert_eq!(session.monster, Monster::new(&session.tuning));
        assert!(!session.pickup.active);
        assert!(rng.calls().is_empty());
    }

    #[test]
    fn test_game_over_ignores_other_keys() {
        let mut session = playing();
        session.phase = Phase::GameOver;
        let mut rng = ScriptedRandom::default();
        for input in [press(|i| i.cancel = true), press(|i| i.pause = true)] {
            tick(&mut session, &input, DT, &mut rng);
            assert_eq!(session.phase, Phase::GameOver);
        }
    }

    #[test]
    fn test_zero_dt_without_input_is_a_no_op() {
        let mut session = playing();
        session.player.attack_cooldown = 0.25;
        session.monster.attack_cooldown = 0.1;
        let before = session.clone();
        let mut rng = ScriptedRandom::default();

        let outcome = tick(&mut session, &FrameInput::default(), 0.0, &mut rng);
        assert_eq!(session, before);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_zero_dt_in_contact_monster_still_strikes() {
        let mut session = playing();
        in_contact(&mut session);
        let mut rng = ScriptedRandom::default();

        let outcome = tick(&mut session, &FrameInput::default(), 0.0, &mut rng);
        assert_eq!(session.player.health, 95);
        assert_eq!(session.monster.attack_cooldown, 0.5);
        assert_eq!(outcome.events, vec![GameEvent::PlayerHit { player_health: 95 }]);

        // Cooldown holds at dt=0, so repeating is a no-op from here
        let settled = session.clone();
        let outcome = tick(&mut session, &FrameInput::default(), 0.0, &mut rng);
        assert_eq!(session, settled);
        assert!(outcome.events.is_empty());
    }

    fn input_from_bits(bits: u8) -> FrameInput {
        FrameInput {
            up: bits & 1 != 0,
            down: bits & 2 != 0,
            left: bits & 4 != 0,
            right: bits & 8 != 0,
            attack: bits & 16 != 0,
            pause: bits & 32 != 0,
            confirm: bits & 64 != 0,
            cancel: bits & 128 != 0,
        }
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_frame(
            seed in any::<u64>(),
            frames in prop::collection::vec((any::<u8>(), 0.0f32..0.1), 1..300),
        ) {
            let mut session = Session::default();
            let (mut rng, _) = session_rng(Some(seed));
            let max = session.tuning.player_max_position();

            for (bits, dt) in frames {
                let before = session.phase;
                tick(&mut session, &input_from_bits(bits), dt, &mut rng);
                let after = session.phase;

                prop_assert!(before == after || before.allows(after));
                prop_assert!((0..=100).contains(&session.player.health));
                let pos = session.player.position;
                prop_assert!(pos.x >= 0.0 && pos.x <= max.x);
                prop_assert!(pos.y >= 0.0 && pos.y <= max.y);
                prop_assert!(session.monster.alive);
                prop_assert!(session.monster.health > 0);
            }
        }

        #[test]
        fn prop_chasing_player_keeps_player_in_arena(
            dirs in prop::collection::vec(0u8..16, 1..400),
        ) {
            let mut session = playing();
            let mut rng = ScriptedRandom::default();
            let max = session.tuning.player_max_position();
            for bits in dirs {
                tick(&mut session, &input_from_bits(bits), 0.05, &mut rng);
                if session.phase != Phase::Playing {
                    break;
                }
                let pos = session.player.position;
                prop_assert!(pos.cmpge(Vec2::ZERO).all() && pos.cmple(max).all());
            }
        }
    }
}
