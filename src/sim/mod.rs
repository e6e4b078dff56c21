//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Variable delta time supplied by the caller
//! - Randomness only through [`RandomSource`]
//! - One owner mutating the [`Session`] per frame

pub mod combat;
pub mod motion;
pub mod pickup;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

pub use combat::CombatResult;
pub use rect::{Rect, rectangles_overlap};
pub use rng::{RandomSource, session_rng};
pub use state::{GameEvent, Monster, Phase, Pickup, Player, Session, Transition, Trigger};
pub use tick::{FrameInput, TickOutcome, tick};
