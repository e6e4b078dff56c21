//! Logical input actions
//!
//! A window backend answers "is this held" / "was this just pressed" per
//! action; the frame snapshot the simulation sees is built from those two
//! queries.

use crate::sim::FrameInput;

/// Logical actions, independent of physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
    PauseToggle,
    Confirm,
    Cancel,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Attack,
        Action::PauseToggle,
        Action::Confirm,
        Action::Cancel,
    ];

    /// Conventional key for the action (arrows, Space, P, Enter, Esc)
    pub fn key_name(&self) -> &'static str {
        match self {
            Action::MoveUp => "Up",
            Action::MoveDown => "Down",
            Action::MoveLeft => "Left",
            Action::MoveRight => "Right",
            Action::Attack => "Space",
            Action::PauseToggle => "P",
            Action::Confirm => "Enter",
            Action::Cancel => "Escape",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-frame input queries
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
    /// Pressed this frame and not the previous one
    fn just_pressed(&self, action: Action) -> bool;
}

impl FrameInput {
    /// Sample an input source. Movement reads held state; everything else
    /// is edge-triggered.
    pub fn capture<I: InputSource + ?Sized>(source: &I) -> Self {
        Self {
            up: source.is_held(Action::MoveUp),
            down: source.is_held(Action::MoveDown),
            left: source.is_held(Action::MoveLeft),
            right: source.is_held(Action::MoveRight),
            attack: source.just_pressed(Action::Attack),
            pause: source.just_pressed(Action::PauseToggle),
            confirm: source.just_pressed(Action::Confirm),
            cancel: source.just_pressed(Action::Cancel),
        }
    }
}

/// Key state for one frame, tracked from the previous frame's held keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: [bool; Action::ALL.len()],
    previous: [bool; Action::ALL.len()],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: this frame's keys become the previous frame's
    pub fn begin_frame(&mut self) {
        self.previous = self.held;
        self.held = [false; Action::ALL.len()];
    }

    /// Mark an action as held for the current frame
    pub fn hold(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    /// Whether the action was held during the previous frame
    pub fn was_held(&self, action: Action) -> bool {
        self.previous[action.index()]
    }

    /// Hold the action only if it was up last frame, so it reads as a press
    pub fn tap(&mut self, action: Action) {
        if !self.was_held(action) {
            self.hold(action);
        }
    }
}

impl InputSource for KeyState {
    fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    fn just_pressed(&self, action: Action) -> bool {
        self.held[action.index()] && !self.previous[action.index()]
    }
}
