//! Platform abstraction layer
//!
//! Everything between the simulation and the outside world:
//! - Input queries mapped to logical actions
//! - Asset/device lifetime (released on every exit path)
//! - The headless native runner and its autopilot

pub mod assets;
pub mod autopilot;
pub mod headless;
pub mod input;

pub use assets::AssetSet;
pub use autopilot::Autopilot;
pub use headless::{HeadlessPlatform, RunSummary};
pub use input::{Action, InputSource, KeyState};
