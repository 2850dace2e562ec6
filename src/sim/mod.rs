//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (arena slot order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod score;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::aabb_overlap;
pub use entity::{Aabb, Entity};
pub use state::{Bird, BirdColor, GameEvent, GameSession, PipePair, SessionPhase};
pub use tick::{FrameClock, TickInput, tick};
pub use timer::IntervalTimer;
