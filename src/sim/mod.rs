//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Timers are tick counters, never wall-clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, Verdict, check_bird};
pub use pipes::{PipeField, PipePair};
pub use score::{ScoreBoard, award_passed_pipes};
pub use state::{Bird, GameEvent, GameMode, GameState};
pub use tick::{TickInput, tick};
pub use timer::PeriodicTimer;
