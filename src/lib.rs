//! Gapwing - a flap-and-glide arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `frontend`: Renderer/audio/input capability traits plus a crossterm terminal frontend
//! - `tuning`: Data-driven game balance

pub mod frontend;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed playfield geometry. Balance values (gravity, speeds, timer
/// periods) live in [`tuning::Tuning`] instead.
pub mod consts {
    /// Simulation tick rate in Hz
    pub const TICK_RATE: u32 = 120;

    /// Playfield dimensions in world pixels
    pub const SCREEN_W: f32 = 288.0;
    pub const SCREEN_H: f32 = 512.0;

    /// Bird sprite size and fixed horizontal position (center)
    pub const BIRD_W: f32 = 34.0;
    pub const BIRD_H: f32 = 24.0;
    pub const BIRD_X: f32 = 50.0;
    /// Number of wing animation frames
    pub const BIRD_FRAMES: usize = 3;

    /// Pipe sprite size
    pub const PIPE_W: f32 = 52.0;
    pub const PIPE_H: f32 = 320.0;
    /// Pipe pairs spawn with their center this far past the right edge
    pub const PIPE_SPAWN_X: f32 = SCREEN_W + 50.0;
    /// Pairs are culled once their right edge scrolls past this x
    pub const PIPE_CULL_X: f32 = -50.0;

    /// Height of the scrolling ground strip
    pub const GROUND_H: f32 = 112.0;
    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = SCREEN_H - GROUND_H;
    /// The bird sinks this far into the ground before it counts as a hit
    pub const GROUND_SLACK: f32 = 10.0;
    /// The bird may rise this far above the screen top before it counts as a hit
    pub const CEILING_MARGIN: f32 = 50.0;
}
