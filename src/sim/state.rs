//! Game state aggregate
//!
//! All mutable game state lives in one [`GameState`] owned by the caller
//! and threaded explicitly through the tick - no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::pipes::PipeField;
use super::score::ScoreBoard;
use super::timer::PeriodicTimer;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which part of the loop runs this tick.
///
/// There is no GameOver mode: a failed collision is the instant of the
/// Playing -> Title edge, with the final score left on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Idle on the title screen; the bird floats with no gravity
    Title,
    /// Full simulation active
    Playing,
}

/// One-shot events produced by a tick, for the audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Score,
    Hit,
}

/// The controlled entity. Horizontal position is fixed; only the vertical
/// axis is simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Center position. `pos.x` stays at [`BIRD_X`].
    pub pos: Vec2,
    /// Vertical velocity in px/tick, positive downward
    pub vel: f32,
    /// Wing animation frame index
    pub frame: usize,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, SCREEN_H / 2.0),
            vel: 0.0,
            frame: 0,
        }
    }

    /// Bounding box, always derived from position plus the fixed sprite
    /// size - never cached.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(BIRD_W, BIRD_H))
    }

    /// Draw tilt in degrees, derived from velocity (nose up on a flap).
    pub fn rotation_degrees(&self) -> f32 {
        -self.vel * 3.0
    }

    pub fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % BIRD_FRAMES;
    }

    /// Back to the centered idle position with zero velocity.
    pub fn reset(&mut self) {
        self.pos = Vec2::new(BIRD_X, SCREEN_H / 2.0);
        self.vel = 0.0;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub mode: GameMode,
    /// Ticks since process start
    pub ticks: u64,
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: ScoreBoard,
    /// Ground strip scroll offset, in (-SCREEN_W, 0]
    pub ground_offset: f32,
    pub anim_timer: PeriodicTimer,
    pub spawn_timer: PeriodicTimer,
    /// Events from the most recent tick; cleared at the start of each tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let anim_timer = PeriodicTimer::new(tuning.anim_period_ticks);
        let spawn_timer = PeriodicTimer::new(tuning.spawn_period_ticks);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            mode: GameMode::Title,
            ticks: 0,
            bird: Bird::new(),
            pipes: PipeField::new(),
            score: ScoreBoard::default(),
            ground_offset: 0.0,
            anim_timer,
            spawn_timer,
            events: Vec::new(),
        }
    }

    /// Title -> Playing: clear the field, recenter the bird, zero the
    /// round score, restart the spawn countdown.
    pub(crate) fn start_round(&mut self) {
        self.pipes.clear();
        self.bird.reset();
        self.score.reset_round();
        self.spawn_timer.reset();
        self.mode = GameMode::Playing;
        log::info!("round started (seed {})", self.seed);
    }

    /// Playing -> Title: fold the round score into the best.
    pub(crate) fn end_round(&mut self) {
        if self.score.finish_round() {
            log::info!("new best score: {}", self.score.best);
        } else {
            log::info!("round over at {}", self.score.current);
        }
        self.mode = GameMode::Title;
    }
}
