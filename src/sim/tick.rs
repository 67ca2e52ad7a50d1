//! Fixed timestep simulation tick
//!
//! One call advances the whole game by one tick. Everything in here is a
//! total function over [`GameState`]: no fallible paths, no retries, no
//! wall-clock reads.

use super::collision::{Verdict, check_bird};
use super::score::award_passed_pipes;
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;

/// Input for a single tick.
///
/// The frontend collapses key presses and pointer presses into one
/// activation pulse per tick; quit handling stays in the outer loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap while Playing, start a round while on Title
    pub flap: bool,
}

/// Advance the game by one fixed tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.ticks += 1;

    // Tick-count effects that run in every mode
    if state.anim_timer.advance() {
        state.bird.advance_frame();
    }
    state.ground_offset -= state.tuning.ground_step;
    if state.ground_offset <= -SCREEN_W {
        state.ground_offset = 0.0;
    }

    match state.mode {
        GameMode::Title => {
            if input.flap {
                state.start_round();
            }
        }

        GameMode::Playing => {
            // Physics: gravity accumulates every tick; a flap overrides the
            // velocity outright instead of adding to it.
            state.bird.vel += state.tuning.gravity;
            if input.flap {
                state.bird.vel = state.tuning.flap_impulse;
                state.events.push(GameEvent::Flap);
            }
            state.bird.pos.y += state.bird.vel;

            // Obstacles: spawn on the timer, scroll, cull off-screen pairs
            if state.spawn_timer.advance() {
                state.pipes.spawn(&mut state.rng, &state.tuning);
            }
            state.pipes.advance(state.tuning.scroll_speed);
            state.pipes.cull();

            // A hit ends the round within this tick; the score pass below
            // must not run after the collision is detected.
            if check_bird(&state.bird, &state.pipes) == Verdict::Dead {
                state.events.push(GameEvent::Hit);
                state.end_round();
                return;
            }

            if award_passed_pipes(&mut state.pipes, &mut state.score, BIRD_X) > 0 {
                state.events.push(GameEvent::Score);
            }
        }
    }
}
