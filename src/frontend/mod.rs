//! Frontend capability interfaces
//!
//! The sim never draws, plays, or reads devices. It hands a [`Frame`] to a
//! [`Renderer`], drains [`GameEvent`]s into an [`AudioSink`], and receives
//! one sampled [`InputPulse`] per tick from an [`InputSource`]. None of
//! these feed back into game state.

pub mod term;

use crate::sim::{GameEvent, GameMode, GameState, Rect};

/// Sound triggers, fire-and-forget. A sink with nothing loaded for an
/// effect must stay silent rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Flap,
    Score,
    Hit,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Flap => SoundEffect::Flap,
            GameEvent::Score => SoundEffect::Score,
            GameEvent::Hit => SoundEffect::Hit,
        }
    }
}

/// Plays sound triggers.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// The always-silent sink, used when no audio backend is available.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// What the player asked for this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPulse {
    /// Key or pointer press collapsed into one activation pulse
    pub flap: bool,
    /// Process should stop after the current tick completes
    pub quit: bool,
}

/// Per-tick input sampling.
pub trait InputSource {
    fn sample(&mut self) -> anyhow::Result<InputPulse>;
}

/// A pipe box ready to draw, with the flip flag for the upper half.
#[derive(Debug, Clone, Copy)]
pub struct PipeSprite {
    pub rect: Rect,
    /// True for the upper pipe, drawn vertically flipped
    pub flipped: bool,
}

/// The drawable set for one tick. Pure data; producing it has no effect on
/// the sim.
#[derive(Debug, Clone)]
pub struct Frame {
    pub mode: GameMode,
    /// Bird center in world pixels
    pub bird_pos: glam::Vec2,
    /// Tilt derived from vertical velocity, degrees
    pub bird_rotation: f32,
    pub bird_frame: usize,
    pub pipes: Vec<PipeSprite>,
    pub ground_offset: f32,
    pub score: u32,
    /// Best score, shown only outside Playing
    pub best: Option<u32>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        // The title screen shows no pipes; stale pairs from the last round
        // stay in the field until the next round clears them.
        let pipes = if state.mode == GameMode::Playing {
            state
                .pipes
                .iter()
                .flat_map(|p| {
                    [
                        PipeSprite {
                            rect: p.lower_rect(),
                            flipped: false,
                        },
                        PipeSprite {
                            rect: p.upper_rect(),
                            flipped: true,
                        },
                    ]
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            mode: state.mode,
            bird_pos: state.bird.pos,
            bird_rotation: state.bird.rotation_degrees(),
            bird_frame: state.bird.frame,
            pipes,
            ground_offset: state.ground_offset,
            score: state.score.current,
            best: (state.mode != GameMode::Playing).then_some(state.score.best),
        }
    }
}

/// Draws one frame.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_H;
    use crate::sim::{TickInput, tick};

    #[test]
    fn title_frame_hides_pipes_and_shows_best() {
        let state = GameState::new(1);
        let frame = Frame::capture(&state);
        assert_eq!(frame.mode, GameMode::Title);
        assert!(frame.pipes.is_empty());
        assert_eq!(frame.best, Some(0));
    }

    #[test]
    fn playing_frame_emits_two_sprites_per_pair() {
        let mut state = GameState::new(2);
        tick(&mut state, &TickInput { flap: true });
        for _ in 0..state.tuning.spawn_period_ticks {
            let flap = state.bird.pos.y > SCREEN_H / 2.0;
            tick(&mut state, &TickInput { flap });
        }
        let frame = Frame::capture(&state);
        assert_eq!(frame.pipes.len(), 2 * state.pipes.len());
        assert!(frame.pipes[0].rect.center.y > frame.pipes[1].rect.center.y);
        assert!(!frame.pipes[0].flipped);
        assert!(frame.pipes[1].flipped);
        assert_eq!(frame.best, None);
    }
}
