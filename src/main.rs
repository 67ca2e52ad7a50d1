//! Gapwing entry point
//!
//! Owns the fixed-rate scheduler: sample input, advance one tick, forward
//! events to the audio sink, draw, then sleep until the next deadline.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use gapwing::consts::TICK_RATE;
use gapwing::frontend::term::{RENDER_DIVISOR, TermFrontend};
use gapwing::frontend::{AudioSink, Frame, InputSource, NullAudio, Renderer};
use gapwing::sim::{GameState, TickInput, tick};
use gapwing::tuning::Tuning;

/// Default tuning file path; missing is fine.
const TUNING_PATH: &str = "gapwing.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(&path),
        None => Tuning::load_or_default(TUNING_PATH),
    };
    let seed = seed_from_env();
    log::info!("Gapwing starting (seed {seed})");

    let mut state = GameState::with_tuning(seed, tuning);
    let mut frontend = TermFrontend::new()?;
    let mut audio = NullAudio;

    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut deadline = Instant::now();

    loop {
        let pulse = frontend.sample()?;

        // The tick always completes; quit only breaks afterwards so state
        // is never left half-updated.
        tick(&mut state, &TickInput { flap: pulse.flap });
        for event in &state.events {
            audio.play((*event).into());
        }

        if state.ticks % RENDER_DIVISOR == 0 {
            frontend.draw(&Frame::capture(&state))?;
        }

        if pulse.quit {
            break;
        }

        // Pace to the tick rate; sleeping is the only blocking operation
        deadline += tick_duration;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        } else {
            // Fell behind (suspended terminal etc.) - don't try to catch up
            deadline = now;
        }
    }

    log::info!(
        "Gapwing exiting after {} ticks, best score {}",
        state.ticks,
        state.score.best
    );
    Ok(())
}

/// Seed from GAPWING_SEED when set, otherwise from the wall clock.
fn seed_from_env() -> u64 {
    match std::env::var("GAPWING_SEED") {
        Ok(value) => match value.parse() {
            Ok(seed) => seed,
            Err(_) => {
                log::warn!("GAPWING_SEED is not a number; using a clock seed");
                clock_seed()
            }
        },
        Err(_) => clock_seed(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
