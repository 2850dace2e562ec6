//! Tapwing entry point
//!
//! Headless demo: the autopilot flies one run at the fixed timestep,
//! events stream to the log and the final score is reported to an
//! in-memory profile.

use std::time::{SystemTime, UNIX_EPOCH};

use tapwing::consts::*;
use tapwing::profile::{self, MemoryProfile};
use tapwing::sim::{FrameClock, GameEvent, GameSession, TickInput};
use tapwing::{AudioSink, NullAudio};

/// Upper bound on demo length (ten minutes of play)
const MAX_DEMO_TICKS: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    log::info!("Tapwing demo starting with seed: {}", seed);

    let mut session = GameSession::new(seed);
    let mut clock = FrameClock::new();
    let mut sink = NullAudio;
    let input = TickInput {
        activate: false,
        autopilot: true,
    };

    let mut final_score = None;
    'demo: for _ in 0..MAX_DEMO_TICKS {
        clock.advance(&mut session, &input, SIM_DT);
        for event in session.drain_events() {
            match event {
                GameEvent::SessionStarted => log::info!("run started"),
                GameEvent::Audio(cue) => sink.play(cue),
                GameEvent::ScoreChanged(score) => log::info!("score: {}", score),
                GameEvent::SessionEnded { score } => {
                    final_score = Some(score);
                    break 'demo;
                }
            }
        }
    }

    let Some(score) = final_score else {
        log::info!(
            "demo stopped mid-run after {} ticks, score {}",
            session.time_ticks,
            session.score
        );
        return;
    };

    let mut store = MemoryProfile::new();
    profile::submit_session_score(&mut store, score, || {
        log::info!("leaderboard accepted the run, returning to menu");
    });
    match store.to_json() {
        Ok(json) => log::info!("profile snapshot: {}", json),
        Err(err) => log::error!("failed to snapshot profile: {}", err),
    }

    println!("Game over - final score {}", score);
}
