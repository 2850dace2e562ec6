//! Score-driven difficulty
//!
//! Higher scores shorten the spawn interval, packing pairs closer
//! together. Tiers are checked highest first so the deepest threshold
//! the score clears always wins.

use super::state::GameSession;
use crate::consts::PIPE_SPAWN_INTERVAL;

/// Spawn interval in seconds for a given score
pub fn spawn_interval_for(score: u32) -> f32 {
    if score > 50 {
        0.5
    } else if score > 20 {
        1.0
    } else if score > 0 {
        1.8
    } else {
        PIPE_SPAWN_INTERVAL
    }
}

/// Retune the spawn timer to the current score's tier
pub fn update(session: &mut GameSession) {
    let interval = spawn_interval_for(session.score);
    if session.spawn_timer.interval() != interval {
        session.spawn_timer.set_interval(interval);
    }
}
