//! Pass-based scoring
//!
//! A pair scores once its trailing edge is strictly left of the bird's
//! leading edge. Each pair scores exactly once; the shell redraws its
//! digit display on every `ScoreChanged` event.

use super::state::{GameEvent, GameSession};
use crate::audio::AudioCue;

/// Mark newly passed pairs and award their points
pub fn update(session: &mut GameSession) {
    let bird_left = session.bird.entity.bounds().min.x;
    for (_, pair) in session.pipes.iter_mut() {
        if !pair.passed && pair.upper.bounds().max.x < bird_left {
            pair.passed = true;
            session.score += 1;
            session.events.push(GameEvent::Audio(AudioCue::Swoosh));
            session.events.push(GameEvent::ScoreChanged(session.score));
        }
    }
}

/// Decimal digits of a score, most significant first. Shells map each
/// digit to its sprite key when laying out the display.
pub fn digits(mut value: u32) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}
