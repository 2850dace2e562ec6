//! Infinite ground strip
//!
//! A fixed pool of ground segments scrolls left; a segment that has fully
//! left the field jumps to the back of the strip. The strip stays
//! contiguous because every segment moves identically and jumps by exactly
//! the strip length.

use super::state::GameSession;
use crate::consts::*;

/// Length of the whole strip in world units
fn strip_length() -> f32 {
    GROUND_WIDTH * GROUND_SEGMENTS as f32
}

/// Advance the strip and recycle segments that left the field
pub fn update(session: &mut GameSession, dt: f32) {
    for segment in &mut session.grounds {
        segment.advance(dt);
        if segment.bounds().max.x < 0.0 {
            segment.pos.x += strip_length();
        }
    }
}
