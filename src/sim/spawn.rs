//! Obstacle spawning and lifecycle
//!
//! Pairs spawn on the spawn timer just past the right field edge, scroll
//! left at constant speed and are retired once fully offscreen. The pool
//! has fixed capacity; a full pool skips the spawn.

use generational_arena::Index;
use rand::Rng;

use super::state::{GameSession, PipePair};
use crate::consts::*;

/// Move live pairs and spawn new ones as the timer fires
pub fn update(session: &mut GameSession, dt: f32) {
    for (_, pair) in session.pipes.iter_mut() {
        pair.upper.advance(dt);
        pair.lower.advance(dt);
    }

    let fires = session.spawn_timer.advance(dt);
    for _ in 0..fires {
        spawn_pair(session);
    }
}

/// Spawn one pair at the spawn column with independently drawn heights.
/// Returns the slot, or None when the pool is full.
pub fn spawn_pair(session: &mut GameSession) -> Option<Index> {
    let x = FIELD_WIDTH + SPAWN_X_MARGIN;
    let upper_height = session.rng.random_range(MIN_PIPE_HEIGHT..=MAX_PIPE_HEIGHT);
    let lower_height = session.rng.random_range(MIN_PIPE_HEIGHT..=MAX_PIPE_HEIGHT);

    match session
        .pipes
        .try_insert(PipePair::new(x, upper_height, lower_height))
    {
        Ok(index) => Some(index),
        Err(_) => {
            log::warn!(
                "pipe pool full ({} pairs), skipping spawn",
                session.pipes.len()
            );
            None
        }
    }
}

/// Remove pairs whose right edge has scrolled past the left field edge.
/// Runs after the scoring and collision checks of the tick, so a pair is
/// never retired before they have seen it.
pub fn retire_offscreen(session: &mut GameSession) {
    session.pipes.retain(|_, pair| pair.upper.bounds().max.x >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn running_session(seed: u64) -> GameSession {
        let mut session = GameSession::new(seed);
        session.begin_run();
        session.drain_events();
        session
    }

    #[test]
    fn test_spawned_heights_stay_in_range() {
        let mut session = running_session(42);
        for _ in 0..1000 {
            let index = spawn_pair(&mut session).expect("pool has room");
            let pair = &session.pipes[index];
            assert_eq!(pair.upper.pos.x, FIELD_WIDTH + SPAWN_X_MARGIN);
            assert_eq!(pair.lower.pos.x, FIELD_WIDTH + SPAWN_X_MARGIN);
            assert!(pair.upper.size.y >= MIN_PIPE_HEIGHT);
            assert!(pair.upper.size.y <= MAX_PIPE_HEIGHT);
            assert!(pair.lower.size.y >= MIN_PIPE_HEIGHT);
            assert!(pair.lower.size.y <= MAX_PIPE_HEIGHT);
            session.pipes.clear();
        }
    }

    #[test]
    fn test_pieces_anchor_to_top_and_ground() {
        let mut session = running_session(42);
        let index = spawn_pair(&mut session).expect("pool has room");
        let pair = &session.pipes[index];

        assert!((pair.upper.bounds().min.y).abs() < 1e-3);
        assert!((pair.lower.bounds().max.y - (FIELD_HEIGHT - GROUND_HEIGHT)).abs() < 1e-3);
        assert_eq!(pair.upper.vel.x, -PIPE_SPEED);
        assert_eq!(pair.lower.vel.x, -PIPE_SPEED);
        assert_eq!(pair.upper.vel.y, 0.0);
        assert_eq!(pair.lower.vel.y, 0.0);
    }

    #[test]
    fn test_full_pool_skips_spawn() {
        let mut session = running_session(42);
        for _ in 0..PIPE_POOL {
            assert!(spawn_pair(&mut session).is_some());
        }
        assert_eq!(session.pipes.len(), PIPE_POOL);
        assert!(spawn_pair(&mut session).is_none());
        assert_eq!(session.pipes.len(), PIPE_POOL);
    }

    #[test]
    fn test_update_moves_pairs_left() {
        let mut session = running_session(42);
        let index = spawn_pair(&mut session).expect("pool has room");
        let x0 = session.pipes[index].upper.pos.x;

        update(&mut session, 0.25);

        let pair = &session.pipes[index];
        assert_eq!(pair.upper.pos.x, x0 - PIPE_SPEED * 0.25);
        assert_eq!(pair.lower.pos.x, x0 - PIPE_SPEED * 0.25);
    }

    #[test]
    fn test_timer_fires_spawn_through_update() {
        let mut session = running_session(42);
        update(&mut session, PIPE_SPAWN_INTERVAL);
        assert_eq!(session.pipes.len(), 1);
        update(&mut session, PIPE_SPAWN_INTERVAL * 2.0);
        assert_eq!(session.pipes.len(), 3);
    }

    #[test]
    fn test_no_spawn_between_timer_fires() {
        let mut session = running_session(42);
        update(&mut session, SIM_DT);
        assert!(session.pipes.is_empty());
    }

    #[test]
    fn test_retire_only_fully_offscreen() {
        let mut session = running_session(42);
        let gone = session
            .pipes
            .try_insert(PipePair::new(-(PIPE_WIDTH / 2.0) - 1.0, 100.0, 100.0))
            .expect("pool has room");
        // Right edge exactly on the field edge stays
        let edge = session
            .pipes
            .try_insert(PipePair::new(-(PIPE_WIDTH / 2.0), 100.0, 100.0))
            .expect("pool has room");
        let visible = session
            .pipes
            .try_insert(PipePair::new(200.0, 100.0, 100.0))
            .expect("pool has room");

        retire_offscreen(&mut session);

        assert!(session.pipes.get(gone).is_none());
        assert!(session.pipes.get(edge).is_some());
        assert!(session.pipes.get(visible).is_some());
    }
}
