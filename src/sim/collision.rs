//! Axis-aligned collision checks
//!
//! Every obstacle in the field is a rectangle, so contact testing is a
//! plain AABB overlap. Ground contact is checked before pipe contact;
//! when both touch on the same step the ground decides the death cue.

use super::entity::Aabb;
use super::state::{GameSession, SessionPhase};
use crate::audio::AudioCue;

/// Strict AABB overlap test. Boxes that merely share an edge or corner
/// do not count as overlapping.
#[inline]
pub fn aabb_overlap(a: Aabb, b: Aabb) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Find the first lethal contact for the bird, if any
fn lethal_contact(session: &GameSession) -> Option<AudioCue> {
    let bird = session.bird.entity.bounds();

    for ground in &session.grounds {
        if aabb_overlap(bird, ground.bounds()) {
            return Some(AudioCue::Die);
        }
    }

    for (_, pair) in session.pipes.iter() {
        if aabb_overlap(bird, pair.upper.bounds()) || aabb_overlap(bird, pair.lower.bounds()) {
            return Some(AudioCue::Hit);
        }
    }

    None
}

/// End the run if the bird is in contact with ground or pipe
pub fn resolve(session: &mut GameSession) {
    if session.phase != SessionPhase::Running {
        return;
    }
    if let Some(cue) = lethal_contact(session) {
        session.end_run(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GameEvent, PipePair};
    use glam::Vec2;

    fn aabb(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Aabb {
        Aabb {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    fn running_session() -> GameSession {
        let mut session = GameSession::new(11);
        session.begin_run();
        session.drain_events();
        session
    }

    #[test]
    fn test_overlapping_boxes_hit() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 15.0, 15.0);
        assert!(aabb_overlap(a, b));
        assert!(aabb_overlap(b, a));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(20.0, 0.0, 30.0, 10.0);
        assert!(!aabb_overlap(a, b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let right = aabb(10.0, 0.0, 20.0, 10.0);
        let below = aabb(0.0, 10.0, 10.0, 20.0);
        assert!(!aabb_overlap(a, right));
        assert!(!aabb_overlap(a, below));
    }

    #[test]
    fn test_touching_corners_do_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let diagonal = aabb(10.0, 10.0, 20.0, 20.0);
        assert!(!aabb_overlap(a, diagonal));
    }

    #[test]
    fn test_airborne_bird_is_safe() {
        let mut session = running_session();
        session
            .pipes
            .try_insert(PipePair::new(300.0, 100.0, 100.0))
            .expect("pool has room");

        resolve(&mut session);

        assert_eq!(session.phase, SessionPhase::Running);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_ground_contact_ends_run_with_die() {
        let mut session = running_session();
        session.bird.entity.pos.y = FIELD_HEIGHT - GROUND_HEIGHT;

        resolve(&mut session);

        assert_eq!(session.phase, SessionPhase::Over);
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::Audio(AudioCue::Die)));
        assert!(events.contains(&GameEvent::SessionEnded { score: 0 }));
    }

    #[test]
    fn test_pipe_contact_ends_run_with_hit() {
        let mut session = running_session();
        session.bird.entity.pos.y = 100.0;
        session
            .pipes
            .try_insert(PipePair::new(BIRD_X, 150.0, 100.0))
            .expect("pool has room");

        resolve(&mut session);

        assert_eq!(session.phase, SessionPhase::Over);
        assert!(
            session
                .drain_events()
                .contains(&GameEvent::Audio(AudioCue::Hit))
        );
    }

    #[test]
    fn test_ground_outranks_pipe_on_same_step() {
        let mut session = running_session();
        session.bird.entity.pos.y = FIELD_HEIGHT - GROUND_HEIGHT;
        session
            .pipes
            .try_insert(PipePair::new(BIRD_X, 80.0, 200.0))
            .expect("pool has room");

        resolve(&mut session);

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::Audio(AudioCue::Die)));
        assert!(!events.contains(&GameEvent::Audio(AudioCue::Hit)));
    }

    #[test]
    fn test_resolve_inert_outside_running() {
        let mut session = GameSession::new(11);
        session.bird.entity.pos.y = FIELD_HEIGHT - GROUND_HEIGHT;

        resolve(&mut session);

        assert_eq!(session.phase, SessionPhase::Ready);
        assert!(session.drain_events().is_empty());
    }
}
