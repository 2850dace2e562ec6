//! Fixed timestep simulation tick
//!
//! Core loop that advances a session deterministically. The shell feeds
//! display frames to a [`FrameClock`]; tests drive [`tick`] directly.

use super::state::{GameEvent, GameSession, SessionPhase};
use super::{collision, difficulty, score, scroll, spawn};
use crate::audio::AudioCue;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (click/tap/space). Also starts a run from `Ready`.
    pub activate: bool,
    /// Demo mode - the session flies itself
    pub autopilot: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    let mut input = input.clone();
    if input.autopilot {
        input.activate = autopilot_wants_flap(session);
    }

    match session.phase {
        SessionPhase::Ready => {
            // The starting activation only begins the run; physics waits
            // for the next tick.
            if input.activate {
                session.begin_run();
            }
        }
        SessionPhase::Running => run_tick(session, &input, dt),
        SessionPhase::Over => {}
    }
}

/// Converts variable display frames into fixed simulation steps.
///
/// Wall time is banked across frames and spent one [`SIM_DT`] step at a
/// time with the remainder carried, so the game runs at wall speed on any
/// refresh rate. A tap landing on a frame too short to step stays latched
/// until the next step runs; one tap is one flap no matter how the frames
/// fall.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    pending_activate: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one display frame of `frame_dt` seconds to the session.
    ///
    /// Runs at most [`MAX_SUBSTEPS`] steps and banks at most
    /// [`MAX_FRAME_CATCHUP`] per frame, so a stalled shell resumes
    /// instead of fast-forwarding the run.
    pub fn advance(&mut self, session: &mut GameSession, input: &TickInput, frame_dt: f32) {
        if input.activate {
            self.pending_activate = true;
        }
        self.accumulator += frame_dt.max(0.0).min(MAX_FRAME_CATCHUP);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            let step_input = TickInput {
                activate: self.pending_activate,
                autopilot: input.autopilot,
            };
            tick(session, &step_input, SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;

            // One-shot input consumed by the first step
            self.pending_activate = false;
        }
    }
}

fn run_tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    session.time_ticks += 1;

    if input.activate && session.bird.alive {
        session.bird.entity.vel.y = FLAP_VELOCITY;
        session.events.push(GameEvent::Audio(AudioCue::Wing));
    }

    // Bird physics
    session.bird.entity.vel.y += GRAVITY * dt;
    session.bird.entity.advance(dt);
    if session.bird.entity.bounds().min.y < 0.0 {
        // The top edge is a hard stop, not a kill
        session.bird.entity.pos.y = session.bird.entity.size.y / 2.0;
        if session.bird.entity.vel.y < 0.0 {
            session.bird.entity.vel.y = 0.0;
        }
    }
    session.bird.update_tilt(dt);
    let frames = session.bird.anim_timer.advance(dt);
    if frames > 0 {
        session.bird.anim_frame =
            ((session.bird.anim_frame as u32 + frames) % FLAP_FRAMES as u32) as u8;
    }

    scroll::update(session, dt);
    spawn::update(session, dt);
    score::update(session);
    difficulty::update(session);
    collision::resolve(session);

    // Retirement runs last so a pair never vanishes mid-tick, and not at
    // all once a collision has frozen the field.
    if session.phase == SessionPhase::Running {
        spawn::retire_offscreen(session);
    }
}

/// Steer toward the next gap: flap whenever sinking below the target line
fn autopilot_wants_flap(session: &GameSession) -> bool {
    match session.phase {
        SessionPhase::Ready => true,
        SessionPhase::Over => false,
        SessionPhase::Running => {
            let bird = &session.bird.entity;
            let target = session
                .pipes
                .iter()
                .filter(|(_, pair)| pair.upper.bounds().max.x >= bird.bounds().min.x)
                .min_by(|(_, a), (_, b)| {
                    a.upper
                        .pos
                        .x
                        .partial_cmp(&b.upper.pos.x)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(_, pair)| pair.gap_center_y())
                .unwrap_or(FIELD_HEIGHT / 2.0);
            bird.pos.y > target && bird.vel.y > 0.0
        }
    }
}
