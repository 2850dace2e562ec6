//! Session state and core entity types
//!
//! Everything a running session owns lives on `GameSession`. Subsystems
//! receive `&mut GameSession`; there is no ambient state.

use generational_arena::Arena;
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::timer::IntervalTimer;
use crate::audio::AudioCue;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the first activation; nothing moves
    Ready,
    /// Active gameplay
    Running,
    /// Run ended, state frozen. Terminal until a new session is built.
    Over,
}

/// Bird color variants, keyed into sprite names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirdColor {
    #[default]
    Red,
    Blue,
    Yellow,
}

impl BirdColor {
    /// Sprite key for a flap animation frame
    pub fn sprite_key(self, frame: u8) -> &'static str {
        const KEYS: [[&str; 3]; 3] = [
            ["redbird-0", "redbird-1", "redbird-2"],
            ["bluebird-0", "bluebird-1", "bluebird-2"],
            ["yellowbird-0", "yellowbird-1", "yellowbird-2"],
        ];
        let row = match self {
            BirdColor::Red => 0,
            BirdColor::Blue => 1,
            BirdColor::Yellow => 2,
        };
        KEYS[row][(frame % FLAP_FRAMES) as usize]
    }
}

/// The controlled character
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub entity: Entity,
    /// Visual tilt in degrees, derived from vertical velocity
    pub angle: f32,
    pub alive: bool,
    pub color: BirdColor,
    /// Drives the flap animation
    pub anim_timer: IntervalTimer,
    /// Current flap frame, cycling 0..FLAP_FRAMES
    pub anim_frame: u8,
}

impl Bird {
    pub fn new(color: BirdColor) -> Self {
        Self {
            entity: Entity::new(
                Vec2::new(BIRD_X, FIELD_HEIGHT / 2.0),
                Vec2::ZERO,
                Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            ),
            angle: 0.0,
            alive: true,
            color,
            anim_timer: IntervalTimer::new(ANIM_INTERVAL),
            anim_frame: 0,
        }
    }

    /// Sprite key for the current animation frame
    pub fn sprite_key(&self) -> &'static str {
        self.color.sprite_key(self.anim_frame)
    }

    /// Pitch by vertical velocity: ramped dive past the fast-fall
    /// threshold, level while falling gently, nose up while climbing
    pub fn update_tilt(&mut self, dt: f32) {
        let vy = self.entity.vel.y;
        if vy > FAST_FALL_SPEED {
            self.angle = (self.angle + DIVE_TILT_RATE * dt).min(MAX_DIVE_ANGLE);
        } else if vy > 0.0 {
            self.angle = 0.0;
        } else {
            self.angle = CLIMB_ANGLE;
        }
    }
}

/// An obstacle pair sharing one spawn column
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Upper piece, hanging from the top edge
    pub upper: Entity,
    /// Lower piece, standing on the ground line
    pub lower: Entity,
    /// Set once when the pair has been scored
    pub passed: bool,
}

impl PipePair {
    pub fn new(x: f32, upper_height: f32, lower_height: f32) -> Self {
        let ground_top = FIELD_HEIGHT - GROUND_HEIGHT;
        Self {
            upper: Entity::new(
                Vec2::new(x, upper_height / 2.0),
                Vec2::new(-PIPE_SPEED, 0.0),
                Vec2::new(PIPE_WIDTH, upper_height),
            ),
            lower: Entity::new(
                Vec2::new(x, ground_top - lower_height / 2.0),
                Vec2::new(-PIPE_SPEED, 0.0),
                Vec2::new(PIPE_WIDTH, lower_height),
            ),
            passed: false,
        }
    }

    /// Vertical center of the gap between the two pieces
    pub fn gap_center_y(&self) -> f32 {
        (self.upper.bounds().max.y + self.lower.bounds().min.y) / 2.0
    }
}

/// Events raised by the simulation, drained by the shell once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new run began; the shell tears down its ready splash
    SessionStarted,
    /// Play a sound effect
    Audio(AudioCue),
    /// Score changed; the shell redraws its digit display
    ScoreChanged(u32),
    /// The run ended. Emitted exactly once per session.
    SessionEnded { score: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG, seeded once per session
    pub rng: Pcg32,
    pub phase: SessionPhase,
    /// Tick counter; advances only while running
    pub time_ticks: u64,
    pub bird: Bird,
    /// Ground strip segments, recycled to scroll forever
    pub grounds: [Entity; GROUND_SEGMENTS],
    /// Live obstacle pairs, fixed capacity
    pub pipes: Arena<PipePair>,
    pub score: u32,
    /// Drives obstacle spawning; retuned by difficulty
    pub spawn_timer: IntervalTimer,
    /// Pending events for the shell
    pub events: Vec<GameEvent>,
    /// One-shot guard for the end-of-run report
    score_submitted: bool,
}

impl GameSession {
    /// Create a session waiting in `Ready` with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_color(seed, BirdColor::default())
    }

    /// Create a session with a chosen bird color
    pub fn with_color(seed: u64, color: BirdColor) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Ready,
            time_ticks: 0,
            bird: Bird::new(color),
            grounds: ground_strip(),
            pipes: Arena::with_capacity(PIPE_POOL),
            score: 0,
            spawn_timer: IntervalTimer::new(PIPE_SPAWN_INTERVAL),
            events: Vec::new(),
            score_submitted: false,
        }
    }

    /// Start the run from `Ready`. Rebuilds the field and announces the
    /// session; the starting activation itself applies no impulse.
    pub fn begin_run(&mut self) {
        let color = self.bird.color;
        self.phase = SessionPhase::Running;
        self.bird = Bird::new(color);
        self.grounds = ground_strip();
        self.pipes.clear();
        self.score = 0;
        self.spawn_timer = IntervalTimer::new(PIPE_SPAWN_INTERVAL);
        self.score_submitted = false;
        self.events.push(GameEvent::SessionStarted);
    }

    /// Terminal transition on a lethal collision.
    ///
    /// Freezes every horizontal velocity, pauses both timers and raises the
    /// end-of-run events. Calling this again once the session is over does
    /// nothing, so the report cannot be duplicated.
    pub fn end_run(&mut self, cue: AudioCue) {
        if self.phase == SessionPhase::Over {
            return;
        }
        self.phase = SessionPhase::Over;
        self.bird.alive = false;
        for segment in &mut self.grounds {
            segment.vel.x = 0.0;
        }
        for (_, pair) in self.pipes.iter_mut() {
            pair.upper.vel.x = 0.0;
            pair.lower.vel.x = 0.0;
        }
        self.spawn_timer.pause();
        self.bird.anim_timer.pause();
        self.events.push(GameEvent::Audio(cue));
        if !self.score_submitted {
            self.score_submitted = true;
            self.events.push(GameEvent::SessionEnded { score: self.score });
        }
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the end-of-run report has been raised
    pub fn score_submitted(&self) -> bool {
        self.score_submitted
    }
}

/// The initial ground strip: contiguous segments starting at the field
/// origin, scrolling left together
fn ground_strip() -> [Entity; GROUND_SEGMENTS] {
    std::array::from_fn(|i| {
        Entity::new(
            Vec2::new(
                GROUND_WIDTH * (i as f32 + 0.5),
                FIELD_HEIGHT - GROUND_HEIGHT / 2.0,
            ),
            Vec2::new(-GROUND_SPEED, 0.0),
            Vec2::new(GROUND_WIDTH, GROUND_HEIGHT),
        )
    })
}
