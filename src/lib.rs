//! Tapwing - a side-scrolling tap-to-flap arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, scoring, collisions)
//! - `audio`: Sound cues and the playback seam
//! - `profile`: Player profile and leaderboard reporting
//!
//! Rendering, asset loading and input devices live in the shell; it feeds
//! display frames to a [`sim::FrameClock`] and drains [`sim::GameEvent`]s
//! once per frame.

pub mod audio;
pub mod profile;
pub mod sim;

pub use audio::{AudioCue, AudioSink, NullAudio};
pub use profile::{MemoryProfile, ProfileError, ProfileHost};
pub use sim::{FrameClock, GameEvent, GameSession, SessionPhase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest stall a single display frame may catch up (seconds)
    pub const MAX_FRAME_CATCHUP: f32 = 0.1;

    /// Field dimensions (world units, y grows downward)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Ground strip
    pub const GROUND_WIDTH: f32 = 336.0;
    pub const GROUND_HEIGHT: f32 = 112.0;
    pub const GROUND_SEGMENTS: usize = 3;
    /// Ground scroll speed (units/s, leftward)
    pub const GROUND_SPEED: f32 = 180.0;

    /// Obstacle pairs
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const MIN_PIPE_HEIGHT: f32 = 80.0;
    pub const MAX_PIPE_HEIGHT: f32 = 200.0;
    /// Pipe scroll speed (units/s, leftward)
    pub const PIPE_SPEED: f32 = 200.0;
    /// Base spawn cadence (seconds); difficulty shortens it
    pub const PIPE_SPAWN_INTERVAL: f32 = 2.0;
    /// Pairs spawn this far past the right field edge
    pub const SPAWN_X_MARGIN: f32 = 100.0;
    /// Fixed capacity of the pipe pool
    pub const PIPE_POOL: usize = 32;

    /// Bird defaults
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_WIDTH: f32 = 51.0;
    pub const BIRD_HEIGHT: f32 = 36.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Vertical velocity applied by a flap
    pub const FLAP_VELOCITY: f32 = -300.0;
    /// Flap animation frame period (seconds)
    pub const ANIM_INTERVAL: f32 = 0.1;
    /// Flap animation frames per bird color
    pub const FLAP_FRAMES: u8 = 3;

    /// Falling faster than this pitches the bird into a dive
    pub const FAST_FALL_SPEED: f32 = 300.0;
    /// Dive pitch rate (degrees/s)
    pub const DIVE_TILT_RATE: f32 = 1800.0;
    pub const MAX_DIVE_ANGLE: f32 = 90.0;
    pub const CLIMB_ANGLE: f32 = -30.0;
}
