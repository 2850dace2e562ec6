//! Sound cues and the playback seam
//!
//! The simulation never touches an audio device. It raises [`AudioCue`]s
//! through the event queue and the shell feeds them to an [`AudioSink`].

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Bird hit the ground
    Die,
    /// Bird clipped a pipe
    Hit,
    /// A pair slipped past and scored
    Swoosh,
    /// Flap impulse
    Wing,
}

impl AudioCue {
    /// Asset key of the backing sound file
    pub fn key(self) -> &'static str {
        match self {
            AudioCue::Die => "die",
            AudioCue::Hit => "hit",
            AudioCue::Swoosh => "swoosh",
            AudioCue::Wing => "wing",
        }
    }
}

/// Playback seam. Shells wrap their audio device in this; tests and
/// headless runs use [`NullAudio`].
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Sink that swallows every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}
