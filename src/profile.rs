//! Player profile and leaderboard reporting
//!
//! Mirrors a hosted account service: a cached best-score attribute,
//! milestone flags and an append-only leaderboard. A finished run is
//! reported once through [`submit_session_score`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute key holding the player's best score
pub const SCORE_ATTRIBUTE: &str = "Score";
/// Leaderboard every finished run reports to
pub const LEADERBOARD: &str = "GameLeaderboard";
/// Milestone flags set when a new best clears their threshold
pub const MILESTONES: [(&str, u32); 2] = [("IsPassed100Points", 100), ("IsPassed200Points", 200)];

/// Errors a profile host can report back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("no player signed in")]
    NotSignedIn,
    #[error("attribute update rejected: {0}")]
    AttributeRejected(String),
    #[error("leaderboard submission failed: {0}")]
    SubmissionFailed(String),
}

/// Outcome callback for asynchronous profile writes
pub type Completion = Box<dyn FnOnce(Result<(), ProfileError>)>;

/// Account boundary for best-score and leaderboard reporting.
///
/// Writes are asynchronous on real hosts, so each takes a completion
/// callback reporting the outcome. The attribute read is a cached value
/// and stays synchronous.
pub trait ProfileHost {
    /// Cached numeric attribute, if the profile has one
    fn attribute(&self, key: &str) -> Option<u32>;
    /// Write a numeric attribute
    fn set_attribute(&mut self, key: &str, value: u32, done: Completion);
    /// Set a milestone flag
    fn set_flag(&mut self, key: &str, done: Completion);
    /// Append an entry to a leaderboard
    fn submit_entry(&mut self, board: &str, score: u32, done: Completion);
}

/// Report a finished run to the profile host.
///
/// A score strictly above the cached best updates the best-score
/// attribute and any milestone flags the score clears. Every run is
/// appended to the leaderboard regardless. `on_submitted` fires only
/// when the leaderboard accepts the entry; failed writes are logged and
/// the handoff is skipped.
pub fn submit_session_score(
    host: &mut dyn ProfileHost,
    score: u32,
    on_submitted: impl FnOnce() + 'static,
) {
    let best = host.attribute(SCORE_ATTRIBUTE).unwrap_or(0);
    if score > best {
        host.set_attribute(
            SCORE_ATTRIBUTE,
            score,
            Box::new(move |result| {
                if let Err(err) = result {
                    log::error!("failed to record best score {}: {}", score, err);
                }
            }),
        );
        for (flag, threshold) in MILESTONES {
            if score > threshold {
                host.set_flag(
                    flag,
                    Box::new(move |result| {
                        if let Err(err) = result {
                            log::error!("failed to set milestone {}: {}", flag, err);
                        }
                    }),
                );
            }
        }
    }

    host.submit_entry(
        LEADERBOARD,
        score,
        Box::new(move |result| match result {
            Ok(()) => on_submitted(),
            Err(err) => log::error!("leaderboard submission failed: {}", err),
        }),
    );
}

/// In-memory profile host, serializable for snapshot persistence.
///
/// Stands in for the hosted service in tests and headless runs; every
/// write completes synchronously and succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryProfile {
    attributes: HashMap<String, u32>,
    flags: Vec<String>,
    boards: HashMap<String, Vec<u32>>,
}

impl MemoryProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a milestone flag has been set
    pub fn flag(&self, key: &str) -> bool {
        self.flags.iter().any(|f| f == key)
    }

    /// Entries submitted to a leaderboard, in submission order
    pub fn board(&self, name: &str) -> &[u32] {
        self.boards.get(name).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Serialize the profile snapshot
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a profile snapshot
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ProfileHost for MemoryProfile {
    fn attribute(&self, key: &str) -> Option<u32> {
        self.attributes.get(key).copied()
    }

    fn set_attribute(&mut self, key: &str, value: u32, done: Completion) {
        self.attributes.insert(key.to_string(), value);
        done(Ok(()));
    }

    fn set_flag(&mut self, key: &str, done: Completion) {
        if !self.flag(key) {
            self.flags.push(key.to_string());
        }
        done(Ok(()));
    }

    fn submit_entry(&mut self, board: &str, score: u32, done: Completion) {
        self.boards.entry(board.to_string()).or_default().push(score);
        done(Ok(()));
    }
}
