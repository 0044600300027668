// src/progress.rs
use std::fmt;

/// Where a refresh currently stands.
///
/// `Idle → Authenticating → Fetching → Parsing → Ready` on success;
/// any step can end in `Failed`, after which the frontend drops back to `Idle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Authenticating,
    Fetching,
    Parsing,
    Ready { rows: usize },
    Failed(String),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Ready { .. } | Phase::Failed(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Authenticating => write!(f, "Logging in…"),
            Phase::Fetching => write!(f, "Fetching report…"),
            Phase::Parsing => write!(f, "Reading table…"),
            Phase::Ready { rows } => write!(f, "Ready ({rows} rows)"),
            Phase::Failed(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Lightweight progress reporting for a refresh.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called on every state transition.
    fn phase(&mut self, _phase: &Phase) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every phase it sees.
#[derive(Debug, Default)]
pub struct PhaseLog {
    pub phases: Vec<Phase>,
}

impl Progress for PhaseLog {
    fn phase(&mut self, phase: &Phase) {
        self.phases.push(phase.clone());
    }
}
