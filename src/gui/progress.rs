// src/gui/progress.rs
use crate::progress::{Phase, Progress};

/// Mirrors refresh phases into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status }
    }
}

impl Progress for GuiProgress<'_> {
    fn phase(&mut self, phase: &Phase) {
        if phase.is_terminal() {
            logf!("Refresh: Done → {}", phase);
        } else {
            logd!("Refresh: Phase → {}", phase);
        }
        // Keep the failure text up; Idle right after it says nothing new
        if !matches!(phase, Phase::Idle) {
            *self.status = phase.to_string();
        }
    }
}
