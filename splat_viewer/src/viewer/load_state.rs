/// Load status shown by the UI
///
/// One in-flight load at most: `Idle -> Loading -> Ready | Failed`. A new
/// submission is accepted from any phase and replaces the current one.

use std::fmt;

use crate::error::Error;
use crate::session::LoadTicket;

/// Display name before anything has loaded
pub const NO_SCENE_NAME: &str = "No scene loaded";

/// Coarse status for badges and spinners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Ready => "ready",
            LoadStatus::Error => "error",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of the load state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    /// Waiting for the completion of this ticket
    Loading(LoadTicket),
    Ready,
    /// Last load failed; nothing is in flight
    Failed,
}

/// Load state machine plus what the status indicator displays
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState {
    phase: LoadPhase,
    display_name: String,
    /// Name of the asset in flight, shown once it is ready
    pending_name: Option<String>,
    error: Option<String>,
}

impl LoadState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            display_name: NO_SCENE_NAME.to_string(),
            pending_name: None,
            error: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn status(&self) -> LoadStatus {
        match self.phase {
            LoadPhase::Idle => LoadStatus::Idle,
            LoadPhase::Loading(_) => LoadStatus::Loading,
            LoadPhase::Ready => LoadStatus::Ready,
            LoadPhase::Failed => LoadStatus::Error,
        }
    }

    /// Name of the scene on screen; only a successful load changes it
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name of the asset being loaded, if any
    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    /// Collapsed error message, set only after a failed load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading(_))
    }

    /// Ticket of the load in flight
    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        match self.phase {
            LoadPhase::Loading(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Start loading `name`, replacing whatever was there.
    ///
    /// The previous scene is cleared, so nothing is named until success.
    pub fn begin(&mut self, ticket: LoadTicket, name: String) {
        self.phase = LoadPhase::Loading(ticket);
        self.display_name = NO_SCENE_NAME.to_string();
        self.pending_name = Some(name);
        self.error = None;
    }

    /// The load in flight finished; its name goes on display
    pub fn succeed(&mut self) {
        self.phase = LoadPhase::Ready;
        if let Some(name) = self.pending_name.take() {
            self.display_name = name;
        }
        self.error = None;
    }

    /// The load in flight failed.
    ///
    /// The previous scene was already cleared, so the name resets too.
    pub fn fail(&mut self, error: &Error) {
        self.phase = LoadPhase::Failed;
        self.display_name = NO_SCENE_NAME.to_string();
        self.pending_name = None;
        self.error = Some(error.user_message());
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "load_state_tests.rs"]
mod tests;
