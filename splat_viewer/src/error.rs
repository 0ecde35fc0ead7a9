//! Error types for the splat viewer
//!
//! This module defines the error kinds produced while loading, measuring,
//! and framing a splat scene. Only load failures ever reach the UI, and
//! they do so as a single collapsed message (see [`Error::user_message`]).

use std::fmt;

/// Result type for splat viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to the user for every load failure.
///
/// The raw engine error is logged, never displayed.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load scene: check the URL, cross-origin (CORS) policy and format (.ksplat/.splat/.ply)";

/// Splat viewer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Asset fetch failed (network, HTTP status, cross-origin policy)
    TransportError(String),

    /// Unrecognized, corrupt, or undecodable asset
    FormatError(String),

    /// Bounds never stabilized within the retry ceiling (recovered by fallback framing)
    DegenerateScene {
        /// Number of accumulation passes that came back empty
        attempts: u32,
    },

    /// A load completion arrived after a newer load superseded it
    StaleCompletion {
        /// Epoch captured when the load was submitted
        ticket_epoch: u64,
        /// Epoch of the viewer when the completion arrived
        current_epoch: u64,
    },

    /// Rendering engine failure
    BackendError(String),

    /// Viewer could not be created or used (not mounted, already disposed)
    InitializationFailed(String),
}

impl Error {
    /// True for the errors a load can end with (surfaced to the UI).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Error::TransportError(_) | Error::FormatError(_) | Error::BackendError(_)
        )
    }

    /// Human-readable message for the status indicator.
    ///
    /// Load failures collapse into [`LOAD_FAILURE_MESSAGE`]; the other kinds
    /// are recovered internally and fall back to their `Display` text.
    pub fn user_message(&self) -> String {
        if self.is_load_failure() {
            LOAD_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportError(msg) => write!(f, "Transport error: {}", msg),
            Error::FormatError(msg) => write!(f, "Format error: {}", msg),
            Error::DegenerateScene { attempts } => {
                write!(f, "Scene bounds did not stabilize after {} attempts", attempts)
            }
            Error::StaleCompletion { ticket_epoch, current_epoch } => write!(
                f,
                "Stale load completion (epoch {}, current {})",
                ticket_epoch, current_epoch
            ),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error::BackendError`] and log it at ERROR severity.
///
/// # Example
///
/// ```no_run
/// # use splat_viewer::engine_err;
/// let err = engine_err!("splatview::Headless", "Node {} has no geometry", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::splatview::Error::BackendError(message)
    }};
}

/// Log and return an [`Error::BackendError`] from the current function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
