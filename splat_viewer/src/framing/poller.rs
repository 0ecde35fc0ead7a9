/// Retry-until-ready framing
///
/// Bounds of a freshly loaded asset show up after an unpredictable number
/// of frames. A `FramingRequest` is stepped once per frame by its owner:
/// each step measures the scene and either frames it, asks for another
/// frame, or gives up and applies the fallback placement.

use crate::config::ViewerConfig;
use crate::error::Error;
use crate::session::ViewerSession;
use crate::{engine_trace, engine_warn};
use super::accumulator::{compute_bounds, BoundsReport};
use super::camera_framing::{apply_fallback, frame, FramingSolution};

/// Outcome of one step
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Bounds still empty; step again on the next frame
    Pending {
        /// Retries consumed so far (1-based)
        attempt: u32,
    },
    /// Scene framed; the request is finished
    Framed(FramingSolution),
    /// Retry ceiling exceeded, fallback placement applied; finished
    Fallback(Error),
}

impl PollOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, PollOutcome::Pending { .. })
    }
}

/// One framing request and its retry counter.
///
/// A new request starts from zero; replacing the owner's request is how an
/// in-flight retry sequence is cancelled.
#[derive(Debug, Clone)]
pub struct FramingRequest {
    attempts: u32,
    ceiling: u32,
    last_report: Option<BoundsReport>,
}

impl FramingRequest {
    pub fn new(ceiling: u32) -> Self {
        Self { attempts: 0, ceiling, last_report: None }
    }

    /// Retries consumed so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Report of the most recent accumulation pass
    pub fn last_report(&self) -> Option<&BoundsReport> {
        self.last_report.as_ref()
    }

    /// Measure once and act on the result.
    ///
    /// Must not be called again after a non-pending outcome.
    pub fn poll(
        &mut self,
        session: &mut dyn ViewerSession,
        config: &ViewerConfig,
        roll_flipped: bool,
    ) -> PollOutcome {
        let report = compute_bounds(session.scene_root());
        let volume = report.volume;
        self.last_report = Some(report);

        if let Some(solution) = frame(session, &volume, config, roll_flipped) {
            return PollOutcome::Framed(solution);
        }

        if self.attempts < self.ceiling {
            self.attempts += 1;
            engine_trace!(
                "splatview::Framing",
                "Bounds not ready, retry {}/{}",
                self.attempts,
                self.ceiling
            );
            return PollOutcome::Pending { attempt: self.attempts };
        }

        let error = Error::DegenerateScene { attempts: self.attempts + 1 };
        engine_warn!("splatview::Framing", "{}, using fallback camera", error);
        apply_fallback(session, config, roll_flipped);
        PollOutcome::Fallback(error)
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
