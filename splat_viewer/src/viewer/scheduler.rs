/// Deferred work keyed to frames and timestamps
///
/// The viewer has no threads and no timers of its own. Work that must
/// happen "on the next frame" or "80 ms from now" is queued here and
/// picked up by `Viewer::on_frame`. Every task carries the epoch it was
/// queued in and is dropped if a newer load has started since.

use std::time::Duration;

/// Work the viewer can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Start a fresh framing request
    Reframe,
    /// Re-measure bounds and run the up-axis heuristic
    ClassifyUpAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Due {
    NextFrame,
    At(Duration),
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    task: DeferredTask,
    due: Due,
    epoch: u64,
}

/// Queue of deferred tasks, drained once per frame
#[derive(Debug, Default)]
pub struct FrameScheduler {
    tasks: Vec<ScheduledTask>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Run `task` on the first frame after the current one
    pub fn schedule_next_frame(&mut self, task: DeferredTask, epoch: u64) {
        self.tasks.push(ScheduledTask { task, due: Due::NextFrame, epoch });
    }

    /// Run `task` on the first frame at or after `at`
    pub fn schedule_at(&mut self, task: DeferredTask, at: Duration, epoch: u64) {
        self.tasks.push(ScheduledTask { task, due: Due::At(at), epoch });
    }

    /// Remove and return the tasks due at `now`, in scheduling order.
    ///
    /// Tasks from an older epoch are discarded. Tasks scheduled after this
    /// call wait for the next one.
    pub fn take_due(&mut self, now: Duration, epoch: u64) -> Vec<DeferredTask> {
        self.tasks.retain(|scheduled| scheduled.epoch == epoch);

        let (due, waiting): (Vec<_>, Vec<_>) = self.tasks.drain(..).partition(|scheduled| {
            match scheduled.due {
                Due::NextFrame => true,
                Due::At(at) => at <= now,
            }
        });
        self.tasks = waiting;

        due.into_iter().map(|scheduled| scheduled.task).collect()
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
