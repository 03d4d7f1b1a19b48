//! Animation tasks
//!
//! An [`AnimationTask`] describes one time-based transition: how long it
//! runs, how raw progress is eased, what to draw each frame, and optionally
//! which task should follow it. Starting a task yields an [`Animation`] whose
//! [`AnimationHandle`] can cancel it from anywhere.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::easing::Easing;

/// Per-frame draw callback, receives eased progress in [0, 1]
pub type DrawFn = Box<dyn FnMut(f32)>;

/// Completion callback; may return a task to run next
pub type DoneFn = Box<dyn FnOnce() -> Option<AnimationTask>>;

/// Description of a single animated transition
pub struct AnimationTask {
    duration: Duration,
    timing: Easing,
    draw: DrawFn,
    done: Option<DoneFn>,
}

impl AnimationTask {
    /// Create a linear task
    pub fn new(duration: Duration, draw: impl FnMut(f32) + 'static) -> Self {
        Self {
            duration,
            timing: Easing::Linear,
            draw: Box::new(draw),
            done: None,
        }
    }

    /// Set the timing curve
    pub fn timing(mut self, timing: Easing) -> Self {
        self.timing = timing;
        self
    }

    /// Set the completion callback
    pub fn on_done(mut self, done: impl FnOnce() -> Option<AnimationTask> + 'static) -> Self {
        self.done = Some(Box::new(done));
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.timing
    }
}

impl std::fmt::Debug for AnimationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationTask")
            .field("duration", &self.duration)
            .field("timing", &self.timing)
            .field("chained", &self.done.is_some())
            .finish()
    }
}

// ============================================================================
// Running animations
// ============================================================================

/// Shared cancellation flag for a running animation
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Outcome of stepping an animation one frame
#[derive(Debug)]
pub enum AnimationStatus {
    Running,
    /// Reached full progress; carries the chained task, if any
    Finished(Option<AnimationTask>),
    Cancelled,
}

/// A started [`AnimationTask`]
#[derive(Debug)]
pub struct Animation {
    task: AnimationTask,
    started_at: Duration,
    progress: f32,
    handle: AnimationHandle,
}

impl Animation {
    pub fn start(task: AnimationTask, now: Duration) -> Self {
        Self {
            task,
            started_at: now,
            progress: 0.0,
            handle: AnimationHandle::default(),
        }
    }

    pub fn handle(&self) -> AnimationHandle {
        self.handle.clone()
    }

    /// Raw (uneased) progress of the last drawn frame
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Draw the frame for `now`
    pub fn step(&mut self, now: Duration) -> AnimationStatus {
        if self.handle.is_cancelled() {
            return AnimationStatus::Cancelled;
        }

        let elapsed = now.saturating_sub(self.started_at);
        self.progress = if self.task.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.task.duration.as_secs_f32()).min(1.0)
        };

        (self.task.draw)(self.task.timing.apply(self.progress));

        if self.progress >= 1.0 {
            let next = self.task.done.take().and_then(|done| done());
            AnimationStatus::Finished(next)
        } else {
            AnimationStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_progress_is_time_based() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let task = AnimationTask::new(ms(200), move |p| sink.borrow_mut().push(p));

        let mut animation = Animation::start(task, ms(1000));
        assert!(matches!(animation.step(ms(1000)), AnimationStatus::Running));
        assert!(matches!(animation.step(ms(1100)), AnimationStatus::Running));
        assert!(matches!(animation.step(ms(1300)), AnimationStatus::Finished(None)));

        assert_eq!(*frames.borrow(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut animation = Animation::start(AnimationTask::new(Duration::ZERO, |_| {}), ms(0));
        assert!(matches!(animation.step(ms(0)), AnimationStatus::Finished(None)));
        assert_eq!(animation.progress(), 1.0);
    }

    #[test]
    fn test_done_chains_next_task() {
        let task = AnimationTask::new(ms(10), |_| {})
            .on_done(|| Some(AnimationTask::new(ms(20), |_| {}).timing(Easing::SCROLL)));

        let mut animation = Animation::start(task, ms(0));
        match animation.step(ms(10)) {
            AnimationStatus::Finished(Some(next)) => {
                assert_eq!(next.duration(), ms(20));
                assert_eq!(next.easing(), Easing::SCROLL);
            }
            other => panic!("expected chained task, got {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_animation_stops_drawing() {
        let drawn = Rc::new(Cell::new(0));
        let counter = drawn.clone();
        let mut animation = Animation::start(
            AnimationTask::new(ms(100), move |_| counter.set(counter.get() + 1)),
            ms(0),
        );

        animation.step(ms(10));
        animation.handle().cancel();
        assert!(matches!(animation.step(ms(20)), AnimationStatus::Cancelled));
        assert_eq!(drawn.get(), 1);
    }
}
