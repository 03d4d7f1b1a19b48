//! Serialized animation queue
//!
//! Runs at most one [`Animation`] at a time. Tasks are enqueued as factories
//! so they read the world (scroll offsets, sizes) when they start rather than
//! when they were requested.

use std::collections::VecDeque;
use std::time::Duration;

use crate::task::{Animation, AnimationHandle, AnimationStatus, AnimationTask};

/// Deferred task constructor
pub type TaskFactory = Box<dyn FnOnce() -> AnimationTask>;

/// FIFO queue of animation tasks
///
/// Driven from the host frame callback through [`AnimationQueue::tick`].
#[derive(Default)]
pub struct AnimationQueue {
    pending: VecDeque<TaskFactory>,
    current: Option<Animation>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task; it starts once everything before it has finished
    pub fn enqueue(&mut self, factory: impl FnOnce() -> AnimationTask + 'static) {
        self.pending.push_back(Box::new(factory));
        tracing::trace!(pending = self.pending.len(), "animation enqueued");
    }

    /// Cancel the running task and discard everything pending
    pub fn stop(&mut self) {
        let running = self.current.take();
        if let Some(current) = &running {
            current.handle().cancel();
        }
        if running.is_some() || !self.pending.is_empty() {
            tracing::trace!(discarded = self.pending.len(), "animation queue stopped");
        }
        self.pending.clear();
    }

    /// Whether a task is running or waiting
    pub fn is_busy(&self) -> bool {
        self.current.is_some() || !self.pending.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Handle of the running task
    pub fn current_handle(&self) -> Option<AnimationHandle> {
        self.current.as_ref().map(Animation::handle)
    }

    /// Advance to `now`; returns whether the queue still has work
    ///
    /// An idle queue starts its next task and draws its first frame on the
    /// same tick. A task that follows a finished one starts on this tick and
    /// draws from the next, so each tick draws at most one frame.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.current.is_none() {
            self.start_next(now);
        }

        let Some(current) = self.current.as_mut() else {
            return false;
        };

        match current.step(now) {
            AnimationStatus::Running => {}
            AnimationStatus::Finished(next) => {
                self.current = None;
                if let Some(next) = next {
                    self.pending.push_back(Box::new(move || next));
                }
                self.start_next(now);
            }
            AnimationStatus::Cancelled => {
                self.current = None;
                self.start_next(now);
            }
        }

        self.is_busy()
    }

    fn start_next(&mut self, now: Duration) {
        if let Some(factory) = self.pending.pop_front() {
            let task = factory();
            tracing::trace!(duration = ?task.duration(), "animation started");
            self.current = Some(Animation::start(task, now));
        }
    }
}

impl std::fmt::Debug for AnimationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationQueue")
            .field("pending", &self.pending.len())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    type Log = Rc<RefCell<Vec<(&'static str, f32)>>>;

    fn recording(log: &Log, name: &'static str, len: u64) -> AnimationTask {
        let log = log.clone();
        AnimationTask::new(ms(len), move |p| log.borrow_mut().push((name, p)))
    }

    #[test]
    fn test_runs_one_task_at_a_time_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        let (a, b) = (log.clone(), log.clone());
        queue.enqueue(move || recording(&a, "a", 100));
        queue.enqueue(move || recording(&b, "b", 100));

        assert!(queue.tick(ms(0)));
        assert!(queue.tick(ms(100)));
        assert!(queue.tick(ms(150)));
        assert!(!queue.tick(ms(200)));

        let names: Vec<_> = log.borrow().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["a", "a", "b", "b"]);
        assert_eq!(log.borrow()[2].1, 0.5);
    }

    #[test]
    fn test_pending_tasks_finish_in_enqueue_order() {
        let finished = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        let enqueue = |queue: &mut AnimationQueue, id: u32| {
            let finished = finished.clone();
            queue.enqueue(move || {
                AnimationTask::new(ms(100), |_| {}).on_done(move || {
                    finished.borrow_mut().push(id);
                    None
                })
            });
        };

        enqueue(&mut queue, 0);
        assert!(queue.tick(ms(0)));
        for id in 1..=3 {
            enqueue(&mut queue, id);
        }
        assert!(queue.tick(ms(50)));
        assert!(finished.borrow().is_empty());

        let mut now = 100;
        while queue.tick(ms(now)) {
            now += 100;
        }

        assert_eq!(*finished.borrow(), [0, 1, 2, 3]);
        assert_eq!(now, 400);
    }

    #[test]
    fn test_factory_runs_when_task_starts() {
        let started = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        for name in ["first", "second"] {
            let started = started.clone();
            queue.enqueue(move || {
                started.borrow_mut().push(name);
                AnimationTask::new(ms(50), |_| {})
            });
        }

        queue.tick(ms(0));
        assert_eq!(*started.borrow(), ["first"]);
        queue.tick(ms(50));
        assert_eq!(*started.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_stop_cancels_current_and_pending() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        let (a, b) = (log.clone(), log.clone());
        queue.enqueue(move || recording(&a, "a", 100));
        queue.enqueue(move || recording(&b, "b", 100));

        queue.tick(ms(0));
        let handle = queue.current_handle().expect("running");
        queue.stop();

        assert!(handle.is_cancelled());
        assert!(!queue.is_busy());
        assert!(!queue.tick(ms(50)));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_external_cancel_moves_on() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        let (a, b) = (log.clone(), log.clone());
        queue.enqueue(move || recording(&a, "a", 100));
        queue.enqueue(move || recording(&b, "b", 100));

        queue.tick(ms(0));
        if let Some(handle) = queue.current_handle() {
            handle.cancel();
        }
        queue.tick(ms(10));
        queue.tick(ms(20));

        assert_eq!(log.borrow().last().map(|(name, _)| *name), Some("b"));
    }

    #[test]
    fn test_chained_tasks_follow_pending_work() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut queue = AnimationQueue::new();
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        queue.enqueue(move || {
            recording(&a, "a", 10).on_done(move || Some(recording(&c, "chained", 10)))
        });
        queue.enqueue(move || recording(&b, "b", 10));

        for t in 0..6 {
            queue.tick(ms(t * 10));
        }

        let names: Vec<_> = log.borrow().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["a", "a", "b", "chained"]);
        assert!(!queue.is_busy());
    }
}
