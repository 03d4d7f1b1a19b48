//! Integration tests for eased tasks running through the queue
//!
//! These tests verify that:
//! - A queue-driven task moves a value to its exact target
//! - Chained tasks keep a value moving until their guard fails
//! - Stopping mid-flight leaves the value where the last frame put it

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use interop_animation::{AnimationQueue, AnimationTask, Easing};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Task moving `value` by `distance`, applying only the increment per frame
fn nudge(value: &Rc<Cell<f32>>, distance: f32, duration: u64) -> AnimationTask {
    let value = value.clone();
    let mut applied = 0.0;
    AnimationTask::new(ms(duration), move |progress| {
        let target = distance * progress;
        value.set(value.get() + target - applied);
        applied = target;
    })
    .timing(Easing::SCROLL)
}

fn run(queue: &mut AnimationQueue, from: u64, until: u64) {
    let mut now = from;
    while now <= until {
        queue.tick(ms(now));
        now += 16;
    }
}

#[test]
fn test_eased_task_lands_on_target() {
    let value = Rc::new(Cell::new(100.0));
    let mut queue = AnimationQueue::new();
    let v = value.clone();
    queue.enqueue(move || nudge(&v, 400.0, 200));

    run(&mut queue, 0, 250);

    assert!((value.get() - 500.0).abs() < 1e-3);
    assert!(!queue.is_busy());
}

#[test]
fn test_chain_runs_until_guard_fails() {
    fn pulse(value: Rc<Cell<f32>>, limit: f32) -> AnimationTask {
        let next = value.clone();
        nudge(&value, 50.0, 100).on_done(move || {
            (next.get() < limit).then(|| pulse(next.clone(), limit))
        })
    }

    let value = Rc::new(Cell::new(0.0));
    let mut queue = AnimationQueue::new();
    let v = value.clone();
    queue.enqueue(move || pulse(v, 175.0));

    run(&mut queue, 0, 2000);

    assert!((value.get() - 200.0).abs() < 1e-3);
    assert!(!queue.is_busy());
}

#[test]
fn test_stop_freezes_value() {
    let value = Rc::new(Cell::new(0.0));
    let mut queue = AnimationQueue::new();
    let v = value.clone();
    queue.enqueue(move || nudge(&v, 1000.0, 500));

    run(&mut queue, 0, 200);
    queue.stop();
    let frozen = value.get();
    run(&mut queue, 216, 800);

    assert!(frozen > 0.0 && frozen < 1000.0);
    assert_eq!(value.get(), frozen);
}
