//! Repeating timers for gravity.
//!
//! The game loop never touches a clock directly. It asks a [`Scheduler`] for a
//! repeating timer tagged with a [`TimerId`] and gets a handle back; the timer
//! delivers [`Event::Tick`] carrying that id. Cancelling or dropping the handle
//! stops the timer.
//!
//! Two schedulers are provided:
//! - [`TokioScheduler`]: a tokio task per timer, ticks sent into the same
//!   unbounded channel the host uses for intents, so ticks and intents are
//!   handled one at a time in arrival order.
//! - [`ManualScheduler`]: no clock at all; tests call [`ManualScheduler::advance`]
//!   and feed the returned events to the loop.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::types::Intent;

/// Identifies one armed timer. Ids are never reused within a game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Everything the game loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Intent(Intent),
    Tick(TimerId),
}

impl From<Intent> for Event {
    fn from(intent: Intent) -> Self {
        Event::Intent(intent)
    }
}

pub trait TimerHandle {
    fn id(&self) -> TimerId;

    /// Stop the timer. No tick is produced after this returns, although a
    /// tick already queued may still be delivered.
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TimerHandle;

    /// Fire `Event::Tick(timer)` every `interval`, first after one interval.
    fn schedule_repeating(&mut self, interval: Duration, timer: TimerId) -> Self::Handle;
}

/// Timers backed by tokio tasks. Must be used inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    events: UnboundedSender<Event>,
}

impl TokioScheduler {
    pub fn new(events: UnboundedSender<Event>) -> Self {
        Self { events }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioTimer;

    fn schedule_repeating(&mut self, interval: Duration, timer: TimerId) -> TokioTimer {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + interval, interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if events.send(Event::Tick(timer)).is_err() {
                    break;
                }
            }
        });
        TokioTimer { id: timer, task }
    }
}

/// Handle to a tokio-backed timer; aborts the task on cancel or drop
#[derive(Debug)]
pub struct TokioTimer {
    id: TimerId,
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimer {
    fn id(&self) -> TimerId {
        self.id
    }

    fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug)]
struct ManualTimerState {
    interval: Duration,
    elapsed: Duration,
}

type ManualTimers = Rc<RefCell<BTreeMap<TimerId, ManualTimerState>>>;

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Clones share the same timer table, so a test can keep one clone and give
/// the other to the game loop.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    timers: ManualTimers,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `by` pass and return the ticks every armed timer produced, in
    /// timer-id order.
    pub fn advance(&self, by: Duration) -> Vec<Event> {
        let mut timers = self.timers.borrow_mut();
        let mut events = Vec::new();
        for (&id, timer) in timers.iter_mut() {
            timer.elapsed += by;
            while !timer.interval.is_zero() && timer.elapsed >= timer.interval {
                timer.elapsed -= timer.interval;
                events.push(Event::Tick(id));
            }
        }
        events
    }

    /// Ids of the timers currently armed
    pub fn armed(&self) -> Vec<TimerId> {
        self.timers.borrow().keys().copied().collect()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.borrow().contains_key(&id)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule_repeating(&mut self, interval: Duration, timer: TimerId) -> ManualTimer {
        self.timers.borrow_mut().insert(
            timer,
            ManualTimerState {
                interval,
                elapsed: Duration::ZERO,
            },
        );
        ManualTimer {
            id: timer,
            timers: Rc::clone(&self.timers),
        }
    }
}

#[derive(Debug)]
pub struct ManualTimer {
    id: TimerId,
    timers: ManualTimers,
}

impl TimerHandle for ManualTimer {
    fn id(&self) -> TimerId {
        self.id
    }

    fn cancel(self) {}
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.timers.borrow_mut().remove(&self.id);
    }
}
