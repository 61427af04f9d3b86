//! Game loop controller - owns a session and its gravity timer
//!
//! The loop handles one [`Event`] at a time. Starting a game arms a fresh
//! repeating timer with a new [`TimerId`]; stopping, topping out or
//! restarting cancels it. A tick whose id is not the currently armed timer is
//! dropped, so a tick queued by an old timer can never reach a new game.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::core::{Fault, GameSession, GameSnapshot, Result, ScoreOnStop, TickOutcome};
use crate::scheduler::{Event, Scheduler, TimerHandle, TimerId};
use crate::types::Intent;

pub struct GameLoop<S: Scheduler> {
    session: GameSession,
    scheduler: S,
    timer: Option<S::Handle>,
    tick_interval: Duration,
    timers_armed: u64,
}

impl<S: Scheduler> GameLoop<S> {
    pub fn new(session: GameSession, scheduler: S, tick_interval: Duration) -> Result<Self> {
        if tick_interval.is_zero() {
            return Err(Fault::ZeroTickInterval);
        }
        Ok(Self {
            session,
            scheduler,
            timer: None,
            tick_interval,
            timers_armed: 0,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Id of the armed gravity timer, if any
    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer.as_ref().map(TimerHandle::id)
    }

    /// Handle one event. Returns true when the session changed.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Intent(intent) => self.dispatch(intent),
            Event::Tick(timer) => self.on_tick(timer) != TickOutcome::Ignored,
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = match intent {
            Intent::Start => self.start(),
            Intent::Stop => self.stop(ScoreOnStop::Keep),
            Intent::MoveLeft => self.session.move_left(),
            Intent::MoveRight => self.session.move_right(),
            Intent::SoftDrop => self.session.soft_drop(),
            Intent::Rotate => self.session.rotate(),
        };
        if !changed {
            trace!(intent = intent.as_str(), "intent rejected");
        }
        changed
    }

    /// Start a new game and arm gravity. Ignored while running.
    pub fn start(&mut self) -> bool {
        if !self.session.start() {
            debug!("start ignored, game already running");
            return false;
        }
        self.cancel_timer();
        if self.session.is_running() {
            self.arm_timer();
        }
        true
    }

    pub fn stop(&mut self, on_stop: ScoreOnStop) -> bool {
        if !self.session.stop(on_stop) {
            return false;
        }
        self.cancel_timer();
        true
    }

    /// Apply a gravity tick from `timer`
    pub fn on_tick(&mut self, timer: TimerId) -> TickOutcome {
        if self.active_timer() != Some(timer) {
            trace!(timer = timer.get(), "dropping tick from inactive timer");
            return TickOutcome::Ignored;
        }

        let outcome = self.session.tick();
        if let TickOutcome::ToppedOut(event) = outcome {
            info!(score = event.score, "topped out, gravity stopped");
            self.cancel_timer();
        }
        outcome
    }

    fn arm_timer(&mut self) {
        self.timers_armed += 1;
        let id = TimerId::new(self.timers_armed);
        debug!(
            timer = id.get(),
            interval_ms = self.tick_interval.as_millis() as u64,
            "arming gravity"
        );
        self.timer = Some(self.scheduler.schedule_repeating(self.tick_interval, id));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            debug!(timer = handle.id().get(), "cancelling gravity");
            handle.cancel();
        }
    }
}
