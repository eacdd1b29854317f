//! Timer seam between the site state and the event loop.
//!
//! Every delayed step (entry frames, notification timers, the simulated
//! submission, menu grace and resize debounce) goes through [`Scheduler`].
//! The browser runtime backs it with gloo timers and `requestAnimationFrame`,
//! tests back it with [`ManualScheduler`] and move time by hand.

use chrono::{DateTime, Duration, Utc};

use crate::access::Ticket;
use crate::notification::NotificationId;

/// Length of one animation frame on the virtual clock.
pub const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Next rendering opportunity.
    NextFrame,
    Millis(u32),
}

/// What a timer carries back into the site when it fires.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    EntryFrame { generation: u64 },
    NotificationShown(NotificationId),
    NotificationExpired(NotificationId),
    NotificationRemoved(NotificationId),
    SubmissionSettled(Ticket),
    MenuCloseGrace,
    ResizeSettled { width: f64 },
    ParallaxFrame,
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Delay, event: TimerEvent) -> TimerId;

    /// Cancelling an id that already fired or was cancelled is a no-op.
    fn cancel(&mut self, id: TimerId);

    fn now(&self) -> DateTime<Utc>;
}

/// Standard trailing-edge debounce: each trigger replaces the pending timer,
/// so only the last event of a burst fires.
#[derive(Debug)]
pub struct Debounce {
    wait_ms: u32,
    pending: Option<TimerId>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn trigger(&mut self, event: TimerEvent, scheduler: &mut dyn Scheduler) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule(Delay::Millis(self.wait_ms), event));
    }

    /// Call when the debounced timer fires.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug)]
struct Scheduled {
    id: TimerId,
    due_ms: u64,
    event: TimerEvent,
}

/// Deterministic scheduler on a virtual clock.
#[derive(Debug)]
pub struct ManualScheduler {
    origin: DateTime<Utc>,
    elapsed_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::starting_at(DateTime::<Utc>::default())
    }

    pub fn starting_at(origin: DateTime<Utc>) -> Self {
        Self { origin, elapsed_ms: 0, next_id: 0, queue: Vec::new() }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.queue.iter().any(|s| s.id == id)
    }

    pub fn pending_events(&self) -> impl Iterator<Item = &TimerEvent> {
        self.queue.iter().map(|s| &s.event)
    }

    /// Moves the clock forward by `ms`, handing every timer that comes due to
    /// `fire` in due order. Timers scheduled from inside `fire` are honoured
    /// if they fall within the window.
    pub fn advance(&mut self, ms: u64, mut fire: impl FnMut(&mut Self, TimerEvent)) {
        let target = self.elapsed_ms + ms;
        while let Some(event) = self.pop_due(target) {
            fire(self, event);
        }
        self.elapsed_ms = target;
    }

    /// Runs exactly one animation frame worth of time.
    pub fn advance_frame(&mut self, fire: impl FnMut(&mut Self, TimerEvent)) {
        self.advance(FRAME_MS, fire);
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= until_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.id))
            .map(|(index, _)| index)?;
        let scheduled = self.queue.remove(index);
        self.elapsed_ms = scheduled.due_ms;
        Some(scheduled.event)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Delay, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let wait = match delay {
            Delay::NextFrame => FRAME_MS,
            Delay::Millis(ms) => u64::from(ms),
        };
        self.queue.push(Scheduled { id, due_ms: self.elapsed_ms + wait, event });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.retain(|s| s.id != id);
    }

    fn now(&self) -> DateTime<Utc> {
        self.origin + Duration::milliseconds(self.elapsed_ms as i64)
    }
}
