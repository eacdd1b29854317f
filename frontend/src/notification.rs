//! Transient toast notifications.
//!
//! Every notification runs its own small state machine:
//! `Offscreen -> Visible -> Exiting -> removed`. It owns up to three timers
//! (entrance, expiry, removal) and all of them are cancelled by the time it
//! leaves the queue, whether it expired or was dismissed.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::config;
use crate::scheduler::{Delay, Scheduler, TimerEvent, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just created, parked off the right edge so the slide-in can animate.
    Offscreen,
    Visible,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub phase: Phase,
    entrance: Option<TimerId>,
    expiry: Option<TimerId>,
    removal: Option<TimerId>,
}

impl Notification {
    pub fn transform(&self) -> &'static str {
        match self.phase {
            Phase::Visible => "translateX(0)",
            Phase::Offscreen | Phase::Exiting => "translateX(100%)",
        }
    }

    fn timers(&mut self) -> impl Iterator<Item = TimerId> {
        [self.entrance.take(), self.expiry.take(), self.removal.take()]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    live: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.live.iter_mut().find(|n| n.id == id)
    }

    pub fn create(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
        scheduler: &mut dyn Scheduler,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let entrance = scheduler.schedule(
            Delay::Millis(config::NOTIFICATION_ENTRANCE_MS),
            TimerEvent::NotificationShown(id),
        );
        let expiry = scheduler.schedule(
            Delay::Millis(config::NOTIFICATION_LIFETIME_MS),
            TimerEvent::NotificationExpired(id),
        );

        let notification = Notification {
            id,
            title: title.into(),
            body: body.into(),
            kind,
            created_at: scheduler.now(),
            phase: Phase::Offscreen,
            entrance: Some(entrance),
            expiry: Some(expiry),
            removal: None,
        };
        info!("Notification {:?} ({:?}): {}", id, kind, notification.title);
        self.live.push(notification);
        id
    }

    /// Starts the exit slide for a user close. Anything already leaving or
    /// gone is left alone.
    pub fn dismiss(&mut self, id: NotificationId, scheduler: &mut dyn Scheduler) {
        let Some(notification) = self.get_mut(id) else {
            return;
        };
        if notification.phase == Phase::Exiting {
            return;
        }
        for timer in notification.timers() {
            scheduler.cancel(timer);
        }
        debug!("Notification {:?} dismissed", id);
        Self::begin_exit(notification, scheduler);
    }

    /// Drops the notification and every timer it still owns. Safe to call twice.
    pub fn remove(&mut self, id: NotificationId, scheduler: &mut dyn Scheduler) -> bool {
        let Some(index) = self.live.iter().position(|n| n.id == id) else {
            return false;
        };
        let mut notification = self.live.remove(index);
        for timer in notification.timers() {
            scheduler.cancel(timer);
        }
        debug!("Notification {:?} removed", id);
        true
    }

    pub fn on_timer(&mut self, event: &TimerEvent, scheduler: &mut dyn Scheduler) {
        match *event {
            TimerEvent::NotificationShown(id) => {
                if let Some(notification) = self.get_mut(id) {
                    notification.entrance = None;
                    if notification.phase == Phase::Offscreen {
                        notification.phase = Phase::Visible;
                    }
                }
            }
            TimerEvent::NotificationExpired(id) => {
                if let Some(notification) = self.get_mut(id) {
                    notification.expiry = None;
                    if notification.phase != Phase::Exiting {
                        if let Some(entrance) = notification.entrance.take() {
                            scheduler.cancel(entrance);
                        }
                        Self::begin_exit(notification, scheduler);
                    }
                }
            }
            TimerEvent::NotificationRemoved(id) => {
                if let Some(notification) = self.get_mut(id) {
                    notification.removal = None;
                }
                self.remove(id, scheduler);
            }
            _ => {}
        }
    }

    fn begin_exit(notification: &mut Notification, scheduler: &mut dyn Scheduler) {
        notification.phase = Phase::Exiting;
        notification.removal = Some(scheduler.schedule(
            Delay::Millis(config::NOTIFICATION_EXIT_MS),
            TimerEvent::NotificationRemoved(notification.id),
        ));
    }
}
