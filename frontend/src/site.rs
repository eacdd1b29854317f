//! Application state and the event dispatcher.
//!
//! [`Site`] owns every piece of mutable UI state. The browser layer turns DOM
//! events into [`Event`]s and timer fires into [`Event::Timer`]; nothing else
//! mutates the state. Side effects outside the state (scrolling the window)
//! come back as [`Effect`]s for the caller to perform.

use log::debug;

use crate::access::{AccessLifecycle, Field, SubmissionError, Ticket};
use crate::config;
use crate::effects::{Parallax, RevealTracker};
use crate::mobile_nav::MobileNav;
use crate::notification::{NotificationCenter, NotificationId};
use crate::router::Router;
use crate::scheduler::{Scheduler, TimerEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A nav link was clicked: navigate, select it, and close the mobile menu after the grace delay.
    NavLinkClicked(String),
    /// The hero call-to-action.
    RequestAccessClicked,
    Navigate(String),
    FieldChanged(Field, String),
    Submit,
    CancelSubmission,
    SubmissionSettled(Ticket, Result<(), SubmissionError>),
    DismissNotification(NotificationId),
    ToggleMenu,
    DocumentClicked { inside_nav: bool },
    Resized { width: f64 },
    Scrolled { offset: f64 },
    Intersected { key: String, intersecting: bool },
    Loaded,
    Timer(TimerEvent),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    ScrollToTop { smooth: bool },
}

#[derive(Debug)]
pub struct Site {
    pub router: Router,
    pub mobile_nav: MobileNav,
    pub access: AccessLifecycle,
    pub notifications: NotificationCenter,
    pub reveal: RevealTracker,
    pub parallax: Parallax,
    pub loaded: bool,
}

impl Site {
    /// Builds the state and shows the home section.
    pub fn new(scheduler: &mut dyn Scheduler) -> Self {
        let mut site = Self {
            router: Router::new(&config::SECTIONS),
            mobile_nav: MobileNav::new(),
            access: AccessLifecycle::new(),
            notifications: NotificationCenter::new(),
            reveal: RevealTracker::new(),
            parallax: Parallax::new(),
            loaded: false,
        };
        site.navigate(config::HOME_SECTION, scheduler);
        site.router.update_active_nav_link(Some(config::HOME_SECTION));
        site
    }

    pub fn dispatch(&mut self, event: Event, scheduler: &mut dyn Scheduler) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::NavLinkClicked(target) => {
                effects.extend(self.navigate(&target, scheduler));
                if self.router.contains(&target) {
                    self.router.update_active_nav_link(Some(&target));
                }
                self.mobile_nav.link_clicked(scheduler);
            }
            Event::RequestAccessClicked => {
                effects.extend(self.navigate(config::ACCESS_SECTION, scheduler));
                self.router.update_active_nav_link(Some(config::ACCESS_SECTION));
            }
            Event::Navigate(target) => {
                effects.extend(self.navigate(&target, scheduler));
                if self.router.contains(&target) {
                    self.router.update_active_nav_link(Some(&target));
                }
            }
            Event::FieldChanged(field, value) => self.access.set_field(field, value),
            Event::Submit => {
                self.access.submit(&mut self.notifications, scheduler);
            }
            Event::CancelSubmission => {
                self.access.cancel(scheduler);
            }
            Event::SubmissionSettled(ticket, outcome) => {
                self.access.settle(ticket, outcome, &mut self.notifications, scheduler);
            }
            Event::DismissNotification(id) => self.notifications.dismiss(id, scheduler),
            Event::ToggleMenu => self.mobile_nav.toggle(),
            Event::DocumentClicked { inside_nav } => self.mobile_nav.document_clicked(inside_nav),
            Event::Resized { width } => self.mobile_nav.resized(width, scheduler),
            Event::Scrolled { offset } => self.parallax.on_scroll(offset, scheduler),
            Event::Intersected { key, intersecting } => {
                if self.reveal.on_intersection(&key, intersecting) {
                    debug!("Revealed '{}'", key);
                }
            }
            Event::Loaded => self.loaded = true,
            Event::Timer(timer) => self.on_timer(timer, scheduler),
        }
        effects
    }

    fn navigate(&mut self, target: &str, scheduler: &mut dyn Scheduler) -> Option<Effect> {
        if !self.router.navigate_to(target, scheduler) {
            return None;
        }
        self.mobile_nav.close();
        Some(Effect::ScrollToTop { smooth: true })
    }

    fn on_timer(&mut self, timer: TimerEvent, scheduler: &mut dyn Scheduler) {
        match timer {
            TimerEvent::EntryFrame { generation } => self.router.on_entry_frame(generation, scheduler),
            TimerEvent::NotificationShown(_)
            | TimerEvent::NotificationExpired(_)
            | TimerEvent::NotificationRemoved(_) => self.notifications.on_timer(&timer, scheduler),
            TimerEvent::SubmissionSettled(ticket) => {
                self.access.settle(ticket, Ok(()), &mut self.notifications, scheduler);
            }
            TimerEvent::MenuCloseGrace | TimerEvent::ResizeSettled { .. } => self.mobile_nav.on_timer(&timer),
            TimerEvent::ParallaxFrame => {
                let hero_shown = self.router.is_shown(config::HOME_SECTION);
                self.parallax.on_frame(hero_shown);
            }
        }
    }
}
