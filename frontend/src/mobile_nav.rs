use log::debug;

use crate::config;
use crate::scheduler::{Debounce, Delay, Scheduler, TimerEvent, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inline style of one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: f32,
}

impl BarStyle {
    const RESET: BarStyle = BarStyle { transform: "none", opacity: 1.0 };

    pub fn css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: 1.0 },
    BarStyle { transform: "none", opacity: 0.0 },
    BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: 1.0 },
];

#[derive(Debug)]
pub struct MobileNav {
    state: MenuState,
    grace: Option<TimerId>,
    resize: Debounce,
}

impl Default for MobileNav {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileNav {
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
            grace: None,
            resize: Debounce::new(config::RESIZE_DEBOUNCE_MS),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Closed => self.open(),
            MenuState::Open => self.close(),
        }
    }

    pub fn open(&mut self) {
        if self.state != MenuState::Open {
            debug!("Mobile menu opened");
        }
        self.state = MenuState::Open;
    }

    pub fn close(&mut self) {
        if self.state != MenuState::Closed {
            debug!("Mobile menu closed");
        }
        self.state = MenuState::Closed;
    }

    pub fn bars(&self) -> [BarStyle; 3] {
        match self.state {
            MenuState::Open => OPEN_BARS,
            MenuState::Closed => [BarStyle::RESET; 3],
        }
    }

    pub fn menu_class(&self) -> &'static str {
        match self.state {
            MenuState::Open => "nav-menu mobile-open",
            MenuState::Closed => "nav-menu",
        }
    }

    /// A link in the menu was clicked. The close waits a beat so the link's
    /// own navigation runs first.
    pub fn link_clicked(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(previous) = self.grace.take() {
            scheduler.cancel(previous);
        }
        self.grace = Some(scheduler.schedule(
            Delay::Millis(config::MENU_CLOSE_GRACE_MS),
            TimerEvent::MenuCloseGrace,
        ));
    }

    /// Any click on the page. Clicks on the toggle or inside the menu are left alone.
    pub fn document_clicked(&mut self, inside_nav: bool) {
        if !inside_nav {
            self.close();
        }
    }

    pub fn resized(&mut self, width: f64, scheduler: &mut dyn Scheduler) {
        self.resize.trigger(TimerEvent::ResizeSettled { width }, scheduler);
    }

    pub fn on_timer(&mut self, event: &TimerEvent) {
        match *event {
            TimerEvent::MenuCloseGrace => {
                self.grace = None;
                self.close();
            }
            TimerEvent::ResizeSettled { width } => {
                self.resize.settle();
                if width > config::MOBILE_BREAKPOINT_PX {
                    self.close();
                }
            }
            _ => {}
        }
    }
}
