//! Scroll-driven decoration: cards that reveal once, and the hero parallax.

use std::collections::BTreeSet;

use crate::config;
use crate::scheduler::{Delay, Scheduler, TimerEvent};

/// Keys of the cards that have come into view. Reveal is one-way.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this call revealed the card.
    pub fn on_intersection(&mut self, key: &str, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn class_for(&self, base: &str, key: &str) -> String {
        if self.is_revealed(key) {
            format!("{} reveal animate-in", base)
        } else {
            format!("{} reveal", base)
        }
    }
}

/// Palm silhouettes drift with the scroll position, at most once per frame.
#[derive(Debug, Default)]
pub struct Parallax {
    ticking: bool,
    latest: f64,
    applied: f64,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64, scheduler: &mut dyn Scheduler) {
        self.latest = offset;
        if !self.ticking {
            scheduler.schedule(Delay::NextFrame, TimerEvent::ParallaxFrame);
            self.ticking = true;
        }
    }

    /// Applies the latest scroll offset, but only while the hero is on screen.
    pub fn on_frame(&mut self, hero_shown: bool) {
        if hero_shown {
            self.applied = self.latest;
        }
        self.ticking = false;
    }

    pub fn offset(&self, index: usize) -> f64 {
        self.applied * (index + 1) as f64 * config::PARALLAX_SPEED_STEP
    }

    pub fn transform(&self, index: usize) -> String {
        let rotation = if index == 0 { "-15deg" } else { "15deg" };
        format!("transform: translateY({:.2}px) rotate({});", self.offset(index), rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = RevealTracker::new();
        assert!(!reveal.on_intersection("pillar-1", false));
        assert!(reveal.on_intersection("pillar-1", true));
        assert!(!reveal.on_intersection("pillar-1", true));
        reveal.on_intersection("pillar-1", false);
        assert!(reveal.is_revealed("pillar-1"));
        assert_eq!(reveal.class_for("pillar", "pillar-1"), "pillar reveal animate-in");
        assert_eq!(reveal.class_for("promise", "promise-1"), "promise reveal");
    }

    #[test]
    fn scroll_bursts_share_one_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut parallax = Parallax::new();
        parallax.on_scroll(10.0, &mut scheduler);
        parallax.on_scroll(40.0, &mut scheduler);
        parallax.on_scroll(100.0, &mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance_frame(|_, _| parallax.on_frame(true));
        assert!((parallax.offset(0) - 10.0).abs() < 1e-9);
        assert!((parallax.offset(1) - 20.0).abs() < 1e-9);
        assert_eq!(parallax.transform(1), "transform: translateY(20.00px) rotate(15deg);");

        parallax.on_scroll(200.0, &mut scheduler);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn parallax_holds_when_hero_is_hidden() {
        let mut scheduler = ManualScheduler::new();
        let mut parallax = Parallax::new();
        assert_eq!(parallax.transform(0), "transform: translateY(0.00px) rotate(-15deg);");

        parallax.on_scroll(300.0, &mut scheduler);
        scheduler.advance_frame(|_, _| parallax.on_frame(false));
        assert_eq!(parallax.offset(0), 0.0);
    }
}
