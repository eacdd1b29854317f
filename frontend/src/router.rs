//! Section switching and the entry transition.

use log::debug;

use crate::scheduler::{Delay, Scheduler, TimerEvent, TimerId};

const SECTION_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

/// Steps of the slide-up fade-in, one animation frame apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// Settled with transitions disabled so the browser registers the start.
    Reset,
    /// Transparent and pushed down, transitions enabled.
    Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Entering(EntryPhase),
    Active,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    pub fn inline_style(self) -> String {
        match self {
            Visibility::Hidden => "display: none;".to_string(),
            Visibility::Entering(EntryPhase::Reset) => {
                "display: block; opacity: 1; transform: translateY(0); transition: none;".to_string()
            }
            Visibility::Entering(EntryPhase::Offset) => format!(
                "display: block; opacity: 0; transform: translateY(20px); transition: {};",
                SECTION_TRANSITION
            ),
            Visibility::Active => format!(
                "display: block; opacity: 1; transform: translateY(0); transition: {};",
                SECTION_TRANSITION
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub target: String,
    pub selected: bool,
}

#[derive(Debug)]
struct Transition {
    generation: u64,
    section: usize,
    timer: TimerId,
}

#[derive(Debug)]
pub struct Router {
    sections: Vec<Section>,
    links: Vec<NavLink>,
    transition: Option<Transition>,
    generation: u64,
}

impl Router {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            sections: ids
                .iter()
                .map(|id| Section { id: id.to_string(), visibility: Visibility::Hidden })
                .collect(),
            links: ids
                .iter()
                .map(|id| NavLink { target: id.to_string(), selected: false })
                .collect(),
            transition: None,
            generation: 0,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn visibility(&self, id: &str) -> Option<Visibility> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.visibility)
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.visibility(id).map_or(false, Visibility::is_shown)
    }

    pub fn selected_link(&self) -> Option<&str> {
        self.links.iter().find(|l| l.selected).map(|l| l.target.as_str())
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Shows `id` and hides every other section. Unknown ids leave everything
    /// untouched and return false. Re-navigating to the shown section replays
    /// the entry transition.
    pub fn navigate_to(&mut self, id: &str, scheduler: &mut dyn Scheduler) -> bool {
        let Some(target) = self.sections.iter().position(|s| s.id == id) else {
            debug!("Ignoring navigation to unknown section '{}'", id);
            return false;
        };

        if let Some(stale) = self.transition.take() {
            scheduler.cancel(stale.timer);
        }

        for (index, section) in self.sections.iter_mut().enumerate() {
            section.visibility = if index == target {
                Visibility::Entering(EntryPhase::Reset)
            } else {
                Visibility::Hidden
            };
        }

        self.generation += 1;
        let timer = scheduler.schedule(
            Delay::NextFrame,
            TimerEvent::EntryFrame { generation: self.generation },
        );
        self.transition = Some(Transition { generation: self.generation, section: target, timer });
        debug!("Navigated to section '{}'", id);
        true
    }

    /// Selects the link bound to `target` and clears all others. `None` clears every link.
    pub fn update_active_nav_link(&mut self, target: Option<&str>) {
        for link in &mut self.links {
            link.selected = Some(link.target.as_str()) == target;
        }
    }

    /// Advances the entry transition by one frame. Frames from a superseded
    /// navigation are ignored.
    pub fn on_entry_frame(&mut self, generation: u64, scheduler: &mut dyn Scheduler) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.generation != generation {
            debug!("Dropping stale entry frame {}", generation);
            return;
        }

        let section = &mut self.sections[transition.section];
        match section.visibility {
            Visibility::Entering(EntryPhase::Reset) => {
                section.visibility = Visibility::Entering(EntryPhase::Offset);
                transition.timer =
                    scheduler.schedule(Delay::NextFrame, TimerEvent::EntryFrame { generation });
            }
            Visibility::Entering(EntryPhase::Offset) => {
                section.visibility = Visibility::Active;
                self.transition = None;
            }
            Visibility::Active | Visibility::Hidden => {
                self.transition = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use proptest::prelude::*;

    const IDS: [&str; 3] = ["home", "pillars", "access"];

    fn settle(router: &mut Router, scheduler: &mut ManualScheduler) {
        scheduler.advance(1000, |s, event| {
            if let TimerEvent::EntryFrame { generation } = event {
                router.on_entry_frame(generation, s);
            }
        });
    }

    fn frame(router: &mut Router, scheduler: &mut ManualScheduler) {
        scheduler.advance_frame(|s, event| {
            if let TimerEvent::EntryFrame { generation } = event {
                router.on_entry_frame(generation, s);
            }
        });
    }

    #[test]
    fn entry_transition_takes_two_frames() {
        let mut scheduler = ManualScheduler::new();
        let mut router = Router::new(&IDS);

        assert!(router.navigate_to("pillars", &mut scheduler));
        assert_eq!(router.visibility("pillars"), Some(Visibility::Entering(EntryPhase::Reset)));
        assert_eq!(router.visibility("home"), Some(Visibility::Hidden));

        frame(&mut router, &mut scheduler);
        assert_eq!(router.visibility("pillars"), Some(Visibility::Entering(EntryPhase::Offset)));

        frame(&mut router, &mut scheduler);
        assert_eq!(router.visibility("pillars"), Some(Visibility::Active));
        assert!(!router.is_transitioning());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let mut scheduler = ManualScheduler::new();
        let mut router = Router::new(&IDS);
        router.navigate_to("home", &mut scheduler);
        settle(&mut router, &mut scheduler);

        assert!(!router.navigate_to("nowhere", &mut scheduler));
        assert_eq!(router.visibility("home"), Some(Visibility::Active));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn superseded_navigation_drops_pending_frames() {
        let mut scheduler = ManualScheduler::new();
        let mut router = Router::new(&IDS);

        router.navigate_to("home", &mut scheduler);
        frame(&mut router, &mut scheduler);
        router.navigate_to("access", &mut scheduler);

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(router.visibility("home"), Some(Visibility::Hidden));

        // A frame from the first navigation that was already in flight.
        router.on_entry_frame(1, &mut scheduler);
        assert_eq!(router.visibility("access"), Some(Visibility::Entering(EntryPhase::Reset)));

        settle(&mut router, &mut scheduler);
        assert_eq!(router.visibility("access"), Some(Visibility::Active));
        assert_eq!(router.visibility("home"), Some(Visibility::Hidden));
    }

    #[test]
    fn renavigating_replays_the_transition() {
        let mut scheduler = ManualScheduler::new();
        let mut router = Router::new(&IDS);
        router.navigate_to("home", &mut scheduler);
        settle(&mut router, &mut scheduler);

        router.navigate_to("home", &mut scheduler);
        assert_eq!(router.visibility("home"), Some(Visibility::Entering(EntryPhase::Reset)));
        settle(&mut router, &mut scheduler);
        assert_eq!(router.visibility("home"), Some(Visibility::Active));
    }

    #[test]
    fn nav_link_selection_is_exclusive() {
        let mut router = Router::new(&IDS);
        router.update_active_nav_link(Some("access"));
        assert_eq!(router.selected_link(), Some("access"));
        router.update_active_nav_link(Some("pillars"));
        assert_eq!(router.links().iter().filter(|l| l.selected).count(), 1);
        router.update_active_nav_link(None);
        assert_eq!(router.selected_link(), None);
    }

    #[test]
    fn offset_phase_hides_and_lowers_the_section() {
        let style = Visibility::Entering(EntryPhase::Offset).inline_style();
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(20px)"));
        assert!(Visibility::Entering(EntryPhase::Reset).inline_style().contains("transition: none"));
    }

    proptest! {
        #[test]
        fn exactly_one_section_active_after_settling(
            moves in proptest::collection::vec((0usize..IDS.len(), any::<bool>()), 1..20)
        ) {
            let mut scheduler = ManualScheduler::new();
            let mut router = Router::new(&IDS);
            for (index, settle_now) in moves.iter().copied() {
                let id = IDS[index];
                router.navigate_to(id, &mut scheduler);
                router.update_active_nav_link(Some(id));
                if settle_now {
                    settle(&mut router, &mut scheduler);
                }
                prop_assert_eq!(router.sections().iter().filter(|s| s.visibility.is_shown()).count(), 1);
            }
            settle(&mut router, &mut scheduler);

            let last = IDS[moves[moves.len() - 1].0];
            let active: Vec<_> = router
                .sections()
                .iter()
                .filter(|s| s.visibility == Visibility::Active)
                .map(|s| s.id.as_str())
                .collect();
            prop_assert_eq!(active, vec![last]);
            prop_assert_eq!(router.selected_link(), Some(last));
            prop_assert_eq!(router.links().iter().filter(|l| l.selected).count(), 1);
        }
    }
}
