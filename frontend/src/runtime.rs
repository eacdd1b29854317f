//! Browser side of the scheduler and the shared handle components use to
//! reach the [`Site`].

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::scheduler::{Delay, Scheduler, TimerEvent, TimerId};
use crate::site::{Effect, Event, Site};

type Sink = Rc<dyn Fn(TimerEvent)>;

/// Runs timers on gloo `Timeout`s and `requestAnimationFrame`.
pub struct BrowserScheduler {
    next_id: u64,
    timeouts: HashMap<TimerId, Timeout>,
    frames: HashMap<TimerId, i32>,
    fired: Rc<RefCell<Vec<TimerId>>>,
    sink: Sink,
}

impl BrowserScheduler {
    fn new(sink: Sink) -> Self {
        Self {
            next_id: 0,
            timeouts: HashMap::new(),
            frames: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
            sink,
        }
    }

    /// Forgets timers whose callbacks have already returned.
    fn collect_fired(&mut self) {
        for id in self.fired.borrow_mut().drain(..) {
            self.timeouts.remove(&id);
            self.frames.remove(&id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Delay, event: TimerEvent) -> TimerId {
        self.collect_fired();
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let fired = self.fired.clone();
        let sink = self.sink.clone();
        // Marked fired only once the sink returns, so the running callback is never dropped.
        let fire = move || {
            sink(event);
            fired.borrow_mut().push(id);
        };

        match delay {
            Delay::Millis(ms) => {
                self.timeouts.insert(id, Timeout::new(ms, fire));
            }
            Delay::NextFrame => {
                let Some(window) = window() else {
                    warn!("No window, dropping frame callback");
                    return id;
                };
                let callback = Closure::once_into_js(fire);
                match window.request_animation_frame(callback.unchecked_ref()) {
                    Ok(handle) => {
                        self.frames.insert(id, handle);
                    }
                    Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Dropping a gloo Timeout clears it.
        self.timeouts.remove(&id);
        if let Some(handle) = self.frames.remove(&id) {
            if let Some(window) = window() {
                if let Err(err) = window.cancel_animation_frame(handle) {
                    warn!("cancelAnimationFrame failed: {:?}", err);
                }
            }
        }
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct Runtime {
    site: Site,
    scheduler: BrowserScheduler,
    revision: u64,
}

/// Cheap-to-clone handle to the site state. Every dispatch bumps a revision
/// and reports it through `on_change` so the app can re-render.
#[derive(Clone)]
pub struct SiteHandle {
    inner: Rc<RefCell<Runtime>>,
    on_change: Rc<dyn Fn(u64)>,
}

impl PartialEq for SiteHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SiteHandle {
    pub fn new(on_change: impl Fn(u64) + 'static) -> Self {
        let on_change: Rc<dyn Fn(u64)> = Rc::new(on_change);
        let sink_on_change = on_change.clone();
        let inner = Rc::new_cyclic(move |weak: &Weak<RefCell<Runtime>>| {
            let weak = weak.clone();
            let sink: Sink = Rc::new(move |timer: TimerEvent| {
                if let Some(inner) = weak.upgrade() {
                    let handle = SiteHandle { inner, on_change: sink_on_change.clone() };
                    handle.dispatch(Event::Timer(timer));
                }
            });
            let mut scheduler = BrowserScheduler::new(sink);
            let site = Site::new(&mut scheduler);
            RefCell::new(Runtime { site, scheduler, revision: 0 })
        });
        Self { inner, on_change }
    }

    pub fn site(&self) -> Ref<'_, Site> {
        Ref::map(self.inner.borrow(), |runtime| &runtime.site)
    }

    pub fn dispatch(&self, event: Event) {
        let (effects, revision) = {
            let Ok(mut runtime) = self.inner.try_borrow_mut() else {
                warn!("Re-entrant dispatch dropped: {:?}", event);
                return;
            };
            let Runtime { site, scheduler, revision } = &mut *runtime;
            let effects = site.dispatch(event, scheduler);
            *revision += 1;
            (effects, *revision)
        };
        for effect in effects {
            apply(effect);
        }
        (self.on_change)(revision);
    }
}

fn apply(effect: Effect) {
    match effect {
        Effect::ScrollToTop { smooth } => {
            let Some(window) = window() else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
