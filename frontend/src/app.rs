use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::{nav::Nav, notification::NotificationStack};
use crate::config;
use crate::pages::{
    access::AccessSection,
    home::HomeSection,
    sections::{AssuranceSection, PillarsSection, PromiseSection},
};
use crate::runtime::SiteHandle;
use crate::site::Event as SiteEvent;

/// What every component reads the site through. The revision changes on
/// every dispatch so context consumers re-render.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub handle: SiteHandle,
    pub revision: u64,
}

/// The site context, or `None` when rendered outside `<App>`. Callers render
/// nothing in that case.
#[hook]
pub fn use_site() -> Option<SiteContext> {
    require_site(use_context::<SiteContext>())
}

fn require_site(ctx: Option<SiteContext>) -> Option<SiteContext> {
    if ctx.is_none() {
        warn!("Component rendered outside <App>, skipping");
    }
    ctx
}

#[function_component(App)]
pub fn app() -> Html {
    let revision = use_state(|| 0u64);
    let handle = {
        let setter = revision.setter();
        use_state(move || SiteHandle::new(move |rev| setter.set(rev)))
    };
    let handle = (*handle).clone();

    {
        let handle = handle.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            if let Some(width) = window().and_then(|w| w.inner_width().ok()).and_then(|w| w.as_f64()) {
                handle.dispatch(SiteEvent::Resized { width });
            }
        });
    }

    {
        let handle = handle.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            if let Some(offset) = window().and_then(|w| w.scroll_y().ok()) {
                handle.dispatch(SiteEvent::Scrolled { offset });
            }
        });
    }

    {
        let handle = handle.clone();
        use_event_with_window("load", move |_: web_sys::Event| {
            handle.dispatch(SiteEvent::Loaded);
        });
    }

    // The wasm bundle often starts after `load` has already fired.
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                let complete = window()
                    .and_then(|w| w.document())
                    .map_or(false, |d| d.ready_state() == "complete");
                if complete {
                    handle.dispatch(SiteEvent::Loaded);
                }
                || ()
            },
            (),
        );
    }

    // Watch every `[data-reveal]` card once the page has rendered.
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                let observer = observe_reveals(handle);
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let loaded = handle.site().loaded;
    let context = SiteContext { handle, revision: *revision };

    html! {
        <ContextProvider<SiteContext> context={context}>
            <div class={classes!("site", loaded.then(|| "loaded"))}>
                <Nav />
                <main class="sections">
                    <HomeSection />
                    <PillarsSection />
                    <PromiseSection />
                    <AssuranceSection />
                    <AccessSection />
                </main>
                <NotificationStack />
            </div>
        </ContextProvider<SiteContext>>
    }
}

type IntersectionCallback = Closure<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>;

fn observe_reveals(handle: SiteHandle) -> Option<(IntersectionObserver, IntersectionCallback)> {
    let document = window()?.document()?;

    let callback: IntersectionCallback = Closure::wrap(Box::new(
        move |entries: web_sys::js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(key) = entry.target().get_attribute("data-reveal") {
                    handle.dispatch(SiteEvent::Intersected {
                        key,
                        intersecting: entry.is_intersecting(),
                    });
                }
            }
        },
    )
        as Box<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config::REVEAL_THRESHOLD.into());
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            return None;
        }
    };

    let cards = document.query_selector_all("[data-reveal]").ok()?;
    for index in 0..cards.length() {
        if let Some(card) = cards.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&card);
        }
    }
    info!("Observing {} cards for reveal", cards.length());
    Some((observer, callback))
}
