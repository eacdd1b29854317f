use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::app::use_site;
use crate::site::Event as SiteEvent;

fn link_label(target: &str) -> &'static str {
    match target {
        "home" => "Home",
        "pillars" => "Pillars",
        "promise" => "Our Promise",
        "assurance" => "Assurance",
        "access" => "Request Access",
        _ => "",
    }
}

fn contains_target(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref.get().map_or(false, |node| node.contains(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let ctx = use_site();
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Clicks anywhere outside the toggle and the menu close it.
    {
        let handle = ctx.as_ref().map(|ctx| ctx.handle.clone());
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(handle) = &handle else {
                return;
            };
            if !handle.site().mobile_nav.is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_nav = contains_target(&toggle_ref, target.as_ref())
                || contains_target(&menu_ref, target.as_ref());
            handle.dispatch(SiteEvent::DocumentClicked { inside_nav });
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    let toggle_menu = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            handle.dispatch(SiteEvent::ToggleMenu);
        })
    };

    let site = ctx.handle.site();
    let bars = site.mobile_nav.bars();

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={
                    let handle = ctx.handle.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        handle.dispatch(SiteEvent::Navigate("home".to_string()));
                    })
                }>
                    {"YAG"}
                </a>

                <button id="nav-toggle" class="burger-menu" ref={toggle_ref} onclick={toggle_menu}>
                    { for bars.iter().map(|bar| html! { <span style={bar.css()}></span> }) }
                </button>

                <ul id="nav-menu" class={site.mobile_nav.menu_class()} ref={menu_ref}>
                    { for site.router.links().iter().map(|link| {
                        let target = link.target.clone();
                        let handle = ctx.handle.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            handle.dispatch(SiteEvent::NavLinkClicked(target.clone()));
                        });
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", link.target)}
                                    class={classes!("nav-link", link.selected.then(|| "active"))}
                                    {onclick}
                                >
                                    {link_label(&link.target)}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
