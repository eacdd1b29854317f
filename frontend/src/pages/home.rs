use web_sys::MouseEvent;
use yew::prelude::*;

use crate::app::use_site;
use crate::components::section::SectionFrame;
use crate::site::Event as SiteEvent;

const PALMS: usize = 2;

#[function_component(HomeSection)]
pub fn home_section() -> Html {
    let ctx = use_site();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let request_access = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.dispatch(SiteEvent::RequestAccessClicked);
        })
    };

    let learn_more = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.dispatch(SiteEvent::Navigate("pillars".to_string()));
        })
    };

    let site = ctx.handle.site();

    html! {
        <SectionFrame id="home">
            <header class="hero">
                <div class="hero-background">
                    { for (0..PALMS).map(|index| html! {
                        <div class={format!("palm-silhouette palm-{}", index)} style={site.parallax.transform(index)}></div>
                    }) }
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Your Access Gate"}</h1>
                    <p class="hero-subtitle">
                        {"A private circle for people who value discretion, trust and real connection. Membership is by request only."}
                    </p>
                    <div class="hero-cta-group">
                        <button id="request-access-btn" class="btn-primary" onclick={request_access}>
                            {"Request Access"}
                        </button>
                        <a href="#pillars" class="btn-secondary" onclick={learn_more}>
                            {"Learn More"}
                        </a>
                    </div>
                </div>
            </header>
        </SectionFrame>
    }
}
