use yew::prelude::*;

use crate::components::section::{RevealCard, SectionFrame};

const PILLARS: [(&str, &str); 3] = [
    ("Discretion", "What is shared inside YAG stays inside YAG. Members are vetted and identities are never published."),
    ("Trust", "Every member is introduced and reviewed by a person, not an algorithm."),
    ("Connection", "Small gatherings and thoughtful introductions in place of endless feeds."),
];

const PROMISES: [(&str, &str); 3] = [
    ("No advertising", "Your attention is not for sale. There are no sponsored posts and no trackers."),
    ("Human review", "Every access request is read in full and answered within 48 hours."),
    ("Leave any time", "Membership can be ended in one message, and your details go with you."),
];

const ASSURANCES: [(&str, &str); 3] = [
    ("Verified members", "Age and identity are confirmed before the first introduction."),
    ("Private by default", "Profiles are visible only to members you have been introduced to."),
    ("A real team", "Questions reach a person on our team, usually the same day."),
];

fn cards(prefix: &'static str, class: &'static str, items: &[(&str, &str)]) -> Html {
    items
        .iter()
        .enumerate()
        .map(|(index, (title, text))| {
            html! {
                <RevealCard reveal={format!("{}-{}", prefix, index)} class={class}>
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </RevealCard>
            }
        })
        .collect()
}

#[function_component(PillarsSection)]
pub fn pillars_section() -> Html {
    html! {
        <SectionFrame id="pillars">
            <div class="section-content">
                <h2 class="section-title">{"The Three Pillars"}</h2>
                <div class="pillars-grid">
                    { cards("pillar", "pillar", &PILLARS) }
                </div>
            </div>
        </SectionFrame>
    }
}

#[function_component(PromiseSection)]
pub fn promise_section() -> Html {
    html! {
        <SectionFrame id="promise">
            <div class="section-content">
                <h2 class="section-title">{"Our Promise"}</h2>
                <div class="promises-list">
                    { cards("promise", "promise", &PROMISES) }
                </div>
            </div>
        </SectionFrame>
    }
}

#[function_component(AssuranceSection)]
pub fn assurance_section() -> Html {
    html! {
        <SectionFrame id="assurance">
            <div class="section-content">
                <h2 class="section-title">{"Assurance"}</h2>
                <div class="assurance-grid">
                    { cards("assurance", "assurance-card", &ASSURANCES) }
                </div>
            </div>
        </SectionFrame>
    }
}
