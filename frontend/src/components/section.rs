use yew::prelude::*;

use crate::app::use_site;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// A page panel. Only the routed section is displayed; its inline style
/// follows the entry transition frame by frame.
#[function_component(SectionFrame)]
pub fn section_frame(props: &SectionProps) -> Html {
    let ctx = use_site();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let visibility = ctx.handle.site().router.visibility(&props.id);
    let shown = visibility.map_or(false, |v| v.is_shown());
    let style = visibility.map(|v| v.inline_style()).unwrap_or_default();

    html! {
        <section id={props.id.clone()} class={classes!("section", shown.then(|| "active"))} {style}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    /// Stable key, also written to `data-reveal` for the intersection observer.
    pub reveal: AttrValue,
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let ctx = use_site();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let class = ctx.handle.site().reveal.class_for(&props.class, &props.reveal);

    html! {
        <div {class} data-reveal={props.reveal.clone()}>
            { for props.children.iter() }
        </div>
    }
}
