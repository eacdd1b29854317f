use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::access::{Field, Seeking};
use crate::app::use_site;
use crate::components::section::SectionFrame;
use crate::runtime::SiteHandle;
use crate::site::Event as SiteEvent;

fn on_input(handle: &SiteHandle, field: Field) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.dispatch(SiteEvent::FieldChanged(field, input.value()));
    })
}

#[function_component(AccessSection)]
pub fn access_section() -> Html {
    let ctx = use_site();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let onsubmit = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            handle.dispatch(SiteEvent::Submit);
        })
    };

    let on_seeking = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            handle.dispatch(SiteEvent::FieldChanged(Field::Seeking, select.value()));
        })
    };

    let on_message = {
        let handle = ctx.handle.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            handle.dispatch(SiteEvent::FieldChanged(Field::Message, area.value()));
        })
    };

    let site = ctx.handle.site();
    let form = site.access.form();
    let control = site.access.control();

    html! {
        <SectionFrame id="access">
            <div class="section-content">
                <h2 class="section-title">{"Request Access"}</h2>
                <p class="section-subtitle">
                    {"Tell us a little about yourself. Every request is reviewed by a member of our team."}
                </p>
                <form id="access-form" class="access-form" {onsubmit} novalidate=true>
                    <div class="form-group">
                        <label for="fullName">{"Full Name"}</label>
                        <input type="text" id="fullName" name={Field::FullName.name()}
                            value={form.full_name.clone()}
                            oninput={on_input(&ctx.handle, Field::FullName)} />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="age">{"Age"}</label>
                            <input type="number" id="age" name={Field::Age.name()} min="18"
                                value={form.age.clone()}
                                oninput={on_input(&ctx.handle, Field::Age)} />
                        </div>
                        <div class="form-group">
                            <label for="location">{"Location"}</label>
                            <input type="text" id="location" name={Field::Location.name()}
                                value={form.location.clone()}
                                oninput={on_input(&ctx.handle, Field::Location)} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="seeking">{"What are you seeking?"}</label>
                        <select id="seeking" name={Field::Seeking.name()} onchange={on_seeking}>
                            <option value="" selected={form.seeking == Seeking::Unselected}>
                                {Seeking::Unselected.label()}
                            </option>
                            { for Seeking::OPTIONS.iter().map(|option| html! {
                                <option value={option.value()} selected={form.seeking == *option}>
                                    {option.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="message">{"Why YAG?"}</label>
                        <textarea id="message" name={Field::Message.name()} rows="4"
                            value={form.message.clone()}
                            oninput={on_message} />
                    </div>
                    <button type="submit" class="btn-primary form-submit"
                        disabled={control.disabled}
                        style={format!("opacity: {};", control.opacity())}>
                        {control.label.clone()}
                    </button>
                </form>
            </div>
        </SectionFrame>
    }
}
