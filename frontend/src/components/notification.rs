use web_sys::MouseEvent;
use yew::prelude::*;

use crate::app::use_site;
use crate::notification::NotificationKind;
use crate::site::Event as SiteEvent;

fn background(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("rgba(80, 200, 120, 0.95)", "#50c878"),
        NotificationKind::Error => ("rgba(255, 84, 89, 0.95)", "#ff5459"),
    }
}

/// Renders every live notification, newest at the bottom of the stack.
#[function_component(NotificationStack)]
pub fn notification_stack() -> Html {
    let ctx = use_site();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let site = ctx.handle.site();

    html! {
        <div class="notification-stack">
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        z-index: 10000;
                    }
                    .notification {
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 10px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                        max-width: 400px;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .notification-content {
                        position: relative;
                    }
                    .notification-title {
                        margin: 0 0 0.5rem 0;
                        font-size: 1rem;
                        font-weight: 600;
                    }
                    .notification-text {
                        margin: 0;
                        font-size: 0.9rem;
                        line-height: 1.4;
                    }
                    .notification-close {
                        position: absolute;
                        top: -5px;
                        right: -5px;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.5rem;
                        cursor: pointer;
                        width: 25px;
                        height: 25px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
            { for site.notifications.iter().map(|notification| {
                let (fill, border) = background(notification.kind);
                let style = format!(
                    "background: {}; border: 1px solid {}; transform: {};",
                    fill, border, notification.transform()
                );
                let onclose = {
                    let handle = ctx.handle.clone();
                    let id = notification.id;
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        handle.dispatch(SiteEvent::DismissNotification(id));
                    })
                };
                html! {
                    <div key={notification.id.0.to_string()} class={notification.kind.class_name()} {style}>
                        <div class="notification-content">
                            <h4 class="notification-title">{notification.title.clone()}</h4>
                            <p class="notification-text">{notification.body.clone()}</p>
                            <button class="notification-close" onclick={onclose}>{"×"}</button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
