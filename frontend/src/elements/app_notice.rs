use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::constants::{PROP_ROLE, PROP_ROLE_ALERT, PROP_ROLE_STATUS, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::error::Notice;

fn css_class(label: &str) -> String {
    format!("app-notice__{label}")
}

pub fn notice_signal(notice: &Mutable<Option<Notice>>) -> impl Signal<Item=Option<Dom>> {
    let state = notice.clone();
    notice.signal_cloned().map(move |current| current.map(|item| notice_element(&state, &item)))
}

fn notice_element(state: &Mutable<Option<Notice>>, notice: &Notice) -> Dom {
    let state = state.clone();
    let (kind, role) = if notice.is_error() { ("error", PROP_ROLE_ALERT) } else { ("info", PROP_ROLE_STATUS) };
    html!(TAG_DIV, {
        .class(css_class("container"))
        .class(css_class(kind))
        .attr(PROP_ROLE, role)
        .children([
            html!(TAG_SPAN, {
                .text(&notice.text)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("close"))
                .attr(PROP_TYPE, "button")
                .attr(PROP_TITLE, "dismiss")
                .text("×")
                .event(move|_: events::Click|state.set(None))
            }),
        ])
    })
}
