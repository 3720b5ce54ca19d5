use dominator::{Dom, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use wasm_bindgen_futures::spawn_local;

use shared::constants::{CLASS_READ, CLASS_UNREAD};
use shared::types::{Email, MailBoxes};
use shared::utils::{join_recipients, mailbox_title};

use crate::connect_fetch::Transport;
use crate::constants::{PROP_DISABLED, PROP_PLACEHOLDER, PROP_ROLE, PROP_ROLE_BUTTON, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_HEADING, TAG_INPUT, TAG_P, TAG_STRONG, TAG_TEXTAREA};
use crate::elements::app_notice::notice_signal;
use crate::mail::controller::MailController;
use crate::state::ViewState;
use crate::utils::get_value_from_target;

fn css_class(label: &str) -> String {
    format!("app-mail__{label}")
}

pub fn row_class(email: &Email) -> &'static str {
    if email.read { CLASS_READ } else { CLASS_UNREAD }
}

/// Toolbar highlight: only while the mailbox panel itself shows `mb`.
pub fn box_active(view: ViewState, current: MailBoxes, mb: MailBoxes) -> bool {
    view == ViewState::Mailbox && current == mb
}

pub fn app_mail<T: Transport>(ctrl: MailController<T>) -> Dom {
    let init = ctrl.clone();
    spawn_local(async move { init.init().await });

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            app_header(&ctrl),
            mailbox_view(&ctrl),
            detail_view(&ctrl),
            compose_view(&ctrl),
        ])
    })
}

fn app_header<T: Transport>(ctrl: &MailController<T>) -> Dom {
    let compose = ctrl.clone();
    html!(TAG_DIV, {
        .class(css_class("header"))
        .children([
            button_typed(ctrl, "Inbox", MailBoxes::Inbox),
            button_typed(ctrl, "Sent", MailBoxes::Sent),
            button_typed(ctrl, "Archived", MailBoxes::Archive),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .class_signal("active", ctrl.state().view.signal().map(|v|v==ViewState::Compose))
                .text("Compose")
                .event(move|_: events::Click|compose.show_compose())
            }),
        ])
    })
}

fn button_typed<T: Transport>(ctrl: &MailController<T>, label: &str, mb: MailBoxes) -> Dom {
    let click = ctrl.clone();
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .class_signal("active", map_ref! {
            let view = ctrl.state().view.signal(),
            let current = ctrl.state().mailbox.signal() =>
            box_active(*view, *current, mb)
        })
        .text(label)
        .event(move|_: events::Click|{
            let ctrl = click.clone();
            spawn_local(async move { ctrl.show_mailbox(mb).await });
        })
    })
}

fn panel<T: Transport>(ctrl: &MailController<T>, view: ViewState, label: &str, children: Vec<Dom>) -> Dom {
    let state = ctrl.state();
    html!(TAG_DIV, {
        .class(css_class("panel"))
        .class(css_class(label))
        .visible_signal(state.view.signal().map(move|current|current.is_visible(view)))
        .child_signal(notice_signal(&state.notice))
        .children(children)
    })
}

fn mailbox_view<T: Transport>(ctrl: &MailController<T>) -> Dom {
    let rows = ctrl.clone();
    panel(ctrl, ViewState::Mailbox, "mailbox", vec![
        html!(TAG_HEADING, {
            .class(css_class("title"))
            .text_signal(ctrl.state().mailbox.signal().map(|mb|mailbox_title(&mb)))
        }),
        html!(TAG_DIV, {
            .children_signal_vec(ctrl.state().emails.signal_vec_cloned().map(move|email|mail_row(&rows, email)))
        }),
    ])
}

fn mail_row<T: Transport>(ctrl: &MailController<T>, email: Email) -> Dom {
    let click = ctrl.clone();
    let id = email.id;
    html!(TAG_DIV, {
        .class(css_class("row"))
        .class(row_class(&email))
        .attr(PROP_ROLE, PROP_ROLE_BUTTON)
        .event(move|_: events::Click|{
            let ctrl = click.clone();
            spawn_local(async move { ctrl.show_email_detail(id).await });
        })
        .children([
            html!(TAG_DIV, {
                .class(css_class("sender"))
                .child(html!(TAG_STRONG, {.text(&email.sender)}))
            }),
            html!(TAG_DIV, {
                .class(css_class("subject"))
                .text(&email.subject)
            }),
            html!(TAG_DIV, {
                .class(css_class("date"))
                .text(&email.timestamp)
            }),
        ])
    })
}

fn detail_view<T: Transport>(ctrl: &MailController<T>) -> Dom {
    panel(ctrl, ViewState::EmailDetail, "detail", vec![
        html!(TAG_DIV, {
            .child_signal(ctrl.state().detail.signal_cloned().map(|email|email.map(|email|email_card(&email))))
        }),
    ])
}

fn email_card(email: &Email) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("card-header"))
                .child(html!(TAG_STRONG, {.text(&format!("Subject: {}", email.subject))}))
            }),
            field_line("From: ", &email.sender),
            field_line("To: ", &join_recipients(&email.recipients)),
            field_line("Timestamp: ", &email.timestamp),
            html!(TAG_P, {
                .class(css_class("body"))
                .text(&email.body)
            }),
        ])
    })
}

fn field_line(label: &str, value: &str) -> Dom {
    html!(TAG_P, {
        .child(html!(TAG_STRONG, {.text(label)}))
        .text(value)
    })
}

fn compose_view<T: Transport>(ctrl: &MailController<T>) -> Dom {
    let state = ctrl.state();
    let submit = ctrl.clone();
    panel(ctrl, ViewState::Compose, "compose", vec![
        html!(TAG_HEADING, {
            .class(css_class("title"))
            .text("New Email")
        }),
        compose_input(TAG_INPUT, "Recipients", &state.draft.recipients),
        compose_input(TAG_INPUT, "Subject", &state.draft.subject),
        compose_input(TAG_TEXTAREA, "Body", &state.draft.body),
        html!(TAG_BUTTON, {
            .class(css_class("button"))
            .class(css_class("send"))
            .attr(PROP_TYPE, "button")
            .prop_signal(PROP_DISABLED, state.sending.signal())
            .text("Send")
            .event(move|_: events::Click|{
                let ctrl = submit.clone();
                let (recipients, subject, body) = ctrl.state().draft.values();
                spawn_local(async move { ctrl.submit_compose(recipients, subject, body).await });
            })
        }),
    ])
}

fn compose_input(tag: &str, placeholder: &str, value: &Mutable<String>) -> Dom {
    let input = value.clone();
    html!(tag, {
        .class(css_class("input"))
        .attr(PROP_PLACEHOLDER, placeholder)
        .prop_signal(PROP_VALUE, value.signal_cloned())
        .event(move|e: events::Input|input.set(get_value_from_target(e.target())))
    })
}
