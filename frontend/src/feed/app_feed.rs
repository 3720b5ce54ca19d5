use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use wasm_bindgen_futures::spawn_local;

use shared::constants::{LABEL_LIKE, LABEL_UNLIKE, POSTS_DATA_ID};
use shared::types::Post;

use crate::connect_fetch::Transport;
use crate::constants::{PROP_DISABLED, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_SPAN, TAG_STRONG, TAG_TEXTAREA};
use crate::elements::app_notice::notice_signal;
use crate::feed::controller::FeedController;
use crate::types::PostState;
use crate::utils::{get_text_by_id, get_value_from_target};

fn css_class(label: &str) -> String {
    format!("app-feed__{label}")
}

pub fn like_label(liked: bool) -> &'static str {
    if liked { LABEL_UNLIKE } else { LABEL_LIKE }
}

pub fn parse_posts(text: &str) -> Vec<Post> {
    match serde_json::from_str::<Vec<Post>>(text) {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("#{POSTS_DATA_ID}: {err}");
            vec![]
        }
    }
}

/// Posts embedded by the server in `<script id="posts-data" type="application/json">`.
pub fn load_posts() -> Vec<Post> {
    match get_text_by_id(POSTS_DATA_ID) {
        Some(text) => parse_posts(&text),
        None => {
            log::warn!("no #{POSTS_DATA_ID} element, feed is empty");
            vec![]
        }
    }
}

pub fn app_feed<T: Transport>(ctrl: FeedController<T>) -> Dom {
    let posts = ctrl.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children_signal_vec(ctrl.state().posts.signal_vec_cloned().map(move|post|post_card(&posts, post)))
    })
}

fn post_card<T: Transport>(ctrl: &FeedController<T>, post: PostState) -> Dom {
    let mut tools = vec![like_button(ctrl, &post)];
    if post.editable {
        tools.push(edit_button(ctrl, &post));
    }

    html!(TAG_DIV, {
        .class(css_class("post"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("post-header"))
                .children([
                    html!(TAG_STRONG, {.text(&post.author)}),
                    html!(TAG_SPAN, {
                        .class(css_class("date"))
                        .text(&post.timestamp)
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("content"))
                .visible_signal(post.editing.signal().map(|flag|!flag))
                .text_signal(post.content.signal_cloned())
            }),
            post_editor(ctrl, &post),
            html!(TAG_DIV, {
                .class(css_class("tools"))
                .children(tools)
            }),
        ])
        .child_signal(notice_signal(&post.notice))
    })
}

fn like_button<T: Transport>(ctrl: &FeedController<T>, post: &PostState) -> Dom {
    let click = ctrl.clone();
    let target = post.clone();
    html!(TAG_BUTTON, {
        .class(css_class("like"))
        .class_signal("liked", post.liked.signal())
        .attr(PROP_TYPE, "button")
        .prop_signal(PROP_DISABLED, post.pending.signal())
        .text_signal(post.liked.signal().map(like_label))
        .event(move|_: events::Click|{
            if let Some(task) = click.toggle_like(&target) {
                spawn_local(task);
            }
        })
    })
}

fn edit_button<T: Transport>(ctrl: &FeedController<T>, post: &PostState) -> Dom {
    let click = ctrl.clone();
    let target = post.clone();
    html!(TAG_BUTTON, {
        .class(css_class("edit"))
        .attr(PROP_TYPE, "button")
        .visible_signal(post.editing.signal().map(|flag|!flag))
        .text("Edit")
        .event(move|_: events::Click|click.start_edit(&target))
    })
}

fn post_editor<T: Transport>(ctrl: &FeedController<T>, post: &PostState) -> Dom {
    let save = ctrl.clone();
    let save_target = post.clone();
    let cancel = ctrl.clone();
    let cancel_target = post.clone();
    html!(TAG_DIV, {
        .class(css_class("editor"))
        .visible_signal(post.editing.signal())
        .children([
            draft_input(&post.draft),
            html!(TAG_BUTTON, {
                .attr(PROP_TYPE, "button")
                .prop_signal(PROP_DISABLED, post.saving.signal())
                .text("Save")
                .event(move|_: events::Click|{
                    if let Some(task) = save.save_edit(&save_target) {
                        spawn_local(task);
                    }
                })
            }),
            html!(TAG_BUTTON, {
                .attr(PROP_TYPE, "button")
                .text("Cancel")
                .event(move|_: events::Click|cancel.cancel_edit(&cancel_target))
            }),
        ])
    })
}

fn draft_input(value: &Mutable<String>) -> Dom {
    let input = value.clone();
    html!(TAG_TEXTAREA, {
        .class(css_class("input"))
        .prop_signal(PROP_VALUE, value.signal_cloned())
        .event(move|e: events::Input|input.set(get_value_from_target(e.target())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(like_label(true), "Remove Like");
        assert_eq!(like_label(false), "Like");
    }

    #[test]
    fn posts_from_page_payload() {
        let posts = parse_posts(r#"[
            {"id": 1, "content": "hello", "author": "alice", "liked_by_current_user": true, "editable": true},
            {"id": 2, "content": "world"}
        ]"#);
        assert_eq!(posts.len(), 2);
        assert!(posts[0].liked_by_current_user);
        assert!(!posts[1].editable);
    }

    #[test]
    fn malformed_payload_yields_empty_feed() {
        assert!(parse_posts("not json").is_empty());
    }
}
