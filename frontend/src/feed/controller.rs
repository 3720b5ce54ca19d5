use std::rc::Rc;

use futures::future::LocalBoxFuture;

use shared::types::{EditRequest, EditResponse, LikeStatus, Post};
use shared::utils::{edit_path, like_path, like_status_path};

use crate::connect_fetch::{ApiRequest, Transport, decode_json, decode_message};
use crate::error::{FetchError, Notice};
use crate::state::FeedState;
use crate::types::PostState;

#[derive(Clone)]
pub struct FeedController<T: Transport> {
    transport: T,
    state: Rc<FeedState>,
}

impl<T: Transport> FeedController<T> {
    pub fn new(transport: T, posts: Vec<Post>) -> Self {
        Self { transport, state: Rc::new(FeedState::new(posts)) }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Returns the toggle to run, or `None` while another toggle for the
    /// same post is still in flight.
    pub fn toggle_like(&self, post: &PostState) -> Option<LocalBoxFuture<'static, ()>> {
        if post.pending.replace(true) {
            log::debug!("post {}: like toggle already in flight", post.id);
            return None;
        }
        post.notice.set(None);

        let transport = self.transport.clone();
        let post = post.clone();
        Some(Box::pin(async move {
            match toggle(&transport, post.id).await {
                Ok(liked) => post.liked.set(liked),
                Err((seen, err)) => {
                    log::error!("post {}: like toggle: {err}", post.id);
                    if let Some(liked) = seen {
                        post.liked.set_neq(liked);
                    }
                    post.notice.set(Some(Notice::from_error("Updating the like", &err)));
                }
            }
            post.pending.set(false);
        }))
    }

    pub fn start_edit(&self, post: &PostState) {
        if !post.editable {
            return;
        }
        post.draft.set(post.content.get_cloned());
        post.notice.set(None);
        post.editing.set(true);
    }

    pub fn cancel_edit(&self, post: &PostState) {
        post.editing.set(false);
        post.notice.set(None);
    }

    pub fn save_edit(&self, post: &PostState) -> Option<LocalBoxFuture<'static, ()>> {
        if !post.editing.get() || post.saving.replace(true) {
            return None;
        }
        post.notice.set(None);

        let transport = self.transport.clone();
        let post = post.clone();
        Some(Box::pin(async move {
            let request = ApiRequest::post(edit_path(post.id))
                .with_csrf()
                .with_body(&EditRequest { content: post.draft.get_cloned() });
            let result = transport.send_request(request).await.and_then(decode_json::<EditResponse>);
            match result {
                Ok(data) => {
                    log::info!("post {} edited", post.id);
                    post.content.set(data.data);
                    post.editing.set(false);
                }
                Err(err) => {
                    log::error!("post {}: edit: {err}", post.id);
                    post.notice.set(Some(Notice::from_error("Saving the post", &err)));
                }
            }
            post.saving.set(false);
        }))
    }
}

/// On failure also returns the liked state the server reported, if the
/// status query got that far.
async fn toggle<T: Transport>(transport: &T, id: u64) -> Result<bool, (Option<bool>, FetchError)> {
    let status: LikeStatus = transport.send(ApiRequest::get(like_status_path(id))).await
        .and_then(decode_json)
        .map_err(|err| (None, err))?;
    let like = !status.liked;
    let message = transport.send(ApiRequest::get(like_path(id, like)).with_csrf()).await
        .and_then(decode_message)
        .map_err(|err| (Some(status.liked), err))?;
    log::info!("post {id}: {message}");
    Ok(like)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use shared::constants::{LABEL_LIKE, LABEL_UNLIKE};

    use crate::connect_fetch::Method;
    use crate::feed::app_feed::like_label;
    use crate::testing::MockTransport;

    use super::*;

    fn post(id: u64, liked: bool) -> Post {
        Post {
            id,
            content: "first post".to_string(),
            author: "alice".to_string(),
            liked_by_current_user: liked,
            editable: true,
            ..Post::default()
        }
    }

    #[test]
    fn like_unliked_post() {
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/7", json!({"liked": false}));
        mock.ok(Method::Get, "/add_like/7", json!({"message": "Like added."}));
        let ctrl = FeedController::new(mock.clone(), vec![post(7, false)]);
        let item = ctrl.state().post(7).unwrap();
        assert_eq!(like_label(item.liked.get()), LABEL_LIKE);

        block_on(ctrl.toggle_like(&item).unwrap());

        assert!(item.liked.get());
        assert_eq!(like_label(item.liked.get()), LABEL_UNLIKE);
        assert!(!item.pending.get());
        let requests = mock.requests();
        assert!(!requests[0].csrf);
        assert!(requests[1].csrf);
    }

    #[test]
    fn server_state_wins_over_render_state() {
        // rendered as liked, but the server already forgot the like
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/3", json!({"liked": false}));
        mock.ok(Method::Get, "/add_like/3", json!({"message": "Like added."}));
        let ctrl = FeedController::new(mock.clone(), vec![post(3, true)]);
        let item = ctrl.state().post(3).unwrap();

        block_on(ctrl.toggle_like(&item).unwrap());
        assert!(item.liked.get());
        assert_eq!(mock.calls()[1], (Method::Get, "/add_like/3".to_string()));
    }

    #[test]
    fn rapid_second_click_is_ignored() {
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/7", json!({"liked": false}));
        mock.ok(Method::Get, "/add_like/7", json!({"message": "Like added."}));
        let ctrl = FeedController::new(mock.clone(), vec![post(7, false)]);
        let item = ctrl.state().post(7).unwrap();

        let first = ctrl.toggle_like(&item).unwrap();
        assert!(item.pending.get());
        assert!(ctrl.toggle_like(&item).is_none());
        block_on(first);

        assert!(item.liked.get());
        assert_eq!(mock.calls(), vec![
            (Method::Get, "/like_status/7".to_string()),
            (Method::Get, "/add_like/7".to_string()),
        ]);
        assert!(!item.pending.get());
        assert!(ctrl.toggle_like(&item).is_some());
    }

    #[test]
    fn toggling_twice_restores_label() {
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/1", json!({"liked": true}));
        mock.ok(Method::Get, "/remove_like/1", json!({"message": "Like removed."}));
        mock.ok(Method::Get, "/like_status/1", json!({"liked": false}));
        mock.ok(Method::Get, "/add_like/1", json!({"message": "Like added."}));
        let ctrl = FeedController::new(mock.clone(), vec![post(1, true)]);
        let item = ctrl.state().post(1).unwrap();
        let original = like_label(item.liked.get());

        block_on(ctrl.toggle_like(&item).unwrap());
        assert_eq!(like_label(item.liked.get()), LABEL_LIKE);
        block_on(ctrl.toggle_like(&item).unwrap());

        assert_eq!(like_label(item.liked.get()), original);
        assert!(item.liked.get());
        assert_eq!(mock.calls().len(), 4);
    }

    #[test]
    fn failed_action_keeps_label_and_shows_notice() {
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/2", json!({"liked": false}));
        mock.respond(Method::Get, "/add_like/2", 500, json!({"error": "database locked"}));
        let ctrl = FeedController::new(mock, vec![post(2, false)]);
        let item = ctrl.state().post(2).unwrap();

        block_on(ctrl.toggle_like(&item).unwrap());
        assert!(!item.liked.get());
        assert!(!item.pending.get());
        assert!(item.notice.get_cloned().unwrap().text.contains("database locked"));
    }

    #[test]
    fn failed_action_shows_server_reported_state() {
        // rendered as not liked, the server says liked, then the removal fails
        let mock = MockTransport::new();
        mock.ok(Method::Get, "/like_status/5", json!({"liked": true}));
        mock.respond(Method::Get, "/remove_like/5", 500, json!({"error": "database locked"}));
        let ctrl = FeedController::new(mock, vec![post(5, false)]);
        let item = ctrl.state().post(5).unwrap();

        block_on(ctrl.toggle_like(&item).unwrap());
        assert!(item.liked.get());
        assert_eq!(like_label(item.liked.get()), LABEL_UNLIKE);
        assert!(item.notice.get_cloned().is_some());
        assert!(!item.pending.get());
    }

    #[test]
    fn failed_status_query_sends_no_action() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/like_status/2", FetchError::Timeout(10_000));
        let ctrl = FeedController::new(mock.clone(), vec![post(2, false)]);
        let item = ctrl.state().post(2).unwrap();

        block_on(ctrl.toggle_like(&item).unwrap());
        assert_eq!(mock.calls().len(), 1);
        assert!(item.notice.get_cloned().is_some());
        assert!(!item.pending.get());
    }

    #[test]
    fn edit_in_place() {
        let mock = MockTransport::new();
        mock.ok(Method::Post, "/edit/4", json!({"data": "edited text"}));
        let ctrl = FeedController::new(mock.clone(), vec![post(4, false)]);
        let item = ctrl.state().post(4).unwrap();

        assert!(ctrl.save_edit(&item).is_none());
        ctrl.start_edit(&item);
        assert!(item.editing.get());
        assert_eq!(item.draft.get_cloned(), "first post");
        item.draft.set("edited text".to_string());

        block_on(ctrl.save_edit(&item).unwrap());
        assert!(!item.editing.get());
        assert_eq!(item.content.get_cloned(), "edited text");
        let request = &mock.requests()[0];
        assert!(request.csrf);
        assert_eq!(request.body, Some(json!({"content": "edited text"})));
    }

    #[test]
    fn failed_edit_keeps_draft() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/edit/4", 403, json!({"error": "Not allowed."}));
        let ctrl = FeedController::new(mock, vec![post(4, false)]);
        let item = ctrl.state().post(4).unwrap();
        ctrl.start_edit(&item);
        item.draft.set("new".to_string());

        block_on(ctrl.save_edit(&item).unwrap());
        assert!(item.editing.get());
        assert_eq!(item.draft.get_cloned(), "new");
        assert_eq!(item.content.get_cloned(), "first post");
        assert!(!item.saving.get());

        ctrl.cancel_edit(&item);
        assert!(!item.editing.get());
        assert!(item.notice.get_cloned().is_none());
    }

    #[test]
    fn foreign_posts_not_editable() {
        let ctrl = FeedController::new(MockTransport::new(), vec![Post { id: 8, content: "x".into(), ..Post::default() }]);
        let item = ctrl.state().post(8).unwrap();
        ctrl.start_edit(&item);
        assert!(!item.editing.get());
    }
}
