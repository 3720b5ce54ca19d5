use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::connect_fetch::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::FetchError;

type Reply = Result<ApiResponse, FetchError>;

enum Route {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct MockInner {
    routes: HashMap<(Method, String), VecDeque<Route>>,
    requests: Vec<ApiRequest>,
    spawned: Vec<LocalBoxFuture<'static, ()>>,
}

/// Scripted transport: replies are queued per method and path and consumed
/// in order, unknown routes fail as network errors.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<MockInner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, route: Route) {
        self.inner.borrow_mut().routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(route);
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, Route::Ready(Ok(ApiResponse { status, body: body.to_string() })));
    }

    pub fn ok(&self, method: Method, path: &str, body: serde_json::Value) {
        self.respond(method, path, 200, body);
    }

    pub fn fail(&self, method: Method, path: &str, err: FetchError) {
        self.push(method, path, Route::Ready(Err(err)));
    }

    /// The reply is held back until the returned sender fires.
    pub fn defer(&self, method: Method, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Route::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.inner.borrow().requests.iter().map(|r| (r.method, r.path.clone())).collect()
    }

    pub fn spawned_count(&self) -> usize {
        self.inner.borrow().spawned.len()
    }

    pub fn run_spawned(&self) {
        let tasks = std::mem::take(&mut self.inner.borrow_mut().spawned);
        for task in tasks {
            futures::executor::block_on(task);
        }
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>> {
        let mut inner = self.inner.borrow_mut();
        let route = inner.routes
            .get_mut(&(request.method, request.path.clone()))
            .and_then(|queue| queue.pop_front());
        let missing = format!("no route for {} {}", request.method.as_str(), request.path);
        inner.requests.push(request);
        match route {
            Some(Route::Ready(reply)) => future::ready(reply).boxed_local(),
            Some(Route::Deferred(rx)) => async move {
                rx.await.unwrap_or_else(|_| Err(FetchError::Network("reply dropped".to_string())))
            }.boxed_local(),
            None => future::ready(Err(FetchError::Network(missing))).boxed_local(),
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.inner.borrow_mut().spawned.push(task);
    }
}
