use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AbortController, Request, RequestCredentials, RequestInit, Response};

use shared::constants::{COOKIE_CSRF, HEADER_CSRF};
use shared::types::ServerMessage;
use shared::utils::get_cookie;

use crate::config::Settings;
use crate::error::FetchError;
use crate::utils::get_cookie_string;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Attach the `csrftoken` cookie as a header.
    pub csrf: bool,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, body: None, csrf: false }
    }

    pub fn get(path: String) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: String) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: String) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn with_csrf(mut self) -> Self {
        self.csrf = true;
        self
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between controllers and the network.
pub trait Transport: Clone + 'static {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>>;

    /// Runs `task` detached from the caller.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn send_request(&self, request: Result<ApiRequest, FetchError>) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>> {
        match request {
            Ok(request) => self.send(request),
            Err(err) => future::ready(Err(err)).boxed_local(),
        }
    }
}

fn check_status(response: &ApiResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ServerMessage>(&response.body).ok()
        .and_then(|data| data.error)
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    Err(FetchError::Server { status: response.status, message })
}

pub fn expect_success(response: ApiResponse) -> Result<(), FetchError> {
    check_status(&response)
}

pub fn decode_json<R: DeserializeOwned>(response: ApiResponse) -> Result<R, FetchError> {
    check_status(&response)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Decodes a `{message}` / `{error}` payload, an `error` field is a failure even on 2xx.
pub fn decode_message(response: ApiResponse) -> Result<String, FetchError> {
    let status = response.status;
    let data: ServerMessage = decode_json(response)?;
    match data.error {
        Some(message) => Err(FetchError::Server { status, message }),
        None => Ok(data.message.unwrap_or_default()),
    }
}

// ===

#[derive(Clone)]
pub struct WebTransport {
    settings: Rc<Settings>,
}

impl WebTransport {
    pub fn new(settings: Settings) -> Self {
        Self { settings: Rc::new(settings) }
    }
}

impl Transport for WebTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>> {
        let settings = self.settings.clone();
        async move {
            let method = request.method;
            let path = request.path.clone();
            let result = send(&settings, request).await;
            if let Err(err) = &result {
                log::warn!("{} {path}: {err}", method.as_str());
            }
            result
        }.boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

fn csrf_token() -> Option<String> {
    get_cookie_string().and_then(|cookies| get_cookie(&cookies, COOKIE_CSRF))
}

async fn send(settings: &Settings, data: ApiRequest) -> Result<ApiResponse, FetchError> {
    let abort = AbortController::new()?;
    let opts = RequestInit::new();
    opts.set_method(data.method.as_str());
    //opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    opts.set_signal(Some(&abort.signal()));
    if let Some(body) = &data.body {
        opts.set_body(&JsValue::from_str(&serde_json::to_string(body)?));
    }

    let request = Request::new_with_str_and_init(&settings.url(&data.path), &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    if data.csrf {
        match csrf_token() {
            Some(token) => request.headers().set(HEADER_CSRF, &token)?,
            None => log::warn!("no {COOKIE_CSRF} cookie for {}", data.path),
        }
    }

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let exchange = async {
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;
        let body = JsFuture::from(resp.text()?).await?;
        Ok::<_, FetchError>(ApiResponse { status: resp.status(), body: body.as_string().unwrap_or_default() })
    };
    let result = within_deadline(exchange, TimeoutFuture::new(settings.timeout_ms), settings.timeout_ms).await;
    if let Err(FetchError::Timeout(_)) = result {
        abort.abort();
    }
    result
}

/// Races the whole exchange, headers and body, against `deadline`.
async fn within_deadline<F, D>(exchange: F, deadline: D, timeout_ms: u32) -> Result<ApiResponse, FetchError>
    where
        F: Future<Output=Result<ApiResponse, FetchError>>,
        D: Future<Output=()>,
{
    match future::select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout(timeout_ms)),
    }
}
