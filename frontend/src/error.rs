use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("no response from server after {0} ms")]
    Timeout(u32),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Timeout(_))
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// Non-blocking message shown inside the active panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: &str) -> Self {
        Self { kind: NoticeKind::Info, text: text.to_string() }
    }

    pub fn from_error(action: &str, err: &FetchError) -> Self {
        let hint = if err.is_network() { " Check your connection and try again." } else { "" };
        Self {
            kind: NoticeKind::Error,
            text: format!("{action} failed: {err}.{hint}"),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
