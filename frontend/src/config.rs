use shared::constants::FETCH_TIMEOUT_MS;

pub const DATA_APP: &str = "app";
pub const DATA_API_ROOT: &str = "apiRoot";
pub const DATA_TIMEOUT: &str = "timeout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Mail,
    Feed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub app: AppKind,
    pub api_root: String,
    pub timeout_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppKind::Mail,
            api_root: String::new(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Reads overrides from `data-*` attributes, `get` receives the dataset key.
    pub fn from_dataset<F>(get: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let mut settings = Settings::default();
        match get(DATA_APP).as_deref() {
            Some("feed") | Some("network") => settings.app = AppKind::Feed,
            Some("mail") | None => {}
            Some(other) => log::warn!("unknown data-app {other:?}, using mail"),
        }
        if let Some(root) = get(DATA_API_ROOT) {
            settings.api_root = root.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = get(DATA_TIMEOUT) {
            match timeout.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => settings.timeout_ms = ms,
                _ => log::warn!("invalid data-timeout {timeout:?}, using {FETCH_TIMEOUT_MS} ms"),
            }
        }
        settings
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }
}
