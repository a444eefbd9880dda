//! Remote backend over HTTP.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::{Agent, AgentBuilder, Request};

use super::{SessionApi, SessionLog, SessionRecord};
use crate::error::ZenError;
use crate::pomodoro::Settings;

const SETTINGS_PATH: &str = "/pomodoro/api/settings";
const SESSION_PATH: &str = "/pomodoro/api/session";
const SESSIONS_PATH: &str = "/pomodoro/api/sessions";

/// Longest a single request may take, connect to last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for the `/pomodoro/api` endpoints.
#[derive(Debug, Clone)]
pub struct HttpApi {
    agent: Agent,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpApi {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:5000`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: agent(DEFAULT_TIMEOUT),
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie: None,
        }
    }

    /// Bound every request by `timeout`.
    ///
    /// The timer calls the backend from its own thread, so an unresponsive
    /// server stalls the countdown for at most this long.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = agent(timeout);
        self
    }

    /// Send a login session cookie with every request.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: &str, path: &str) -> Request {
        let url = self.url(path);
        debug!(method, url = %url, "Backend request");

        let request = self.agent.request(method, &url);
        match &self.session_cookie {
            Some(cookie) => request.set("Cookie", cookie),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ZenError> {
        let response = self.request("GET", path).call().map_err(http_error)?;
        let body = response.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn agent(timeout: Duration) -> Agent {
    AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout(timeout)
        .build()
}

fn http_error(err: ureq::Error) -> ZenError {
    match err {
        ureq::Error::Status(code, response) => ZenError::Http(format!(
            "{} returned {code} {}",
            response.get_url(),
            response.status_text()
        )),
        ureq::Error::Transport(transport) => ZenError::Http(transport.to_string()),
    }
}

impl SessionApi for HttpApi {
    fn fetch_settings(&self) -> Result<Settings, ZenError> {
        self.get_json(SETTINGS_PATH)
    }

    fn store_settings(&self, settings: &Settings) -> Result<(), ZenError> {
        self.request("PUT", SETTINGS_PATH)
            .send_json(settings)
            .map_err(http_error)?;
        Ok(())
    }

    fn log_session(&self, entry: &SessionLog) -> Result<(), ZenError> {
        self.request("POST", SESSION_PATH)
            .send_json(entry)
            .map_err(http_error)?;
        Ok(())
    }

    fn recent_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>, ZenError> {
        let mut sessions: Vec<SessionRecord> = self.get_json(SESSIONS_PATH)?;
        sessions.truncate(limit);
        Ok(sessions)
    }
}
