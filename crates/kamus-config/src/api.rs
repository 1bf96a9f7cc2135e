use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://kbbi.raf555.dev/api/v1";
const DEFAULT_USER_AGENT: &str = "kamus/0.1";
const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Socket/operation timeout for a single lookup; no retries on top.
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("KAMUS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let user_agent =
            env::var("KAMUS_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_seconds = env::var("KAMUS_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            base_url,
            user_agent,
            timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
