use std::{collections::HashMap, fs, time::Duration};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8082";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

pub fn load_client_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_overrides(settings: &mut ClientSettings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        tracing::warn!("ignoring unparsable client.toml");
        return;
    };

    if let Some(v) = file_cfg.get("server_url").and_then(toml::Value::as_str) {
        settings.server_url = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("request_timeout_secs")
        .and_then(toml::Value::as_integer)
    {
        if let Ok(secs) = u64::try_from(v) {
            settings.request_timeout = timeout_from_secs(secs);
        }
    }
}

fn apply_env_overrides(settings: &mut ClientSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__SERVER_URL").filter(|v| !v.trim().is_empty()) {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = v.trim().parse::<u64>() {
            settings.request_timeout = timeout_from_secs(secs);
        }
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Accepts only absolute http(s) URLs; returns the URL without a trailing slash.
pub fn parse_server_url(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid server url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("server url must use http or https, got '{}'", url.scheme());
    }
    if url.host_str().is_none() {
        bail!("server url '{raw}' has no host");
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
