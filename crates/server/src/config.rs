use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: format!("0.0.0.0:{DEFAULT_PORT}"),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, &raw);
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        tracing::warn!("ignoring unparsable server.toml");
        return;
    };

    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = file_cfg.get("max_body_bytes").and_then(toml::Value::as_integer) {
        if let Ok(parsed) = usize::try_from(v) {
            settings.max_body_bytes = parsed;
        }
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(port) = var("PORT").filter(|v| !v.trim().is_empty()) {
        settings.server_bind = with_port(&settings.server_bind, port.trim());
    }

    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }
}

fn with_port(bind: &str, port: &str) -> String {
    let host = bind
        .rsplit_once(':')
        .map(|(host, _)| host)
        .unwrap_or("0.0.0.0");
    format!("{host}:{port}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
