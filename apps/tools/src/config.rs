use std::{collections::HashMap, fs, path::Path};

use shared::protocol::ResponseLoop;

pub const SETTINGS_FILE: &str = "chunkctl.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub response_loop: ResponseLoop,
    pub state_queue_capacity: usize,
    pub analysis_queue_capacity: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            response_loop: ResponseLoop::Manual,
            state_queue_capacity: 16,
            analysis_queue_capacity: 4,
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    use anyhow::Context;

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let mut settings = Settings::default();
    apply_file(&mut settings, &raw);
    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        tracing::warn!("ignoring malformed settings file");
        return;
    };

    if let Some(v) = file_cfg.get("response_loop").and_then(toml::Value::as_str) {
        if let Some(parsed) = parse_response_loop(v) {
            settings.response_loop = parsed;
        }
    }
    if let Some(v) = file_cfg
        .get("state_queue_capacity")
        .and_then(toml::Value::as_integer)
    {
        if let Some(parsed) = queue_capacity(v) {
            settings.state_queue_capacity = parsed;
        }
    }
    if let Some(v) = file_cfg
        .get("analysis_queue_capacity")
        .and_then(toml::Value::as_integer)
    {
        if let Some(parsed) = queue_capacity(v) {
            settings.analysis_queue_capacity = parsed;
        }
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    for key in ["CHUNKCTL_RESPONSE_LOOP", "APP__RESPONSE_LOOP"] {
        if let Some(parsed) = var(key).as_deref().and_then(parse_response_loop) {
            settings.response_loop = parsed;
        }
    }

    for key in ["CHUNKCTL_STATE_QUEUE_CAPACITY", "APP__STATE_QUEUE_CAPACITY"] {
        if let Some(parsed) = var(key).as_deref().and_then(parse_capacity) {
            settings.state_queue_capacity = parsed;
        }
    }

    for key in ["CHUNKCTL_ANALYSIS_QUEUE_CAPACITY", "APP__ANALYSIS_QUEUE_CAPACITY"] {
        if let Some(parsed) = var(key).as_deref().and_then(parse_capacity) {
            settings.analysis_queue_capacity = parsed;
        }
    }

    if let Some(v) = var("CHUNKCTL_LOG") {
        settings.log_filter = v;
    }
}

/// A zero-capacity queue never accepts a `try_send`, so it is rejected along
/// with negative values.
fn queue_capacity(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok().filter(|capacity| *capacity > 0)
}

fn parse_capacity(raw: &str) -> Option<usize> {
    raw.trim().parse::<i64>().ok().and_then(queue_capacity)
}

fn parse_response_loop(raw: &str) -> Option<ResponseLoop> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "manual" => Some(ResponseLoop::Manual),
        "auto_run" | "autorun" => Some(ResponseLoop::AutoRun),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
