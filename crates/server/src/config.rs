use std::{fs, path::PathBuf};

use toml::{Table, Value};
use tracing::warn;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub seed_path: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3001".into(),
            seed_path: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match raw.parse::<Table>() {
            Ok(file_cfg) => apply_file(&mut settings, &file_cfg),
            Err(error) => warn!(%error, "ignoring malformed {SETTINGS_FILE}"),
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, file_cfg: &Table) {
    if let Some(v) = file_cfg.get("bind_addr").and_then(Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = file_cfg.get("seed_path").and_then(Value::as_str) {
        settings.seed_path = Some(PathBuf::from(v));
    }
    match file_cfg.get("max_body_bytes") {
        Some(Value::Integer(n)) => set_body_limit(settings, &n.to_string()),
        Some(Value::String(v)) => set_body_limit(settings, v),
        Some(other) => warn!(value = %other, "invalid max_body_bytes, keeping {}", settings.max_body_bytes),
        None => {}
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__MAX_BODY_BYTES") {
        set_body_limit(settings, &v);
    }
}

fn set_body_limit(settings: &mut Settings, raw: &str) {
    match raw.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => settings.max_body_bytes = parsed,
        _ => warn!(value = raw, "invalid max_body_bytes, keeping {}", settings.max_body_bytes),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
