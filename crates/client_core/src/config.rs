use std::{fs, path::Path};

use toml::{Table, Value};
use tracing::warn;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";
pub const SETTINGS_FILE: &str = "tracker.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub server_url: String,
    /// Letter class (regex character-class body) accepted by the form
    /// validator. `None` keeps the built-in Cyrillic alphabet.
    pub alphabet: Option<String>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            alphabet: None,
        }
    }
}

/// Defaults, then `tracker.toml` in the working directory, then environment.
pub fn load_settings() -> TrackerSettings {
    let mut settings = TrackerSettings::default();
    apply_file(&mut settings, Path::new(SETTINGS_FILE));
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut TrackerSettings, path: &Path) {
    let Ok(raw) = fs::read_to_string(path) else {
        return;
    };
    match raw.parse::<Table>() {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.get("server_url").and_then(Value::as_str) {
                settings.server_url = v.to_string();
            }
            if let Some(v) = file_cfg.get("alphabet").and_then(Value::as_str) {
                settings.alphabet = Some(v.to_string());
            }
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "ignoring malformed settings file");
        }
    }
}

fn apply_env(settings: &mut TrackerSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("TRACKER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("TRACKER_ALPHABET") {
        settings.alphabet = Some(v);
    }
    if let Some(v) = var("APP__ALPHABET") {
        settings.alphabet = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn app_prefixed_env_wins_over_plain_env() {
        let mut settings = TrackerSettings::default();
        apply_env(&mut settings, |key| match key {
            "TRACKER_SERVER_URL" => Some("http://plain:1".into()),
            "APP__SERVER_URL" => Some("http://app:2".into()),
            _ => None,
        });
        assert_eq!(settings.server_url, "http://app:2");
        assert_eq!(settings.alphabet, None);
    }

    #[test]
    fn reads_server_url_and_alphabet_from_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("tracker_settings_test_{suffix}.toml"));
        fs::write(
            &path,
            "server_url = \"http://tracker.local\"\nalphabet = \"A-Za-z\"\npage_hint = 3\n",
        )
            .expect("write settings");

        let mut settings = TrackerSettings::default();
        apply_file(&mut settings, &path);
        assert_eq!(settings.server_url, "http://tracker.local");
        assert_eq!(settings.alphabet.as_deref(), Some("A-Za-z"));

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut settings = TrackerSettings::default();
        apply_file(&mut settings, Path::new("/definitely/not/here/tracker.toml"));
        assert_eq!(settings, TrackerSettings::default());
    }
}
