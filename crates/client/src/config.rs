use std::{env, path::PathBuf};

use studytrack_core::analytics::EMOTIONAL_TREND_WINDOW;

const SESSION_FILE_NAME: &str = "session.json";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the login token is kept between runs.
    pub session_file: PathBuf,
    /// Number of most recent review logs in the emotional trend (default: 10)
    pub trend_window: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STUDYTRACK_SESSION_FILE` - Session file path
    ///   (default: `$HOME/.config/studytrack/session.json`)
    /// - `STUDYTRACK_TREND_WINDOW` - Emotional trend window (default: 10)
    pub fn from_env() -> Self {
        Self {
            session_file: env::var_os("STUDYTRACK_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_session_file),
            trend_window: env::var("STUDYTRACK_TREND_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|window| *window > 0)
                .unwrap_or(EMOTIONAL_TREND_WINDOW),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_session_file() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".config")
            .join("studytrack")
            .join(SESSION_FILE_NAME),
        None => PathBuf::from(SESSION_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_file_lives_under_config_dir() {
        let path = default_session_file();
        assert!(path.ends_with(SESSION_FILE_NAME));
        if env::var_os("HOME").is_some() {
            assert!(path.ends_with("studytrack/session.json"));
        }
    }

    #[test]
    fn test_default_values() {
        env::remove_var("STUDYTRACK_SESSION_FILE");
        env::remove_var("STUDYTRACK_TREND_WINDOW");

        let config = Config::from_env();

        assert_eq!(config.trend_window, 10);
        assert_eq!(config.session_file, default_session_file());
    }
}
