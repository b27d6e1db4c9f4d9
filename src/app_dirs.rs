use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "typestreak";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("typestreak_config.json")
        }
    }

    /// Directory for log files, under $HOME/.local/state when available.
    pub fn log_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME)
        } else if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.data_local_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_json() {
        assert_eq!(
            AppDirs::config_path().extension().and_then(|e| e.to_str()),
            Some("json")
        );
    }

    #[test]
    fn log_dir_names_app() {
        let dir = AppDirs::log_dir();
        assert!(dir.ends_with(APP_NAME) || dir == PathBuf::from("."));
    }
}
