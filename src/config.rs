use crate::app_dirs::AppDirs;
use crate::state::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub streak_mode: bool,
    pub target_streak: u32,
    pub target_wpm: u32,
    pub wordlist: Option<PathBuf>,
    pub show_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            streak_mode: false,
            target_streak: 5,
            target_wpm: 30,
            wordlist: None,
            show_instructions: true,
        }
    }
}

impl Config {
    /// Session settings for this config with an already loaded custom list.
    pub fn session_config(
        &self,
        custom_wordlist: Option<Vec<String>>,
        start_level: usize,
    ) -> SessionConfig {
        SessionConfig {
            streak_mode: self.streak_mode,
            target_streak: self.target_streak,
            target_wpm: self.target_wpm,
            custom_wordlist,
            start_level,
            show_instructions: self.show_instructions,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> crate::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        assert_eq!(cfg, store.load());
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nested").join("config.json"));
        let cfg = Config {
            streak_mode: true,
            target_streak: 12,
            target_wpm: 55,
            wordlist: Some(PathBuf::from("/tmp/words.txt")),
            show_instructions: false,
        };
        store.save(&cfg).unwrap();
        assert_eq!(cfg, store.load());
    }

    #[test]
    fn missing_or_corrupt_config_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());

        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{"target_wpm": 70}"#).unwrap();
        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.target_wpm, 70);
        assert_eq!(cfg.target_streak, Config::default().target_streak);
    }

    #[test]
    fn session_config_carries_targets() {
        let cfg = Config {
            streak_mode: true,
            target_streak: 3,
            ..Config::default()
        };
        let session = cfg.session_config(Some(vec!["a".into()]), 0);
        assert!(session.streak_mode);
        assert_eq!(session.target_streak, 3);
        assert_eq!(session.custom_wordlist, Some(vec!["a".to_string()]));
    }
}
