use crate::error::{Error, Result};
use crate::event::{GameEvent, StatePatch};
use crate::word::Word;
use crate::wordlist::WordSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub streak_mode: bool,
    pub target_streak: u32,
    pub target_wpm: u32,
    pub custom_wordlist: Option<Vec<String>>,
    pub start_level: usize,
    pub show_instructions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            streak_mode: false,
            target_streak: 5,
            target_wpm: 30,
            custom_wordlist: None,
            start_level: 0,
            show_instructions: false,
        }
    }
}

/// Snapshot of a practice session. Transitions build a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub word: Word,
    pub buffer: String,
    pub level: usize,
    pub highest_level: usize,
    pub streak_mode: bool,
    pub target_streak: u32,
    pub target_wpm: u32,
    pub finished: bool,
    pub show_instructions: bool,
    pub custom_wordlist: Option<Vec<String>>,
    pub typo_text: String,
    pub caps_detected: bool,
    pub last_wpm: u32,
    pub last_save: Option<DateTime<Utc>>,
    pub last_event: Option<GameEvent>,
}

impl SessionState {
    pub fn new(config: SessionConfig, words: &dyn WordSource) -> Result<Self> {
        if config.target_wpm == 0 {
            return Err(Error::InvalidSetting("target wpm must be at least 1"));
        }
        if config.target_streak == 0 {
            return Err(Error::InvalidSetting("target streak must be at least 1"));
        }

        let list = config
            .custom_wordlist
            .as_deref()
            .unwrap_or_else(|| words.default_list());
        if list.is_empty() {
            return Err(Error::EmptyWordlist);
        }
        if config.start_level >= list.len() {
            return Err(Error::LevelOutOfRange {
                level: config.start_level,
                len: list.len(),
            });
        }
        let word = words.word_at(list, config.start_level);

        Ok(Self {
            word,
            buffer: String::new(),
            level: config.start_level,
            highest_level: config.start_level,
            streak_mode: config.streak_mode,
            target_streak: config.target_streak,
            target_wpm: config.target_wpm,
            finished: false,
            show_instructions: config.show_instructions,
            custom_wordlist: config.custom_wordlist,
            typo_text: String::new(),
            caps_detected: false,
            last_wpm: 0,
            last_save: None,
            last_event: None,
        })
    }

    /// The list levels index into.
    pub fn active_list<'a>(&'a self, words: &'a dyn WordSource) -> &'a [String] {
        self.custom_wordlist
            .as_deref()
            .unwrap_or_else(|| words.default_list())
    }

    /// Whether `word` has reached the mode's completion threshold.
    pub fn threshold_met(&self, word: &Word) -> bool {
        if self.streak_mode {
            word.streak >= self.target_streak
        } else {
            word.progress >= crate::scoring::PROGRESS_MAX
        }
    }

    pub fn merge(mut self, patch: StatePatch) -> Self {
        if let Some(event) = patch.last_event {
            self.last_event = Some(event);
        }
        self
    }
}
