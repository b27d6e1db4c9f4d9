use chrono::{DateTime, Utc};
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// One target letter and whether the buffer got it right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub target: char,
    pub correct: Correctness,
}

impl Character {
    pub fn new(target: char) -> Self {
        Self {
            target,
            correct: Correctness::Unknown,
        }
    }
}

/// The word currently being practised plus its attempt state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub characters: Vec<Character>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub streak: u32,
    pub progress: i32,
    pub prevprog: i32,
    pub wpm: u32,
    pub matched: bool,
    pub hit_target_wpm: bool,
}

impl Word {
    /// Fresh, untimed word for `target`.
    pub fn new(target: &str) -> Self {
        Self {
            characters: target.chars().map(Character::new).collect(),
            start_time: None,
            end_time: None,
            streak: 0,
            progress: 0,
            prevprog: 0,
            wpm: 0,
            matched: false,
            hit_target_wpm: false,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.target).collect()
    }

    /// True when every typed char equals the target char at its index.
    /// Anything typed past the end of the word is a mismatch.
    pub fn matches(&self, buffer: &str) -> bool {
        buffer
            .chars()
            .zip_longest(self.characters.iter())
            .all(|pair| match pair {
                EitherOrBoth::Both(typed, cell) => typed == cell.target,
                EitherOrBoth::Left(_) => false,
                EitherOrBoth::Right(_) => true,
            })
    }

    /// Cells re-marked against `buffer`; cells past the buffer are unknown.
    pub fn marked(&self, buffer: &str) -> Vec<Character> {
        let mut typed = buffer.chars();
        self.characters
            .iter()
            .map(|cell| Character {
                target: cell.target,
                correct: match typed.next() {
                    Some(c) if c == cell.target => Correctness::Correct,
                    Some(_) => Correctness::Incorrect,
                    None => Correctness::Unknown,
                },
            })
            .collect()
    }

    pub fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }
}
