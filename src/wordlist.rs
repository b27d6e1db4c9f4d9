use crate::error::{Error, Result};
use crate::word::Word;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::fs;
use std::path::Path;

static WORDLIST_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/wordlists");

pub const DEFAULT_WORDLIST: &str = "english";

/// Hands out the word to practise for a level.
pub trait WordSource {
    /// List used when the session has no custom word list.
    fn default_list(&self) -> &[String];

    /// Fresh word for `level` in `list`. Past the end of the list this is an
    /// empty word.
    fn word_at(&self, list: &[String], level: usize) -> Word {
        list.get(level)
            .map(|target| Word::new(target))
            .unwrap_or_else(|| Word::new(""))
    }
}

/// Word source backed by an in-memory default list.
#[derive(Debug, Clone)]
pub struct ListWordSource {
    default: Vec<String>,
}

impl ListWordSource {
    pub fn new(default: Vec<String>) -> Self {
        Self { default }
    }

    /// Source over the embedded default list.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Wordlist::embedded(DEFAULT_WORDLIST)?.words))
    }
}

impl WordSource for ListWordSource {
    fn default_list(&self) -> &[String] {
        &self.default
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Wordlist {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordlistFile {
    Plain(Vec<String>),
    Object { words: Vec<String> },
}

impl Wordlist {
    pub fn embedded(name: &str) -> Result<Self> {
        let file = WORDLIST_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| Error::MissingWordlist(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::MissingWordlist(name.to_string()))?;

        let list: Wordlist = serde_json::from_str(contents)?;
        if list.words.is_empty() {
            return Err(Error::EmptyWordlist);
        }
        Ok(list)
    }
}

/// Reads a custom word list: a JSON array, a JSON object with `words`, or
/// one word per line.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let words = parse_wordlist(&contents)?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded custom word list");
    Ok(words)
}

pub fn parse_wordlist(contents: &str) -> Result<Vec<String>> {
    let trimmed = contents.trim_start();
    let words: Vec<String> = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<WordlistFile>(trimmed)? {
            WordlistFile::Plain(words) | WordlistFile::Object { words } => words,
        }
    } else {
        contents.lines().map(str::to_string).collect()
    };

    let words: Vec<String> = words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Err(Error::EmptyWordlist);
    }
    Ok(words)
}
