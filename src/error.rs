use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("embedded word list not found: {0}")]
    MissingWordlist(String),

    #[error("word list is empty")]
    EmptyWordlist,

    #[error("start level {level} is outside the word list ({len} words)")]
    LevelOutOfRange { level: usize, len: usize },

    #[error("invalid session setting: {0}")]
    InvalidSetting(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
