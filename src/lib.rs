// Library surface for the binary and the integration tests.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod replay;
pub mod runtime;
pub mod scoring;
pub mod state;
pub mod ui;
pub mod word;
pub mod wordlist;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{Action, Engine};
pub use error::{Error, Result};
pub use event::{EventRecorder, GameEvent, MemoryRecorder, StatePatch, TracingRecorder};
pub use state::{SessionConfig, SessionState};
pub use word::{Character, Correctness, Word};
pub use wordlist::{ListWordSource, WordSource};
