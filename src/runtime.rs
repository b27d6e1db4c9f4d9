use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::engine::Engine;
use crate::input::{handle_key, KeyOutcome};
use crate::state::SessionState;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait TermEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<TermEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let ev = match event::read() {
                // key releases would double every keystroke on some terminals
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => TermEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => TermEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(%err, "terminal event reader stopped");
                    break;
                }
            };
            if tx.send(ev).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TermEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Test event source fed from a channel
pub struct TestEventSource {
    rx: Receiver<TermEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TermEvent>) -> Self {
        Self { rx }
    }
}

impl TermEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: TermEventSource> {
    event_source: E,
    tick: Duration,
}

impl<E: TermEventSource> Runner<E> {
    pub fn new(event_source: E, tick: Duration) -> Self {
        Self { event_source, tick }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick on timeout
    pub fn step(&self) -> TermEvent {
        match self.event_source.recv_timeout(self.tick) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => TermEvent::Tick,
        }
    }
}

/// Drives a session until the player quits. `draw` is called with the
/// current state before every wait for input; its error ends the loop.
pub fn run<E, F>(
    runner: &Runner<E>,
    engine: &Engine<'_>,
    mut state: SessionState,
    mut draw: F,
) -> crate::Result<SessionState>
where
    E: TermEventSource,
    F: FnMut(&SessionState) -> std::io::Result<()>,
{
    loop {
        draw(&state)?;

        let key = match runner.step() {
            TermEvent::Key(key) => key,
            TermEvent::Tick | TermEvent::Resize => continue,
        };

        match handle_key(&state, key) {
            KeyOutcome::Quit => break,
            KeyOutcome::Ignore => {}
            KeyOutcome::Dispatch(action) => {
                let next = engine.dispatch(&state, &action);
                if next.last_save != state.last_save {
                    tracing::info!(
                        level = next.level,
                        highest_level = next.highest_level,
                        "progress milestone"
                    );
                }
                state = next;
            }
        }
    }

    Ok(state)
}
