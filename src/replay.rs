//! Headless dispatcher: feeds actions read from a stream through the engine.

use crate::clock::ManualClock;
use crate::engine::{Action, Engine};
use crate::state::SessionState;
use std::io::{BufRead, Write};

/// Parses one replay line. Lines starting with `{` are JSON actions,
/// anything else is the full buffer contents.
pub fn parse_line(line: &str) -> crate::Result<Action> {
    if line.trim_start().starts_with('{') {
        Ok(serde_json::from_str(line)?)
    } else {
        Ok(Action::SetBuffer(line.to_string()))
    }
}

/// Dispatches every line of `input`, writing each resulting state as a JSON
/// line to `output`. Returns the final state.
///
/// `clock` must be the clock `engine` reads; it moves `ms_per_line` after
/// every line so replayed keystrokes have a typing speed.
pub fn replay<R: BufRead, W: Write>(
    engine: &Engine<'_>,
    clock: &ManualClock,
    ms_per_line: i64,
    mut state: SessionState,
    input: R,
    mut output: W,
) -> crate::Result<SessionState> {
    for line in input.lines() {
        let line = line?;
        let action = parse_line(&line)?;
        state = engine.dispatch(&state, &action);
        serde_json::to_writer(&mut output, &state)?;
        writeln!(output)?;
        clock.advance_ms(ms_per_line);
    }
    output.flush()?;
    Ok(state)
}
