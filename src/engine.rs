//! The typing progress engine.
//!
//! [`Engine::set_buffer`] takes the current snapshot and the full contents of
//! the input field and returns the next snapshot. It never fails: malformed or
//! stray input is either scored as a typo or ignored.

use crate::clock::Clock;
use crate::event::{EventRecorder, GameEvent};
use crate::scoring;
use crate::state::SessionState;
use crate::word::Word;
use crate::wordlist::WordSource;
use serde::{Deserialize, Serialize};

/// Actions a dispatcher can feed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetBuffer(String),
    SetShowInstructions(bool),
}

/// Borrowed collaborators for a run of transitions.
pub struct Engine<'a> {
    clock: &'a dyn Clock,
    words: &'a dyn WordSource,
    recorder: &'a dyn EventRecorder,
}

impl<'a> Engine<'a> {
    pub fn new(
        clock: &'a dyn Clock,
        words: &'a dyn WordSource,
        recorder: &'a dyn EventRecorder,
    ) -> Self {
        Self {
            clock,
            words,
            recorder,
        }
    }

    pub fn dispatch(&self, state: &SessionState, action: &Action) -> SessionState {
        match action {
            Action::SetBuffer(payload) => self.set_buffer(state, payload),
            Action::SetShowInstructions(show) => SessionState {
                show_instructions: *show,
                ..state.clone()
            },
        }
    }

    pub fn set_buffer(&self, state: &SessionState, payload: &str) -> SessionState {
        if state.show_instructions || state.finished || state.threshold_met(&state.word) {
            return state.clone();
        }

        let now = self.clock.now();
        let typed = payload.chars().count();
        let matched = state.word.matches(payload);
        let elapsed = scoring::elapsed_minutes(state.word.start_time, now);
        let wpm = scoring::words_per_minute(typed, elapsed);
        let hit_target_wpm = wpm >= state.target_wpm;
        let caps_detected = payload.chars().any(char::is_uppercase);

        if !matched {
            tracing::debug!(level = state.level, payload, "typo");
            let word = Word {
                characters: state.word.marked(payload),
                end_time: Some(now),
                streak: 0,
                wpm: 0,
                matched: false,
                hit_target_wpm: false,
                prevprog: state.word.progress,
                progress: scoring::apply_typo(state.word.progress, typed),
                ..state.word.clone()
            };
            return SessionState {
                word,
                typo_text: payload.to_string(),
                buffer: String::new(),
                caps_detected,
                ..state.clone()
            }
            .merge(self.recorder.record_event(GameEvent::FailureTypo));
        }

        if !state.word.is_finalized() && typed >= state.word.len() {
            let streak = if hit_target_wpm {
                state.word.streak + 1
            } else {
                0
            };
            let delta = scoring::progress_delta(wpm, state.target_wpm);
            let progress = scoring::apply_completion(state.word.progress, delta);
            tracing::debug!(level = state.level, wpm, streak, progress, "word complete");

            let completed = if state.streak_mode {
                streak >= state.target_streak
            } else {
                progress >= scoring::PROGRESS_MAX
            };

            if completed {
                let list = state.active_list(self.words);
                let next_level = state.level + 1;

                if next_level == list.len() {
                    tracing::info!(level = state.level, wpm, "game complete");
                    return SessionState {
                        finished: true,
                        last_save: Some(now),
                        caps_detected,
                        ..state.clone()
                    }
                    .merge(self.recorder.record_event(GameEvent::GameComplete));
                }

                tracing::info!(level = next_level, wpm, "advanced to next level");
                return SessionState {
                    word: self.words.word_at(list, next_level),
                    level: next_level,
                    highest_level: state.highest_level.max(next_level),
                    buffer: String::new(),
                    last_save: Some(now),
                    last_wpm: wpm,
                    caps_detected,
                    ..state.clone()
                }
                .merge(self.recorder.record_event(GameEvent::StreakComplete));
            }

            let event = if hit_target_wpm {
                GameEvent::WordComplete
            } else {
                GameEvent::FailureSlow
            };
            let word = Word {
                characters: state.word.marked(payload),
                end_time: Some(now),
                streak,
                wpm,
                matched: true,
                hit_target_wpm,
                prevprog: state.word.progress,
                progress,
                ..state.word.clone()
            };
            return SessionState {
                word,
                buffer: String::new(),
                last_wpm: wpm,
                caps_detected,
                ..state.clone()
            }
            .merge(self.recorder.record_event(event));
        }

        if !state.word.is_finalized() {
            let word = Word {
                characters: state.word.marked(payload),
                start_time: state.word.start_time.or(Some(now)),
                ..state.word.clone()
            };
            return SessionState {
                word,
                buffer: payload.to_string(),
                caps_detected,
                ..state.clone()
            }
            .merge(self.recorder.record_event(GameEvent::Type));
        }

        if state.threshold_met(&state.word) {
            return state.clone();
        }

        tracing::debug!(level = state.level, "repeating word");
        let fresh = self.words.word_at(state.active_list(self.words), state.level);
        let word = Word {
            characters: fresh.marked(payload),
            start_time: Some(now),
            streak: state.word.streak,
            progress: state.word.progress,
            prevprog: state.word.prevprog,
            ..fresh
        };
        SessionState {
            word,
            buffer: payload.to_string(),
            caps_detected,
            ..state.clone()
        }
        .merge(self.recorder.record_event(GameEvent::Type))
    }
}
