//! Speed and progress arithmetic used by the engine.
//!
//! Everything here is a plain function of its arguments so the tuning curves
//! can be tested in isolation.

use chrono::{DateTime, Utc};

pub const CHARS_PER_WORD: f64 = 5.0;
pub const PROGRESS_MIN: i32 = -100;
pub const PROGRESS_MAX: i32 = 100;
pub const TYPO_PENALTY: i32 = 10;
/// Flat step applied while recovering from negative progress with a slow word.
pub const RECOVERY_STEP: i32 = 5;

/// Rounds halves towards positive infinity, so -1.5 becomes -1.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Minutes between `start` and `now`. An unset start counts from the unix epoch.
pub fn elapsed_minutes(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let start = start.unwrap_or_default();
    (now - start).num_milliseconds() as f64 / 60_000.0
}

/// Words per minute for `typed_chars` characters, 0 when no time has passed.
pub fn words_per_minute(typed_chars: usize, elapsed_minutes: f64) -> u32 {
    if elapsed_minutes <= 0.0 || !elapsed_minutes.is_finite() {
        return 0;
    }

    let wpm = round_half_up(typed_chars as f64 / CHARS_PER_WORD / elapsed_minutes);
    if wpm.is_finite() && wpm > 0.0 {
        wpm as u32
    } else {
        0
    }
}

/// Progress awarded for a completed word.
///
/// Beating the target follows a square-root curve, falling short costs half
/// the shortfall.
pub fn progress_delta(wpm: u32, target_wpm: u32) -> i32 {
    let target = target_wpm.max(1) as f64;
    let wpm_f = wpm as f64;

    let delta = if wpm >= target_wpm {
        round_half_up((144.0 * wpm_f / target).sqrt() - 2.0)
    } else {
        round_half_up((wpm_f - target) / 2.0)
    };

    delta.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Applies a completion delta. Negative progress recovers at double speed on
/// a good word and by a flat step on a slow one.
pub fn apply_completion(progress: i32, delta: i32) -> i32 {
    let next = if progress < 0 {
        let step = if delta >= 0 {
            delta.saturating_mul(2)
        } else {
            RECOVERY_STEP
        };
        progress.saturating_add(step).max(PROGRESS_MIN)
    } else {
        progress.saturating_add(delta).max(0)
    };

    clamp_progress(next)
}

/// Progress after a typo on a `typed_chars`-long buffer.
pub fn apply_typo(progress: i32, typed_chars: usize) -> i32 {
    if progress > 0 {
        0
    } else if typed_chars == 1 {
        // first keystroke of a retry
        progress
    } else {
        clamp_progress(progress - TYPO_PENALTY)
    }
}

pub fn clamp_progress(progress: i32) -> i32 {
    progress.clamp(PROGRESS_MIN, PROGRESS_MAX)
}
