use typestreak::{
    Engine, GameEvent, ListWordSource, ManualClock, MemoryRecorder, SessionConfig, SessionState,
    WordSource,
};

// End-to-end sessions driven keystroke by keystroke with a manual clock.

fn type_word(
    engine: &Engine<'_>,
    clock: &ManualClock,
    mut state: SessionState,
    word: &str,
    ms_per_char: i64,
) -> SessionState {
    let mut buffer = String::new();
    for c in word.chars() {
        buffer.push(c);
        state = engine.set_buffer(&state, &buffer);
        clock.advance_ms(ms_per_char);
    }
    state
}

#[test]
fn progress_mode_walks_through_every_level() {
    let clock = ManualClock::default();
    let words = ListWordSource::new(vec!["cat".into(), "dog".into(), "owl".into()]);
    let recorder = MemoryRecorder::new();
    let engine = Engine::new(&clock, &words, &recorder);

    let mut state = SessionState::new(
        SessionConfig {
            target_wpm: 20,
            ..SessionConfig::default()
        },
        &words,
    )
    .unwrap();

    let mut steps = 0;
    while !state.finished && steps < 500 {
        let target = state.word.text();
        state = type_word(&engine, &clock, state, &target, 100);
        assert!((-100..=100).contains(&state.word.progress));
        steps += 1;
    }

    assert!(state.finished);
    assert_eq!(state.level, 2);
    assert_eq!(state.highest_level, 2);
    assert_eq!(recorder.count(GameEvent::StreakComplete), 2);
    assert_eq!(recorder.count(GameEvent::GameComplete), 1);
    assert_eq!(recorder.count(GameEvent::FailureTypo), 0);

    let frozen = engine.set_buffer(&state, "c");
    assert_eq!(frozen, state);
}

#[test]
fn streak_mode_resets_on_typo() {
    let clock = ManualClock::default();
    let words = ListWordSource::new(vec!["sun".into(), "moon".into()]);
    let recorder = MemoryRecorder::new();
    let engine = Engine::new(&clock, &words, &recorder);

    let mut state = SessionState::new(
        SessionConfig {
            streak_mode: true,
            target_streak: 3,
            target_wpm: 10,
            ..SessionConfig::default()
        },
        &words,
    )
    .unwrap();

    state = type_word(&engine, &clock, state, "sun", 100);
    assert_eq!(state.word.streak, 1);
    state = type_word(&engine, &clock, state, "sun", 100);
    assert_eq!(state.word.streak, 2);

    state = type_word(&engine, &clock, state, "sx", 100);
    assert_eq!(state.word.streak, 0);
    assert_eq!(state.typo_text, "sx");
    assert_eq!(state.level, 0);

    for _ in 0..3 {
        state = type_word(&engine, &clock, state, "sun", 100);
    }
    assert_eq!(state.level, 1);
    assert_eq!(state.word.text(), "moon");
    assert_eq!(state.word.streak, 0);
}

#[test]
fn slow_typing_drives_progress_negative_then_recovers() {
    let clock = ManualClock::default();
    let words = ListWordSource::new(vec!["tree".into(), "leaf".into()]);
    let recorder = MemoryRecorder::new();
    let engine = Engine::new(&clock, &words, &recorder);
    let mut state = SessionState::new(
        SessionConfig {
            target_wpm: 30,
            ..SessionConfig::default()
        },
        &words,
    )
    .unwrap();

    state = type_word(&engine, &clock, state, "tx", 100);
    state = type_word(&engine, &clock, state, "tx", 100);
    assert_eq!(state.word.progress, -20);

    // slow word while negative: flat recovery step
    state = type_word(&engine, &clock, state, "tree", 2_000);
    assert_eq!(state.last_event, Some(GameEvent::FailureSlow));
    assert_eq!(state.word.progress, -15);
    assert_eq!(state.word.prevprog, -20);

    // fast word while negative: double reward
    let before = state.word.progress;
    state = type_word(&engine, &clock, state, "tree", 100);
    assert_eq!(state.last_event, Some(GameEvent::WordComplete));
    assert!(state.word.progress > before + 10);
}

#[test]
fn custom_wordlist_drives_levels() {
    let clock = ManualClock::default();
    let words = ListWordSource::embedded().unwrap();
    let recorder = MemoryRecorder::new();
    let engine = Engine::new(&clock, &words, &recorder);
    let state = SessionState::new(
        SessionConfig {
            custom_wordlist: Some(vec!["zz".into()]),
            streak_mode: true,
            target_streak: 1,
            target_wpm: 1,
            ..SessionConfig::default()
        },
        &words,
    )
    .unwrap();
    assert_ne!(words.default_list()[0], "zz");

    let state = type_word(&engine, &clock, state, "zz", 100);
    assert!(state.finished);
}
