use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use typestreak::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    replay::replay,
    runtime::{self, CrosstermEventSource, Runner},
    ui::GameView,
    wordlist::{load_wordlist, ListWordSource},
    Engine, ManualClock, MemoryRecorder, SessionState, SystemClock, TracingRecorder,
};

const TICK_RATE_MS: u64 = 100;

/// word-by-word typing trainer with streak and progress levels
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practise one word at a time. Typing a word at or above the target speed earns progress (or streak); fill it to unlock the next word."
)]
pub struct Cli {
    /// advance by consecutive on-target words instead of the progress bar
    #[clap(long)]
    streak_mode: bool,

    /// advance by the progress bar (overrides a saved streak mode)
    #[clap(long, conflicts_with = "streak_mode")]
    progress_mode: bool,

    /// consecutive on-target words needed in streak mode
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
    target_streak: Option<u32>,

    /// target typing speed in words per minute
    #[clap(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    target_wpm: Option<u32>,

    /// custom word list: JSON array, JSON {"words": [...]}, or one word per line
    #[clap(short = 'l', long)]
    wordlist: Option<PathBuf>,

    /// level (zero based) to start from
    #[clap(long, default_value_t = 0)]
    level: usize,

    /// skip the instructions screen
    #[clap(long)]
    no_instructions: bool,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// read buffer contents (or JSON actions) from stdin, print states as JSON lines
    #[clap(long)]
    replay: bool,

    /// simulated milliseconds between replayed lines
    #[clap(long, default_value_t = 200, requires = "replay")]
    ms_per_line: u32,
}

impl Cli {
    fn apply_to(&self, mut cfg: Config) -> Config {
        if self.streak_mode {
            cfg.streak_mode = true;
        }
        if self.progress_mode {
            cfg.streak_mode = false;
        }
        if let Some(streak) = self.target_streak {
            cfg.target_streak = streak;
        }
        if let Some(wpm) = self.target_wpm {
            cfg.target_wpm = wpm;
        }
        if let Some(ref path) = self.wordlist {
            cfg.wordlist = Some(path.clone());
        }
        if self.no_instructions {
            cfg.show_instructions = false;
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let cfg = cli.apply_to(store.load());
    if cli.save_config {
        store.save(&cfg)?;
    }

    let words = ListWordSource::embedded()?;
    let custom = cfg.wordlist.as_ref().map(load_wordlist).transpose()?;

    if cli.replay {
        logging::init_stderr_logging("warn");
        let mut session = cfg.session_config(custom, cli.level);
        session.show_instructions = false;
        let state = SessionState::new(session, &words)?;

        let recorder = MemoryRecorder::new();
        let clock = ManualClock::new(chrono::Utc::now());
        let engine = Engine::new(&clock, &words, &recorder);
        let last = replay(
            &engine,
            &clock,
            i64::from(cli.ms_per_line),
            state,
            stdin().lock(),
            io::stdout().lock(),
        )?;

        eprintln!(
            "level {} finished {} events {}",
            last.level,
            last.finished,
            recorder
                .events()
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty (use --replay for piped input)")
            .exit();
    }

    let _log_guard = logging::init_file_logging(&AppDirs::log_dir())?;
    let state = SessionState::new(cfg.session_config(custom, cli.level), &words)?;
    tracing::info!(
        level = state.level,
        streak_mode = state.streak_mode,
        target_wpm = state.target_wpm,
        "session started"
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, state, &words);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = result?;
    if state.finished {
        println!("all {} words complete", state.level + 1);
    }
    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    state: SessionState,
    words: &ListWordSource,
) -> Result<SessionState, Box<dyn Error>> {
    let clock = SystemClock;
    let recorder = TracingRecorder;
    let engine = Engine::new(&clock, words, &recorder);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );
    let total_levels = state.active_list(words).len();

    let state = runtime::run(&runner, &engine, state, |state| {
        terminal
            .draw(|f| f.render_widget(GameView::new(state, total_levels), f.area()))
            .map(|_| ())
    })?;
    Ok(state)
}
