use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::SessionState;
use crate::word::Correctness;

const HORIZONTAL_MARGIN: u16 = 5;

const INSTRUCTIONS: &str = "Type each word as it appears. A typo resets your streak and \
costs progress. Finish a word at or above the target speed to build your streak \
and progress; fill the bar to move on to the next word. \
Enter to start, Esc to quit, F1 to see this again.";

/// Renders one session snapshot.
pub struct GameView<'a> {
    pub state: &'a SessionState,
    pub total_levels: usize,
}

impl<'a> GameView<'a> {
    pub fn new(state: &'a SessionState, total_levels: usize) -> Self {
        Self {
            state,
            total_levels,
        }
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        if state.show_instructions {
            Paragraph::new(INSTRUCTIONS)
                .style(italic_style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(centered(area, 5), buf);
            return;
        }

        if state.finished {
            let lines = vec![
                Line::from(Span::styled("all words complete", green_bold_style)),
                Line::from(Span::styled(
                    format!("{} levels, last speed {} wpm", self.total_levels, state.last_wpm),
                    italic_style,
                )),
                Line::from(Span::styled("(esc) quit", italic_style)),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(centered(area, 3), buf);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let word_spans = state
            .word
            .characters
            .iter()
            .map(|cell| {
                let style = match cell.correct {
                    Correctness::Correct => green_bold_style,
                    Correctness::Incorrect => red_bold_style,
                    Correctness::Unknown => dim_bold_style,
                };
                Span::styled(cell.target.to_string(), style)
            })
            .collect::<Vec<Span>>();
        Paragraph::new(Line::from(word_spans))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let cursor = if state.buffer.width() == 0 { "_" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(state.buffer.clone(), bold_style),
            Span::styled(cursor, dim_bold_style),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let (ratio, label, color) = if state.streak_mode {
            let target = state.target_streak.max(1);
            (
                (state.word.streak.min(target) as f64) / target as f64,
                format!("streak {}/{}", state.word.streak, target),
                Color::Cyan,
            )
        } else {
            let progress = state.word.progress;
            let color = if progress < 0 { Color::Red } else { Color::Green };
            (
                (progress.unsigned_abs().min(100) as f64) / 100.0,
                format!("progress {progress}"),
                color,
            )
        };
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(label)
            .render(chunks[3], buf);

        let mut status = vec![
            Span::styled(
                format!("word {}/{}", state.level + 1, self.total_levels),
                italic_style,
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} / {} wpm", state.last_wpm, state.target_wpm),
                if state.last_wpm >= state.target_wpm {
                    green_bold_style
                } else {
                    dim_bold_style
                },
            ),
        ];
        if !state.typo_text.is_empty() && state.buffer.is_empty() {
            status.push(Span::raw("  "));
            status.push(Span::styled(
                format!("typo: {}", state.typo_text),
                red_bold_style,
            ));
        }
        if state.caps_detected {
            status.push(Span::raw("  "));
            status.push(Span::styled(
                "caps lock?",
                Style::default().patch(bold_style).fg(Color::Yellow),
            ));
        }
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
