use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};
use roshambo_engine::{MatchPhase, MatchSession, RoundOutcome, Side};

use crate::ui::widgets::{color, style};

/// Renders the state of one match: round, scores, countdown headline, the
/// last resolved round, and a short event log.
#[derive(Debug)]
pub struct MatchDisplay<'a> {
    session: &'a MatchSession,
    history: &'a [String],
}

impl<'a> MatchDisplay<'a> {
    pub fn new(session: &'a MatchSession) -> Self {
        Self {
            session,
            history: &[],
        }
    }

    pub fn history(self, history: &'a [String]) -> Self {
        Self { history, ..self }
    }

    fn headline(&self) -> (String, Style) {
        match self.session.phase() {
            MatchPhase::Idle => ("Get ready".to_string(), style::DIM),
            MatchPhase::Countdown => {
                let label = self.session.countdown_label().unwrap_or("");
                let style = if label == "Shoot!" {
                    style::HIGHLIGHT
                } else {
                    style::DEFAULT
                };
                (label.to_string(), style)
            }
            MatchPhase::AwaitingCapture | MatchPhase::Resolved => {
                ("Shoot!".to_string(), style::HIGHLIGHT)
            }
            MatchPhase::MatchOver => match self.session.score().winner() {
                Some(Side::User) => ("You win the match!".to_string(), style::USER_WIN),
                Some(Side::Cpu) => ("CPU wins the match!".to_string(), style::CPU_WIN),
                None => ("Match over".to_string(), style::DIM),
            },
        }
    }
}

pub fn outcome_line(outcome: &RoundOutcome) -> String {
    let result = match outcome.scorer {
        Some(Side::User) => "you score",
        Some(Side::Cpu) => "CPU scores",
        None => "draw",
    };
    format!(
        "Round {}: {} vs {} ({result})",
        outcome.round_number, outcome.user_gesture, outcome.cpu_gesture
    )
}

impl Widget for MatchDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &MatchDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let session = self.session;
        let border_style = match session.phase() {
            MatchPhase::Idle => color::GRAY,
            MatchPhase::Countdown | MatchPhase::AwaitingCapture | MatchPhase::Resolved => {
                color::WHITE
            }
            MatchPhase::MatchOver => color::YELLOW,
        };

        let (headline, headline_style) = self.headline();
        let mut lines = vec![
            Line::from(format!(
                "Round {}  (first to {})",
                session.round_number(),
                session.win_threshold()
            ))
            .centered(),
            Line::from(format!(
                "You {} : {} CPU",
                session.user_score(),
                session.cpu_score()
            ))
            .centered(),
            Line::default(),
            Line::from(headline).style(headline_style).centered(),
            Line::default(),
        ];
        if let Some(outcome) = session.last_outcome() {
            lines.push(Line::from(outcome_line(outcome)).centered());
        }
        for entry in self.history {
            lines.push(Line::from(entry.clone()).style(style::DIM).centered());
        }

        let block = Block::bordered()
            .title(Line::from("ROSHAMBO").centered())
            .border_style(border_style)
            .style(style::DEFAULT);
        Paragraph::new(Text::from(lines)).block(block).render(area, buf);
    }
}
