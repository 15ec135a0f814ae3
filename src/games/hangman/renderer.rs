/// Hangman-specific renderer - pure drawing, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::words::WordSource;
use crate::games::hangman::game::{HangmanGame, Phase};

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render<W: WordSource>(f: &mut Frame, game: &HangmanGame<W>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" HANGMAN ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(20)])
            .split(chunks[1]);

        f.render_widget(
            Paragraph::new(game.diagram().unwrap_or_default())
                .block(Block::default().title(" GALLOWS ").borders(Borders::ALL)),
            body[0],
        );

        f.render_widget(
            Paragraph::new(Self::status_lines(game))
                .block(Block::default().title(" WORD ").borders(Borders::ALL)),
            body[1],
        );

        f.render_widget(
            Paragraph::new(format!(" > {}", game.input()))
                .block(Block::default().title(" GUESS ").borders(Borders::ALL)),
            chunks[2],
        );

        let help = match game.phase() {
            Phase::Guessing => "[Enter] Guess  [Backspace] Erase  [Esc] Quit",
            Phase::RoundOver => "[Y] Next word  [N] Quit",
            Phase::OutOfWords => "Press any key to quit",
        };
        f.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[3]);
    }

    fn status_lines<W: WordSource>(game: &HangmanGame<W>) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(session) = game.session() {
            lines.push(Line::from(Span::styled(
                session.render_masked(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            let remaining = session.guesses_remaining();
            let colour = if remaining <= 2 { Color::Red } else { Color::Green };
            lines.push(Line::from(vec![
                Span::raw("Guesses left: "),
                Span::styled(remaining.to_string(), Style::default().fg(colour)),
            ]));

            let guessed: String = session
                .guessed_letters()
                .iter()
                .map(|c| format!("{c} "))
                .collect();
            lines.push(Line::from(format!("Guessed: {guessed}")));
            lines.push(Line::from(""));
        }

        let feedback_style = match game.phase() {
            Phase::Guessing => Style::default(),
            _ => Style::default().add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(Span::styled(game.feedback().to_string(), feedback_style)));

        lines
    }
}
