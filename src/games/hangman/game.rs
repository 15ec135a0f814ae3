use crossterm::event::{KeyCode, KeyEvent};
use tracing::{info, warn};

use crate::core::diagrams::Diagrams;
use crate::core::error::SessionError;
use crate::core::game::{Context, Game};
use crate::core::guess::Guess;
use crate::core::session::{GameSession, Status};
use crate::core::words::WordSource;
use crate::games::hangman::messages;
use crate::games::hangman::renderer::HangmanRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Guessing,
    RoundOver,
    OutOfWords,
}

/// Rounds won and lost since the program started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub won: u32,
    pub lost: u32,
}

/// Full-screen hangman: owns the word source and one session per round
pub struct HangmanGame<W: WordSource> {
    words: W,
    diagrams: Diagrams,
    max_guesses: u32,
    session: Option<GameSession>,
    input: String,
    feedback: String,
    phase: Phase,
    tally: Tally,
}

impl<W: WordSource> HangmanGame<W> {
    pub fn new(words: W, diagrams: Diagrams, max_guesses: u32) -> Result<Self, SessionError> {
        let mut game = Self {
            words,
            diagrams,
            max_guesses,
            session: None,
            input: String::new(),
            feedback: String::new(),
            phase: Phase::OutOfWords,
            tally: Tally::default(),
        };
        game.start_round()?;
        Ok(game)
    }

    fn start_round(&mut self) -> Result<(), SessionError> {
        self.input.clear();
        match self.words.next_word() {
            Ok(word) => {
                self.session = Some(GameSession::new(word, self.max_guesses)?);
                self.phase = Phase::Guessing;
                self.feedback = messages::GUESS_PROMPT.trim_end().to_string();
                info!(max_guesses = self.max_guesses, "round started");
            }
            Err(err) => {
                info!(%err, "no word for a new round");
                self.session = None;
                self.phase = Phase::OutOfWords;
                self.feedback = messages::NO_WORDS.to_string();
            }
        }
        Ok(())
    }

    fn submit(&mut self) {
        let guess = Guess::parse(&self.input);
        self.input.clear();

        let Some(session) = self.session.as_mut() else {
            return;
        };

        self.feedback = match session.guess(&guess) {
            Ok(true) => messages::CORRECT.to_string(),
            Ok(false) => messages::INCORRECT.to_string(),
            Err(err) => messages::rejection(&err),
        };

        match session.status() {
            Status::InProgress => {}
            Status::Won => {
                self.tally.won += 1;
                self.phase = Phase::RoundOver;
                self.feedback = format!("{}{}", messages::YOU_WON, session.word());
                info!(word = session.word(), "round won");
            }
            Status::Lost => {
                self.tally.lost += 1;
                self.phase = Phase::RoundOver;
                self.feedback = format!("{}{}", messages::YOU_LOST, session.word());
                info!(word = session.word(), "round lost");
            }
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Drawing for the current number of misses, if any
    pub fn diagram(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| self.diagrams.for_incorrect(s.incorrect_guesses()))
    }
}

impl<W: WordSource> Game for HangmanGame<W> {
    fn handle_input(&mut self, event: KeyEvent, ctx: &Context) {
        match self.phase {
            Phase::Guessing => match event.code {
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Phase::RoundOver => match event.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    if let Err(err) = self.start_round() {
                        warn!(%err, "could not start the next round");
                        ctx.quit();
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') => ctx.quit(),
                _ => {}
            },
            Phase::OutOfWords => match event.code {
                KeyCode::Char(_) | KeyCode::Enter => ctx.quit(),
                _ => {}
            },
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, self);
    }
}
