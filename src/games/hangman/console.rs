//! Line-based hangman for plain terminals and pipes.
//!
//! Reads one guess per line and writes feedback as text. Generic over the
//! reader and writer so whole games can be scripted.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use tracing::{info, warn};

use crate::core::diagrams::Diagrams;
use crate::core::error::AssetError;
use crate::core::guess::Guess;
use crate::core::session::{GameSession, Status};
use crate::core::words::WordSource;
use crate::games::hangman::game::Tally;
use crate::games::hangman::messages;

pub struct ConsolePresenter<R, W, S> {
    input: R,
    output: W,
    words: S,
    diagrams: Diagrams,
    max_guesses: u32,
    tally: Tally,
}

/// How a round ended from the presenter's point of view
enum RoundEnd {
    Finished,
    InputClosed,
    OutOfWords,
}

impl<R: BufRead, W: Write, S: WordSource> ConsolePresenter<R, W, S> {
    pub fn new(input: R, output: W, words: S, diagrams: Diagrams, max_guesses: u32) -> Self {
        Self {
            input,
            output,
            words,
            diagrams,
            max_guesses,
            tally: Tally::default(),
        }
    }

    /// Play rounds until the player declines, input ends or words run out
    pub fn run(&mut self) -> Result<Tally> {
        writeln!(self.output, "{}", messages::WELCOME)?;

        loop {
            if self.words.remaining() == 0 {
                writeln!(self.output, "{}", messages::NO_WORDS)?;
                break;
            }

            match self.play_round()? {
                RoundEnd::Finished => {}
                RoundEnd::InputClosed | RoundEnd::OutOfWords => break,
            }

            writeln!(self.output, "{}", messages::PLAY_AGAIN)?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        self.output.flush()?;
        Ok(self.tally)
    }

    fn play_round(&mut self) -> Result<RoundEnd> {
        let word = match self.words.next_word() {
            Ok(word) => word,
            Err(AssetError::Exhausted) => {
                writeln!(self.output, "{}", messages::NO_WORDS)?;
                return Ok(RoundEnd::OutOfWords);
            }
            Err(err) => return Err(err).context("picking a word"),
        };
        let mut session =
            GameSession::new(word, self.max_guesses).context("starting a round")?;
        info!(max_guesses = self.max_guesses, "console round started");

        while !session.is_finished() {
            writeln!(self.output, "{}{}", messages::GUESS_PROMPT, session.render_masked())?;

            let Some(line) = self.read_line()? else {
                warn!("input closed mid-round");
                return Ok(RoundEnd::InputClosed);
            };

            match session.guess(&Guess::parse(&line)) {
                Ok(true) => writeln!(self.output, "{}", messages::CORRECT)?,
                Ok(false) => {
                    writeln!(self.output, "{}", messages::INCORRECT)?;
                    let misses = session.incorrect_guesses();
                    if let Some(drawing) = self.diagrams.for_incorrect(misses) {
                        write!(self.output, "{drawing}")?;
                    }
                }
                Err(err) => writeln!(self.output, "{}", messages::rejection(&err))?,
            }
        }

        match session.status() {
            Status::Won => {
                self.tally.won += 1;
                writeln!(self.output, "{}{}", messages::YOU_WON, session.word())?;
            }
            Status::Lost => {
                self.tally.lost += 1;
                writeln!(self.output, "{}{}", messages::YOU_LOST, session.word())?;
            }
            Status::InProgress => {}
        }
        Ok(RoundEnd::Finished)
    }

    /// `None` once the input is exhausted
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
