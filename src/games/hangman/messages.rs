//! Player-facing text shared by the console and terminal presenters.

use crate::core::error::{SessionError, TerminalReason};

pub const WELCOME: &str = "Welcome to hangman.\n - Type a single letter to guess a letter, or type a word to try to guess the whole thing.\n";
pub const PLAY_AGAIN: &str = "Would you like to play another game? (y/n)";
pub const CORRECT: &str = "Correct guess!";
pub const INCORRECT: &str = "Incorrect guess.";
pub const GUESS_PROMPT: &str = "Guess the following word: ";
pub const YOU_WON: &str = "You won. You spelled out: ";
pub const YOU_LOST: &str = "You lost. The word was actually: ";
pub const NO_WORDS: &str = "You have run out of words to play.";

/// Corrective message for a rejected guess
pub fn rejection(err: &SessionError) -> String {
    match err {
        SessionError::EmptyInput => "Please enter something.".to_string(),
        SessionError::DuplicateGuess(letter) => {
            format!("The letter '{letter}' was already guessed, try again.")
        }
        SessionError::NoGuessesRemaining(TerminalReason::OutOfGuesses) => {
            "There are no guesses left.".to_string()
        }
        SessionError::NoGuessesRemaining(TerminalReason::AlreadyWon) => {
            "The word is already complete.".to_string()
        }
        SessionError::InvalidConfiguration => err.to_string(),
    }
}
