use std::path::PathBuf;
use thiserror::Error;

use crate::core::diagrams::DIAGRAM_HEIGHT;

/// Why a terminal session refused another guess
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    #[error("there are no guesses left")]
    OutOfGuesses,
    #[error("every letter in the word is already guessed")]
    AlreadyWon,
}

/// Rejections signaled by a `GameSession`.
///
/// None of these are fatal: the presenter shows a message and asks again.
/// A rejected guess never changes the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("a round needs at least one allowed incorrect guess")]
    InvalidConfiguration,

    #[error("nothing was entered")]
    EmptyInput,

    #[error("letter '{0}' was already guessed")]
    DuplicateGuess(char),

    #[error("{0}")]
    NoGuessesRemaining(TerminalReason),
}

/// Failures of the word list and diagram collaborators
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the word list contains no words")]
    EmptyWordList,

    #[error("every word has already been played")]
    Exhausted,

    #[error("diagram {index} has {lines} lines, expected {}", DIAGRAM_HEIGHT)]
    TruncatedDiagram { index: usize, lines: usize },
}
