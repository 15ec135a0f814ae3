//! Secret word supply.
//!
//! A [`WordSource`] hands out one unused word per round. The set of words
//! already played lives here, never in the session.

use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::error::AssetError;

const BUILTIN_WORDS: &[&str] = &[
    "EXAMPLE", "RUST", "ASYNC", "TOKIO", "HANGMAN", "TERMINAL", "NETWORK", "SOCKET",
    "GALLOWS", "KEYBOARD", "COMPILER", "SKY LINE", "BORROW CHECKER",
];

/// Supplies secret words, never the same one twice
pub trait WordSource {
    /// Pick a word that has not been played yet
    fn next_word(&mut self) -> Result<String, AssetError>;

    /// Number of words still available
    fn remaining(&self) -> usize;
}

/// In-memory word list with random selection
#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    used: HashSet<usize>,
    rng: StdRng,
}

impl WordList {
    /// Build from raw lines. Lines are trimmed, blanks skipped and repeats
    /// collapsed so that every remaining entry can be played exactly once.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(AssetError::EmptyWordList);
        }

        Ok(Self {
            words,
            used: HashSet::new(),
            rng: StdRng::from_os_rng(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_lines(text.lines())?;
        info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            used: HashSet::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source, mostly so tests get a fixed order
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> Result<String, AssetError> {
        let unused: Vec<usize> = (0..self.words.len())
            .filter(|i| !self.used.contains(i))
            .collect();

        if unused.is_empty() {
            return Err(AssetError::Exhausted);
        }

        let index = unused[self.rng.random_range(0..unused.len())];
        self.used.insert(index);
        debug!(index, remaining = unused.len() - 1, "picked secret word");
        Ok(self.words[index].clone())
    }

    fn remaining(&self) -> usize {
        self.words.len() - self.used.len()
    }
}
