/// Rules for a single round of hangman - no UI or word-picking concerns
use tracing::debug;

use crate::core::error::{SessionError, TerminalReason};
use crate::core::guess::Guess;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// One round: the secret word, the letters tried so far and the counters.
///
/// Sessions only move forward. Once [`GameSession::is_finished`] reports
/// true the presenter throws the session away and builds a new one for the
/// next word.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_word: String,
    normalized_length: usize,
    guessed_letters: Vec<char>,
    max_guesses: u32,
    incorrect_guesses: u32,
    total_guesses: u32,
    revealed: usize,
}

/// Case folding used for every comparison against the secret word
fn fold(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

impl GameSession {
    pub fn new(word: impl Into<String>, max_guesses: u32) -> Result<Self, SessionError> {
        if max_guesses == 0 {
            return Err(SessionError::InvalidConfiguration);
        }

        let secret_word = word.into();
        let normalized_length = secret_word.chars().filter(|c| !c.is_whitespace()).count();

        Ok(Self {
            secret_word,
            normalized_length,
            guessed_letters: Vec::new(),
            max_guesses,
            incorrect_guesses: 0,
            total_guesses: 0,
            revealed: 0,
        })
    }

    /// Guess a single letter. `Ok(true)` when it occurs in the word.
    ///
    /// The result describes this guess only; a correct final letter returns
    /// `true` and the caller checks [`GameSession::is_won`] afterwards.
    pub fn guess_letter(&mut self, letter: char) -> Result<bool, SessionError> {
        if letter.is_whitespace() {
            return Err(SessionError::EmptyInput);
        }

        let letter = fold(letter);
        if self.guessed_letters.contains(&letter) {
            return Err(SessionError::DuplicateGuess(letter));
        }
        self.ensure_in_progress()?;

        self.total_guesses += 1;
        self.guessed_letters.push(letter);

        let occurrences = self.occurrences_of(letter);
        self.revealed += occurrences;

        debug!(%letter, occurrences, revealed = self.revealed, "letter guessed");

        if occurrences > 0 {
            Ok(true)
        } else {
            self.incorrect_guesses += 1;
            Ok(false)
        }
    }

    /// Guess the whole word, ignoring case. A miss costs one guess.
    pub fn guess_word(&mut self, candidate: &str) -> Result<bool, SessionError> {
        if candidate.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.ensure_in_progress()?;

        let matches = self
            .secret_word
            .chars()
            .map(fold)
            .eq(candidate.chars().map(fold));

        debug!(candidate, matches, "word guessed");

        if matches {
            self.revealed = self.normalized_length;
            Ok(true)
        } else {
            self.incorrect_guesses += 1;
            Ok(false)
        }
    }

    /// Route a parsed presenter input to the matching guess operation
    pub fn guess(&mut self, guess: &Guess) -> Result<bool, SessionError> {
        match guess {
            Guess::Letter(letter) => self.guess_letter(*letter),
            Guess::Word(word) => self.guess_word(word),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.is_lost() {
            return Err(SessionError::NoGuessesRemaining(TerminalReason::OutOfGuesses));
        }
        if self.is_won() {
            return Err(SessionError::NoGuessesRemaining(TerminalReason::AlreadyWon));
        }
        Ok(())
    }

    fn occurrences_of(&self, letter: char) -> usize {
        self.secret_word.chars().filter(|&c| fold(c) == letter).count()
    }

    pub fn is_won(&self) -> bool {
        self.revealed == self.normalized_length
    }

    pub fn is_lost(&self) -> bool {
        self.incorrect_guesses >= self.max_guesses
    }

    pub fn is_finished(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn status(&self) -> Status {
        if self.is_won() {
            Status::Won
        } else if self.is_lost() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.max_guesses.saturating_sub(self.incorrect_guesses)
    }

    /// Masked form of the word: `"C _ T "` style, one trailing space per position
    pub fn render_masked(&self) -> String {
        let mut masked = String::with_capacity(self.secret_word.len() * 2);
        for c in self.secret_word.chars() {
            let upper = fold(c);
            if c.is_whitespace() || self.guessed_letters.contains(&upper) {
                masked.push(upper);
            } else {
                masked.push('_');
            }
            masked.push(' ');
        }
        masked
    }

    pub fn word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn total_guesses(&self) -> u32 {
        self.total_guesses
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn normalized_length(&self) -> usize {
        self.normalized_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn session(word: &str, max: u32) -> GameSession {
        GameSession::new(word, max).unwrap()
    }

    #[test]
    fn zero_guess_limit_is_rejected() {
        assert_eq!(
            GameSession::new("CAT", 0).unwrap_err(),
            SessionError::InvalidConfiguration
        );
    }

    #[test]
    fn new_session_starts_clean() {
        let s = session("CAT", 3);
        assert_eq!(s.guesses_remaining(), 3);
        assert_eq!(s.incorrect_guesses(), 0);
        assert_eq!(s.total_guesses(), 0);
        assert_eq!(s.revealed(), 0);
        assert!(s.guessed_letters().is_empty());
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn spelling_out_cat_wins() {
        let mut s = session("CAT", 3);
        assert_eq!(s.guess_letter('c'), Ok(true));
        assert_eq!(s.revealed(), 1);
        assert_eq!(s.guess_letter('a'), Ok(true));
        assert_eq!(s.revealed(), 2);
        assert!(!s.is_won());
        assert_eq!(s.guess_letter('t'), Ok(true));
        assert_eq!(s.revealed(), 3);
        assert!(s.is_won());
        assert!(s.is_finished());
        assert_eq!(s.total_guesses(), 3);
    }

    #[test]
    fn missing_out_on_dog_loses() {
        let mut s = session("DOG", 2);
        assert_eq!(s.guess_letter('x'), Ok(false));
        assert_eq!(s.incorrect_guesses(), 1);
        assert!(!s.is_lost());
        assert_eq!(s.guess_letter('y'), Ok(false));
        assert_eq!(s.incorrect_guesses(), 2);
        assert!(s.is_lost());
        assert_eq!(s.status(), Status::Lost);
        assert_eq!(s.guesses_remaining(), 0);
    }

    #[test]
    fn spaces_are_not_counted_and_stay_visible() {
        let s = session("SKY LINE", 5);
        assert_eq!(s.normalized_length(), 7);
        assert_eq!(s.render_masked(), "_ _ _   _ _ _ _ ");
    }

    #[test]
    fn mask_reveals_guessed_letters_in_uppercase() {
        let mut s = session("Banana", 5);
        s.guess_letter('a').unwrap();
        assert_eq!(s.render_masked(), "_ A _ A _ A ");
        assert_eq!(s.revealed(), 3);
    }

    #[rstest]
    #[case(' ')]
    #[case('\t')]
    fn blank_letter_is_empty_input(#[case] letter: char) {
        let mut s = session("CAT", 3);
        assert_eq!(s.guess_letter(letter), Err(SessionError::EmptyInput));
        assert_eq!(s.total_guesses(), 0);
        assert_eq!(s.incorrect_guesses(), 0);
        assert_eq!(s.revealed(), 0);
        assert!(s.guessed_letters().is_empty());
    }

    #[rstest]
    #[case('c', 'C')]
    #[case('x', 'X')]
    #[case('X', 'x')]
    fn second_guess_of_a_letter_is_a_duplicate(#[case] first: char, #[case] second: char) {
        let mut s = session("CAT", 3);
        s.guess_letter(first).unwrap();
        let before = s.clone();

        assert_eq!(
            s.guess_letter(second),
            Err(SessionError::DuplicateGuess(first.to_ascii_uppercase()))
        );
        assert_eq!(s.total_guesses(), before.total_guesses());
        assert_eq!(s.incorrect_guesses(), before.incorrect_guesses());
        assert_eq!(s.guessed_letters(), before.guessed_letters());
    }

    #[test]
    fn duplicate_is_reported_before_terminal_state() {
        let mut s = session("DOG", 1);
        s.guess_letter('x').unwrap();
        assert_eq!(s.guess_letter('x'), Err(SessionError::DuplicateGuess('X')));
        assert_eq!(
            s.guess_letter('d'),
            Err(SessionError::NoGuessesRemaining(TerminalReason::OutOfGuesses))
        );
        assert_eq!(s.guessed_letters(), ['X']);
        assert_eq!(s.incorrect_guesses(), 1);
        assert_eq!(s.total_guesses(), 1);
        assert_eq!(s.revealed(), 0);
    }

    #[test]
    fn won_session_rejects_letters() {
        let mut s = session("AB", 3);
        s.guess_letter('a').unwrap();
        s.guess_letter('b').unwrap();
        assert_eq!(
            s.guess_letter('c'),
            Err(SessionError::NoGuessesRemaining(TerminalReason::AlreadyWon))
        );
        assert_eq!(s.total_guesses(), 2);
        assert_eq!(s.guessed_letters(), ['A', 'B']);
        assert_eq!(s.incorrect_guesses(), 0);
        assert_eq!(s.revealed(), 2);
    }

    #[test]
    fn repeated_letters_count_every_occurrence() {
        let mut s = session("Letter", 3);
        assert_eq!(s.guess_letter('T'), Ok(true));
        assert_eq!(s.revealed(), 2);
        assert_eq!(s.guess_letter('e'), Ok(true));
        assert_eq!(s.revealed(), 4);
    }

    #[test]
    fn each_miss_costs_exactly_one_guess() {
        let mut s = session("CAT", 4);
        s.guess_letter('z').unwrap();
        assert_eq!(s.guesses_remaining(), 3);
        s.guess_letter('c').unwrap();
        assert_eq!(s.guesses_remaining(), 3);
        s.guess_word("cow").unwrap();
        assert_eq!(s.guesses_remaining(), 2);
    }

    #[rstest]
    #[case("cat")]
    #[case("CAT")]
    #[case("cAt")]
    fn correct_word_wins_ignoring_case(#[case] candidate: &str) {
        let mut s = session("Cat", 3);
        assert_eq!(s.guess_word(candidate), Ok(true));
        assert!(s.is_won());
        assert_eq!(s.revealed(), 3);
        assert_eq!(s.total_guesses(), 0);
    }

    #[test]
    fn correct_word_with_space_wins() {
        let mut s = session("sky line", 3);
        s.guess_letter('s').unwrap();
        assert_eq!(s.guess_word("SKY LINE"), Ok(true));
        assert_eq!(s.revealed(), 7);
        assert!(s.is_won());
    }

    #[test]
    fn wrong_word_counts_as_incorrect_but_not_as_total() {
        let mut s = session("CAT", 3);
        assert_eq!(s.guess_word("CATS"), Ok(false));
        assert_eq!(s.incorrect_guesses(), 1);
        assert_eq!(s.total_guesses(), 0);
        assert!(s.guessed_letters().is_empty());
    }

    #[test]
    fn empty_word_is_empty_input() {
        let mut s = session("CAT", 3);
        assert_eq!(s.guess_word(""), Err(SessionError::EmptyInput));
        assert_eq!(s.incorrect_guesses(), 0);
    }

    #[test]
    fn word_guess_after_the_round_is_over_is_rejected() {
        let mut won = session("CAT", 3);
        won.guess_word("cat").unwrap();
        assert_eq!(
            won.guess_word("dog"),
            Err(SessionError::NoGuessesRemaining(TerminalReason::AlreadyWon))
        );
        assert_eq!(won.incorrect_guesses(), 0);
        assert!(won.guessed_letters().is_empty());

        let mut lost = session("CAT", 1);
        lost.guess_word("dog").unwrap();
        assert_eq!(
            lost.guess_word("cat"),
            Err(SessionError::NoGuessesRemaining(TerminalReason::OutOfGuesses))
        );
        assert!(!lost.is_won());
        assert_eq!(lost.incorrect_guesses(), 1);
        assert!(lost.guessed_letters().is_empty());
    }

    #[test]
    fn blank_word_is_won_from_the_start() {
        let s = session("   ", 3);
        assert_eq!(s.normalized_length(), 0);
        assert!(s.is_won());
        assert_eq!(s.render_masked(), "      ");
    }

    #[test]
    fn guess_routes_by_kind() {
        let mut s = session("CAT", 3);
        assert_eq!(s.guess(&Guess::Letter('a')), Ok(true));
        assert_eq!(s.guess(&Guess::Word("cat".into())), Ok(true));
        assert!(s.is_won());
    }
}
