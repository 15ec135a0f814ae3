/// A raw line of player input, classified the way every presenter routes it:
/// exactly one character is a letter guess, anything else is a word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    /// Surrounding whitespace is dropped, so a lone space becomes an empty
    /// word and is rejected by the session as empty input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Guess::Letter(c),
            _ => Guess::Word(line.to_string()),
        }
    }
}
