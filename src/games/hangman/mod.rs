/// Hangman presenters - the rules live in `core::session`
pub mod console;
pub mod game;
pub mod messages;
pub mod renderer;

pub use console::ConsolePresenter;
pub use game::{HangmanGame, Phase, Tally};
pub use renderer::HangmanRenderer;
