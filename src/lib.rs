pub mod core {
	pub mod diagrams;
	pub mod engine;
	pub mod error;
	pub mod game;
	pub mod guess;
	pub mod session;
	pub mod words;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::error::{AssetError, SessionError, TerminalReason};
pub use crate::core::game::{Context, Game};
pub use crate::core::guess::Guess;
pub use crate::core::session::{GameSession, Status};
pub use crate::core::words::{WordList, WordSource};
