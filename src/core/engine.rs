use crate::core::game::{Context, EngineCommand, Game};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Drive the game until it asks to quit or the player presses Esc.
    /// Hands the game back so the caller can report on it.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let (outbox_tx, mut outbox_rx) = tokio::sync::mpsc::unbounded_channel::<EngineCommand>();
        let ctx = Context { tx: outbox_tx };

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if crossterm::event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = crossterm::event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Esc {
                            debug!("escape pressed, leaving engine");
                            break;
                        }
                        self.game.handle_input(key, &ctx);
                    }
                }
            }

            tokio::select! {
                Some(command) = outbox_rx.recv() => match command {
                    EngineCommand::Quit => {
                        debug!("game requested quit");
                        break;
                    }
                },

                // wake up periodically so key presses keep getting polled
                _ = tokio::time::sleep(IDLE_POLL) => {}
            }
        }

        Ok(self.game)
    }
}
