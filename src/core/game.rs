/// Core interface between the terminal engine and a game
use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Requests a game can make of the engine running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Quit,
}

/// Handle passed into every game callback
pub struct Context {
    pub tx: UnboundedSender<EngineCommand>,
}

impl Context {
    pub fn quit(&self) {
        // the engine only drops its receiver once it has stopped
        let _ = self.tx.send(EngineCommand::Quit);
    }
}

/// Main game trait that all terminal games implement
pub trait Game {
    fn handle_input(&mut self, event: KeyEvent, ctx: &Context);

    fn render(&self, frame: &mut ratatui::Frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn quit_reaches_the_engine() {
        let (tx, mut rx) = unbounded_channel();
        let ctx = Context { tx };
        ctx.quit();
        assert_eq!(rx.try_recv().unwrap(), EngineCommand::Quit);
    }

    #[test]
    fn quit_after_engine_stopped_is_harmless() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        Context { tx }.quit();
    }
}
