use beanshelf_runtime::{Outcome, Tagged};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize,
    /// A fetch finished; tagged with the screen mount that asked for it
    Fetched(Tagged<Outcome>),
}
