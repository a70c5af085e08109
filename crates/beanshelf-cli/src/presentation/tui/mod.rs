mod app;
mod tui_event;
mod ui;

pub use app::{GRID_COLUMNS, InputMode, TuiApp};
pub use tui_event::TuiEvent;

use anyhow::Result;
use beanshelf_providers::{SourceFetcher, Transport};
use beanshelf_runtime::{Browser, Effect, Navigation, Outcome, Tagged, perform};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::debug;

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive browser starting at `start` until the user quits.
pub async fn run<T: Transport + 'static>(fetcher: SourceFetcher<T>, start: Navigation) -> Result<()> {
    let fetcher = Arc::new(fetcher);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (browser, effects) = Browser::open(start);
    let mut app = TuiApp::new(browser);
    spawn_effects(&fetcher, &tx, effects);

    let mut guard = TerminalGuard::enter()?;
    let mut events = EventStream::new();

    while !app.should_quit {
        guard.terminal.draw(|f| ui::draw(f, &app))?;

        let event = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => TuiEvent::Input(key),
                Some(Ok(Event::Resize(_, _))) => TuiEvent::Resize,
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(outcome) = rx.recv() => TuiEvent::Fetched(outcome),
        };

        let effects = app.handle(event);
        spawn_effects(&fetcher, &tx, effects);
    }

    // Fetches still in flight resolve into a closed session
    app.browser.close();
    Ok(())
}

fn spawn_effects<T: Transport + 'static>(
    fetcher: &Arc<SourceFetcher<T>>,
    tx: &UnboundedSender<Tagged<Outcome>>,
    effects: Vec<Tagged<Effect>>,
) {
    for effect in effects {
        let fetcher = Arc::clone(fetcher);
        let tx = tx.clone();
        debug!(effect = ?effect.value, generation = effect.mount.generation(), "spawning fetch");
        tokio::spawn(async move {
            let mount = effect.mount;
            let outcome = perform(&fetcher, effect.value).await;
            // Receiver is gone once the browser quits
            let _ = tx.send(Tagged::new(mount, outcome));
        });
    }
}
