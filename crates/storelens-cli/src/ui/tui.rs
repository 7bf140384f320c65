//! Terminal session for the interactive dashboard.
//!
//! The event loop is synchronous; fetches run on the tokio runtime and send
//! their results back over an mpsc channel tagged with the generation they
//! were spawned under. `App::apply` drops anything stale.

use crate::app::{App, AppEvent, FetchCommand};
use crate::views;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use storelens_client::CatalogClient;
use tokio::runtime::Runtime;

const TICK: Duration = Duration::from_millis(100);

/// Raw-mode/alternate-screen guard, restored on drop so panics and early
/// returns leave the user's shell intact.
struct TerminalSession;

impl TerminalSession {
    fn new() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn run(runtime: &Runtime, client: CatalogClient) -> Result<()> {
    let client = Arc::new(client);
    let (tx, rx) = std::sync::mpsc::channel();

    let (mut app, initial) = App::new();
    dispatch(runtime, &client, &tx, initial);

    let _session = TerminalSession::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_loop(&mut app, &mut terminal, runtime, &client, &tx, &rx)
}

fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Runtime,
    client: &Arc<CatalogClient>,
    tx: &Sender<AppEvent>,
    rx: &Receiver<AppEvent>,
) -> Result<()> {
    loop {
        while let Ok(app_event) = rx.try_recv() {
            app.apply(app_event);
        }

        terminal.draw(|frame| views::tui::render(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = app.handle_key(key) {
                        dispatch(runtime, client, tx, command);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn dispatch(
    runtime: &Runtime,
    client: &Arc<CatalogClient>,
    tx: &Sender<AppEvent>,
    command: FetchCommand,
) {
    match command {
        FetchCommand::FetchAll { generation } => {
            let client = client.clone();
            let tx = tx.clone();
            runtime.spawn(async move {
                let result = client.fetch_all().await.map_err(|e| e.to_string());
                // Receiver gone means the loop exited; nothing to do.
                let _ = tx.send(AppEvent::CatalogLoaded { generation, result });
            });
        }
        FetchCommand::FetchOne { generation, id } => {
            let client = client.clone();
            let tx = tx.clone();
            runtime.spawn(async move {
                let result = client.fetch_one(&id).await.map_err(|e| e.to_string());
                let _ = tx.send(AppEvent::ProductLoaded { generation, result });
            });
        }
    }
}
