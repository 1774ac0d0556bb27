mod animate;
mod app;
mod app_event;
mod components;
mod tooltip;
mod ui;
mod view_model;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{ActiveView, AppState, DatasetState};
use app_event::AppEvent;

const TICK_RATE: Duration = Duration::from_millis(120);

pub fn run(data_path: PathBuf, geometry_url: String) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        std::process::exit(0);
    })?;

    let (tx, rx) = mpsc::channel();
    spawn_dataset_load(tx.clone(), data_path);

    let mut state = AppState::new();
    let mut last_tick = Instant::now();

    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, &mut state))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_default();

        if event::poll(timeout)? {
            let previous_view = state.view;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => state.handle_key(key),
                Event::Mouse(mouse) => state.handle_mouse(mouse),
                _ => {}
            }

            // Entering the map view is the lazy-load trigger. The cache
            // refuses re-entry while loading or once loaded, and permits a
            // retry after failure.
            if state.view == ActiveView::Map
                && previous_view != ActiveView::Map
                && state.geometry.request_load()
            {
                spawn_geometry_fetch(tx.clone(), geometry_url.clone());
            }
        }

        while let Ok(app_event) = rx.try_recv() {
            match app_event {
                AppEvent::DatasetLoaded(Ok(store)) => {
                    state.dataset = DatasetState::Ready(store);
                }
                AppEvent::DatasetLoaded(Err(err)) => {
                    state.dataset = DatasetState::Failed(err.to_string());
                }
                AppEvent::GeometryLoaded(result) => state.geometry.complete(result),
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            state.on_tick();
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn spawn_dataset_load(tx: Sender<AppEvent>, path: PathBuf) {
    thread::spawn(move || {
        let result = demoscope_runtime::load_dataset(&path);
        // The receiver may be gone if the session ended; a late result is
        // simply dropped.
        let _ = tx.send(AppEvent::DatasetLoaded(result));
    });
}

fn spawn_geometry_fetch(tx: Sender<AppEvent>, url: String) {
    thread::spawn(move || {
        let result = demoscope_runtime::fetch_world_geometry(&url);
        let _ = tx.send(AppEvent::GeometryLoaded(result));
    });
}
