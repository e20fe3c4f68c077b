use anyhow::Result;
use app::App;
use coursebook_client::Client;
use event::{Event, EventBus};
use ratatui::prelude::*;
use simplelog::{LevelFilter, WriteLogger};
use std::{fs::File, io};

use crate::store::{Store, StoreWorker};

mod app;
mod config;
mod event;
mod router;
mod store;
mod styles;
mod tui;
mod views;
mod widgets;

fn main() -> Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        File::create("coursebook.log")?,
    )?;

    let config = config::Config::load_or_default();
    let client = Client::new(&config.api_base)?;

    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;

    let events = EventBus::new();
    events.spawn_terminal_listener();

    let mut app = App::new(Store::new(StoreWorker::spawn_on(&events, client)));

    tui::init(&mut terminal)?;

    while app.running {
        tui::draw(&mut terminal, &mut app)?;
        match events.next()? {
            Event::Key(key_event) => app.handle_key(key_event)?,
            Event::Resize(_, _) => {}
            Event::Store(e) => app.store.event(e),
        }
    }

    app.clean_shutdown();
    tui::exit(&mut terminal)?;

    Ok(())
}
