use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::Rect,
    style::Stylize,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{Action, View};
use crate::{router::Route, store::Store};

/// Catch-all view, showing the path that didn't match.
pub struct State {
    path: String,
}

impl State {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl View for State {
    fn draw(&mut self, _: &Store, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(vec![
                vec!["404\n".red().bold()].into(),
                vec![
                    "Nothing lives at ".into(),
                    self.path.clone().bold(),
                    ".".into(),
                ]
                .into(),
                vec!["Press ".into(), "q".blue(), " to go home.".into()].into(),
            ])
            .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn handle_key(&mut self, _: &Store, key: KeyEvent) -> Result<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Ok(Action::Navigate(Route::Home)),
            _ => Ok(Action::None),
        }
    }
}
