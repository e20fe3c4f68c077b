use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::Rect,
    style::Stylize,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{Action, View};
use crate::store::Store;

#[derive(Debug, Default)]
pub struct State;

impl View for State {
    fn draw(&mut self, _: &Store, frame: &mut Frame, area: Rect) {
        frame.render_widget(welcome_message(), area);
    }

    fn handle_key(&mut self, _: &Store, key: KeyEvent) -> Result<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Ok(Action::Exit),
            _ => Ok(Action::None),
        }
    }
}

fn welcome_message() -> Paragraph<'static> {
    Paragraph::new(vec![
        vec!["Welcome to coursebook!\n".blue().bold()].into(),
        vec![
            "Press ".into(),
            "2".blue(),
            " to browse the course catalog, or ".into(),
            "3".blue(),
            " to read about this app.".into(),
        ]
        .into(),
        vec![
            "In the catalog, use ".into(),
            "j/k or ↓/↑".blue(),
            " to move and ".into(),
            "Enter".blue(),
            " to open a course.".into(),
        ]
        .into(),
        vec![
            "Press ".into(),
            "g".blue(),
            " to type a path, like a browser address bar: try ".into(),
            "/courses".blue(),
            ".".into(),
        ]
        .into(),
        vec![
            "Use ".into(),
            "Ctrl-C".blue(),
            " (or ".into(),
            "q".blue(),
            " from here) to quit.".into(),
        ]
        .into(),
    ])
    .wrap(Wrap { trim: false })
}
