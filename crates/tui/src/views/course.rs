use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Action, View};
use crate::{router::Route, store::Store};

/// Placeholder detail view. Holds the id from the route but looks nothing up.
pub struct State {
    course_id: String,
}

impl State {
    pub fn new(course_id: String) -> Self {
        Self { course_id }
    }
}

impl View for State {
    fn draw(&mut self, _: &Store, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Course {}", self.course_id))
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);

        frame.render_widget(
            Paragraph::new(vec![
                "Course details aren't available yet.".into(),
                vec![
                    "Press ".into(),
                    "q".blue(),
                    " to go back to the catalog.".into(),
                ]
                .into(),
            ])
            .wrap(Wrap { trim: false })
            .block(block),
            area,
        );
    }

    fn handle_key(&mut self, _: &Store, key: KeyEvent) -> Result<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Ok(Action::Navigate(Route::Courses)),
            _ => Ok(Action::None),
        }
    }
}
