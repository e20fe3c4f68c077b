use anyhow::Result;
use crossterm::event::KeyEvent;
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
        frame.render_widget(
            Paragraph::new(vec![
                vec!["About coursebook\n".blue().bold()].into(),
                "A terminal front-end for the coursebook course catalog.".into(),
                "Courses are fetched live from the catalog API each time you open the list; nothing is stored locally.".into(),
            ])
            .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn handle_key(&mut self, _: &Store, _: KeyEvent) -> Result<Action> {
        Ok(Action::None)
    }
}
