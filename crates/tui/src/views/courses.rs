use anyhow::Result;
use coursebook_client::Course;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{Action, View};
use crate::{
    router::Route,
    store::{CoursesState, Store},
    styles,
    widgets::StatefulList,
};

/// Shown for any fetch failure. The log has the detail.
const FETCH_FAILED: &str = "Couldn't load courses from the catalog.";
const NO_COURSES: &str = "No courses in the catalog yet.";

#[derive(Default)]
pub struct State {
    list: StatefulList,
}

impl View for State {
    fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Courses")
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);

        match store.courses() {
            CoursesState::NotRequested | CoursesState::Loading => {
                frame.render_widget(Paragraph::new("Loading...").block(block), area);
            }
            CoursesState::Failed => {
                frame.render_widget(
                    Paragraph::new(styles::error_line(FETCH_FAILED)).block(block),
                    area,
                );
            }
            CoursesState::Loaded(courses) if courses.is_empty() => {
                frame.render_widget(Paragraph::new(NO_COURSES).block(block), area);
            }
            CoursesState::Loaded(courses) => {
                let items: Vec<ListItem> = courses.iter().map(course_row).collect();
                self.list.render_to(
                    frame,
                    area,
                    List::new(items).block(block).highlight_symbol(">>"),
                );
            }
        }
    }

    fn handle_key(&mut self, store: &Store, key: KeyEvent) -> Result<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.previous();
            }
            KeyCode::Enter | KeyCode::Char('l') => {
                if let (Some(sel), CoursesState::Loaded(courses)) =
                    (self.list.selected(), store.courses())
                {
                    if let Some(course) = courses.get(sel) {
                        return Ok(Action::Navigate(Route::Course(course.id.to_string())));
                    }
                }
            }
            _ => (),
        };

        Ok(Action::None)
    }
}

fn course_row(course: &Course) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(course.title.clone().bold()),
        Line::from(course.description.clone()),
        Line::from(format!("Created {}", course.created_at.format("%-d %B %Y")).dim()),
    ])
}
