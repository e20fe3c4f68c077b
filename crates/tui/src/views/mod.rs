use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Tabs},
};

use crate::{app::App, router::Route, store::Store};

mod about;
mod course;
mod courses;
mod home;
mod not_found;

/// An action a view can request from the shell
pub enum Action {
    None,
    Exit,
    Navigate(Route),
}

/// A unit of UI bound to a route, drawn in the content area under the tab bar.
pub trait View {
    fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect);
    fn handle_key(&mut self, store: &Store, key: KeyEvent) -> Result<Action>;
}

/// State of whichever view the current route resolves to
pub enum ActiveView {
    Home(home::State),
    Courses(courses::State),
    Course(course::State),
    About(about::State),
    NotFound(not_found::State),
}

impl ActiveView {
    pub fn for_route(route: &Route) -> ActiveView {
        match route {
            Route::Home => ActiveView::Home(Default::default()),
            Route::Courses => ActiveView::Courses(Default::default()),
            Route::Course(id) => ActiveView::Course(course::State::new(id.clone())),
            Route::About => ActiveView::About(Default::default()),
            Route::NotFound(path) => ActiveView::NotFound(not_found::State::new(path.clone())),
        }
    }

    fn as_view(&mut self) -> &mut dyn View {
        match self {
            ActiveView::Home(s) => s,
            ActiveView::Courses(s) => s,
            ActiveView::Course(s) => s,
            ActiveView::About(s) => s,
            ActiveView::NotFound(s) => s,
        }
    }
}

const TAB_TITLES: [&str; 3] = ["Home", "Courses", "About"];

fn tab_index(route: &Route) -> usize {
    match route {
        Route::Home => 0,
        // the detail view lives under the courses tab
        Route::Courses | Route::Course(_) => 1,
        Route::About => 2,
        // out of range: nothing highlighted
        Route::NotFound(_) => TAB_TITLES.len(),
    }
}

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());

        let tabs = Tabs::new(TAB_TITLES.to_vec())
            .select(tab_index(&self.route))
            .highlight_style(Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, layout[0]);

        self.view.as_view().draw(&self.store, frame, layout[1]);

        frame.render_widget(Paragraph::new(self.status_line()), layout[2]);
    }

    fn status_line(&self) -> Line<'static> {
        match &self.location_input {
            Some(input) => Line::from(vec![
                "go to: ".blue(),
                input.clone().into(),
                "_".blue(),
            ]),
            None => Line::from(vec![
                self.route.path().bold(),
                "   1/2/3 switch view, g go to path, C-c quit".dim(),
            ]),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // C-c always exits
        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c') | KeyCode::Char('C'), KeyModifiers::CONTROL)
        ) {
            self.quit();
            return Ok(());
        }

        // While the location prompt is open it swallows every other key
        if let Some(mut input) = self.location_input.take() {
            match key.code {
                KeyCode::Esc => (),
                KeyCode::Enter => self.navigate(Route::parse(&input)),
                KeyCode::Backspace => {
                    input.pop();
                    self.location_input = Some(input);
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    self.location_input = Some(input);
                }
                _ => self.location_input = Some(input),
            }
            return Ok(());
        }

        let action = match key.code {
            KeyCode::Char('1') => Action::Navigate(Route::Home),
            KeyCode::Char('2') => Action::Navigate(Route::Courses),
            KeyCode::Char('3') => Action::Navigate(Route::About),
            KeyCode::Char('g') => {
                self.location_input = Some(String::from("/"));
                Action::None
            }
            _ => self.view.as_view().handle_key(&self.store, key)?,
        };

        match action {
            Action::None => (),
            Action::Exit => self.quit(),
            Action::Navigate(route) => self.navigate(route),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_to_their_views() {
        assert!(matches!(
            ActiveView::for_route(&Route::parse("/")),
            ActiveView::Home(_)
        ));
        assert!(matches!(
            ActiveView::for_route(&Route::parse("/courses")),
            ActiveView::Courses(_)
        ));
        // the placeholder renders whether or not course 42 exists
        assert!(matches!(
            ActiveView::for_route(&Route::parse("/courses/42")),
            ActiveView::Course(_)
        ));
        assert!(matches!(
            ActiveView::for_route(&Route::parse("/about")),
            ActiveView::About(_)
        ));
        assert!(matches!(
            ActiveView::for_route(&Route::parse("/no/such/page")),
            ActiveView::NotFound(_)
        ));
    }

    #[test]
    fn detail_route_highlights_the_courses_tab() {
        assert_eq!(tab_index(&Route::Course("42".to_string())), 1);
    }

    #[test]
    fn unmatched_routes_highlight_no_tab() {
        assert!(tab_index(&Route::NotFound("/nope".to_string())) >= TAB_TITLES.len());
    }
}
