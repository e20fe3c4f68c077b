use crate::{router::Route, store::Store, views::ActiveView};

/// Holds all application state
pub struct App {
    pub running: bool,
    pub route: Route,
    pub view: ActiveView,
    pub store: Store,
    /// Path being typed into the location prompt, if it's open.
    pub location_input: Option<String>,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            running: true,
            route: Route::Home,
            view: ActiveView::for_route(&Route::Home),
            store,
            location_input: None,
        }
    }

    /// Swap the active view for the given route's.
    ///
    /// Entering the course list starts its one fetch; leaving it discards
    /// the snapshot, so coming back fetches afresh. Navigating to the
    /// route we're already on does nothing.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }

        if matches!(self.route, Route::Courses) {
            self.store.discard_courses();
        }
        if matches!(route, Route::Courses) {
            self.store.request_courses();
        }

        self.view = ActiveView::for_route(&route);
        self.route = route;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn clean_shutdown(self) {
        self.store.request_quit();
    }
}
