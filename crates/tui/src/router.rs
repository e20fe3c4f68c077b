/// A location within the app, named by a URL-style path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Courses,
    /// Course detail. The id segment is kept as typed; no lookup is done with it.
    Course(String),
    About,
    /// Anything that didn't match, carrying the path as typed.
    NotFound(String),
}

impl Route {
    /// Map a path to a route.
    ///
    /// Total: anything unrecognised becomes [`Route::NotFound`]. Empty
    /// segments are ignored, so `/courses/` parses like `/courses`.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.trim().split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["courses"] => Route::Courses,
            ["courses", id] => Route::Course(id.to_string()),
            ["about"] => Route::About,
            _ => Route::NotFound(path.trim().to_string()),
        }
    }

    /// The path shown in the status line.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::Course(id) => format!("/courses/{}", id),
            Route::About => "/about".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}
