use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{Client, Result};

/// A single course offering. Owned and assigned upstream, read-only here.
#[derive(Clone, Debug, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Get every course in the catalog.
    pub fn courses(&self) -> Result<Vec<Course>> {
        self.get("api/courses/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_course_listing() {
        let courses: Vec<Course> = serde_json::from_str(
            r#"[
                {
                    "id": 1,
                    "title": "Intro to Databases",
                    "description": "Relational models and SQL.",
                    "created_at": "2024-03-05T12:30:00Z"
                },
                {
                    "id": 7,
                    "title": "Compilers",
                    "description": "Lexing through codegen.",
                    "created_at": "2024-09-01T08:00:00.000000Z"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, 1);
        assert_eq!(courses[0].title, "Intro to Databases");
        assert_eq!(courses[1].description, "Lexing through codegen.");
        assert_eq!(courses[1].created_at.year(), 2024);
    }

    #[test]
    fn deserializes_empty_listing() {
        let courses: Vec<Course> = serde_json::from_str("[]").unwrap();
        assert!(courses.is_empty());
    }
}
