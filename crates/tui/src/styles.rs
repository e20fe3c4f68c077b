use ratatui::{
    prelude::Text,
    style::{Color, Style},
};

/// Red, for the static failure lines surfaced to the user.
pub fn error_line(msg: &'static str) -> Text<'static> {
    Text::styled(msg, Style::new().fg(Color::Red))
}
