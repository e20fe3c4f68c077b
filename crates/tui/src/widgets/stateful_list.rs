use ratatui::{prelude::*, widgets::*};

/// [`ListState`] plus the length of the list it was last rendered with, so
/// selection can wrap without every caller tracking item counts.
#[derive(Default)]
pub struct StatefulList {
    state: ListState,
    last_item_count: usize,
}

impl StatefulList {
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(self.last_item_count.wrapping_sub(1));
    }

    fn step(&mut self, delta: usize) {
        let n = self.last_item_count;
        if n == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => (i + delta) % n,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn render_to(&mut self, frame: &mut Frame, target: Rect, list: List) {
        self.last_item_count = list.len();
        frame.render_stateful_widget(list, target, &mut self.state);
    }
}
