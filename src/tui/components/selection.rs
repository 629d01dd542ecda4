//! # List Selection
//!
//! Cursor and hit-test state shared by the restaurant and menu lists.
//!
//! Follows the persistent state + transient wrapper pattern: one
//! `ListSelection` per navigation stack entry lives in `TuiState`, so going
//! back restores the cursor where it was. The list components borrow it for
//! the frame they render.

use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Emitted when the user activates a row (Enter or click).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActivated(pub usize);

#[derive(Debug, Clone, Default)]
pub struct ListSelection {
    pub list_state: ListState,
    /// Number of rows in the list this state belongs to.
    len: usize,
    /// Where the rows were last drawn (inside borders), for hit testing.
    rows_area: Rect,
    /// Terminal lines per row.
    row_height: u16,
}

impl ListSelection {
    pub fn new(len: usize) -> Self {
        let mut selection = Self::default();
        selection.set_len(len);
        selection
    }

    /// Update the row count, keeping the cursor on a valid row.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Record where the rows were drawn this frame.
    pub fn set_layout(&mut self, rows_area: Rect, row_height: u16) {
        self.rows_area = rows_area;
        self.row_height = row_height.max(1);
    }

    fn page_size(&self) -> usize {
        usize::from((self.rows_area.height / self.row_height.max(1)).max(1))
    }

    fn move_to(&mut self, index: usize) {
        if self.len > 0 {
            self.list_state.select(Some(index.min(self.len - 1)));
        }
    }

    /// Row under a terminal position, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.rows_area.contains(Position::new(column, row)) {
            return None;
        }
        let line = usize::from((row - self.rows_area.y) / self.row_height.max(1));
        let index = self.list_state.offset() + line;
        (index < self.len).then_some(index)
    }
}

impl EventHandler for ListSelection {
    type Event = RowActivated;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RowActivated> {
        let current = self.selected().unwrap_or(0);
        match *event {
            TuiEvent::CursorUp => self.move_to(current.saturating_sub(1)),
            TuiEvent::CursorDown => self.move_to(current + 1),
            TuiEvent::PageUp => self.move_to(current.saturating_sub(self.page_size())),
            TuiEvent::PageDown => self.move_to(current + self.page_size()),
            TuiEvent::Home => self.move_to(0),
            TuiEvent::End => self.move_to(self.len.saturating_sub(1)),
            TuiEvent::Select => return self.selected().map(RowActivated),
            TuiEvent::MouseClick(column, row) => {
                let index = self.row_at(column, row)?;
                self.list_state.select(Some(index));
                return Some(RowActivated(index));
            }
            TuiEvent::Quit | TuiEvent::Back | TuiEvent::Resize => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_first_row() {
        assert_eq!(ListSelection::new(3).selected(), Some(0));
        assert_eq!(ListSelection::new(0).selected(), None);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut selection = ListSelection::new(3);
        selection.handle_event(&TuiEvent::CursorUp);
        assert_eq!(selection.selected(), Some(0));
        for _ in 0..5 {
            selection.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(selection.selected(), Some(2));
        selection.handle_event(&TuiEvent::Home);
        assert_eq!(selection.selected(), Some(0));
        selection.handle_event(&TuiEvent::End);
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn test_select_emits_current_row() {
        let mut selection = ListSelection::new(4);
        selection.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            selection.handle_event(&TuiEvent::Select),
            Some(RowActivated(1))
        );
    }

    #[test]
    fn test_select_on_empty_list() {
        let mut selection = ListSelection::new(0);
        assert_eq!(selection.handle_event(&TuiEvent::Select), None);
    }

    #[test]
    fn test_set_len_clamps_existing_cursor() {
        let mut selection = ListSelection::new(5);
        selection.handle_event(&TuiEvent::End);
        selection.set_len(2);
        assert_eq!(selection.selected(), Some(1));
    }

    #[test]
    fn test_click_hits_row_under_pointer() {
        let mut selection = ListSelection::new(3);
        selection.set_layout(Rect::new(1, 2, 40, 12), 4);

        assert_eq!(
            selection.handle_event(&TuiEvent::MouseClick(5, 7)),
            Some(RowActivated(1))
        );
        assert_eq!(selection.selected(), Some(1));

        // Outside the rows area
        assert_eq!(selection.handle_event(&TuiEvent::MouseClick(5, 0)), None);
    }

    #[test]
    fn test_click_below_last_row() {
        let mut selection = ListSelection::new(2);
        selection.set_layout(Rect::new(0, 0, 40, 20), 4);
        assert_eq!(selection.row_at(3, 9), None);
    }

    #[test]
    fn test_page_down_moves_by_visible_rows() {
        let mut selection = ListSelection::new(10);
        selection.set_layout(Rect::new(0, 0, 40, 6), 2);
        selection.handle_event(&TuiEvent::PageDown);
        assert_eq!(selection.selected(), Some(3));
    }
}
