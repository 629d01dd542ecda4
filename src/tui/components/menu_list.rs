//! # Menu List Component
//!
//! One line per menu item: title on the left, `price • calories` on the
//! right, and a disclosure marker showing the row opens something.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::screens::{MenuRow, MenuScreen};
use crate::tui::component::Component;
use crate::tui::components::selection::ListSelection;

const HELP: &str = " ↑↓ Move  Enter Details  Esc Back ";
const HIGHLIGHT: &str = "> ";
const DISCLOSURE: &str = " ›";

pub struct MenuList<'a> {
    rows: Vec<MenuRow>,
    selection: &'a mut ListSelection,
}

impl<'a> MenuList<'a> {
    pub fn new(screen: &MenuScreen, selection: &'a mut ListSelection) -> Self {
        Self {
            rows: screen.rows(),
            selection,
        }
    }
}

/// Lay out one row so the detail label hugs the right edge of `width`.
fn row_line(row: &MenuRow, width: usize) -> Line<'static> {
    let used = row.title.width() + row.detail.width() + DISCLOSURE.width();
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(row.title, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(gap)),
        Span::styled(row.detail.clone(), Style::default().fg(Color::Gray)),
        Span::styled(DISCLOSURE, Style::default().fg(Color::DarkGray)),
    ])
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ")
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        self.selection.set_layout(inner, 1);
        self.selection.set_len(self.rows.len());

        let width = usize::from(inner.width).saturating_sub(HIGHLIGHT.width());
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(row_line(row, width)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(HIGHLIGHT);

        frame.render_stateful_widget(list, area, &mut self.selection.list_state);
    }
}
