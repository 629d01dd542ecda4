//! # TitleBar Component
//!
//! Top status bar: app name, breadcrumb trail of the navigation stack, and
//! the status message set by the last navigation.
//!
//! ```text
//! Eatery | Restaurants › Menu › Details | Mint
//! ```
//!
//! Purely presentational. All data arrives as props, so tests construct it
//! directly and check the rendered text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::route::ScreenId;
use crate::tui::component::Component;

pub struct TitleBar {
    /// Screens from root to top.
    pub trail: Vec<ScreenId>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(trail: Vec<ScreenId>, status_message: String) -> Self {
        Self {
            trail,
            status_message,
        }
    }

    fn breadcrumbs(&self) -> String {
        self.trail
            .iter()
            .map(|screen| screen.title())
            .collect::<Vec<_>>()
            .join(" › ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Eatery", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.breadcrumbs()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
