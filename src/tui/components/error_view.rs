//! Error state for a screen that could not be entered.
//!
//! Shown in place of the screen body so a missing or mismatched payload
//! never produces a half-rendered list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::screens::ScreenError;
use crate::tui::component::Component;

pub struct ErrorView {
    pub error: ScreenError,
}

impl ErrorView {
    pub fn new(error: ScreenError) -> Self {
        Self { error }
    }
}

impl Component for ErrorView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let red = Style::default().fg(Color::Red);
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("Cannot open {}", self.error.screen()),
                red.add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.error.to_string()),
            Line::default(),
            Line::from(Span::styled(
                "Press Esc to go back.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title(" Error ").border_style(red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::ScreenId;
    use crate::test_support::render_text;

    #[test]
    fn test_missing_parameter_message() {
        let mut view = ErrorView::new(ScreenError::MissingParameter {
            screen: ScreenId::Menu,
        });
        let text = render_text(80, 10, |f| view.render(f, f.area()));

        assert!(text.contains("Error"));
        assert!(text.contains("Cannot open Menu"));
        assert!(text.contains("the Menu screen was opened without its required parameters"));
        assert!(text.contains("Press Esc to go back."));
    }

    #[test]
    fn test_mismatched_parameter_names_both_screens() {
        let mut view = ErrorView::new(ScreenError::MismatchedParameter {
            screen: ScreenId::Details,
            found: ScreenId::Menu,
        });
        let text = render_text(100, 10, |f| view.render(f, f.area()));

        assert!(text.contains("Cannot open Details"));
        assert!(text.contains("meant for the Menu screen"));
    }
}
