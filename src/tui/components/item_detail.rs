//! # Item Detail Component
//!
//! Full description of one menu item in a scrollable view:
//!
//! ```text
//!        ▣ unsplash_mintIceCream.jpg
//!
//!                  Mint
//!
//!  Fresh mint gelato with chocolate chips.
//!
//!              Price: £3.50
//!          Calories: 250 kcal
//! ```
//!
//! The description is wrapped up front with `textwrap` so the content
//! height is known before handing it to the `ScrollView`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::assets::AssetResolver;
use crate::core::screens::{DetailFields, DetailsScreen};
use crate::tui::component::Component;
use crate::tui::components::image::image_label;
use crate::tui::event::TuiEvent;

/// Scroll state for the detail view. Lives in `TuiState` per stack entry.
#[derive(Default)]
pub struct DetailScroll {
    pub state: ScrollViewState,
}

impl DetailScroll {
    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp => self.state.scroll_up(),
            TuiEvent::CursorDown => self.state.scroll_down(),
            TuiEvent::PageUp => self.state.scroll_page_up(),
            TuiEvent::PageDown => self.state.scroll_page_down(),
            TuiEvent::Home => self.state.scroll_to_top(),
            TuiEvent::End => self.state.scroll_to_bottom(),
            _ => {}
        }
    }
}

pub struct ItemDetail<'a> {
    fields: DetailFields,
    scroll: &'a mut DetailScroll,
    images: Option<&'a dyn AssetResolver>,
}

impl<'a> ItemDetail<'a> {
    pub fn new(
        screen: &DetailsScreen,
        scroll: &'a mut DetailScroll,
        images: Option<&'a dyn AssetResolver>,
    ) -> Self {
        Self {
            fields: screen.fields(),
            scroll,
            images,
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(images) = self.images {
            lines.push(Line::from(image_label(images, &self.fields.image)));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            self.fields.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        let wrap_width = usize::from(width.max(1));
        for part in textwrap::wrap(self.fields.description, wrap_width) {
            lines.push(Line::from(Span::styled(
                part.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            format!("Price: {}", self.fields.price),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("Calories: {}", self.fields.calories),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for ItemDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let lines = self.lines(content_width.saturating_sub(2));
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, area, &mut self.scroll.state);
    }
}
