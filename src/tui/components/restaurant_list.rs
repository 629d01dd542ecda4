//! # Restaurant List Component
//!
//! The home screen: one card per restaurant, in catalog order.
//!
//! ```text
//! ┌ Restaurants ───────────────────────────┐
//! │>  10-30 min  ▣ pexels_iceCream.jpg     │
//! │   Joe's Gelato                         │
//! │   Dessert, Ice cream, £££              │
//! │                                        │
//! │   15-40 min  ▣ unsplash_pizza.jpg      │
//! │   ...                                  │
//! └──── ↑↓ Move  Enter Open  q Quit ───────┘
//! ```
//!
//! Transient wrapper: built each frame from the screen model's rows and the
//! borrowed [`ListSelection`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding};

use crate::core::assets::AssetResolver;
use crate::core::screens::{RestaurantRow, RestaurantsScreen};
use crate::tui::component::Component;
use crate::tui::components::image::image_label;
use crate::tui::components::selection::ListSelection;

/// Lines per card, including the blank separator.
pub const CARD_HEIGHT: u16 = 4;

const HELP: &str = " ↑↓ Move  Enter Open  q Quit ";

pub struct RestaurantList<'a> {
    rows: Vec<RestaurantRow>,
    selection: &'a mut ListSelection,
    images: Option<&'a dyn AssetResolver>,
}

impl<'a> RestaurantList<'a> {
    /// `images: None` hides image placeholders.
    pub fn new(
        screen: &RestaurantsScreen,
        selection: &'a mut ListSelection,
        images: Option<&'a dyn AssetResolver>,
    ) -> Self {
        Self {
            rows: screen.rows(),
            selection,
            images,
        }
    }

    fn card(&self, row: &RestaurantRow) -> ListItem<'static> {
        let eta_badge = Span::styled(
            format!(" {} ", row.eta),
            Style::default().fg(Color::White).bg(Color::Black),
        );
        let mut top = vec![eta_badge];
        if let Some(images) = self.images {
            top.push(Span::raw("  "));
            top.push(image_label(images, &row.image));
        }

        ListItem::new(vec![
            Line::from(top),
            Line::from(Span::styled(
                row.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(row.tagline, Style::default().fg(Color::Gray))),
            Line::default(),
        ])
    }
}

impl Component for RestaurantList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Restaurants ")
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));
        self.selection.set_layout(block.inner(area), CARD_HEIGHT);
        self.selection.set_len(self.rows.len());

        let items: Vec<ListItem> = self.rows.iter().map(|row| self.card(row)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.selection.list_state);
    }
}
