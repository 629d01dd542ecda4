//! # Application State
//!
//! Core navigation state. Presentation state (cursor position, scroll
//! offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: &'static [Restaurant]   // compiled-in data
//! ├── navigator: Navigator             // (screen, params) stack
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;

use crate::core::action::status_for;
use crate::core::deep_link::{DeepLink, DeepLinkError};
use crate::core::model::Restaurant;
use crate::core::navigation::Navigator;
use crate::core::route::ScreenId;
use crate::core::screens::{ActiveScreen, ScreenError};

pub struct App {
    pub catalog: &'static [Restaurant],
    pub navigator: Navigator,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: &'static [Restaurant]) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(),
            status_message: String::new(),
        }
    }

    /// Push the routes a deep link names on top of the current stack.
    pub fn open(&mut self, link: &DeepLink) -> Result<(), DeepLinkError> {
        let routes = link.resolve(self.catalog)?;
        info!("Opening deep link '{}' ({} routes)", link, routes.len());
        for route in routes {
            self.navigator.push(route.screen, route.params);
        }
        self.status_message = status_for(self.navigator.current_params());
        Ok(())
    }

    /// Model for the screen on top of the stack, or why it cannot be shown.
    pub fn active_screen(&self) -> Result<ActiveScreen, ScreenError> {
        ActiveScreen::enter(self.navigator.current(), self.catalog)
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current().screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_screen(), ScreenId::Restaurants);
        assert_eq!(app.navigator.depth(), 1);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_open_deep_link_pushes_routes() {
        let mut app = test_app();
        app.open(&"details/3/2".parse().unwrap()).unwrap();
        assert_eq!(app.navigator.depth(), 3);
        match app.active_screen().unwrap() {
            ActiveScreen::Details(details) => assert_eq!(details.item().title, "Veggie Burger"),
            other => panic!("expected details, got {:?}", other.id()),
        }
    }

    #[test]
    fn test_open_deep_link_sets_status_message() {
        let mut app = test_app();
        app.open(&"details/0/1".parse().unwrap()).unwrap();
        assert_eq!(app.status_message, "Mint");

        let mut app = test_app();
        app.open(&"menu/2".parse().unwrap()).unwrap();
        assert_eq!(app.status_message, "3 items");
    }

    #[test]
    fn test_open_bare_menu_link_shows_error() {
        let mut app = test_app();
        app.open(&DeepLink::Menu { restaurant: None }).unwrap();
        assert_eq!(
            app.active_screen(),
            Err(ScreenError::MissingParameter {
                screen: ScreenId::Menu
            })
        );
    }

    #[test]
    fn test_open_out_of_range_leaves_stack_alone() {
        let mut app = test_app();
        let link = DeepLink::Menu {
            restaurant: Some(42),
        };
        assert!(app.open(&link).is_err());
        assert_eq!(app.navigator.depth(), 1);
    }
}
