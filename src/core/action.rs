//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Pressing Enter on row 2? That's `Action::Select(2)`.
//! Escape? That's `Action::Back`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what, if anything, it has to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::core::route::{Params, ScreenId};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate row `n` of the current screen.
    Select(usize),
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The stack changed; the adapter should reset presentation state for
    /// the new top screen.
    Navigated(ScreenId),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Select(index) => select(app, index),
        Action::Back => {
            if app.navigator.back() {
                let screen = app.current_screen();
                app.status_message = status_for(app.navigator.current_params());
                Effect::Navigated(screen)
            } else {
                Effect::None
            }
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn select(app: &mut App, index: usize) -> Effect {
    let screen = match app.active_screen() {
        Ok(screen) => screen,
        Err(e) => {
            warn!("Ignoring selection of row {}: {}", index, e);
            return Effect::None;
        }
    };

    match screen.select(index) {
        Some(transition) => {
            info!("{} row {} → {}", screen.id(), index, transition.to);
            app.navigator.navigate(transition);
            app.status_message = status_for(Some(&transition.params));
            Effect::Navigated(transition.to)
        }
        None => Effect::None,
    }
}

/// Status bar text for the screen a payload opened.
pub(crate) fn status_for(params: Option<&Params>) -> String {
    match params {
        Some(Params::Menu(menu)) => match menu.items.len() {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        },
        Some(Params::Detail(detail)) => detail.item.title.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CATALOG;
    use crate::core::route::{ListToMenuParams, MenuToDetailParams};
    use crate::core::screens::ActiveScreen;
    use crate::test_support::test_app;

    #[test]
    fn test_select_restaurant_opens_its_menu() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Select(1));
        assert_eq!(effect, Effect::Navigated(ScreenId::Menu));
        assert_eq!(
            app.navigator.current_params(),
            Some(&Params::Menu(ListToMenuParams {
                items: CATALOG[1].menu
            }))
        );
        assert_eq!(app.status_message, "3 items");
    }

    #[test]
    fn test_select_item_opens_details() {
        let mut app = test_app();
        update(&mut app, Action::Select(0));
        let effect = update(&mut app, Action::Select(2));
        assert_eq!(effect, Effect::Navigated(ScreenId::Details));
        assert_eq!(
            app.navigator.current_params(),
            Some(&Params::Detail(MenuToDetailParams {
                item: &CATALOG[0].menu[2]
            }))
        );
        assert_eq!(app.status_message, "Strawberry");
    }

    #[test]
    fn test_select_on_details_does_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Select(0));
        update(&mut app, Action::Select(0));
        let depth = app.navigator.depth();
        assert_eq!(update(&mut app, Action::Select(0)), Effect::None);
        assert_eq!(app.navigator.depth(), depth);
    }

    #[test]
    fn test_select_out_of_range_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Select(CATALOG.len())), Effect::None);
        assert_eq!(app.current_screen(), ScreenId::Restaurants);
    }

    #[test]
    fn test_select_on_error_screen_does_nothing() {
        let mut app = test_app();
        app.navigator.push(ScreenId::Menu, None);
        assert_eq!(update(&mut app, Action::Select(0)), Effect::None);
        assert_eq!(app.navigator.depth(), 2);
    }

    #[test]
    fn test_back_walks_the_stack() {
        let mut app = test_app();
        update(&mut app, Action::Select(2));
        update(&mut app, Action::Select(1));

        assert_eq!(update(&mut app, Action::Back), Effect::Navigated(ScreenId::Menu));
        match app.active_screen().unwrap() {
            ActiveScreen::Menu(menu) => assert_eq!(menu.items(), CATALOG[2].menu),
            other => panic!("expected menu, got {:?}", other.id()),
        }
        assert_eq!(app.status_message, "3 items");

        assert_eq!(
            update(&mut app, Action::Back),
            Effect::Navigated(ScreenId::Restaurants)
        );
        assert!(app.status_message.is_empty());

        assert_eq!(update(&mut app, Action::Back), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
