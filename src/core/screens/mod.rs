//! # Screen Models
//!
//! UI-agnostic models of the three screens. Each one is a pure projection of
//! its input: it produces the rows to show and, for list screens, the
//! [`Transition`](crate::core::route::Transition) a row selection leads to.
//!
//! Models are rebuilt from the navigator's current route whenever they are
//! needed. They only hold references into the static catalog, so building
//! one is cheap and has no side effects.
//!
//! Screens that need a payload validate it on entry. A missing or
//! mismatched payload becomes a [`ScreenError`] that the UI renders as an
//! explicit error state.

pub mod details;
pub mod menu;
pub mod restaurants;

pub use details::{DetailFields, DetailsScreen};
pub use menu::{MenuRow, MenuScreen};
pub use restaurants::{RestaurantRow, RestaurantsScreen};

use thiserror::Error;

use crate::core::model::Restaurant;
use crate::core::route::{Params, Route, ScreenId, Transition};

/// Why a screen could not be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("the {screen} screen was opened without its required parameters")]
    MissingParameter { screen: ScreenId },
    #[error("the {screen} screen received parameters meant for the {found} screen")]
    MismatchedParameter { screen: ScreenId, found: ScreenId },
}

impl ScreenError {
    /// The screen that failed to open.
    pub fn screen(&self) -> ScreenId {
        match self {
            ScreenError::MissingParameter { screen }
            | ScreenError::MismatchedParameter { screen, .. } => *screen,
        }
    }
}

/// The screen model for the top of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Restaurants(RestaurantsScreen),
    Menu(MenuScreen),
    Details(DetailsScreen),
}

impl ActiveScreen {
    /// Build the model for `route`, validating its payload.
    pub fn enter(
        route: &Route,
        catalog: &'static [Restaurant],
    ) -> Result<Self, ScreenError> {
        let params = route.params.as_ref();
        match route.screen {
            ScreenId::Restaurants => Ok(ActiveScreen::Restaurants(RestaurantsScreen::new(catalog))),
            ScreenId::Menu => MenuScreen::enter(params).map(ActiveScreen::Menu),
            ScreenId::Details => DetailsScreen::enter(params).map(ActiveScreen::Details),
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            ActiveScreen::Restaurants(_) => ScreenId::Restaurants,
            ActiveScreen::Menu(_) => ScreenId::Menu,
            ActiveScreen::Details(_) => ScreenId::Details,
        }
    }

    /// Number of selectable rows. Details has none.
    pub fn row_count(&self) -> usize {
        match self {
            ActiveScreen::Restaurants(screen) => screen.len(),
            ActiveScreen::Menu(screen) => screen.len(),
            ActiveScreen::Details(_) => 0,
        }
    }

    /// Where selecting row `index` leads, if anywhere.
    pub fn select(&self, index: usize) -> Option<Transition> {
        match self {
            ActiveScreen::Restaurants(screen) => screen.select(index),
            ActiveScreen::Menu(screen) => screen.select(index),
            ActiveScreen::Details(_) => None,
        }
    }
}

/// Shared entry check: the payload must exist and be addressed to `screen`.
fn require_params(screen: ScreenId, params: Option<&Params>) -> Result<&Params, ScreenError> {
    let params = params.ok_or(ScreenError::MissingParameter { screen })?;
    let found = params.destination();
    if found != screen {
        return Err(ScreenError::MismatchedParameter { screen, found });
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CATALOG;
    use crate::core::route::ListToMenuParams;

    #[test]
    fn test_enter_root() {
        let screen = ActiveScreen::enter(&Route::root(), CATALOG).unwrap();
        assert_eq!(screen.id(), ScreenId::Restaurants);
        assert_eq!(screen.row_count(), CATALOG.len());
    }

    #[test]
    fn test_enter_menu_without_params() {
        let route = Route::new(ScreenId::Menu, None);
        let err = ActiveScreen::enter(&route, CATALOG).unwrap_err();
        assert_eq!(err, ScreenError::MissingParameter { screen: ScreenId::Menu });
        assert_eq!(err.screen(), ScreenId::Menu);
    }

    #[test]
    fn test_enter_details_with_menu_params() {
        let params = Params::Menu(ListToMenuParams { items: CATALOG[0].menu });
        let route = Route::new(ScreenId::Details, Some(params));
        let err = ActiveScreen::enter(&route, CATALOG).unwrap_err();
        assert_eq!(
            err,
            ScreenError::MismatchedParameter {
                screen: ScreenId::Details,
                found: ScreenId::Menu,
            }
        );
    }

    #[test]
    fn test_error_messages_name_the_screen() {
        let err = ScreenError::MissingParameter { screen: ScreenId::Details };
        assert_eq!(
            err.to_string(),
            "the Details screen was opened without its required parameters"
        );
    }

    #[test]
    fn test_details_has_no_rows() {
        let transition = MenuScreen::new(CATALOG[0].menu).select(0).unwrap();
        let route = Route::from(transition);
        let details = ActiveScreen::enter(&route, CATALOG).unwrap();
        assert_eq!(details.row_count(), 0);
        assert_eq!(details.select(0), None);
    }
}
