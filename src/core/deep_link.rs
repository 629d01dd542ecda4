//! # Deep Links
//!
//! Open the app directly on a screen:
//!
//! ```text
//! restaurants            the list (default)
//! menu/<r>               menu of restaurant r
//! details/<r>/<i>        item i of restaurant r, with its menu underneath
//! ```
//!
//! Indices are zero-based catalog positions. A link that stops short of its
//! indices (`menu`, `details`, `details/<r>`) still opens the named screen,
//! but without a payload; that screen then shows its missing-parameter error.
//! Routes are built through the screens' own `select`, so a deep link lands
//! on exactly what the same taps would.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::model::Restaurant;
use crate::core::route::{Route, ScreenId};
use crate::core::screens::{MenuScreen, RestaurantsScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeepLink {
    #[default]
    Restaurants,
    Menu {
        restaurant: Option<usize>,
    },
    Details {
        restaurant: Option<usize>,
        item: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("unknown screen '{0}' (expected restaurants, menu or details)")]
    UnknownScreen(String),
    #[error("'{0}' is not a valid index")]
    InvalidIndex(String),
    #[error("too many segments in '{0}'")]
    TooManySegments(String),
    #[error("restaurant {index} does not exist (catalog has {len})")]
    RestaurantOutOfRange { index: usize, len: usize },
    #[error("item {index} does not exist on {restaurant}'s menu (it has {len})")]
    ItemOutOfRange {
        restaurant: &'static str,
        index: usize,
        len: usize,
    },
}

impl FromStr for DeepLink {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().trim_matches('/').split('/');
        let screen = segments.next().unwrap_or_default();
        let restaurant = segments.next().map(parse_index).transpose()?;
        let item = segments.next().map(parse_index).transpose()?;
        if segments.next().is_some() {
            return Err(DeepLinkError::TooManySegments(s.to_string()));
        }

        match screen {
            "" | "restaurants" if restaurant.is_none() => Ok(DeepLink::Restaurants),
            "menu" if item.is_none() => Ok(DeepLink::Menu { restaurant }),
            "details" => Ok(DeepLink::Details { restaurant, item }),
            "" | "restaurants" | "menu" => Err(DeepLinkError::TooManySegments(s.to_string())),
            other => Err(DeepLinkError::UnknownScreen(other.to_string())),
        }
    }
}

fn parse_index(segment: &str) -> Result<usize, DeepLinkError> {
    segment
        .parse()
        .map_err(|_| DeepLinkError::InvalidIndex(segment.to_string()))
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepLink::Restaurants => f.write_str("restaurants"),
            DeepLink::Menu { restaurant } => {
                f.write_str("menu")?;
                if let Some(r) = restaurant {
                    write!(f, "/{r}")?;
                }
                Ok(())
            }
            DeepLink::Details { restaurant, item } => {
                f.write_str("details")?;
                if let Some(r) = restaurant {
                    write!(f, "/{r}")?;
                }
                if let Some(i) = item {
                    write!(f, "/{i}")?;
                }
                Ok(())
            }
        }
    }
}

impl DeepLink {
    /// Routes to push above the root, bottom first.
    pub fn resolve(&self, catalog: &'static [Restaurant]) -> Result<Vec<Route>, DeepLinkError> {
        match *self {
            DeepLink::Restaurants => Ok(Vec::new()),
            DeepLink::Menu { restaurant: None } => Ok(vec![Route::new(ScreenId::Menu, None)]),
            DeepLink::Menu {
                restaurant: Some(r),
            } => Ok(vec![menu_route(catalog, r)?]),
            DeepLink::Details {
                restaurant: None, ..
            } => Ok(vec![Route::new(ScreenId::Details, None)]),
            DeepLink::Details {
                restaurant: Some(r),
                item,
            } => {
                let menu = menu_route(catalog, r)?;
                let details = match item {
                    None => Route::new(ScreenId::Details, None),
                    Some(i) => {
                        let restaurant = &catalog[r];
                        let transition = MenuScreen::new(restaurant.menu).select(i).ok_or(
                            DeepLinkError::ItemOutOfRange {
                                restaurant: restaurant.title,
                                index: i,
                                len: restaurant.menu.len(),
                            },
                        )?;
                        Route::from(transition)
                    }
                };
                Ok(vec![menu, details])
            }
        }
    }
}

fn menu_route(catalog: &'static [Restaurant], index: usize) -> Result<Route, DeepLinkError> {
    RestaurantsScreen::new(catalog)
        .select(index)
        .map(Route::from)
        .ok_or(DeepLinkError::RestaurantOutOfRange {
            index,
            len: catalog.len(),
        })
}
