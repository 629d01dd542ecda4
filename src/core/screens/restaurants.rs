//! Restaurant list: one row per catalog entry, in catalog order.

use crate::core::model::{ImageRef, Restaurant};
use crate::core::route::{ListToMenuParams, Params, ScreenId, Transition};

/// What a restaurant row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRow {
    pub title: &'static str,
    pub tagline: &'static str,
    /// ETA badge text, e.g. `"10-30 min"`.
    pub eta: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantsScreen {
    catalog: &'static [Restaurant],
}

impl RestaurantsScreen {
    pub fn new(catalog: &'static [Restaurant]) -> Self {
        Self { catalog }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn rows(&self) -> Vec<RestaurantRow> {
        self.catalog
            .iter()
            .map(|restaurant| RestaurantRow {
                title: restaurant.title,
                tagline: restaurant.tagline,
                eta: restaurant.eta_label(),
                image: restaurant.image,
            })
            .collect()
    }

    /// Selecting a restaurant opens its menu.
    pub fn select(&self, index: usize) -> Option<Transition> {
        let restaurant = self.catalog.get(index)?;
        Some(Transition {
            to: ScreenId::Menu,
            params: Params::Menu(ListToMenuParams {
                items: restaurant.menu,
            }),
        })
    }
}
