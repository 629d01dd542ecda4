//! Item detail: a read-only projection of one menu item. No forward
//! transitions; the navigator's back is the only way out.

use crate::core::model::{ImageRef, MenuItem};
use crate::core::route::{Params, ScreenId};
use crate::core::screens::{ScreenError, require_params};

/// The values the detail screen shows, copied from the item untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailFields {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub calories: &'static str,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsScreen {
    item: &'static MenuItem,
}

impl DetailsScreen {
    pub fn enter(params: Option<&Params>) -> Result<Self, ScreenError> {
        match require_params(ScreenId::Details, params)? {
            Params::Detail(params) => Ok(Self::new(params.item)),
            other => Err(ScreenError::MismatchedParameter {
                screen: ScreenId::Details,
                found: other.destination(),
            }),
        }
    }

    pub fn new(item: &'static MenuItem) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &'static MenuItem {
        self.item
    }

    pub fn fields(&self) -> DetailFields {
        DetailFields {
            title: self.item.title,
            description: self.item.description,
            price: self.item.price,
            calories: self.item.calories,
            image: self.item.image,
        }
    }
}
