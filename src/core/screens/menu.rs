//! Menu: one row per received item, labelled `"{price} • {calories}"`.

use crate::core::model::MenuItem;
use crate::core::route::{MenuToDetailParams, Params, ScreenId, Transition};
use crate::core::screens::{ScreenError, require_params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub title: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuScreen {
    items: &'static [MenuItem],
}

impl MenuScreen {
    /// Enter the menu with the payload pushed by the restaurant list.
    pub fn enter(params: Option<&Params>) -> Result<Self, ScreenError> {
        match require_params(ScreenId::Menu, params)? {
            Params::Menu(params) => Ok(Self::new(params.items)),
            other => Err(ScreenError::MismatchedParameter {
                screen: ScreenId::Menu,
                found: other.destination(),
            }),
        }
    }

    pub fn new(items: &'static [MenuItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows in input order; nothing is sorted, merged or dropped.
    pub fn rows(&self) -> Vec<MenuRow> {
        self.items
            .iter()
            .map(|item| MenuRow {
                title: item.title,
                detail: item.detail_label(),
            })
            .collect()
    }

    /// Selecting an item opens its detail screen.
    pub fn select(&self, index: usize) -> Option<Transition> {
        let item = self.items.get(index)?;
        Some(Transition {
            to: ScreenId::Details,
            params: Params::Detail(MenuToDetailParams { item }),
        })
    }
}
