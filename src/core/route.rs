//! # Routes and Transition Payloads
//!
//! Typed parameters for each forward transition, plus the `Route` entries
//! the navigator stacks up.
//!
//! ```text
//! Restaurants ──ListToMenuParams { items }──▶ Menu ──MenuToDetailParams { item }──▶ Details
//! ```
//!
//! Payloads borrow from the static catalog, so creating or dropping one
//! never copies menu data.

use std::fmt;

use crate::core::model::MenuItem;

/// Every screen the navigator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Restaurants,
    Menu,
    Details,
}

impl ScreenId {
    /// Header text for the screen.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Restaurants => "Restaurants",
            ScreenId::Menu => "Menu",
            ScreenId::Details => "Details",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Payload for Restaurants → Menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListToMenuParams {
    pub items: &'static [MenuItem],
}

/// Payload for Menu → Details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuToDetailParams {
    pub item: &'static MenuItem,
}

/// Any transition payload, as stored on the navigator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Params {
    Menu(ListToMenuParams),
    Detail(MenuToDetailParams),
}

impl Params {
    /// The screen this payload was built for.
    pub fn destination(&self) -> ScreenId {
        match self {
            Params::Menu(_) => ScreenId::Menu,
            Params::Detail(_) => ScreenId::Details,
        }
    }
}

impl From<ListToMenuParams> for Params {
    fn from(params: ListToMenuParams) -> Self {
        Params::Menu(params)
    }
}

impl From<MenuToDetailParams> for Params {
    fn from(params: MenuToDetailParams) -> Self {
        Params::Detail(params)
    }
}

/// Result of selecting a row: where to go and what to carry there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: ScreenId,
    pub params: Params,
}

/// One entry on the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub screen: ScreenId,
    /// `None` only for the root, or when a screen was pushed without its payload.
    pub params: Option<Params>,
}

impl Route {
    pub fn new(screen: ScreenId, params: Option<Params>) -> Self {
        Self { screen, params }
    }

    pub fn root() -> Self {
        Self::new(ScreenId::Restaurants, None)
    }
}

impl From<Transition> for Route {
    fn from(transition: Transition) -> Self {
        Self::new(transition.to, Some(transition.params))
    }
}
