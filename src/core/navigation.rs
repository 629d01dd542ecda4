//! Navigation stack: the controller that owns transition history.
//!
//! Screens never touch the stack; they hand back a [`Transition`] and the
//! reducer pushes it. The root entry (`Restaurants`) can never be popped.

use log::debug;

use crate::core::route::{Params, Route, ScreenId, Transition};

/// Stack of `(screen, params)` entries. The root lives outside the vector
/// so the stack can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Navigator {
    /// Create a navigator with `Restaurants` as the root screen.
    pub fn new() -> Self {
        Self {
            root: Route::root(),
            stack: Vec::new(),
        }
    }

    /// The entry at the top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Payload of the current entry, if it was pushed with one.
    #[must_use]
    pub fn current_params(&self) -> Option<&Params> {
        self.current().params.as_ref()
    }

    /// Push a screen. Nothing checks that `params` match `screen`; the
    /// screen validates its payload when it is entered.
    pub fn push(&mut self, screen: ScreenId, params: Option<Params>) {
        debug!("push {} (params: {})", screen, params.is_some());
        self.stack.push(Route::new(screen, params));
    }

    /// Push the destination of a row selection.
    pub fn navigate(&mut self, transition: Transition) {
        self.push(transition.to, Some(transition.params));
    }

    /// Pop the top screen, discarding its params. Returns `false` (and does
    /// nothing) when only the root remains.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(popped) => {
                debug!("pop {}", popped.screen);
                true
            }
            None => false,
        }
    }

    /// Number of entries currently on the stack, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Screen ids from root to top, for breadcrumbs.
    pub fn trail(&self) -> impl Iterator<Item = ScreenId> + '_ {
        std::iter::once(&self.root)
            .chain(self.stack.iter())
            .map(|route| route.screen)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
