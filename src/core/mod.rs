//! # Core Application Logic
//!
//! The catalog, the screens and the navigation contract between them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (data)       │
//!                    │  • Screens (rows)       │
//!                    │  • Navigator (stack)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the compiled-in restaurants and menus
//! - [`route`]: screen ids and the typed payload of each transition
//! - [`screens`]: row projections and selection for each screen
//! - [`navigation`]: the `(screen, params)` stack
//! - [`state`] / [`action`]: `App` and the `update()` reducer
//! - [`deep_link`]: start on any screen from a textual route
//! - [`assets`]: image reference resolution
//! - [`config`]: layered settings

pub mod action;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod deep_link;
pub mod model;
pub mod navigation;
pub mod route;
pub mod screens;
pub mod state;
