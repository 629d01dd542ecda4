//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as fields and render it:
//! - `TitleBar`: app name, breadcrumbs and status message
//! - `ErrorView`: a screen that could not be entered
//! - `image_label`: placeholder line for an image reference
//!
//! ### Persistent State + Transient Wrapper
//!
//! Per-screen presentation state lives in `TuiState` for as long as the
//! screen is on the navigation stack. Each frame a short-lived wrapper borrows
//! that state together with the screen model:
//! - `ListSelection` → `RestaurantList`, `MenuList`
//! - `DetailScroll` → `ItemDetail`
//!
//! ```rust,ignore
//! let view = tui.top();
//! RestaurantList::new(&screen, &mut view.selection, images).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status bar)
//! ├── error_view.rs      (screen entry failure)
//! ├── image.rs           (image placeholder label)
//! ├── selection.rs       (cursor + hit testing for lists)
//! ├── restaurant_list.rs (home screen cards)
//! ├── menu_list.rs       (menu rows)
//! └── item_detail.rs     (scrollable item details)
//! ```

mod error_view;
mod image;
mod item_detail;
mod menu_list;
mod restaurant_list;
mod selection;
mod title_bar;

pub use error_view::ErrorView;
pub use item_detail::{DetailScroll, ItemDetail};
pub use menu_list::MenuList;
pub use restaurant_list::RestaurantList;
pub use selection::{ListSelection, RowActivated};
pub use title_bar::TitleBar;
