//! # Data Model
//!
//! Restaurants, their menus, and the image handles both carry.
//!
//! Every type here is `Copy` and built from `&'static` data: the catalog is
//! compiled in, so navigation payloads are plain references into it.
//!
//! ```text
//! Restaurant
//! ├── title, tagline, eta
//! ├── image: ImageRef
//! └── menu: &[MenuItem]
//!           ├── title, calories, price, description
//!           └── image: ImageRef
//! ```

use serde::Serialize;

/// Opaque handle to a bundled image asset.
///
/// Nothing in this crate reads image bytes. The handle is passed to an
/// [`AssetResolver`](crate::core::assets::AssetResolver), which decides what
/// the reference means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRef {
    /// File name inside the asset bundle (e.g. `pexels_iceCream.jpg`).
    pub file: &'static str,
    /// Where the photo was sourced from.
    pub credit: &'static str,
}

impl ImageRef {
    pub const fn new(file: &'static str, credit: &'static str) -> Self {
        Self { file, credit }
    }
}

/// A single dish or drink on a restaurant's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    /// Free-form, e.g. `"200 kcal"`.
    pub calories: &'static str,
    /// Already currency-formatted, e.g. `"£3.00"`.
    pub price: &'static str,
    pub image: ImageRef,
    pub description: &'static str,
}

impl MenuItem {
    /// Secondary label shown on menu rows: `"{price} • {calories}"`.
    pub fn detail_label(&self) -> String {
        format!("{} • {}", self.price, self.calories)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Free-form delivery window in minutes, e.g. `"10-30"` or `"50+"`.
    pub eta: &'static str,
    pub image: ImageRef,
    /// Display order is menu order.
    pub menu: &'static [MenuItem],
}

impl Restaurant {
    /// ETA badge text, e.g. `"10-30 min"`.
    pub fn eta_label(&self) -> String {
        format!("{} min", self.eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: MenuItem = MenuItem {
        title: "Espresso",
        calories: "5 kcal",
        price: "£1.80",
        image: ImageRef::new("espresso.jpg", "https://example.com/espresso"),
        description: "Short and strong.",
    };

    #[test]
    fn test_detail_label_joins_price_and_calories() {
        assert_eq!(ITEM.detail_label(), "£1.80 • 5 kcal");
    }

    #[test]
    fn test_eta_label_appends_minutes() {
        let restaurant = Restaurant {
            title: "Kiosk",
            tagline: "Coffee",
            eta: "50+",
            image: ImageRef::new("kiosk.jpg", ""),
            menu: &[ITEM],
        };
        assert_eq!(restaurant.eta_label(), "50+ min");
    }

    #[test]
    fn test_menu_item_serializes_image_handle() {
        let json = serde_json::to_value(ITEM).unwrap();
        assert_eq!(json["title"], "Espresso");
        assert_eq!(json["image"]["file"], "espresso.jpg");
    }
}
