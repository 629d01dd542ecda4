//! # Catalog
//!
//! The compiled-in list of restaurants. It is built at compile time, never
//! mutated and never persisted; every navigation payload borrows from it.

use crate::core::model::{ImageRef, MenuItem, Restaurant};

/// Every restaurant, in display order.
pub static CATALOG: &[Restaurant] = &[
    Restaurant {
        title: "Joe's Gelato",
        tagline: "Dessert, Ice cream, £££",
        eta: "10-30",
        image: ImageRef::new(
            "pexels_iceCream.jpg",
            "https://www.pexels.com/photo/close-up-photo-of-a-bowl-of-ice-cream-2586924/",
        ),
        menu: &[
            MenuItem {
                title: "Vanilla",
                calories: "200 kcal",
                price: "£3.00",
                image: ImageRef::new(
                    "unsplash_vanillaIceCream.jpg",
                    "https://unsplash.com/photos/a-cup-of-ice-cream-with-a-spoon-in-it-OxrbM3WCaI8",
                ),
                description: "Creamy vanilla gelato made with fresh vanilla beans.",
            },
            MenuItem {
                title: "Mint",
                calories: "250 kcal",
                price: "£3.50",
                image: ImageRef::new(
                    "unsplash_mintIceCream.jpg",
                    "https://unsplash.com/photos/selective-focus-photo-of-cup-of-ice-cream-Q6uTgpjlE7A",
                ),
                description: "Fresh mint gelato with chocolate chips.",
            },
            MenuItem {
                title: "Strawberry",
                calories: "220 kcal",
                price: "£3.20",
                image: ImageRef::new(
                    "pexels_strawberryIceCream.jpg",
                    "https://www.pexels.com/photo/ice-cream-with-strawberry-on-clear-glass-footed-cup-11569103/",
                ),
                description: "Sweet strawberry gelato made from organic strawberries.",
            },
        ],
    },
    Restaurant {
        title: "Pizza Palace",
        tagline: "Pizza, Italian, ££",
        eta: "15-40",
        image: ImageRef::new(
            "unsplash_pizza.jpg",
            "https://unsplash.com/photos/close-up-photo-of-pizza-with-cheese-D3Mag4BKqns",
        ),
        menu: &[
            MenuItem {
                title: "Margherita",
                calories: "700 kcal",
                price: "£8.00",
                image: ImageRef::new(
                    "pexels_margheritaPizza.jpg",
                    "https://www.pexels.com/photo/pizza-on-a-wooden-table-16890470/",
                ),
                description: "Classic margherita pizza with fresh mozzarella and basil.",
            },
            MenuItem {
                title: "Pepperoni",
                calories: "850 kcal",
                price: "£9.00",
                image: ImageRef::new(
                    "pexels_pepperoniPizza.jpg",
                    "https://www.pexels.com/photo/pizza-on-brown-wooden-board-825661/",
                ),
                description: "Pepperoni pizza topped with spicy pepperoni slices.",
            },
            MenuItem {
                title: "Vegetarian",
                calories: "650 kcal",
                price: "£8.50",
                image: ImageRef::new(
                    "pexels_vegetarianPizza.jpg",
                    "https://www.pexels.com/photo/pizza-margherita-cut-in-four-18431672/",
                ),
                description: "Vegetarian pizza with a selection of seasonal vegetables.",
            },
        ],
    },
    Restaurant {
        title: "Joe's Café",
        tagline: "Coffee, ££",
        eta: "5-10",
        image: ImageRef::new(
            "unsplash_cafe.jpg",
            "https://unsplash.com/photos/round-brown-wooden-table-with-french-press-on-top-with-white-ceramic-teacup-beside-3b2tADGAWnU",
        ),
        menu: &[
            MenuItem {
                title: "Cappuccino",
                calories: "150 kcal",
                price: "£2.80",
                image: ImageRef::new(
                    "pexels_cappuccino.jpg",
                    "https://www.pexels.com/photo/artistic-cappuccino-and-coffee-table-setup-29064588/",
                ),
                description: "Rich and creamy cappuccino topped with foam.",
            },
            MenuItem {
                title: "Latte",
                calories: "180 kcal",
                price: "£3.00",
                image: ImageRef::new(
                    "pexels_latte.jpg",
                    "https://www.pexels.com/photo/cappuccino-filled-glass-on-saucer-350478/",
                ),
                description: "Smooth latte with steamed milk and espresso.",
            },
            MenuItem {
                title: "Flat White",
                calories: "170 kcal",
                price: "£3.20",
                image: ImageRef::new(
                    "pexels_flatWhite.jpg",
                    "https://www.pexels.com/photo/coffee-in-white-ceramic-teacup-on-white-ceramic-suacer-894696/",
                ),
                description: "Flat white with a perfect blend of espresso and microfoam.",
            },
        ],
    },
    Restaurant {
        title: "Joe's Diner",
        tagline: "Burgers, ££",
        eta: "50+",
        image: ImageRef::new(
            "unsplash_diner.jpg",
            "https://unsplash.com/photos/empty-red-leather-padded-bench-JpuAYS3vxjk",
        ),
        menu: &[
            MenuItem {
                title: "Classic Burger",
                calories: "600 kcal",
                price: "£6.00",
                image: ImageRef::new(
                    "pexels_classicBurger.jpg",
                    "https://www.pexels.com/photo/burgers-on-ceramic-plate-4109133/",
                ),
                description: "Classic beef burger served with fresh lettuce and tomatoes.",
            },
            MenuItem {
                title: "Cheeseburger",
                calories: "700 kcal",
                price: "£6.50",
                image: ImageRef::new(
                    "pexels_cheeseburger.jpg",
                    "https://www.pexels.com/photo/btl-burger-with-fries-551991/",
                ),
                description: "Cheeseburger topped with cheddar and served with fries.",
            },
            MenuItem {
                title: "Veggie Burger",
                calories: "500 kcal",
                price: "£5.50",
                image: ImageRef::new(
                    "pexels_veggieBurger.jpg",
                    "https://www.pexels.com/photo/bread-food-sandwich-healthy-6546029/",
                ),
                description: "Delicious veggie burger made with fresh vegetables.",
            },
        ],
    },
];

/// Read access to the catalog.
pub fn catalog() -> &'static [Restaurant] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_restaurant_has_a_menu() {
        for restaurant in catalog() {
            assert!(
                !restaurant.menu.is_empty(),
                "{} has an empty menu",
                restaurant.title
            );
        }
    }

    #[test]
    fn test_catalog_order_is_display_order() {
        let titles: Vec<&str> = catalog().iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            ["Joe's Gelato", "Pizza Palace", "Joe's Café", "Joe's Diner"]
        );
    }

    #[test]
    fn test_gelato_menu_matches_source_data() {
        let gelato = &catalog()[0];
        assert_eq!(gelato.menu.len(), 3);
        let mint = &gelato.menu[1];
        assert_eq!(mint.title, "Mint");
        assert_eq!(mint.price, "£3.50");
        assert_eq!(mint.calories, "250 kcal");
        assert!(mint.description.to_lowercase().contains("mint gelato"));
    }

    #[test]
    fn test_image_files_are_unique() {
        let mut seen = HashSet::new();
        for restaurant in catalog() {
            assert!(seen.insert(restaurant.image.file));
            for item in restaurant.menu {
                assert!(seen.insert(item.image.file), "duplicate {}", item.image.file);
            }
        }
    }
}
