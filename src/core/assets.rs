//! # Image Assets
//!
//! Image references are opaque to the rest of the crate. Turning one into
//! something displayable is the job of an [`AssetResolver`]:
//!
//! - [`BundledAssets`]: checks the reference against the compiled-in
//!   manifest of files shipped with the app.
//! - [`DirectoryAssets`]: checks that the file exists under a directory on
//!   disk (`--assets-dir`).
//!
//! A failed resolution never blocks navigation; the UI shows a placeholder.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::model::ImageRef;

/// Every image file bundled with the app.
pub const ASSET_MANIFEST: &[&str] = &[
    "pexels_iceCream.jpg",
    "unsplash_vanillaIceCream.jpg",
    "unsplash_mintIceCream.jpg",
    "pexels_strawberryIceCream.jpg",
    "unsplash_pizza.jpg",
    "pexels_margheritaPizza.jpg",
    "pexels_pepperoniPizza.jpg",
    "pexels_vegetarianPizza.jpg",
    "unsplash_cafe.jpg",
    "pexels_cappuccino.jpg",
    "pexels_latte.jpg",
    "pexels_flatWhite.jpg",
    "unsplash_diner.jpg",
    "pexels_classicBurger.jpg",
    "pexels_cheeseburger.jpg",
    "pexels_veggieBurger.jpg",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("image asset '{file}' could not be resolved")]
    UnresolvedAsset { file: &'static str },
}

/// A reference that resolved successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub file: &'static str,
}

/// Resolves image references. Implemented outside the navigation code so
/// the UI can swap where images come from.
pub trait AssetResolver {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedAsset, AssetError>;
}

/// Resolves against [`ASSET_MANIFEST`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl AssetResolver for BundledAssets {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedAsset, AssetError> {
        if ASSET_MANIFEST.contains(&image.file) {
            Ok(ResolvedAsset { file: image.file })
        } else {
            Err(AssetError::UnresolvedAsset { file: image.file })
        }
    }
}

/// Resolves files under a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedAsset, AssetError> {
        if self.root.join(image.file).is_file() {
            Ok(ResolvedAsset { file: image.file })
        } else {
            Err(AssetError::UnresolvedAsset { file: image.file })
        }
    }
}
