//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::assets::{AssetError, AssetResolver, ResolvedAsset};
use crate::core::catalog::CATALOG;
use crate::core::model::ImageRef;
use crate::core::state::App;

/// Creates a test App over the real catalog, on the restaurant list.
pub fn test_app() -> App {
    App::new(CATALOG)
}

/// A resolver that never finds anything.
pub struct MissingAssets;

impl AssetResolver for MissingAssets {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedAsset, AssetError> {
        Err(AssetError::UnresolvedAsset { file: image.file })
    }
}

/// Draws once into a `TestBackend` and returns the buffer as one line of
/// text per terminal row.
pub fn render_lines(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let cells = buffer.content();
    cells
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

/// Same as [`render_lines`], joined into a single string.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    render_lines(width, height, draw).join("\n")
}
