//! Image placeholder.
//!
//! A terminal cannot show the photos, so each image reference renders as a
//! one-line label. Resolution goes through the configured
//! [`AssetResolver`]; a failure only changes the label.

use log::debug;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::assets::AssetResolver;
use crate::core::model::ImageRef;

/// Label for an image reference, styled by whether it resolved.
pub fn image_label(resolver: &dyn AssetResolver, image: &ImageRef) -> Span<'static> {
    match resolver.resolve(image) {
        Ok(asset) => Span::styled(
            format!("▣ {}", asset.file),
            Style::default().fg(Color::DarkGray),
        ),
        Err(e) => {
            debug!("{}", e);
            Span::styled(
                format!("▢ image unavailable ({})", image.file),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        }
    }
}
