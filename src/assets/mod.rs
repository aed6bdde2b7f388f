//! Sticker artwork references and selection

/// Artwork catalog and reference formatting
pub mod catalog;

pub use catalog::{AssetCatalog, StickerAsset};
