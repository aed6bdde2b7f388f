//! Sticker artwork catalog and asset reference formatting

use rand::Rng;

use crate::io::configuration::{STICKER_ASSET_COUNT, STICKER_ASSET_DIR};

/// Reference to one artwork file in the sticker set
///
/// Indices are 1-based to match the `sticker_01.png` .. `sticker_34.png`
/// naming of the shipped artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerAsset {
    index: u32,
}

impl StickerAsset {
    /// Wrap a 1-based artwork index
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// The 1-based artwork index
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Bare file name, two-digit zero-padded: `sticker_07.png`
    pub fn file_name(self) -> String {
        format!("sticker_{:02}.png", self.index)
    }

    /// Path of the artwork under the static asset directory
    pub fn relative_path(self) -> String {
        format!("{STICKER_ASSET_DIR}/{}", self.file_name())
    }
}

/// Fixed artwork set stickers are drawn from
#[derive(Debug, Clone, Copy)]
pub struct AssetCatalog {
    count: u32,
}

impl AssetCatalog {
    /// Catalog over artwork indices `1..=count`
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Number of artwork files in the set
    pub const fn len(self) -> u32 {
        self.count
    }

    /// Whether the catalog holds no artwork
    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Draw an artwork reference uniformly at random
    ///
    /// Each sticker draws independently, so duplicates within one zone are
    /// expected. An empty catalog degrades to index 1 rather than panicking.
    pub fn choose<R: Rng>(self, rng: &mut R) -> StickerAsset {
        if self.count == 0 {
            return StickerAsset::new(1);
        }

        StickerAsset::new(rng.random_range(1..=self.count))
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new(STICKER_ASSET_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_zero_pads_single_digits() {
        assert_eq!(StickerAsset::new(7).file_name(), "sticker_07.png");
        assert_eq!(StickerAsset::new(34).file_name(), "sticker_34.png");
    }

    #[test]
    fn test_relative_path_joins_asset_directory() {
        let path = StickerAsset::new(1).relative_path();
        assert_eq!(path, format!("{STICKER_ASSET_DIR}/sticker_01.png"));
    }
}
