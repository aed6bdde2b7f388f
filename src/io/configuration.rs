//! Placement constants and default page wiring

/// Number of artwork files in the sticker set (`sticker_01.png` .. `sticker_34.png`)
pub const STICKER_ASSET_COUNT: u32 = 34;

/// Directory holding sticker artwork, relative to the static asset root
pub const STICKER_ASSET_DIR: &str = "assets/stickers";

/// Minimum Euclidean separation between committed sticker centers, in pixels
pub const MIN_STICKER_DISTANCE: f64 = 120.0;

/// Inset from each cell edge when sampling candidate positions, in pixels
pub const CELL_PADDING: f64 = 40.0;

/// Candidate draws per sticker before the last sample is accepted as-is
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;

/// Fixed seed for reproducible scatter
pub const DEFAULT_SEED: u64 = 42;

/// Primary decorative zone name
pub const HERO_ZONE: &str = "hero-sticker-zone";

/// Sticker count for the primary zone
pub const HERO_STICKER_COUNT: usize = 15;

/// Primary zone extent in pixels (width, height)
pub const HERO_ZONE_EXTENT: [f64; 2] = [1600.0, 720.0];

/// Secondary decorative zone name
pub const CTA_ZONE: &str = "cta-sticker-zone";

/// Sticker count for the secondary zone
pub const CTA_STICKER_COUNT: usize = 6;

/// Secondary zone extent in pixels (width, height)
pub const CTA_ZONE_EXTENT: [f64; 2] = [1600.0, 420.0];

/// Edge length of the placeholder swatch drawn when artwork is unavailable
pub const PREVIEW_STICKER_SIZE: u32 = 48;

/// Suffix appended to zone preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
