//! Command-line interface rendering the default page zones to preview images

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::placer::{PlacementConfig, StickerPlacer};
use crate::assets::catalog::AssetCatalog;
use crate::io::configuration::{
    CTA_STICKER_COUNT, CTA_ZONE, CTA_ZONE_EXTENT, DEFAULT_SEED, HERO_STICKER_COUNT, HERO_ZONE,
    HERO_ZONE_EXTENT, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_zone_preview;
use crate::io::progress::ProgressManager;
use crate::spatial::surface::{MemorySurface, SurfaceRegistry};

#[derive(Parser)]
#[command(name = "stickerfield")]
#[command(
    author,
    version,
    about = "Scatter decorative stickers across page zones"
)]
/// Command-line arguments for the page decoration tool
pub struct Cli {
    /// Output directory for zone preview images
    #[arg(value_name = "OUTPUT", default_value = "previews")]
    pub output: PathBuf,

    /// Random seed for reproducible scatter
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory containing sticker artwork (sticker_NN.png files)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Render only the named zone
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render zones even if their preview already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing previews should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// One decorative zone in the default page layout
struct PageZone {
    name: &'static str,
    sticker_count: usize,
    extent: [f64; 2],
}

/// Default page layout: a dense hero zone and a sparser call-to-action zone
static PAGE_ZONES: [PageZone; 2] = [
    PageZone {
        name: HERO_ZONE,
        sticker_count: HERO_STICKER_COUNT,
        extent: HERO_ZONE_EXTENT,
    },
    PageZone {
        name: CTA_ZONE,
        sticker_count: CTA_STICKER_COUNT,
        extent: CTA_ZONE_EXTENT,
    },
];

/// Orchestrates placement and preview rendering for the page zones
pub struct ZoneRenderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ZoneRenderer {
    /// Create a new zone renderer with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Place stickers into every requested zone and export previews
    ///
    /// A `--zone` filter naming no known zone renders nothing; that mirrors
    /// the placement contract where an absent container is a silent skip.
    ///
    /// # Errors
    ///
    /// Returns an error if path validation, artwork decoding, or preview
    /// export fails.
    pub fn run(&mut self) -> Result<()> {
        self.validate_paths()?;

        let zones: Vec<&PageZone> = PAGE_ZONES
            .iter()
            .filter(|zone| {
                self.cli
                    .zone
                    .as_deref()
                    .is_none_or(|requested| requested == zone.name)
            })
            .collect();

        if zones.is_empty() {
            return Ok(());
        }

        let mut registry = SurfaceRegistry::new();
        for zone in &zones {
            registry.insert(zone.name, MemorySurface::new(zone.extent[0], zone.extent[1]));
        }

        let mut placer = StickerPlacer::seeded(
            AssetCatalog::default(),
            PlacementConfig::default(),
            self.cli.seed,
        );
        for zone in &zones {
            placer.place(&mut registry, zone.name, zone.sticker_count);
        }

        let labels: Vec<(&str, usize)> = zones
            .iter()
            .map(|zone| (zone.name, zone.sticker_count))
            .collect();
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(&labels);
        }

        for (index, zone) in zones.iter().enumerate() {
            self.render_zone(&registry, zone, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate_paths(&self) -> Result<()> {
        if self.cli.output.exists() && !self.cli.output.is_dir() {
            return Err(invalid_parameter(
                "output",
                &self.cli.output.display(),
                &"must be a directory",
            ));
        }

        if let Some(assets) = &self.cli.assets {
            if !assets.is_dir() {
                return Err(invalid_parameter(
                    "assets",
                    &assets.display(),
                    &"must be an existing directory",
                ));
            }
        }

        Ok(())
    }

    fn render_zone(
        &self,
        registry: &SurfaceRegistry<MemorySurface>,
        zone: &PageZone,
        index: usize,
    ) -> Result<()> {
        let output_path = self.preview_path(zone.name);

        if self.cli.skip_existing() && output_path.exists() {
            // Allow print for user feedback on skipped zones
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (preview exists)", output_path.display());
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_zone(index);
            }
            return Ok(());
        }

        if let Some(surface) = registry.get(zone.name) {
            export_zone_preview(surface, self.cli.assets.as_deref(), &output_path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_zone(index);
        }

        Ok(())
    }

    fn preview_path(&self, zone_name: &str) -> PathBuf {
        self.cli
            .output
            .join(format!("{zone_name}{PREVIEW_SUFFIX}.png"))
    }
}
