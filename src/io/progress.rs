//! Per-zone progress display for page rendering

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ZONE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for the zones of one page render
///
/// Each zone gets its own bar sized by sticker count; a bar fills when the
/// zone's preview lands on disk.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    zone_bars: Vec<ProgressBar>,
    zone_names: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            zone_bars: Vec::new(),
            zone_names: Vec::new(),
        }
    }

    /// Create one bar per zone, labelled with the zone name
    pub fn initialize(&mut self, zones: &[(&str, usize)]) {
        for (name, sticker_count) in zones {
            let bar = ProgressBar::new(*sticker_count as u64);
            bar.set_style(ZONE_STYLE.clone());
            bar.set_message((*name).to_string());
            self.zone_bars.push(self.multi_progress.add(bar));
            self.zone_names.push((*name).to_string());
        }
    }

    /// Fill a zone's bar and mark it done
    pub fn complete_zone(&self, index: usize) {
        if let Some(bar) = self.zone_bars.get(index) {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
            let name = self.zone_names.get(index).map_or("", String::as_str);
            bar.set_message(format!("✓ {name}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
