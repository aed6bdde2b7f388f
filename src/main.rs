//! CLI entry point for the sticker scatter preview tool

use clap::Parser;
use stickerfield::io::cli::{Cli, ZoneRenderer};

fn main() -> stickerfield::Result<()> {
    let cli = Cli::parse();
    let mut renderer = ZoneRenderer::new(cli);
    renderer.run()
}
