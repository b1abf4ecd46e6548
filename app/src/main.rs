mod cli;
mod paint;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use noiser::utils::{pixel_centers, value_bounds};

use crate::cli::Args;
use crate::paint::{blank_like, paint, to_image};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let field = args.build_field()?;
    let mode = args.parse_mode();

    // One sample per pixel centre
    let points = pixel_centers(
        field.area_size(),
        args.width as usize,
        args.height as usize,
    );

    let start = Instant::now();
    let values = if args.parallel {
        field.par_generate_noise(&points)
    } else {
        field.generate_noise(&points)
    };
    info!(
        "{}x{} samples, {} octave(s), in {:.2?}",
        args.width,
        args.height,
        field.config().octaves(),
        start.elapsed()
    );
    if let Some((lo, hi)) = value_bounds(&values) {
        info!("shaped values span [{:.4}, {:.4}]", lo, hi);
    }

    let mut colors = blank_like(&values);
    paint(&mut colors, &values, mode, field.config().value_range());

    to_image(&colors)
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!("Saved {}", args.out.display());
    Ok(())
}
