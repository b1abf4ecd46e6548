// Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use glam::DVec2;
use log::{info, warn};
use noiser::{NoiseField, Shaping};

use crate::paint::PaintMode;

// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noiser")]
#[command(about = "Render 2D gradient noise to a PNG", long_about = None)]
pub struct Args {
    /// Image width in pixels (also the noise area width)
    #[arg(long, default_value = "720")]
    pub width: u32,

    /// Image height in pixels (also the noise area height)
    #[arg(long, default_value = "440")]
    pub height: u32,

    /// Proposed chunk side, rounded so whole chunks tile the image
    #[arg(long, value_name = "PIXELS", default_value = "80")]
    pub chunk: f64,

    /// Number of octaves
    #[arg(long, default_value = "3")]
    pub octaves: i32,

    /// Amplitude factor per octave, in (0, 1)
    #[arg(long, default_value = "0.5")]
    pub persistence: f64,

    /// Frequency factor per octave, above 1
    #[arg(long, default_value = "2.0")]
    pub lacunarity: f64,

    /// Lower end of the value range
    #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
    pub lower: f64,

    /// Upper end of the value range
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub upper: f64,

    /// Lattice seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shaping curve: default, signed-quintic, linear
    #[arg(long, default_value = "signed-quintic")]
    pub shaping: String,

    /// Paint mode: values, terrain, gradient
    #[arg(long, default_value = "values")]
    pub mode: String,

    /// Water level for terrain mode
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub threshold: f64,

    /// Evaluate rows on the rayon pool
    #[arg(long)]
    pub parallel: bool,

    /// Output PNG
    #[arg(long, short, default_value = "noise.png")]
    pub out: PathBuf,
}

impl Args {
    // Parse the shaping curve name
    pub fn parse_shaping(&self) -> Shaping {
        match self.shaping.to_lowercase().as_str() {
            "default" | "smoothstep" => Shaping::Smoothstep,
            "signed-quintic" => {
                if (self.lower, self.upper) != (-1.0, 1.0) {
                    warn!("signed-quintic expects the range [-1, 1]");
                }
                Shaping::signed_smootherstep()
            }
            "linear" => Shaping::identity(),
            other => {
                warn!("unknown shaping '{}', using default", other);
                Shaping::Smoothstep
            }
        }
    }

    // Parse the paint mode name
    pub fn parse_mode(&self) -> PaintMode {
        match self.mode.to_lowercase().as_str() {
            "values" => PaintMode::Values,
            "terrain" => PaintMode::Terrain {
                threshold: self.threshold,
            },
            "gradient" => PaintMode::Gradient,
            other => {
                warn!("unknown paint mode '{}', using values", other);
                PaintMode::Values
            }
        }
    }

    // Build the noise field; refused settings are reported instead of ignored
    pub fn build_field(&self) -> Result<NoiseField> {
        ensure!(
            self.width > 0 && self.height > 0,
            "image size must be positive"
        );
        ensure!(
            self.chunk.is_finite() && self.chunk > 0.0,
            "chunk side must be positive, got {}",
            self.chunk
        );

        let area = DVec2::new(self.width as f64, self.height as f64);
        let mut field = match self.seed {
            Some(seed) => NoiseField::with_seed(area, self.chunk, seed),
            None => NoiseField::new(area, self.chunk),
        };
        field.try_set_value_range(self.lower, self.upper)?;
        field.try_set_octaves(self.octaves)?;
        field.try_set_persistence(self.persistence)?;
        field.try_set_lacunarity(self.lacunarity)?;
        field.set_shaping_curve(self.parse_shaping());

        info!(
            "{} chunks of {} over {}",
            field.chunk_count(),
            field.chunk_size(),
            area
        );
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use glam::UVec2;

    use super::Args;
    use crate::paint::PaintMode;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["noiser", "--seed", "7"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_build_a_field() {
        let a = args(&[]);
        assert_eq!(a.width, 720);
        assert_eq!(a.parse_mode(), PaintMode::Values);
        let field = a.build_field().expect("defaults are valid");
        assert_eq!(field.chunk_count(), UVec2::new(9, 6));
        assert_eq!(field.config().value_range(), (-1.0, 1.0));
        assert_eq!(field.config().octaves(), 3);
    }

    #[test]
    fn terrain_mode_carries_threshold() {
        let a = args(&["--mode", "terrain", "--threshold", "-0.25"]);
        assert_eq!(a.parse_mode(), PaintMode::Terrain { threshold: -0.25 });
    }

    #[test]
    fn unknown_names_fall_back() {
        let a = args(&["--mode", "sepia", "--shaping", "cubic-ish"]);
        assert_eq!(a.parse_mode(), PaintMode::Values);
        assert!(a.parse_shaping().is_default());
    }

    #[test]
    fn help_lists_argument_docs() {
        use clap::CommandFactory;

        let help = Args::command().render_help().to_string();
        assert!(help.contains("Water level for terrain mode"));
        assert!(help.contains("Render 2D gradient noise to a PNG"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let err = args(&["--persistence", "1.5"]).build_field().unwrap_err();
        assert!(err.to_string().contains("persistence"));

        let err = args(&["--lower", "1", "--upper", "-1"]).build_field().unwrap_err();
        assert!(err.to_string().contains("empty"));

        assert!(args(&["--octaves", "0"]).build_field().is_err());
        assert!(args(&["--chunk", "0"]).build_field().is_err());
    }
}
