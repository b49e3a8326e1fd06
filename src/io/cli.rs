//! Command-line interface and the end-to-end collage pipeline

use crate::compose::collage::{CollageStyle, compose_collage};
use crate::io::configuration::{CollageConfig, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT, DEFAULT_TILE_SIZE};
use crate::io::discovery::discover_images;
use crate::io::encoder::save_collage;
use crate::io::error::Result;
use crate::io::loader::load_images;
use crate::io::logging::Verbosity;
use crate::io::progress::ProgressManager;
use crate::sampling::sampler::{seeded_rng, select_random, sort_by_path};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "gridcollage")]
#[command(
    version,
    about = "Build an N×N captioned collage from randomly chosen images"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Input directory containing images (searched recursively)
    #[arg(short, long, value_name = "PATH")]
    pub dir: PathBuf,

    /// Output file; the extension selects PNG or JPEG
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Number of images per row and column
    #[arg(short = 'n', long = "grid", value_name = "N", default_value_t = DEFAULT_GRID_SIZE)]
    pub grid: u32,

    /// Tile width and height in pixels
    #[arg(short, long, value_name = "PX", default_value_t = DEFAULT_TILE_SIZE)]
    pub tile: u32,

    /// Random seed for a reproducible selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-image details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level requested by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Validate the arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or tile size is invalid or the output
    /// extension is not supported
    pub fn to_config(&self) -> Result<CollageConfig> {
        CollageConfig::validate(
            self.dir.clone(),
            self.out.clone(),
            self.grid,
            self.tile,
            self.seed,
        )
    }
}

/// Runs discovery, sampling, decoding, composition and encoding in sequence
pub struct CollageRunner {
    config: CollageConfig,
    style: CollageStyle,
    show_progress: bool,
}

impl CollageRunner {
    /// Create a runner with the default style
    pub fn new(config: CollageConfig, show_progress: bool) -> Self {
        Self {
            config,
            style: CollageStyle::default(),
            show_progress,
        }
    }

    /// Replace the drawing style
    #[must_use]
    pub fn with_style(mut self, style: CollageStyle) -> Self {
        self.style = style;
        self
    }

    /// Configuration this runner was built with
    pub const fn config(&self) -> &CollageConfig {
        &self.config
    }

    /// Build the collage and write it to the configured output path
    ///
    /// Returns the paths placed in the grid, in grid order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input directory cannot be scanned
    /// - It holds fewer than N² supported images
    /// - Any selected image fails to decode
    /// - The output cannot be encoded or written
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let config = &self.config;
        let needed = config.required_images();

        let files = discover_images(&config.input_dir)?;
        tracing::info!(
            dir = %config.input_dir.display(),
            found = files.len(),
            grid = config.layout.grid_size(),
            tile = config.layout.tile_size(),
            needed,
            "scanned input directory"
        );

        let (mut rng, seed) = seeded_rng(config.seed);
        tracing::debug!(seed, "sampling images");
        let mut selected = select_random(&files, needed, &mut rng)?;
        sort_by_path(&mut selected);

        let progress = if self.show_progress {
            ProgressManager::new(needed)
        } else {
            ProgressManager::hidden()
        };

        progress.start_stage("decoding");
        let images = load_images(&selected, |loaded| progress.advance(&loaded.name))?;

        progress.start_stage("composing");
        let collage = compose_collage(&config.layout, &images, &self.style, |index| {
            let name = images.get(index).map_or("", |loaded| loaded.name.as_str());
            progress.advance(name);
        })?;
        progress.finish();

        save_collage(&collage.canvas, &config.output_path, config.output_format)?;
        tracing::info!(
            output = %config.output_path.display(),
            width = collage.canvas.width(),
            height = collage.canvas.height(),
            tiles = collage.placements.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "wrote collage"
        );

        Ok(selected)
    }
}
