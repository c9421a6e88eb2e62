//! Command-line interface for growing circuit patterns into PNG and GIF files

use crate::algorithm::generator::{GrowthConfig, PatternGenerator, TerminationPolicy};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_LEVELS, DEFAULT_MIN_ROW_DENSITY,
    DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_TERMINATION_SCALE, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    VISUALIZATION_SUFFIX, default_move_table, default_split_table, parse_move_weights,
    parse_split_weights,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Palette, export_pattern_as_png};
use crate::io::progress::ProgressManager;
use crate::io::raster::{CanvasLayout, LevelRaster};
use crate::io::visualization::export_growth_gif;
use crate::math::random::RandomSource;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "circuitgrow")]
#[command(
    author,
    version,
    about = "Grow branching circuit patterns level by level"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum levels to grow before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEVELS)]
    pub levels: u32,

    /// Number of patterns to generate, using consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Edge length of one grid cell in pixels
    #[arg(short = 'z', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Split strategy weights, e.g. "no-split=0.8,split-2=0.1,split-3=0.1"
    #[arg(long)]
    pub split_weights: Option<String>,

    /// Move weights, e.g. "up=0.5,up-left=0.25,up-right=0.25"
    #[arg(long)]
    pub move_weights: Option<String>,

    /// Multiplier turning level progress into a termination chance
    #[arg(short, long, default_value_t = DEFAULT_TERMINATION_SCALE)]
    pub termination_scale: f64,

    /// Also export the growth as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Log every node's decisions at debug level
    #[arg(long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the binary
    pub const fn log_filter(&self) -> &'static str {
        if self.trace { "debug" } else { "warn" }
    }

    /// Canvas layout from the size arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is zero
    pub fn layout(&self) -> Result<CanvasLayout> {
        CanvasLayout::new(self.width, self.height, self.cell_size)
    }

    /// Growth tuning from the weight and termination arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a weight table cannot be parsed or the resulting
    /// configuration is invalid
    pub fn growth_config(&self) -> Result<GrowthConfig> {
        let split_weights = match &self.split_weights {
            Some(text) => parse_split_weights(text)?,
            None => default_split_table(),
        };
        let move_weights = match &self.move_weights {
            Some(text) => parse_move_weights(text)?,
            None => default_move_table(),
        };

        let config = GrowthConfig {
            split_weights,
            move_weights,
            termination: TerminationPolicy::Progressive {
                scale: self.termination_scale,
            },
            min_row_density: DEFAULT_MIN_ROW_DENSITY,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Outcome of growing one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSummary {
    /// Seed the pattern was grown from
    pub seed: u64,
    /// Levels advanced before growth stopped
    pub levels: u32,
    /// Total segments emitted
    pub segments: usize,
    /// Whether growth terminated on its own rather than hitting the level limit
    pub exhausted: bool,
    /// Path of the written PNG
    pub output: PathBuf,
}

/// Orchestrates pattern growth and export with progress tracking
pub struct PatternRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PatternRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Grow and export every requested pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, growth hits a malformed
    /// table, or any export fails
    pub fn process(&mut self) -> Result<Vec<PatternSummary>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one pattern must be requested",
            ));
        }

        let layout = self.cli.layout()?;
        let config = self.cli.growth_config()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut summaries = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let generator = PatternGenerator::new(layout.cells_wide(), layout.cells_high(), seed)
                .with_config(config.clone())?;
            summaries.push(self.run_pattern(index, generator, layout)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(summaries)
    }

    fn run_pattern<S: RandomSource>(
        &self,
        index: usize,
        mut generator: PatternGenerator<S>,
        layout: CanvasLayout,
    ) -> Result<PatternSummary> {
        let seed = self.cli.seed.wrapping_add(index as u64);
        let output = self.output_path(seed);

        if let Some(ref pm) = self.progress_manager {
            let name = output.file_name().unwrap_or_default().to_string_lossy();
            pm.start_pattern(index, &name, self.cli.levels);
        }

        let mut raster = LevelRaster::new(layout);
        let mut segment_count = 0;

        while generator.levels_advanced() < self.cli.levels && !generator.is_exhausted() {
            let segments = if self.cli.trace {
                let (segments, trace) = generator.advance_traced()?;
                for node in &trace.nodes {
                    log::debug!("{node:?}");
                }
                segments
            } else {
                generator.advance()?
            };

            segment_count += segments.len();
            raster.draw_segments(&segments);

            if let Some(ref pm) = self.progress_manager {
                pm.update_level(index, generator.levels_advanced(), generator.frontier().len());
            }
        }

        let palette = Palette::default();
        export_pattern_as_png(&raster, palette, &output)?;

        if self.cli.visualize {
            export_growth_gif(
                &raster,
                palette,
                &Self::visualization_path(&output),
                self.cli.frame_delay,
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_pattern(index, generator.levels_advanced());
        }

        log::info!(
            "seed {seed}: {} levels, {segment_count} segments -> {}",
            generator.levels_advanced(),
            output.display()
        );

        Ok(PatternSummary {
            seed,
            levels: generator.levels_advanced(),
            segments: segment_count,
            exhausted: generator.is_exhausted(),
            output,
        })
    }

    /// PNG path for the pattern grown from `seed`
    ///
    /// A single pattern is written to the output path as given; several
    /// patterns get the seed appended to the file stem.
    pub fn output_path(&self, seed: u64) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self.cli.output.extension().unwrap_or_default();
        let name = format!(
            "{}_{seed}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        self.cli.output.with_file_name(name)
    }

    /// GIF path accompanying a PNG output
    pub fn visualization_path(output: &Path) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());
        output.with_file_name(name)
    }
}
