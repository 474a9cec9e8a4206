//! Command-line interface for analysing a single image

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{LevelFilter, info};

use crate::analysis::binarize::{Polarity, ThresholdPolicy, binarize};
use crate::analysis::box_count::{BoxCountSeries, count_boxes};
use crate::io::catalog::{describe_images, resolve_image};
use crate::io::configuration::{
    AnalysisConfig, BINARY_EXTENSION, BINARY_SUFFIX, DEFAULT_GRID_SIZE, DEFAULT_IMAGES_DIR,
    DEFAULT_THRESHOLD,
};
use crate::io::error::{Result, invalid_input};
use crate::io::image::{export_grid_as_png, load_raster};
use crate::io::postprocess::PlotCommand;
use crate::io::series::{derived_path, output_path_for, write_series};

#[derive(Parser, Debug)]
#[command(name = "fractal2d")]
#[command(
    author,
    version,
    about = "Box-counting data for estimating the fractal dimension of an image"
)]
/// Command-line arguments for the analysis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image file name, resolved against the images directory
    #[arg(value_name = "IMAGE", required_unless_present = "list")]
    pub image: Option<PathBuf>,

    /// Directory holding the images available for analysis
    #[arg(long, value_name = "DIR", default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Directory for the results file (defaults to the working directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Side length of the canonical grid (power of two)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Intensity threshold separating foreground from background
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Treat pixels at or above the threshold as foreground
    #[arg(long)]
    pub light_foreground: bool,

    /// Also write the binarized grid as <image>_binary.png
    #[arg(short = 'b', long)]
    pub save_binary: bool,

    /// Run the Python plotting script on the results
    #[arg(short, long)]
    pub plot: bool,

    /// List the images available for analysis and exit
    #[arg(short, long)]
    pub list: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse process arguments, listing the available images in `--help`
    pub fn parse_with_catalog() -> Self {
        Self::try_parse_with_catalog_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, appending the image listing to the help output
    ///
    /// The images directory is only read when help is requested. The listing
    /// follows `--images-dir` when it appears in `args`.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, or the rendered help
    /// for `-h`/`--help`
    pub fn try_parse_with_catalog_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.iter().cloned()) {
            Err(help) if help.kind() == ErrorKind::DisplayHelp => {
                let listing = describe_images(&images_dir_in(&args));
                let command = Self::command().after_help(listing);
                Err(command.try_get_matches_from(args).err().unwrap_or(help))
            }
            parsed => parsed,
        }
    }

    /// Analysis parameters selected on the command line
    pub const fn config(&self) -> AnalysisConfig {
        let polarity = if self.light_foreground {
            Polarity::LightForeground
        } else {
            Polarity::DarkForeground
        };

        AnalysisConfig {
            grid_size: self.size,
            threshold: ThresholdPolicy {
                threshold: self.threshold,
                polarity,
            },
        }
    }

    /// Log level implied by `--quiet`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

// Value of `--images-dir` in raw arguments, before clap has validated them
fn images_dir_in(args: &[OsString]) -> PathBuf {
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--images-dir" {
            return args
                .next()
                .map_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR), PathBuf::from);
        }
        if let Some(dir) = arg.to_str().and_then(|a| a.strip_prefix("--images-dir=")) {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(DEFAULT_IMAGES_DIR)
}

/// Files and results produced by one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Resolved path of the analysed image
    pub image_path: PathBuf,
    /// Results file that was written
    pub output_path: PathBuf,
    /// Binarized preview, when requested
    pub binary_path: Option<PathBuf>,
    /// Box counts written to the results file
    pub series: BoxCountSeries,
}

/// Runs the analysis selected by the CLI arguments
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// List images or analyse the requested image
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, image loading, box
    /// counting, writing results or post-processing fails
    // Allow print for the listing, which is the command's output
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        if self.cli.list {
            println!("{}", describe_images(&self.cli.images_dir));
            return Ok(());
        }

        let report = self.analyze()?;

        let image_name = self.cli.image.as_deref().unwrap_or(&report.image_path);
        let plot = PlotCommand::new(&report.output_path, image_name);
        for line in plot.guidance() {
            info!("{line}");
        }

        if self.cli.plot {
            info!("Post-processing in Python");
            plot.run()?;
        }

        Ok(())
    }

    /// Analyse the requested image and write its results file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No image was given or it cannot be found or decoded
    /// - The grid size is invalid
    /// - The results file or binarized preview cannot be written
    pub fn analyze(&self) -> Result<AnalysisReport> {
        let config = self.cli.config();
        config.validate()?;

        let image = self
            .cli
            .image
            .as_deref()
            .ok_or_else(|| invalid_input(&"no image given; pass an image name or --list"))?;
        let image_path = resolve_image(&self.cli.images_dir, image)?;
        info!("Analysing {}", image_path.display());

        let raster = load_raster(&image_path)?;
        let grid = binarize(&raster, config.grid_size, &config.threshold)?;
        let (rows, cols) = raster.dim();
        info!(
            "Resampled {cols}x{rows} image to {0}x{0} grid with {1} occupied cells",
            grid.side(),
            grid.occupied_count()
        );

        let binary_path = if self.cli.save_binary {
            let path = self.binary_path(&image_path);
            export_grid_as_png(&grid, &path)?;
            info!("Saved binarized grid to {}", path.display());
            Some(path)
        } else {
            None
        };

        let series = count_boxes(&grid)?;
        let output_path = output_path_for(&image_path, self.cli.output_dir.as_deref());
        write_series(&series, &output_path)?;
        info!(
            "Analysis complete. Saved results to {}",
            output_path.display()
        );

        Ok(AnalysisReport {
            image_path,
            output_path,
            binary_path,
            series,
        })
    }

    fn binary_path(&self, image_path: &Path) -> PathBuf {
        derived_path(
            image_path,
            self.cli.output_dir.as_deref(),
            BINARY_SUFFIX,
            BINARY_EXTENSION,
        )
    }
}
