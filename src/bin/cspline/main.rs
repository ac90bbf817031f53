//! cspline command-line interface.
//!
//! Interpolate a tabulated dataset with a cubic spline and write the knots
//! and the interpolated samples as text tables:
//! ```sh
//! cspline builtin 2 --points 100 --output out/
//! cspline run job.toml
//! cspline datasets
//! ```

mod config;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use cspline::driver::{self, Dataset};
use cspline::eval::exit_with;
use cspline::utils::{linspace, linspace_open};
use cspline::{Boundary, SplineError};

#[derive(Parser)]
#[command(name = "cspline")]
#[command(about = "Cubic spline interpolation of tabulated data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate one of the built-in datasets.
    Builtin {
        /// Dataset number (see `cspline datasets`).
        #[arg(default_value_t = 2)]
        id: usize,
        /// Number of observation points over [first knot, last knot).
        #[arg(short = 'n', long, default_value_t = config::default_points())]
        points: usize,
        /// Output directory.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Interpolate a dataset described by a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in datasets.
    Datasets,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let result = dispatch(cli);
    // Bad knots are fatal, with the classic diagnostic
    if let Err(err) = &result {
        if let Some(&spline_err) = err.downcast_ref::<SplineError>() {
            exit_with(spline_err);
        }
    }
    result
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Builtin { id, points, output } => {
            let dataset = Dataset::builtin(id)
                .with_context(|| format!("No built-in dataset #{id} (expected 1 or 2)"))?;
            anyhow::ensure!(points > 0, "--points must be at least 1");
            let (start, stop) = dataset.span().context("Dataset has no knots")?;
            let grid = linspace_open(start, stop, points);

            interpolate(
                &dataset,
                &grid,
                &output.join(config::default_dataset_file()),
                &output.join(config::default_interp_file()),
            )
        }
        Commands::Run { config, output } => {
            let job = config::load_config(&config)?;
            info!("Configuration: {}", config.display());
            let dataset = job.dataset();

            let (first, last) = dataset.span().context("Dataset has no knots")?;
            let start = job.grid.start.unwrap_or(first);
            let stop = job.grid.stop.unwrap_or(last);
            let grid = if job.grid.endpoint {
                linspace(start, stop, job.grid.points)
            } else {
                linspace_open(start, stop, job.grid.points)
            };

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            interpolate(
                &dataset,
                &grid,
                &out_dir.join(&job.output.dataset_file),
                &out_dir.join(&job.output.interp_file),
            )
        }
        Commands::Datasets => {
            for id in 1.. {
                let Some(dataset) = Dataset::builtin(id) else {
                    break;
                };
                println!(
                    "{id}: {} ({} knots, lower: {}, upper: {})",
                    dataset.name,
                    dataset.x.len(),
                    describe(dataset.lower),
                    describe(dataset.upper)
                );
            }
            Ok(())
        }
    }
}

/// Run the driver, replacing any existing output files.
fn interpolate(
    dataset: &Dataset,
    grid: &[f64],
    dataset_path: &Path,
    interp_path: &Path,
) -> Result<()> {
    for path in [dataset_path, interp_path] {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }
    }

    let mut dataset_sink = BufWriter::new(
        File::create(dataset_path)
            .with_context(|| format!("Failed to create {}", dataset_path.display()))?,
    );
    let mut interp_sink = BufWriter::new(
        File::create(interp_path)
            .with_context(|| format!("Failed to create {}", interp_path.display()))?,
    );

    driver::run(dataset, grid, &mut dataset_sink, &mut interp_sink)?;

    println!("Knots written to {}", dataset_path.display());
    println!("Interpolation written to {}", interp_path.display());
    Ok(())
}

fn describe(boundary: Boundary<f64>) -> String {
    match boundary {
        Boundary::Natural => "natural".into(),
        Boundary::Clamped(yp) => format!("clamped, slope {yp}"),
    }
}
