//! TOML configuration deserialisation for interpolation jobs.
//!
//! ```toml
//! name = "ramp"
//! x = [0.0, 1.0, 5.0, 10.0]
//! y = [10.0, 10.0, 5.0, 0.0]
//! lower = 0.0          # clamped slope
//! upper = "natural"    # or any slope with magnitude >= 1e30
//!
//! [grid]
//! points = 100
//! endpoint = false
//!
//! [output]
//! directory = "out"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use cspline::driver::Dataset;
use cspline::Boundary;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub lower: BoundaryConfig,
    #[serde(default)]
    pub upper: BoundaryConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_name() -> String {
    "custom".into()
}

/// A boundary given either as the keyword `"natural"` or as a first derivative.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum BoundaryConfig {
    Keyword(BoundaryKeyword),
    Slope(f64),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKeyword {
    Natural,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        BoundaryConfig::Keyword(BoundaryKeyword::Natural)
    }
}

impl From<BoundaryConfig> for Boundary<f64> {
    fn from(cfg: BoundaryConfig) -> Self {
        match cfg {
            BoundaryConfig::Keyword(BoundaryKeyword::Natural) => Boundary::Natural,
            BoundaryConfig::Slope(yp) => Boundary::from_derivative(yp),
        }
    }
}

/// Observation grid. Bounds default to the first and last knot.
#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_points")]
    pub points: usize,
    pub start: Option<f64>,
    pub stop: Option<f64>,
    /// Include `stop` in the grid
    #[serde(default)]
    pub endpoint: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            start: None,
            stop: None,
            endpoint: false,
        }
    }
}

pub fn default_points() -> usize {
    100
}

/// Output file locations.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
    #[serde(default = "default_interp_file")]
    pub interp_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            dataset_file: default_dataset_file(),
            interp_file: default_interp_file(),
        }
    }
}

fn default_directory() -> String {
    ".".into()
}

pub fn default_dataset_file() -> String {
    "dataset.txt".into()
}

pub fn default_interp_file() -> String {
    "interp.txt".into()
}

impl JobConfig {
    /// The knot table and boundaries described by this job.
    pub fn dataset(&self) -> Dataset {
        Dataset::new(
            self.name.clone(),
            self.x.clone(),
            self.y.clone(),
            self.lower.into(),
            self.upper.into(),
        )
    }
}

/// Load and validate a job configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate a job configuration from TOML text.
pub fn parse_config(content: &str) -> Result<JobConfig> {
    let job: JobConfig = toml::from_str(content).context("Failed to parse TOML")?;
    validate(&job)?;
    Ok(job)
}

fn validate(job: &JobConfig) -> Result<()> {
    if job.x.len() != job.y.len() {
        anyhow::bail!(
            "x and y must have the same length (got {} and {})",
            job.x.len(),
            job.y.len()
        );
    }
    if job.x.len() < 2 {
        anyhow::bail!("At least 2 knots are required, got {}", job.x.len());
    }
    if let Some(i) = (1..job.x.len()).find(|&i| job.x[i] <= job.x[i - 1]) {
        anyhow::bail!("x must be strictly increasing (x[{}] <= x[{}])", i, i - 1);
    }
    if job.grid.points == 0 {
        anyhow::bail!("grid.points must be at least 1");
    }
    Ok(())
}
