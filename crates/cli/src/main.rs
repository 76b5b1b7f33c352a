//! Compute a conductor cross-section outline and print it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use conductor_kernel::{
    build_outline_with, BoundingBox2d, ConductorSpec, Outline, Point2d, Tolerance,
};

#[derive(Parser, Debug)]
#[command(name = "conductor-outline")]
#[command(about = "Compute the outline of a conductor with two rounded right-hand corners", long_about = None)]
#[command(version)]
struct Cli {
    /// Read the conductor parameters from a JSON file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with_all = ["length", "height", "upper_radius", "lower_radius", "rotation"])]
    spec: Option<PathBuf>,

    /// Conductor length
    #[arg(long, default_value_t = 100.0)]
    length: f64,

    /// Conductor height
    #[arg(long, default_value_t = 20.0)]
    height: f64,

    /// Rounding radius of the top-right corner
    #[arg(long, default_value_t = 20.0)]
    upper_radius: f64,

    /// Rounding radius of the bottom-right corner
    #[arg(long, default_value_t = 15.0)]
    lower_radius: f64,

    /// Counter-clockwise rotation in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotation: f64,

    /// Rotation center x (defaults to the shape's center)
    #[arg(long, requires = "center_y", allow_hyphen_values = true)]
    center_x: Option<f64>,

    /// Rotation center y (defaults to the shape's center)
    #[arg(long, requires = "center_x", allow_hyphen_values = true)]
    center_y: Option<f64>,

    /// Relative length tolerance for intersection and ordering checks
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn conductor_spec(&self) -> Result<ConductorSpec> {
        match &self.spec {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse conductor spec in {}", path.display()))
            }
            None => Ok(ConductorSpec::new(
                self.length,
                self.height,
                self.upper_radius,
                self.lower_radius,
            )
            .with_rotation(self.rotation)),
        }
    }

    fn rotation_center(&self) -> Option<Point2d> {
        match (self.center_x, self.center_y) {
            (Some(x), Some(y)) => Some(Point2d::new(x, y)),
            _ => None,
        }
    }

    fn tolerance(&self) -> Tolerance {
        Tolerance {
            linear: self.tolerance,
            ..Tolerance::default()
        }
    }
}

/// Everything a renderer needs to draw the outline.
#[derive(Debug, Serialize)]
struct Report {
    spec: ConductorSpec,
    outline: Outline,
    bounding_box: BoundingBox2d,
    /// Bounding box padded by `ConductorSpec::plot_margin`.
    view: BoundingBox2d,
}

fn compute(cli: &Cli) -> Result<Report> {
    let spec = cli.conductor_spec()?;
    debug!(?spec, "conductor parameters");

    let outline = build_outline_with(&spec, cli.rotation_center(), &cli.tolerance())
        .context("cannot build conductor outline")?;
    let bounding_box = outline.bounding_box();
    Ok(Report {
        spec,
        outline,
        bounding_box,
        view: bounding_box.expanded(spec.plot_margin()),
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = compute(&cli)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}
