use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coax_field::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "coax-field")]
#[command(about = "Electric field of a finite coaxial capacitor with a dielectric layer")]
struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Applied voltage V0 (V)
    #[arg(long)]
    voltage: Option<f64>,

    /// Axial length L (m)
    #[arg(long)]
    length: Option<f64>,

    /// Inner conductor radius r_a (m)
    #[arg(long)]
    inner_radius: Option<f64>,

    /// Gap/dielectric interface radius r_d (m)
    #[arg(long)]
    interface_radius: Option<f64>,

    /// Outer conductor radius r_b (m)
    #[arg(long)]
    outer_radius: Option<f64>,

    /// Radius of the sampled region R (m), must exceed r_b
    #[arg(long)]
    sampling_radius: Option<f64>,

    /// Minimum spacing between samples (m)
    #[arg(long)]
    density: Option<f64>,

    /// Relative permittivity of the gap medium
    #[arg(long)]
    gap_permittivity: Option<f64>,

    /// Relative permittivity of the dielectric layer
    #[arg(long)]
    dielectric_permittivity: Option<f64>,

    /// Drawn glyph length (m)
    #[arg(long)]
    glyph_length: Option<f64>,

    /// Opacity of the reference cylinder in [0, 1]; 0 hides it
    #[arg(long)]
    cylinder_opacity: Option<f64>,

    /// Hide the x/y/z axes
    #[arg(long)]
    no_axes: bool,

    /// Evaluate and log a summary without opening a window
    #[arg(long)]
    headless: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => RunConfig::default(),
        };

        let overrides = ConfigOverrides {
            voltage: self.voltage,
            length: self.length,
            inner_radius: self.inner_radius,
            interface_radius: self.interface_radius,
            outer_radius: self.outer_radius,
            sampling_radius: self.sampling_radius,
            density: self.density,
            gap_permittivity: self.gap_permittivity,
            dielectric_permittivity: self.dielectric_permittivity,
            glyph_length: self.glyph_length,
            cylinder_opacity: self.cylinder_opacity,
            hide_axes: self.no_axes,
        };
        config.with_overrides(&overrides).context("invalid configuration")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coax_field=info,wgpu=error".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.run_config()?;
    let geometry = config.model.geometry;
    info!(?geometry, density = config.model.density, "configuration loaded");

    let solution = config.model.calculate_field().context("computing field")?;
    let (lo, hi) = solution.magnitude_range();
    info!(samples = solution.len(), min = lo, max = hi, "|E| range (V/m)");

    if cli.headless {
        return Ok(());
    }

    FieldPlot::new(solution, geometry, config.display).render();
    Ok(())
}
