use anyhow::{Context, Result};
use clap::Parser;
use handle_core::handle::{build_slices, generate, HandleConfig};
use handle_core::kernel::{GeometryKernel, LoftCache, TruckKernel};
use handle_core::scene::Scene;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "handle")]
#[command(about = "Loft a handle solid through superellipse cross sections")]
struct Cmd {
    /// JSON handle config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fewer interpolation steps and profile points
    #[arg(long)]
    low_resolution: bool,

    /// Number of axial segments
    #[arg(long)]
    count: Option<usize>,

    /// Axial length of two consecutive segments
    #[arg(long)]
    offset: Option<f64>,

    /// Write the lofted solid as STEP
    #[arg(long)]
    step: Option<PathBuf>,

    /// Write the tessellated solid as JSON
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Write the cross sections as JSON and skip lofting unless --step or --mesh is given
    #[arg(long)]
    slices: Option<PathBuf>,

    /// Keep the cross-section wires in the scene after lofting
    #[arg(long)]
    keep_wires: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cmd {
    fn load_config(&self) -> Result<HandleConfig> {
        let mut config = match &self.config {
            Some(path) => HandleConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => HandleConfig::default(),
        };
        if self.low_resolution {
            config.low_resolution = true;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        config.validate()?;
        Ok(config)
    }

    fn needs_loft(&self) -> bool {
        self.step.is_some() || self.mesh.is_some() || self.slices.is_none()
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    run(&cmd)
}

fn run(cmd: &Cmd) -> Result<()> {
    let config = cmd.load_config()?;
    let resolution = config.resolution();
    tracing::info!(
        count = config.count,
        offset = config.offset,
        steps = resolution.interpolation_steps,
        points = resolution.points_per_profile,
        "handle config"
    );

    if let Some(path) = &cmd.slices {
        let slices = build_slices(&config)?;
        write_output(path, &serde_json::to_vec_pretty(&slices)?)?;
        tracing::info!(slices = slices.len(), path = %path.display(), "wrote cross sections");
    }

    if !cmd.needs_loft() {
        return Ok(());
    }

    let kernel = TruckKernel::new();
    let mut cache = LoftCache::new();
    let mut scene = Scene::new();
    let id = generate(&kernel, &mut cache, &mut scene, &config, cmd.keep_wires)?;
    let solid = scene
        .get(id)
        .and_then(|s| s.as_solid())
        .context("lofted solid missing from scene")?;
    tracing::info!(%id, shapes = scene.len(), "lofted handle");

    if let Some(path) = &cmd.step {
        let step = kernel.export_step(solid)?;
        write_output(path, step.as_bytes())?;
        tracing::info!(path = %path.display(), "wrote STEP");
    }

    if let Some(path) = &cmd.mesh {
        let mesh = kernel.tessellate(solid)?;
        write_output(path, &serde_json::to_vec(&mesh)?)?;
        tracing::info!(
            vertices = mesh.positions.len(),
            triangles = mesh.triangles.len(),
            path = %path.display(),
            "wrote mesh"
        );
    }

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
