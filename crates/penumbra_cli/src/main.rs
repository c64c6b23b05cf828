//! Command-line front end: builds a preset scene, renders it and writes the
//! image to disk.

mod presets;

use anyhow::{bail, Context, Result};
use clap::Parser;
use penumbra_renderer::{render, render_parallel, Camera, RenderConfig};
use presets::ScenePreset;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Render a small ray-traced scene with soft shadows and glossy reflections
#[derive(Parser, Debug)]
#[command(name = "penumbra", version, about)]
struct Cli {
    /// Scene preset to render
    #[arg(short, long, value_enum, default_value_t = ScenePreset::Original)]
    scene: ScenePreset,

    /// Image width in pixels (defaults to the preset's framing)
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Image height in pixels (defaults to the preset's framing)
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Maximum reflection depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Sub-pixel grid step; 0.25 gives 16 samples per pixel
    #[arg(long, default_value_t = 0.25)]
    aa_step: f64,

    /// Reflection rays per reflective hit
    #[arg(long, default_value_t = 3)]
    glossy_rays: u32,

    /// Ambient light intensity
    #[arg(long, default_value_t = 0.2)]
    ambient: f64,

    /// Seed for glossy reflection jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Render on the calling thread in raster order
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Output file; the extension picks the format (.ppm or .png)
    #[arg(short, long, default_value = "picture.ppm")]
    output: PathBuf,
}

impl Cli {
    fn resolution(&self) -> (u32, u32) {
        let (width, height) = self.scene.resolution();
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_ambient(self.ambient)
            .with_max_depth(self.depth)
            .with_anti_alias_step(self.aa_step)
            .with_glossy_rays(self.glossy_rays)
            .with_seed(self.seed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!("unsupported output file {}; use .ppm or .png", path.display()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let format = OutputFormat::from_path(&cli.output)?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let start = Instant::now();
    let scene = cli.scene.build();
    log::info!("Scene {:?} built in {:?}", cli.scene, start.elapsed());

    let (width, height) = cli.resolution();
    let camera = Camera::new().with_resolution(width, height);
    let config = cli.render_config();

    let image = if cli.sequential {
        render(&camera, &scene, &config)
    } else {
        render_parallel(&camera, &scene, &config)
    }
    .context("render failed")?;

    log::info!("Writing {}", cli.output.display());
    match format {
        OutputFormat::Ppm => image.save_ppm(&cli.output),
        OutputFormat::Png => image.save_png(&cli.output),
    }
    .with_context(|| format!("failed to write {}", cli.output.display()))?;

    log::info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use penumbra_renderer::ImageBuffer;

    #[test]
    fn test_default_args() {
        let cli = Cli::try_parse_from(["penumbra"]).unwrap();
        assert_eq!(cli.scene, ScenePreset::Original);
        assert_eq!(cli.resolution(), (1500, 1000));
        assert_eq!(cli.output, PathBuf::from("picture.ppm"));

        let config = cli.render_config();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.anti_alias_step, 0.25);
        assert_eq!(config.glossy_rays, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "penumbra", "--scene", "classic", "-W", "64", "-H", "48", "--depth", "1", "--aa-step", "0.5",
            "--glossy-rays", "2", "--seed", "11", "--sequential", "-o", "out.png",
        ])
        .unwrap();

        assert_eq!(cli.scene, ScenePreset::Classic);
        assert_eq!(cli.resolution(), (64, 48));
        assert!(cli.sequential);

        let config = cli.render_config();
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.anti_alias_step, 0.5);
        assert_eq!(config.glossy_rays, 2);
        assert_eq!(config.seed, 11);
    }

    #[test]
    fn test_resolution_falls_back_per_axis() {
        let cli = Cli::try_parse_from(["penumbra", "--scene", "showcase", "-W", "100"]).unwrap();
        assert_eq!(cli.resolution(), (100, 540));
    }

    #[test]
    fn test_sequential_conflicts_with_threads() {
        assert!(Cli::try_parse_from(["penumbra", "--sequential", "--threads", "2"]).is_err());
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::from_path(Path::new("a.ppm")).unwrap(), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path(Path::new("b.PNG")).unwrap(), OutputFormat::Png);
        assert!(OutputFormat::from_path(Path::new("c.jpg")).is_err());
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_run_writes_ppm() {
        let output = std::env::temp_dir().join(format!("penumbra_cli_{}.ppm", std::process::id()));
        let cli = Cli::try_parse_from([
            "penumbra", "--scene", "classic", "-W", "12", "-H", "8", "--aa-step", "1", "--sequential", "-o",
        ]
        .into_iter()
        .map(String::from)
        .chain([output.display().to_string()]))
        .unwrap();

        run(&cli).unwrap();

        let file = std::fs::File::open(&output).unwrap();
        let image = ImageBuffer::read_ppm(std::io::BufReader::new(file)).unwrap();
        assert_eq!((image.width, image.height), (12, 8));

        let _ = std::fs::remove_file(output);
    }
}
