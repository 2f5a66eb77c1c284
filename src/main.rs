use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use grovemark::batch::{
    iconset_sizes, jobs, render_glyph_batch, traced_batch, BatchOptions, IconSize, RenderJob,
    StrokeMode, Variant, MENUBAR_SIZES,
};
use grovemark::config::Config;
use grovemark::glyph::{Glyph, GlyphRegistry};
use grovemark::trace::{load_reference, normalize, Polarity, SourceRegion};
use grovemark::Color;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grovemark", version, about = "Generate tree glyph icons and trace reference logos")]
struct Cli {
    /// Log progress
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every render and trace step
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a procedural design at several sizes
    Render(RenderArgs),
    /// Trace a reference image into clean icons
    Trace(TraceArgs),
    /// List the available designs
    Designs,
    /// Write the default config file if none exists
    InitConfig,
}

#[derive(Args)]
struct RenderArgs {
    /// Design name, see `designs`
    #[arg(short, long, default_value = "dock")]
    design: String,

    /// Output size in pixels; repeat for several
    #[arg(short, long = "size")]
    sizes: Vec<u32>,

    #[arg(long)]
    supersample: Option<u32>,

    /// Fixed stroke width for stroke-based designs, in output pixels
    #[arg(long)]
    stroke: Option<f32>,

    /// Background as RRGGBB or RRGGBBAA; transparent when omitted
    #[arg(long)]
    background: Option<Color>,

    #[arg(long)]
    padding: Option<f32>,

    /// Also write an AppIcon.iconset directory
    #[arg(long)]
    iconset: bool,

    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct TraceArgs {
    /// Reference image (PNG, JPEG, WebP or SVG)
    source: PathBuf,

    #[arg(long)]
    threshold: Option<u8>,

    #[arg(long)]
    padding: Option<f32>,

    #[arg(long, value_enum)]
    region: Option<RegionArg>,

    #[arg(long, value_enum)]
    polarity: Option<PolarityArg>,

    /// Output size in pixels; repeat for several
    #[arg(short, long = "size")]
    sizes: Vec<u32>,

    /// Also write an AppIcon.iconset directory
    #[arg(long)]
    iconset: bool,

    /// Also write menubar template icons
    #[arg(long)]
    menubar: bool,

    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RegionArg {
    Full,
    Left,
    Right,
}

impl From<RegionArg> for SourceRegion {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Full => SourceRegion::Full,
            RegionArg::Left => SourceRegion::LeftHalf,
            RegionArg::Right => SourceRegion::RightHalf,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolarityArg {
    DarkOnLight,
    LightOnDark,
}

impl From<PolarityArg> for Polarity {
    fn from(arg: PolarityArg) -> Self {
        match arg {
            PolarityArg::DarkOnLight => Polarity::DarkOnLight,
            PolarityArg::LightOnDark => Polarity::LightOnDark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load(),
    };

    match cli.command {
        Command::Render(args) => run_render(&config, args),
        Command::Trace(args) => run_trace(&config, args),
        Command::Designs => {
            let registry = GlyphRegistry::with_dock(config.branch.dock_glyph())?;
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::InitConfig => {
            match Config::create_default()? {
                Some(path) => println!("Created {}", path.display()),
                None => println!("Config already exists or no config directory is available"),
            }
            Ok(())
        }
    }
}

fn run_render(config: &Config, args: RenderArgs) -> Result<()> {
    let registry = GlyphRegistry::with_dock(config.branch.dock_glyph())?;
    let glyph = registry.get(&args.design)?;
    let out_dir = args.out.unwrap_or_else(|| config.output.dir.clone());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let sizes = if args.sizes.is_empty() {
        config.render.sizes.clone()
    } else {
        args.sizes
    };
    let options = BatchOptions {
        supersample: args.supersample.unwrap_or(config.render.supersample),
        background: args.background,
        padding_ratio: args.padding,
        stroke: args.stroke.map(StrokeMode::Fixed).unwrap_or_default(),
    };

    tracing::info!(design = glyph.name(), sizes = ?sizes, "rendering");
    let icons = render_glyph_batch(glyph.as_ref(), &jobs(&sizes, &Variant::ALL), &options)?;
    for icon in &icons {
        let name = format!("{}-{}-{}.png", glyph.name(), icon.size, icon.variant.name());
        save(&icon.image, &out_dir.join(name))?;
    }

    if args.iconset {
        write_glyph_iconset(glyph.as_ref(), &options, &out_dir)?;
    }
    Ok(())
}

fn write_glyph_iconset(glyph: &dyn Glyph, options: &BatchOptions, out_dir: &Path) -> Result<()> {
    let entries = iconset_sizes();
    let jobs: Vec<RenderJob> = entries
        .iter()
        .map(|entry| RenderJob {
            size: entry.pixels(),
            variant: Variant::Dark,
        })
        .collect();
    let icons = render_glyph_batch(glyph, &jobs, options)?;
    let images: Vec<RgbaImage> = icons.into_iter().map(|icon| icon.image).collect();
    write_iconset(&entries, &images, out_dir)
}

fn write_iconset(entries: &[IconSize], images: &[RgbaImage], out_dir: &Path) -> Result<()> {
    let iconset_dir = out_dir.join("AppIcon.iconset");
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("creating {}", iconset_dir.display()))?;
    for (entry, image) in entries.iter().zip(images) {
        save(image, &iconset_dir.join(format!("{}.png", entry.iconset_name())))?;
    }
    tracing::info!(
        "iconset written; package it with: iconutil -c icns {}",
        iconset_dir.display()
    );
    Ok(())
}

fn run_trace(config: &Config, args: TraceArgs) -> Result<()> {
    let mut tracer = config.trace.tracer();
    if let Some(threshold) = args.threshold {
        tracer.threshold = threshold;
    }
    if let Some(region) = args.region {
        tracer.region = region.into();
    }
    if let Some(polarity) = args.polarity {
        tracer.polarity = polarity.into();
    }
    let padding = args.padding.unwrap_or(config.trace.padding_ratio);
    let out_dir = args.out.unwrap_or_else(|| config.output.dir.clone());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let source = load_reference(&args.source)?;
    let traced = tracer.trace(&source);
    save(&traced, &out_dir.join("traced-raw.png"))?;

    let sizes = if args.sizes.is_empty() {
        config.render.sizes.clone()
    } else {
        args.sizes
    };
    tracing::info!(source = %args.source.display(), sizes = ?sizes, "tracing");
    for icon in traced_batch(&traced, &sizes, padding)? {
        let name = format!("traced-{}-{}.png", icon.size, icon.variant.name());
        save(&icon.image, &out_dir.join(name))?;
    }

    if args.iconset {
        let entries = iconset_sizes();
        let images = entries
            .iter()
            .map(|entry| normalize(&traced, entry.pixels(), padding))
            .collect::<grovemark::Result<Vec<_>>>()?;
        write_iconset(&entries, &images, &out_dir)?;
    }

    if args.menubar {
        for (name, size) in MENUBAR_SIZES {
            let icon = normalize(&traced, size, padding)?;
            save(&icon, &out_dir.join(format!("{}.png", name)))?;
        }
    }
    Ok(())
}

fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
