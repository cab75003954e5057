use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use kona::{Effect, EffectLoop, HeadlessHost, InputEvent, LoopState, Point, Viewport};

#[derive(Parser, Debug)]
#[command(name = "kona", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write sitemap.xml, robots.txt and per-page metadata JSON.
    Seo(SeoArgs),
    /// Print metadata JSON for one page.
    Meta(MetaArgs),
    /// Drive an effect headlessly and write its last frame as a PNG.
    Effect(EffectArgs),
}

#[derive(Parser, Debug)]
struct SeoArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Site configuration JSON (defaults to the production site).
    #[arg(long)]
    site: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MetaArgs {
    /// Site-relative path.
    #[arg(long)]
    path: String,

    /// Page title.
    #[arg(long)]
    title: String,

    /// Meta description.
    #[arg(long)]
    description: String,

    /// Keyword (repeatable).
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Social preview image.
    #[arg(long)]
    image: Option<String>,

    /// Site configuration JSON.
    #[arg(long)]
    site: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EffectArgs {
    /// Effect to run.
    #[arg(value_enum)]
    kind: EffectKind,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Number of host frames to run.
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Viewport width.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// RNG seed for effects that scatter particles.
    #[arg(long)]
    seed: Option<u64>,

    /// Effect configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectKind {
    Splatter,
    Starfield,
    Gallery,
    Parallax,
}

const FRAME_DT_SECS: f64 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Seo(args) => cmd_seo(args),
        Command::Meta(args) => cmd_meta(args),
        Command::Effect(args) => cmd_effect(args),
    }
}

fn load_site(path: Option<&Path>) -> anyhow::Result<kona::SiteConfig> {
    let site = match path {
        Some(p) => kona::SiteConfig::from_json_file(p)?,
        None => kona::SiteConfig::default(),
    };
    Ok(site.with_env_overrides()?)
}

fn read_json<T: serde::de::DeserializeOwned + Default>(path: Option<&Path>) -> anyhow::Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config JSON '{}'", path.display()))?;
    Ok(cfg)
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_seo(args: SeoArgs) -> anyhow::Result<()> {
    let site = load_site(args.site.as_deref())?;

    let pages_dir = args.out.join("pages");
    std::fs::create_dir_all(&pages_dir)
        .with_context(|| format!("create output dir '{}'", pages_dir.display()))?;

    let entries = kona::sitemap(&site);
    write_file(&args.out.join("sitemap.xml"), &kona::sitemap_xml(&entries))?;
    write_file(&args.out.join("robots.txt"), &kona::robots(&site).to_text())?;

    for page in kona::PAGES {
        let doc = serde_json::to_string_pretty(&page.document(&site))
            .with_context(|| format!("serialize page '{}'", page.path))?;
        write_file(&pages_dir.join(format!("{}.json", page.slug)), &doc)?;
    }

    eprintln!(
        "wrote {} ({} sitemap entries, {} pages)",
        args.out.display(),
        entries.len(),
        kona::PAGES.len()
    );
    Ok(())
}

fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let site = load_site(args.site.as_deref())?;
    let mut page = kona::PageDescriptor::new(args.title, args.description, args.path)
        .with_keywords(args.keywords);
    page.image = args.image;

    let meta = kona::build_metadata(&site, &page);
    let json = serde_json::to_string_pretty(&meta).context("serialize metadata")?;
    println!("{json}");
    Ok(())
}

fn cmd_effect(args: EffectArgs) -> anyhow::Result<()> {
    let viewport = Viewport::new(f64::from(args.width), f64::from(args.height));
    let config = args.config.as_deref();

    let frame = match args.kind {
        EffectKind::Splatter => {
            let mut cfg: kona::SplatterConfig = read_json(config)?;
            if let Some(seed) = args.seed {
                cfg.seed = seed;
            }
            drive(kona::SplatterEffect::new(cfg), viewport, args.frames, |i, vp| {
                let t = f64::from(i) / 30.0;
                let pos = Point::new(
                    vp.width * (0.5 + 0.35 * (t * 1.3).cos()),
                    vp.height * (0.5 + 0.3 * (t * 2.1).sin()),
                );
                vec![InputEvent::PointerMove {
                    pos,
                    time_secs: f64::from(i) * FRAME_DT_SECS,
                }]
            })?
        }
        EffectKind::Starfield => {
            let mut cfg: kona::StarfieldConfig = read_json(config)?;
            if let Some(seed) = args.seed {
                cfg.seed = seed;
            }
            drive(kona::StarfieldEffect::new(cfg), viewport, args.frames, |_, _| {
                Vec::new()
            })?
        }
        EffectKind::Gallery => {
            let cfg: kona::GalleryConfig = read_json(config)?;
            let items = kona::PAGES
                .iter()
                .map(|p| kona::GalleryItem {
                    title: p.title.to_owned(),
                    description: p.description.to_owned(),
                    image: format!("/images{}.webp", p.path.trim_end_matches('/')),
                    link: Some(p.path.to_owned()),
                })
                .collect();
            drive(
                kona::RotatingGallery::with_config(items, cfg),
                viewport,
                args.frames,
                |_, _| Vec::new(),
            )?
        }
        EffectKind::Parallax => {
            let cfg: kona::ParallaxConfig = read_json(config)?;
            let end = cfg.section_top + cfg.section_height;
            let frames = args.frames.max(1);
            drive(kona::ParallaxEffect::new(cfg), viewport, frames, |i, _| {
                vec![InputEvent::Scroll {
                    scroll_y: end * f64::from(i + 1) / f64::from(frames),
                }]
            })?
        }
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Run `effect` for `frames` host frames, feeding `script(frame, viewport)` before each.
fn drive<E: Effect>(
    effect: E,
    viewport: Viewport,
    frames: u32,
    mut script: impl FnMut(u32, Viewport) -> Vec<InputEvent>,
) -> anyhow::Result<kona::FrameRGBA> {
    let surface = kona::CpuSurface::for_viewport(viewport)?;
    let mut host = HeadlessHost::new(viewport, surface);
    let mut lp = EffectLoop::new(effect);

    if lp.start(&mut host) != LoopState::Running {
        anyhow::bail!("effect '{}' failed to start", lp.effect().name());
    }
    for i in 0..frames {
        for event in script(i, viewport) {
            host.dispatch(&mut lp, event);
        }
        host.step(&mut lp, FRAME_DT_SECS);
    }
    lp.stop(&mut host);

    let surface = host
        .surface_ref()
        .context("headless surface disappeared")?;
    let mut frame = surface.to_frame();
    frame.unpremultiply();
    Ok(frame)
}
