use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyph_render::{
    EffectOptions, GlyphEffect, GlyphPalette, ImageSurface, TextResolution,
};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, Frame};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images or animations to styled glyph grids")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render glyph rows to stdout for a quick preview
    Preview(PreviewArgs),
    /// Convert an image and write the result to disk
    Convert(ConvertArgs),
    /// Convert an animation (GIF or directory of frames) to per-frame files
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input animation path (GIF file or directory of images)
    input: PathBuf,
    /// Output directory for frame files
    #[arg(short, long)]
    out_dir: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Palette preset used to map brightness to glyphs
    #[arg(long, value_enum, default_value = "auto")]
    palette: PalettePreset,
    /// Explicit glyph ramp overriding the preset, one glyph per code point
    #[arg(long)]
    charset: Option<String>,
    /// Fraction of the source dimensions sampled into the glyph grid (0..=1)
    #[arg(long, default_value_t = 0.15)]
    resolution: f32,
    /// Font size / line height multiplier
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
    /// Emit per-glyph foreground colors
    #[arg(long, default_value_t = false)]
    color: bool,
    /// Emit per-glyph opacity from the alpha channel (needs --color)
    #[arg(long, default_value_t = false)]
    alpha: bool,
    /// Paint per-glyph background blocks (needs --color)
    #[arg(long, default_value_t = false)]
    block: bool,
    /// Reverse the brightness to glyph mapping
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Letter-spacing correction profile
    #[arg(long, value_enum, default_value = "low")]
    text_resolution: TextResolutionChoice,
    /// Override the output width in source pixels (defaults to the image width)
    #[arg(long)]
    width: Option<u32>,
    /// Override the output height in source pixels (defaults to the image height)
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PalettePreset {
    /// Pick the default ramp for the current color mode
    Auto,
    Standard,
    Detailed,
    Color,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TextResolutionChoice {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// Styled markup snapshot, one self-contained container per frame
    Html,
    /// Plain glyph rows
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
        Commands::Animate(args) => animate(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let image = image::open(&args.input)
        .with_context(|| format!("failed to open image {:?}", args.input))?;
    let effect = render_frame(image, &args.settings)?;

    let Some(frame) = effect.frame() else {
        anyhow::bail!("output area is empty, nothing to preview");
    };
    for row in frame.text_rows() {
        println!("{}", row);
    }

    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let image = image::open(&args.input)
        .with_context(|| format!("failed to open image {:?}", args.input))?;
    let effect = render_frame(image, &args.settings)?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    write_effect(&mut file, &effect, args.format)?;
    Ok(())
}

fn animate(args: AnimateArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let frames = load_frames(&args.input)?;
    let progress = ProgressBar::new(frames.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let extension = match args.format {
        OutputFormat::Html => "html",
        OutputFormat::Text => "txt",
    };

    for (index, frame) in frames.into_iter().enumerate() {
        let dynamic = DynamicImage::ImageRgba8(frame.into_buffer());
        let effect = render_frame(dynamic, &args.settings)
            .with_context(|| format!("failed to render frame {}", index))?;

        let frame_path = args.out_dir.join(format!("frame_{:04}.{}", index, extension));
        let mut file = File::create(&frame_path)
            .with_context(|| format!("failed to create {:?}", frame_path))?;
        write_effect(&mut file, &effect, args.format)?;
        progress.inc(1);
    }

    progress.finish_with_message(format!("Frames written to {:?}", args.out_dir));
    Ok(())
}

fn render_frame(image: DynamicImage, settings: &RenderSettings) -> Result<GlyphEffect<ImageSurface>> {
    let width = settings.width.unwrap_or(image.width());
    let height = settings.height.unwrap_or(image.height());

    let surface = ImageSurface::new(image);
    let mut effect = GlyphEffect::new(surface, settings.to_options())
        .context("render surface cannot be sampled")?;
    effect.set_size(width, height);
    effect.render(&(), &());
    Ok(effect)
}

fn write_effect(out: &mut impl Write, effect: &GlyphEffect<ImageSurface>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Html => {
            writeln!(out, "{}", effect.output().to_document())?;
        },
        OutputFormat::Text => {
            if let Some(frame) = effect.frame() {
                for row in frame.text_rows() {
                    writeln!(out, "{}", row)?;
                }
            }
        },
    }
    Ok(())
}

fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    if path.is_dir() {
        load_frames_from_directory(path)
    } else {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if extension == "gif" {
            load_frames_from_gif(path)
        } else {
            let image =
                image::open(path).with_context(|| format!("failed to open image {:?}", path))?;
            let frame = Frame::new(image.into_rgba8());
            Ok(vec![frame])
        }
    }
}

fn load_frames_from_gif(path: &Path) -> Result<Vec<Frame>> {
    let file = File::open(path).with_context(|| format!("failed to open GIF {:?}", path))?;
    let decoder =
        GifDecoder::new(file).with_context(|| format!("failed to decode GIF {:?}", path))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .with_context(|| format!("failed to collect frames from {:?}", path))?;
    Ok(frames)
}

fn load_frames_from_directory(path: &Path) -> Result<Vec<Frame>> {
    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();
    if entries.is_empty() {
        anyhow::bail!("no image files found in {:?}", path);
    }

    let mut frames = Vec::with_capacity(entries.len());
    for entry in entries {
        let image =
            image::open(&entry).with_context(|| format!("failed to open image {:?}", entry))?;
        frames.push(Frame::new(image.into_rgba8()));
    }
    Ok(frames)
}

impl RenderSettings {
    fn to_options(&self) -> EffectOptions {
        let mut options = EffectOptions::default();
        options.resolution = self.resolution;
        options.scale = self.scale;
        options.color = self.color;
        options.alpha = self.alpha;
        options.block = self.block;
        options.invert = self.invert;
        options.text_resolution = self.text_resolution.to_resolution();
        options.palette = match &self.charset {
            Some(charset) => Some(GlyphPalette::from_charset(charset)),
            None => self.palette.to_palette(),
        };
        options
    }
}

impl PalettePreset {
    fn to_palette(self) -> Option<GlyphPalette> {
        match self {
            PalettePreset::Auto => None,
            PalettePreset::Standard => Some(GlyphPalette::standard()),
            PalettePreset::Detailed => Some(GlyphPalette::detailed()),
            PalettePreset::Color => Some(GlyphPalette::color_default()),
        }
    }
}

impl TextResolutionChoice {
    fn to_resolution(self) -> TextResolution {
        match self {
            TextResolutionChoice::Low => TextResolution::Low,
            TextResolutionChoice::Medium => TextResolution::Medium,
            TextResolutionChoice::High => TextResolution::High,
        }
    }
}
