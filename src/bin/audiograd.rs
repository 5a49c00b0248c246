use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "audiograd", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a gradient PNG from explicit audio features.
    Render(RenderArgs),
    /// Render a gradient PNG from a JSON dump of per-track audio features,
    /// averaged across the tracks.
    Playlist(PlaylistArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Tempo in beats per minute.
    #[arg(long)]
    tempo: f64,

    /// Valence, 0..1.
    #[arg(long)]
    valence: f64,

    /// Energy, 0..1.
    #[arg(long)]
    energy: f64,

    /// Acousticness, 0..1.
    #[arg(long)]
    acousticness: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct PlaylistArgs {
    /// Input JSON: an array of audio-feature objects
    /// (tempo/valence/energy/acousticness per track).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Gradient shape.
    #[arg(long, value_enum, default_value_t = ShapeChoice::Conic)]
    shape: ShapeChoice,

    /// Color space the gradient interpolates in.
    #[arg(long, value_enum, default_value_t = SpaceChoice::Hsv)]
    space: SpaceChoice,

    /// Square output size in pixels.
    #[arg(long, default_value_t = audiograd::DEFAULT_SIZE)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Horizontal,
    Vertical,
    Diamond,
    Radial,
    Conic,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpaceChoice {
    Rgb,
    Hsv,
}

impl From<ShapeChoice> for audiograd::ShapeKind {
    fn from(choice: ShapeChoice) -> Self {
        match choice {
            ShapeChoice::Horizontal => audiograd::ShapeKind::Horizontal,
            ShapeChoice::Vertical => audiograd::ShapeKind::Vertical,
            ShapeChoice::Diamond => audiograd::ShapeKind::Diamond,
            ShapeChoice::Radial => audiograd::ShapeKind::Radial,
            ShapeChoice::Conic => audiograd::ShapeKind::Conic,
        }
    }
}

impl From<SpaceChoice> for audiograd::InterpolationSpace {
    fn from(choice: SpaceChoice) -> Self {
        match choice {
            SpaceChoice::Rgb => audiograd::InterpolationSpace::DirectComponent,
            SpaceChoice::Hsv => audiograd::InterpolationSpace::HsvSpace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => {
            let features = audiograd::AudioFeatures {
                tempo: args.tempo,
                valence: args.valence,
                energy: args.energy,
                acousticness: args.acousticness,
            };
            write_gradient(&features, &args.output)
        }
        Command::Playlist(args) => {
            let features = read_and_average(&args.in_path)?;
            write_gradient(&features, &args.output)
        }
    }
}

fn read_and_average(path: &Path) -> anyhow::Result<audiograd::AudioFeatures> {
    let f = File::open(path).with_context(|| format!("open features '{}'", path.display()))?;
    let r = BufReader::new(f);
    let tracks: Vec<audiograd::AudioFeatures> =
        serde_json::from_reader(r).with_context(|| "parse track features JSON")?;
    Ok(audiograd::average_features(&tracks)?)
}

fn write_gradient(
    features: &audiograd::AudioFeatures,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let config = audiograd::RenderConfig::square(output.size);
    let buffer = audiograd::synthesize(
        features,
        output.shape.into(),
        output.space.into(),
        &config,
    )?;
    let png = audiograd::encode_png(&buffer)?;

    if let Some(parent) = output.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&output.out, &png)
        .with_context(|| format!("write png '{}'", output.out.display()))?;

    eprintln!("wrote {}", output.out.display());
    Ok(())
}
