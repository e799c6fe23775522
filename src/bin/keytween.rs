use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "keytween", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every easing function in the library.
    List,
    /// Print the keyframe table for one tween.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Tween config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Easing function name (see `keytween list`).
    #[arg(long)]
    ease: Option<String>,

    /// Start value.
    #[arg(long, allow_hyphen_values = true)]
    start: Option<f64>,

    /// End value.
    #[arg(long, allow_hyphen_values = true)]
    end: Option<f64>,

    /// Offset between start and end.
    #[arg(long, allow_hyphen_values = true)]
    delta: Option<f64>,

    /// Duration in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One `time value` pair per line.
    Text,
    /// `{"keyframes": [...]}`.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "sine")?;
    for ease in keytween::Ease::PRESETS {
        writeln!(out, "{ease}")?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => keytween::TweenConfig::from_path(path)?,
        None => keytween::TweenConfig::default(),
    };
    if let Some(name) = args.ease {
        cfg.ease = Some(keytween::EaseRef::Named(name));
    }
    cfg.start = args.start.or(cfg.start);
    cfg.end = args.end.or(cfg.end);
    cfg.delta = args.delta.or(cfg.delta);
    cfg.duration = args.duration.or(cfg.duration);

    let spec = cfg.build().with_context(|| "build tween")?;
    let table = spec.table();

    let mut out = std::io::stdout().lock();
    match args.format {
        Format::Text => {
            for k in table {
                writeln!(out, "{:.6} {}", k.time, k.value)?;
            }
        }
        Format::Json => writeln!(out, "{}", table.to_json()?)?,
    }
    Ok(())
}
