mod batch;
mod reports;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use batch::{BatchSummary, parse_difficulties, run_batch};
use setboard_game::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use setboard_game::{JsonFileStore, ScenarioSampler, discover_templates, resolve_seed};

#[derive(Debug, Parser)]
#[command(name = "setboard-sampler", version = "0.1.0")]
#[command(about = "Generate randomized, difficulty-tagged variants of template Set-style scenarios")]
struct Args {
    /// Directory holding `scenario_state (<N>).json` templates
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    src_dir: PathBuf,

    /// Directory receiving generated variants (created if missing)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Difficulty levels to emit per template (comma-separated)
    #[arg(long, default_value = "easy,hard")]
    difficulties: String,

    /// Resample rounds per template (at least one)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    samples: u64,

    /// Seed for the random source; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let difficulties = parse_difficulties(&args.difficulties)?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let templates = discover_templates(&args.src_dir)
        .with_context(|| format!("failed to list templates in {}", args.src_dir.display()))?;

    let (seed, mut rng) = resolve_seed(args.seed);
    log::info!(
        "sampling {} templates with seed {seed} into {}",
        templates.len(),
        args.out_dir.display()
    );

    let start_time = Instant::now();
    let sampler = ScenarioSampler::new(JsonFileStore);
    let mut summary = BatchSummary::new(seed, templates.len());
    run_batch(
        &sampler,
        &templates,
        &args.out_dir,
        &difficulties,
        args.samples,
        &mut rng,
        &mut summary,
    );

    write_report(&args, &summary, start_time)?;

    if !summary.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn write_report(args: &Args, summary: &BatchSummary, start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    if args.report.as_str() == "json" {
        reports::generate_json_report(&mut output_target, summary)?;
    } else {
        writeln!(
            &mut output_target,
            "{}",
            "🃏 Setboard Scenario Sampler".bright_cyan().bold()
        )?;
        writeln!(&mut output_target, "{}", "============================".cyan())?;
        if summary.templates_found == 0 {
            writeln!(
                &mut output_target,
                "No templates found in {}.",
                args.src_dir.display()
            )?;
        }
        reports::generate_console_report(&mut output_target, summary, start_time.elapsed())?;
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
