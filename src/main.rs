use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use wave_events::config::{
    DEFAULT_LOWER, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, DEFAULT_SAMPLES, DEFAULT_UPPER,
};
use wave_events::{ChartPlotter, PlotConfig, Plotter, SamplingConfig, TablePlotter, WaveFunction};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Side-by-side text charts
    Chart,
    /// Tab separated values
    Table,
}

#[derive(Parser)]
#[command(author, version, about = "Plot a sampled function and its emergent amplitude changes", long_about = None)]
struct Cli {
    /// Menu key (1-13). Prompts when omitted; unknown keys fall back to the sine wave
    #[arg(short, long)]
    function: Option<String>,

    /// Number of evenly spaced samples
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    #[arg(long, default_value_t = DEFAULT_LOWER, allow_hyphen_values = true)]
    lower: f64,

    #[arg(long, default_value_t = DEFAULT_UPPER, allow_hyphen_values = true)]
    upper: f64,

    /// Seed for the noisy sine wave
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Chart)]
    format: Format,

    /// Width of each chart panel in cells
    #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
    width: usize,

    /// Height of each chart panel in cells
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
    height: usize,

    /// Print the menu and exit
    #[arg(long)]
    list: bool,
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Choose a function to experiment:")?;
    for function in WaveFunction::ALL {
        writeln!(out, "{}", function)?;
    }
    Ok(())
}

/// Menu and prompt go to `prompt` so stdout only carries the plot.
fn prompt_choice(mut input: impl BufRead, mut prompt: impl Write) -> Result<WaveFunction> {
    print_menu(&mut prompt)?;
    write!(prompt, "Enter your choice (1-13): ")?;
    prompt.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read menu choice")?;
    Ok(WaveFunction::resolve(line.trim()))
}

/// `RUST_LOG` style directives; warnings show when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.list {
        print_menu(&mut io::stdout().lock())?;
        return Ok(());
    }

    let function = match cli.function.as_deref() {
        Some(key) => WaveFunction::resolve(key.trim()),
        None => prompt_choice(io::stdin().lock(), io::stderr().lock())?,
    };

    let mut config = SamplingConfig::new(cli.samples, cli.lower, cli.upper);
    config.seed = cli.seed;

    let stdout = io::stdout().lock();
    let mut plotter: Box<dyn Plotter> = match cli.format {
        Format::Chart => Box::new(
            ChartPlotter::new(stdout, PlotConfig::new(cli.width, cli.height))
                .context("invalid chart size")?,
        ),
        Format::Table => Box::new(TablePlotter::new(stdout)),
    };

    wave_events::run(function, &config, plotter.as_mut())
        .with_context(|| format!("failed to plot {}", function.name()))?;
    Ok(())
}
