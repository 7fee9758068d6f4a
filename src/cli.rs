//! roastgen command line
//!
//! Three slots, clean or unfiltered, one roast at a time.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::phrases::{Category, PhraseSelector, PhraseTable, RandomSource};
use crate::telemetry::{init_tracing, init_tracing_verbose};

#[derive(Parser, Debug)]
#[command(name = "roastgen")]
#[command(about = "Generate fictional, light-hearted roasts for Hannif")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print one sample roast per slot and exit (the default)
    #[arg(long)]
    console: bool,

    /// Use the clean phrase lists
    #[arg(long, global = true, conflicts_with = "profanity")]
    no_profanity: bool,

    /// Use the unfiltered lists even when config asks for clean ones
    #[arg(long, global = true)]
    profanity: bool,

    /// Seed the generator for reproducible output
    #[arg(short, long, global = true, value_name = "N")]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Config file path
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log each draw to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one roast from every slot
    #[command(alias = "s")]
    Sample,

    /// Print one roast from a single slot
    #[command(alias = "p")]
    Pick {
        /// Slot number (1-3)
        category: usize,
    },

    /// Show every phrase of the active variant
    #[command(alias = "l")]
    List {
        /// Only this slot (1-3)
        category: Option<usize>,
    },
}

/// Settings after layering config, environment and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    filtered: bool,
    color: bool,
    seed: Option<u64>,
    format: OutputFormat,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let filtered = if cli.no_profanity {
            true
        } else if cli.profanity {
            false
        } else {
            config.filtered
        };

        Self {
            filtered,
            color: config.color
                && !cli.no_color
                && colored::control::SHOULD_COLORIZE.should_colorize(),
            seed: cli.seed.or(config.seed),
            format: cli.format.unwrap_or(config.format),
        }
    }
}

pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

/// Parse `args` and run, writing to `out`.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    execute(cli, out)
}

fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if cli.verbose {
        init_tracing_verbose();
    }

    // Apply --no-color early to disable all color output
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config);
    tracing::debug!(?settings, "Resolved settings");

    let command = match (cli.command, cli.console) {
        (None, _) => Commands::Sample,
        (Some(command), false) => command,
        (Some(_), true) => anyhow::bail!("--console cannot be combined with a subcommand"),
    };

    match settings.seed {
        Some(seed) => dispatch(command, &mut PhraseSelector::seeded(seed), &settings, out),
        None => dispatch(command, &mut PhraseSelector::thread_random(), &settings, out),
    }
}

fn dispatch<R: RandomSource, W: Write>(
    command: Commands,
    selector: &mut PhraseSelector<'_, R>,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Sample => {
            let selections = output::sample_all(selector, settings.filtered);
            output::write_selections(out, &selections, settings.format, settings.color)?;
        }
        Commands::Pick { category } => {
            let category = Category::from_index(category)?;
            let selection = selector.selection(category, settings.filtered);
            match settings.format {
                OutputFormat::Text => output::write_single(out, &selection)?,
                OutputFormat::Json => output::write_json(out, &[selection])?,
            }
        }
        Commands::List { category } => {
            let categories = match category {
                Some(index) => vec![Category::from_index(index)?],
                None => Category::ALL.to_vec(),
            };
            output::write_catalog(
                out,
                PhraseTable::builtin(),
                &categories,
                settings.filtered,
                settings.format,
                settings.color,
            )?;
        }
    }
    Ok(())
}
