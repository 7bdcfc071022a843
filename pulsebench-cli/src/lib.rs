#![warn(missing_docs)]
//! PulseBench CLI Library
//!
//! Argument parsing, configuration layering, logging setup, and the `run()`
//! entry point that drives the catalog through the sampling runner and
//! writes the report.

mod config;

pub use config::{OutputSection, PulseConfig, SamplerSection, parse_duration};

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pulsebench_core::{SamplerConfig, run_filtered};
use pulsebench_report::{OutputFormat, build_report, format_human_output, generate_json_report};
use tracing::info;

/// PulseBench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "pulsebench")]
#[command(author, version, about = "Self-calibrating micro-benchmark probe suite")]
pub struct Cli {
    /// Optional subcommand (list, run); defaults to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run only probes whose name contains this substring.
    #[arg(default_value = "")]
    pub filter: String,

    /// Output format: human or json.
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Output file (stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-probe wall-clock budget (e.g. "1s", "250ms").
    #[arg(long)]
    pub budget: Option<String>,

    /// Invocations per batch between analyzer passes.
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Convergence sample-count floor.
    #[arg(long)]
    pub min_samples: Option<usize>,

    /// Per-probe sample ceiling.
    #[arg(long)]
    pub max_samples: Option<usize>,

    /// Verbose output (per-batch convergence progress).
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the probe catalog without executing it.
    List,
    /// Run probes (default).
    Run,
}

/// Run the PulseBench CLI. This is the binary's entire entry point.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the PulseBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let env_filter = if cli.verbose {
        "pulsebench=debug"
    } else {
        "pulsebench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PulseConfig::discover().unwrap_or_default();
    let sampler = layer_sampler_config(&cli, &config)?;
    let format = resolve_format(&cli, &config)?;

    match cli.command {
        Some(Commands::List) => list_probes(&cli),
        Some(Commands::Run) | None => run_probes(&cli, &sampler, format),
    }
}

/// Resolve the output format. clap's default is "human"; anything else means
/// the user set the flag explicitly and it wins over pulse.toml. An unknown
/// format name is an error, not a silent fallback.
fn resolve_format(cli: &Cli, config: &PulseConfig) -> anyhow::Result<OutputFormat> {
    let format_str = if cli.format != "human" {
        cli.format.as_str()
    } else {
        config.output.format.as_str()
    };
    format_str.parse().map_err(|e: String| anyhow::anyhow!(e))
}

/// Layer the sampler configuration: built-in defaults <- pulse.toml <- CLI.
fn layer_sampler_config(cli: &Cli, config: &PulseConfig) -> anyhow::Result<SamplerConfig> {
    let mut sampler = config.sampler_config();
    if let Some(ref budget) = cli.budget {
        sampler.time_budget = parse_duration(budget)?;
    }
    if let Some(batch_size) = cli.batch_size {
        sampler.batch_size = batch_size.max(1);
    }
    if let Some(min_samples) = cli.min_samples {
        sampler.min_samples = min_samples;
    }
    if let Some(max_samples) = cli.max_samples {
        sampler.max_samples = max_samples.max(1);
    }
    Ok(sampler)
}

/// Print the catalog, ids included, without running anything. The filter
/// applies, but ids come from registration order, so a filtered listing
/// shows the same id per probe as a full one.
fn list_probes(cli: &Cli) -> anyhow::Result<()> {
    let registry = pulsebench_probes::catalog();
    let mut shown = 0usize;
    for def in registry.iter() {
        if !cli.filter.is_empty() && !def.name.contains(&cli.filter) {
            continue;
        }
        println!("{:>2}. {:<20} [{}]", def.id, def.name, def.unit);
        shown += 1;
    }
    println!("{} of {} probes match.", shown, registry.len());
    Ok(())
}

fn run_probes(cli: &Cli, sampler: &SamplerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let mut registry = pulsebench_probes::catalog();
    let total = registry.len();

    info!(
        probes = total,
        filter = %cli.filter,
        budget_ms = sampler.time_budget.as_millis() as u64,
        "starting probe run"
    );

    let results = run_filtered(&mut registry, &cli.filter, sampler);
    let report = build_report(&results, total, sampler);

    let rendered = match format {
        OutputFormat::Human => format_human_output(&report, cli.filter.is_empty()),
        OutputFormat::Json => generate_json_report(&report)?,
    };

    match cli.output {
        Some(ref path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments must parse")
    }

    #[test]
    fn test_default_args() {
        let cli = parse(&["pulsebench"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.filter, "");
        assert_eq!(cli.format, "human");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_filter_and_overrides() {
        let cli = parse(&[
            "pulsebench",
            "Latency",
            "--budget",
            "250ms",
            "--max-samples",
            "500",
            "--format",
            "json",
        ]);
        assert_eq!(cli.filter, "Latency");

        let sampler = layer_sampler_config(&cli, &PulseConfig::default()).unwrap();
        assert_eq!(sampler.time_budget, std::time::Duration::from_millis(250));
        assert_eq!(sampler.max_samples, 500);
        // Untouched knobs keep canonical defaults.
        assert_eq!(sampler.batch_size, 20);
        assert_eq!(sampler.min_samples, 100);
    }

    #[test]
    fn test_bad_budget_is_an_error() {
        let cli = parse(&["pulsebench", "--budget", "sometime"]);
        assert!(layer_sampler_config(&cli, &PulseConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let cli = parse(&["pulsebench", "--format", "yaml"]);
        assert!(resolve_format(&cli, &PulseConfig::default()).is_err());
    }

    #[test]
    fn test_explicit_format_wins_over_config() {
        let cli = parse(&["pulsebench", "--format", "json"]);
        let mut config = PulseConfig::default();
        config.output.format = "human".into();
        assert_eq!(resolve_format(&cli, &config).unwrap(), OutputFormat::Json);

        // With the flag left at its default, pulse.toml decides.
        let cli = parse(&["pulsebench"]);
        config.output.format = "json".into();
        assert_eq!(resolve_format(&cli, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_list_subcommand_parses() {
        let cli = parse(&["pulsebench", "list"]);
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
