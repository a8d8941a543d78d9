use std::env;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use command_syntax_codegen::{
    EmitOptions, GenerateError, GeneratorConfig, OutputFormat, emit, generate_entries,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const APP: &str = "syntax-gen";
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = APP)]
#[command(about = "Generate command syntax tables for shell completion")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Directory with command specification documents [default: redis/src/commands].
    source: Option<PathBuf>,
    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format.
    #[arg(short, long, value_enum, default_value = "go")]
    format: OutputFormat,
    /// Descend into subdirectories of the source directory.
    #[arg(short, long)]
    recursive: bool,
    /// Number of parallel extraction jobs (default: number of CPUs).
    #[arg(short, long)]
    jobs: Option<usize>,
    /// Disable colors in output.
    #[arg(long, visible_alias = "nc")]
    no_color: bool,
    /// Print completion script for the given shell and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    completion: Option<Shell>,
    /// Show version.
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if cli.version {
        println!("{APP} {PACKAGE_VERSION}");
        return;
    }

    if let Some(shell) = cli.completion {
        print_completion(shell);
        return;
    }

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), GenerateError> {
    let config = resolve_config(&cli)?;
    debug!(?config, "Resolved generator config");

    let entries = generate_entries(&config)?;

    let color = should_colorize(
        cli.no_color,
        cli.output.is_some(),
        cli.format,
        io::stdout().is_terminal(),
        env::var_os("NO_COLOR").is_some(),
    );
    let options = EmitOptions {
        format: cli.format,
        indent: config.indent,
        color,
    };

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| GenerateError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            emit(&mut BufWriter::new(file), &entries, &options)?;
            debug!(path = %path.display(), commands = entries.len(), "Wrote output file");
        }
        None => emit(&mut io::stdout().lock(), &entries, &options)?,
    }

    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, GenerateError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(source) = &cli.source {
        config.source_dir = source.clone();
    }
    if cli.recursive {
        config.recursive = true;
    }
    if cli.jobs.is_some() {
        config.jobs = cli.jobs;
    }

    Ok(config)
}

fn should_colorize(
    no_color_flag: bool,
    to_file: bool,
    format: OutputFormat,
    stdout_is_tty: bool,
    no_color_env: bool,
) -> bool {
    !no_color_flag && !to_file && !no_color_env && stdout_is_tty && format == OutputFormat::Go
}

fn print_completion(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, APP, &mut io::stdout());
}
