use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use markdown2html::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markdown2html")]
#[command(about = "Convert Markdown files to HTML")]
#[command(version)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// TOML file overriding the rendered element names
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each block as it is emitted
    #[arg(short, long)]
    verbose: bool,

    /// Anything after OUTPUT is accepted and ignored
    #[arg(hide = true)]
    _rest: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::compiled_default().clone(),
    };

    if let Err(e) = markdown2html::convert_file(&cli.input, &cli.output, &config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    info!(output = %cli.output.display(), "created");
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
