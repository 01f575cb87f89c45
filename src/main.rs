use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use fastaswap::*;

/// Join multi-line FASTA sequences, replace the eGFP coding sequence with mCherry, and rewrap.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input FASTA file (gzipped if it ends with .gz)
    input: PathBuf,
    /// Output FASTA file, overwritten if it exists (gzipped if it ends with .gz)
    output: PathBuf,
    /// Sequence line width [default: 80, or the config file's width]
    #[arg(short, long)]
    width: Option<usize>,
    /// YAML file with the `needle` and `replacement` sequences to use instead of eGFP/mCherry
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, default_value_t = 0)]
    verbosity: u8,
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(file) => Config::from_yaml_file(file)?,
        None => Config::default(),
    };

    match args.width {
        Some(w) => config.with_width(w),
        None => Ok(config),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter_level = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let res = load_config(&args)
        .and_then(|config| process_fasta(&args.input, &args.output, &config));

    match res {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
