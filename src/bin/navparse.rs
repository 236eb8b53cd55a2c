//! Decode nav files and write their place centroids as JSON
//!
//! Run with: cargo run --bin navparse -- [--out nav.json | --out-dir DIR] <files or dirs>...

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use navparse::batch::{self, BatchConfig, BatchReport};
use navparse::output;

#[derive(Parser)]
#[command(name = "navparse")]
#[command(about = "Reduce polygon-area .nav files (Source-derived layout, v6-16) to per-place area centroids")]
struct Args {
    /// Nav files, or directories to scan for them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Aggregate JSON file holding every map
    #[arg(long, default_value = "nav.json", conflicts_with = "out_dir")]
    out: PathBuf,

    /// Write one <map>.json per map into this directory instead
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Files decoded in parallel (defaults to available cores)
    #[arg(long)]
    jobs: Option<usize>,

    /// Extension matched when scanning directories
    #[arg(long, default_value = "nav")]
    extension: String,

    #[arg(long)]
    pretty: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let mut config = BatchConfig {
        extension: args.extension,
        ..BatchConfig::default()
    };
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }

    let files = batch::expand_inputs(&args.inputs, &config.extension)?;
    if files.is_empty() {
        return Err(format!("no .{} files found", config.extension).into());
    }
    tracing::info!(files = files.len(), jobs = config.jobs, "decoding");

    let report = batch::run_batch_parallel(files, config.jobs, batch::decode_file).await;

    match &args.out_dir {
        Some(dir) => {
            let written = output::write_per_map(dir, &report.maps, args.pretty)?;
            tracing::info!(maps = written.len(), dir = %dir.display(), "wrote per-map output");
        }
        None => {
            output::write_aggregate(&args.out, &report.maps, args.pretty)?;
            tracing::info!(maps = report.maps.len(), out = %args.out.display(), "wrote aggregate output");
        }
    }

    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args).await {
        Ok(report) => {
            eprintln!(
                "{} decoded, {} without place data, {} failed",
                report.maps.len(),
                report.no_data_count(),
                report.failure_count(),
            );
            if report.is_partial_failure() {
                for file in report.failures() {
                    eprintln!("  {} ({})", file.map_name, file.path.display());
                }
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("navparse: {e}");
            ExitCode::FAILURE
        }
    }
}
