use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use scannet2d::{run_batch, ConvertArgs};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ConvertArgs::parse();

    let pred_path = PathBuf::from(&args.pred_path);
    if !pred_path.exists() {
        error!("The specified pred_path does not exist: {}", args.pred_path);
        return ExitCode::FAILURE;
    }

    info!("Starting prediction conversion with {} workers...", args.workers);

    match run_batch(&args) {
        Ok(stats) => {
            stats.print_summary();
            if stats.scenes_failed > 0 {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to convert predictions: {}", e);
            ExitCode::FAILURE
        }
    }
}
