use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use scannet2d::{export_scenes, ExportArgs};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ExportArgs::parse();

    let scannet_path = PathBuf::from(&args.scannet_path);
    if !scannet_path.exists() {
        error!("The specified scannet_path does not exist: {}", args.scannet_path);
        return ExitCode::FAILURE;
    }

    info!("Starting label image export...");

    if let Err(e) = export_scenes(&args) {
        error!("Failed to export scenes: {}", e);
        return ExitCode::FAILURE;
    }
    info!("Label image export completed successfully.");
    ExitCode::SUCCESS
}
