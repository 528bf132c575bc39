use std::process::ExitCode;

use clap::Parser;
use scholarly_passwords::cli::{execute_command, Cli};
use scholarly_passwords::config::{init_logging, LoggingConfig, SystemEnvironment};
use scholarly_passwords::AppData;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let logging_config = LoggingConfig::from_env_provider(&SystemEnvironment);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let app_data = match AppData::from_env() {
        Ok(app_data) => app_data,
        Err(e) => {
            tracing::error!(error = %e, "Password configuration is incomplete");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_command(cli, &app_data) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
