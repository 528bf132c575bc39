// CLI module for operator password tooling

pub mod password_tools;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// Password subsystem CLI
#[derive(Parser)]
#[command(name = "scholarly-passwords")]
#[command(about = "Password policy, hashing and encryption tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the base64 digest of a value
    Hash {
        value: String,

        /// Use SHA-256 instead of SHA-1
        #[arg(long)]
        sha256: bool,
    },

    /// Check a clear-text password against the configured policy
    Check {
        password: String,
    },

    /// Generate a password that satisfies the configured policy
    Generate,

    /// Secure a clear-text password the way it is stored
    Secure {
        password: String,
    },

    /// Reveal a secured password
    Reveal {
        secured: String,
    },
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the matching handler. Command output
/// goes to stdout, logging goes to stderr.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `app_data` - Resolved settings and providers
pub fn execute_command(
    cli: Cli,
    app_data: &AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match cli.command {
        Commands::Hash { value, sha256 } => password_tools::hash_value(&value, sha256)?,
        Commands::Check { password } => password_tools::check_password(&password, app_data)?,
        Commands::Generate => password_tools::generate_password(app_data)?,
        Commands::Secure { password } => password_tools::secure_password(&password, app_data)?,
        Commands::Reveal { secured } => password_tools::reveal_password(&secured, app_data)?,
    };

    println!("{}", output);
    Ok(())
}
