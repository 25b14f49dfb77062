//! Command Line Interface (CLI) arguments.

use clap::Parser;

use std::path::PathBuf;

/// Energy statistics server command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "ENERGY_STATS_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 5000, env = "ENERGY_STATS_PORT")]
    pub port: u16,
    /// Path to the JSON file containing the energy dataset
    #[arg(
        long,
        default_value = "data/processed_energy_data.json",
        env = "ENERGY_STATS_DATA_FILE"
    )]
    pub data_file: PathBuf,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "ENERGY_STATS_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/energy-stats/certs/cert.pem",
        env = "ENERGY_STATS_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/energy-stats/certs/key.pem",
        env = "ENERGY_STATS_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for requests to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "ENERGY_STATS_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
