use std::path::PathBuf;

use subnet_tree::AllocationRequest;

use crate::common::request::{parse_network_request, NetworkRequest};

#[derive(clap::Parser)]
#[clap(author, version, about="Fairly distribute IPv4 subnets across a set of devices", long_about = None)]
pub struct Args {
    #[command(flatten)]
    config_data: Option<Config>,

    /// Path to a config file to read
    #[clap(short = 'c', long = "config", conflicts_with = "Config")]
    config_file: Option<PathBuf>,

    /// Print the distribution as JSON instead of text
    #[clap(long)]
    pub json: bool,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn data(&self) -> Result<Config, Box<dyn std::error::Error>> {
        match self.config_file {
            Some(ref path) => {
                // Read the data from the config file
                let file = std::fs::File::open(path).map_err(|error| match error.kind() {
                    std::io::ErrorKind::NotFound => {
                        log::error!("Config file not found: {}", path.display());
                        std::process::exit(1)
                    }
                    _ => error,
                })?;
                let data: Config = serde_json::from_reader(file)?;

                // We need at least one network to distribute
                if data.networks.is_empty() {
                    log::error!("No networks specified. At least one network must be specified in the `networks` property of the config file");
                    std::process::exit(1);
                }

                Ok(data)
            }
            None => match &self.config_data {
                Some(data) if data.networks.is_empty() => {
                    log::error!("No networks specified. Use --network to add at least one");
                    std::process::exit(1)
                }
                Some(data) => Ok(data.clone()),
                None => {
                    log::error!("No configuration provided. Either use --config to specify a file or set the configuration via CLI args (see --help)");
                    std::process::exit(1)
                }
            },
        }
    }
}

/// Program configuration. Specifiable via either CLI args or a config file
#[derive(Debug, clap::Args, serde::Deserialize, Clone)]
#[group()]
pub struct Config {
    /// Number of devices to distribute subnets across
    #[clap(short = 'n', long = "recipients", required = false)]
    pub recipients: usize,

    /// A network to distribute and its maximum prefix length (e.g. `10.250.0.0/24:28`)
    #[clap(long = "network", value_parser = parse_network_request)]
    pub networks: Vec<NetworkRequest>,
}

impl Config {
    /// Validate every configured network
    pub fn requests(&self) -> Result<Vec<AllocationRequest>, subnet_tree::Error> {
        self.networks.iter().map(AllocationRequest::try_from).collect()
    }
}
