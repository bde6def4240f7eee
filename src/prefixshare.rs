//! Entrypoint for the `prefixshare` binary.
//!
//! This binary splits one or more IPv4 blocks into subnets and hands them out
//! fairly across a set of devices, printing what each device received.

use clap::Parser;
use common::{logging::enable_logger, report::Report};
use subnet_tree::allocate_many;

mod args;
mod common;

pub fn main() {
    // Parse CLI args
    let args = args::prefixshare::Args::parse();

    // Initialize logging
    if let Err(error) = enable_logger(args.verbose) {
        eprintln!("Failed to set up logging: {error}");
        std::process::exit(1);
    }

    // Load the recipient count and the networks to split
    let config = args.data().unwrap_or_else(|error| {
        log::error!("Failed to load configuration: {}", error);
        std::process::exit(1);
    });
    let requests = config.requests().unwrap_or_else(|error| {
        log::error!("{}", error);
        std::process::exit(1);
    });

    // Distribute every network across the recipients
    let distribution = match allocate_many(&requests, config.recipients) {
        Ok(distribution) => distribution,
        Err(subnet_tree::Error::NoRecipients) => {
            log::info!("No recipients found. Exiting...");
            return;
        }
        Err(error) => {
            log::error!("Failed to distribute subnets: {}", error);
            std::process::exit(1);
        }
    };
    log::info!(
        "Distributed {} networks across {} recipients",
        requests.len(),
        config.recipients
    );

    // Callers must not assume every address was handed out
    let report = Report::new(&requests, &distribution);
    if report.unassigned_addresses > 0 {
        log::warn!(
            "{} addresses were left unassigned",
            report.unassigned_addresses
        );
    }

    // Print the results for each recipient
    match args.json {
        true => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                log::error!("Failed to serialize report: {}", error);
                std::process::exit(1);
            }
        },
        false => println!("{report}"),
    }
}
