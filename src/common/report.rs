//! Human and machine readable summaries of a distribution

use std::fmt;

use ipnet::Ipv4Net;
use subnet_tree::{block::address_count, AllocationRequest, Distribution};

/// Everything a single recipient received
#[derive(Debug, serde::Serialize)]
pub struct RecipientReport {
    pub index: usize,
    pub total_addresses: u64,
    pub subnets: Vec<Ipv4Net>,
}

/// Summary of a full run across every requested block
#[derive(Debug, serde::Serialize)]
pub struct Report {
    pub recipients: Vec<RecipientReport>,
    pub total_addresses: u64,
    pub unassigned_addresses: u64,
}

impl Report {
    /// Summarize `distribution`, which was produced from `requests`
    pub fn new(requests: &[AllocationRequest], distribution: &Distribution) -> Self {
        let requested: u64 = requests
            .iter()
            .map(|request| address_count(&request.network()))
            .sum();
        let total_addresses = distribution.total_addresses();

        Self {
            recipients: distribution
                .recipients()
                .iter()
                .map(|recipient| RecipientReport {
                    index: recipient.index(),
                    total_addresses: recipient.total_addresses(),
                    subnets: recipient.subnets().to_vec(),
                })
                .collect(),
            total_addresses,
            unassigned_addresses: requested.saturating_sub(total_addresses),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for recipient in &self.recipients {
            writeln!(
                f,
                "Recipient {}: Total IPs: {} ; Subnets {}",
                recipient.index,
                recipient.total_addresses,
                recipient
                    .subnets
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }
        write!(f, "Total number of IPs: {}", self.total_addresses)
    }
}
