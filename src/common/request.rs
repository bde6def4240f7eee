//! Parsing of the blocks to distribute, from either the CLI or a config file

use std::{num::ParseIntError, str::FromStr};

use ipnet::Ipv4Net;
use subnet_tree::AllocationRequest;

/// A block to distribute, exactly as the user wrote it
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct NetworkRequest {
    /// The block to split up
    pub network: Ipv4Net,
    /// The longest prefix length any handed-out subnet may have
    pub max_prefix_length: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Expected `<network>/<len>:<max prefix length>`, got `{0}`")]
    MissingSeparator(String),
    #[error("Invalid IPv4 network: {0}")]
    InvalidNetwork(#[from] ipnet::AddrParseError),
    #[error("Invalid maximum prefix length: {0}")]
    InvalidPrefixLength(#[from] ParseIntError),
}

impl FromStr for NetworkRequest {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (network, max_prefix_length) = string
            .rsplit_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(string.to_string()))?;
        Ok(Self {
            network: network.trim().parse()?,
            max_prefix_length: max_prefix_length.trim().trim_start_matches('/').parse()?,
        })
    }
}

impl TryFrom<&NetworkRequest> for AllocationRequest {
    type Error = subnet_tree::Error;

    fn try_from(value: &NetworkRequest) -> Result<Self, Self::Error> {
        AllocationRequest::new(value.network, value.max_prefix_length)
    }
}

/// Parses a `<network>/<len>:<max prefix length>` pair (e.g. `10.250.0.0/24:28`) from a string
pub fn parse_network_request(string: &str) -> Result<NetworkRequest, ParseError> {
    string.parse()
}
