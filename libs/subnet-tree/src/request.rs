use ipnet::Ipv4Net;

use crate::error::{Error, Result};

/// A block to distribute, along with the longest prefix it may be split down to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocationRequest {
    network: Ipv4Net,
    max_prefix_len: u8,
}

impl AllocationRequest {
    /// Construct a new request.
    ///
    /// Host bits set in `network` are cleared. `max_prefix_len` must lie
    /// between the network's own prefix length and 32 (inclusive).
    pub fn new(network: Ipv4Net, max_prefix_len: u8) -> Result<Self> {
        let network = network.trunc();
        check_prefix_range(network, max_prefix_len)?;
        Ok(Self {
            network,
            max_prefix_len,
        })
    }

    /// The block being distributed
    #[must_use]
    pub fn network(&self) -> Ipv4Net {
        self.network
    }

    /// The smallest subnet (longest prefix) that may be handed out
    #[must_use]
    pub fn max_prefix_len(&self) -> u8 {
        self.max_prefix_len
    }
}

/// Ensure `max_prefix_len` is in `[network.prefix_len(), 32]`
pub(crate) fn check_prefix_range(network: Ipv4Net, max_prefix_len: u8) -> Result<()> {
    if max_prefix_len < network.prefix_len() || max_prefix_len > 32 {
        return Err(Error::InvalidRequest {
            network,
            max_prefix_len,
        });
    }
    Ok(())
}
