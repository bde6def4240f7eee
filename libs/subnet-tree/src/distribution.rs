use ipnet::Ipv4Net;

use crate::block::address_count;

/// One recipient of subnets, and everything assigned to it so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    index: usize,
    subnets: Vec<Ipv4Net>,
    total_addresses: u64,
}

impl Recipient {
    /// Construct a new recipient with nothing assigned
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            subnets: Vec::new(),
            total_addresses: 0,
        }
    }

    /// Position of this recipient in `[0, n)`
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Assigned subnets, in the order they were handed out
    #[must_use]
    pub fn subnets(&self) -> &[Ipv4Net] {
        &self.subnets
    }

    /// Sum of the sizes of all assigned subnets
    #[must_use]
    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    pub(crate) fn assign(&mut self, subnet: Ipv4Net) {
        self.total_addresses += address_count(&subnet);
        self.subnets.push(subnet);
    }

    pub(crate) fn extend(&mut self, other: Recipient) {
        self.total_addresses += other.total_addresses;
        self.subnets.extend(other.subnets);
    }
}

/// The subnets handed to each of `n` recipients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    recipients: Vec<Recipient>,
}

impl Distribution {
    /// Construct a distribution of `n` empty recipients
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            recipients: (0..n).map(Recipient::new).collect(),
        }
    }

    /// Every recipient, ordered by index
    #[must_use]
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// A single recipient
    #[must_use]
    pub fn recipient(&self, index: usize) -> Option<&Recipient> {
        self.recipients.get(index)
    }

    /// Number of recipients
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    /// Sum of all addresses handed out across every recipient
    #[must_use]
    pub fn total_addresses(&self) -> u64 {
        self.recipients.iter().map(Recipient::total_addresses).sum()
    }

    pub(crate) fn assign(&mut self, index: usize, subnet: Ipv4Net) {
        self.recipients[index].assign(subnet);
    }

    /// Append everything in `other` after what each recipient already holds
    pub(crate) fn merge(&mut self, other: Distribution) {
        for (recipient, addition) in self.recipients.iter_mut().zip(other.recipients) {
            recipient.extend(addition);
        }
    }
}
