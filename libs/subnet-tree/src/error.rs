use ipnet::Ipv4Net;

/// All possible errors thrown by `subnet-tree` functions
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Cannot split {0}: a /32 has no halves")]
    InvalidSplit(Ipv4Net),
    #[error("Invalid maximum prefix length /{max_prefix_len} for {network}. Must be between /{} and /32", .network.prefix_len())]
    InvalidRequest { network: Ipv4Net, max_prefix_len: u8 },
    #[error("No recipients to distribute subnets to")]
    NoRecipients,
}

/// Result type for `subnet-tree`
pub type Result<T> = std::result::Result<T, Error>;
