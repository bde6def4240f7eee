//! Value operations on IPv4 address blocks

use ipnet::Ipv4Net;

use crate::error::{Error, Result};

/// Split a block into its lower and upper halves, one prefix length longer
pub fn split(block: Ipv4Net) -> Result<(Ipv4Net, Ipv4Net)> {
    // A /32 is a single address and cannot be halved
    let mut halves = block
        .subnets(block.prefix_len().saturating_add(1))
        .map_err(|_| Error::InvalidSplit(block))?;
    match (halves.next(), halves.next()) {
        (Some(lower), Some(upper)) => Ok((lower, upper)),
        _ => Err(Error::InvalidSplit(block)),
    }
}

/// Number of addresses covered by a block (`2^(32 - prefix_len)`)
#[must_use]
pub fn address_count(block: &Ipv4Net) -> u64 {
    1u64 << (32 - u32::from(block.prefix_len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_24() {
        assert_eq!(
            split("10.250.0.0/24".parse().unwrap()).unwrap(),
            (
                "10.250.0.0/25".parse().unwrap(),
                "10.250.0.128/25".parse().unwrap()
            )
        );
    }

    #[test]
    fn test_split_0() {
        assert_eq!(
            split("0.0.0.0/0".parse().unwrap()).unwrap(),
            (
                "0.0.0.0/1".parse().unwrap(),
                "128.0.0.0/1".parse().unwrap()
            )
        );
    }

    #[test]
    fn test_split_31() {
        assert_eq!(
            split("192.0.2.254/31".parse().unwrap()).unwrap(),
            (
                "192.0.2.254/32".parse().unwrap(),
                "192.0.2.255/32".parse().unwrap()
            )
        );
    }

    #[test]
    fn test_split_ignores_host_bits() {
        assert_eq!(
            split("10.250.0.77/24".parse().unwrap()).unwrap(),
            (
                "10.250.0.0/25".parse().unwrap(),
                "10.250.0.128/25".parse().unwrap()
            )
        );
    }

    #[test]
    fn test_split_every_prefix_len() {
        let mut block: Ipv4Net = "0.0.0.0/0".parse().unwrap();
        for prefix_len in 1..=32 {
            let (lower, upper) = split(block).unwrap();
            assert_eq!(lower.prefix_len(), prefix_len);
            assert_eq!(lower.network(), block.network());
            assert_eq!(upper.broadcast(), block.broadcast());
            block = upper;
        }
        assert_eq!(block, "255.255.255.255/32".parse().unwrap());
    }

    #[test]
    fn test_split_32_fails() {
        let block: Ipv4Net = "192.0.2.1/32".parse().unwrap();
        assert_eq!(split(block), Err(Error::InvalidSplit(block)));
    }

    #[test]
    fn test_halves_cover_parent() {
        let block: Ipv4Net = "172.16.0.0/12".parse().unwrap();
        let (lower, upper) = split(block).unwrap();
        assert!(block.contains(&lower) && block.contains(&upper));
        assert!(!lower.contains(&upper) && !upper.contains(&lower));
        assert_eq!(
            address_count(&lower) + address_count(&upper),
            address_count(&block)
        );
    }

    #[test]
    fn test_address_count() {
        assert_eq!(address_count(&"10.0.0.0/28".parse().unwrap()), 16);
        assert_eq!(address_count(&"192.0.2.1/32".parse().unwrap()), 1);
        assert_eq!(address_count(&"0.0.0.0/0".parse().unwrap()), 1 << 32);
    }
}
