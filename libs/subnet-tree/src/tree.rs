//! Complete binary subdivision trees over an IPv4 block

use ipnet::Ipv4Net;

use crate::{
    block::split,
    error::{Error, Result},
    request::check_prefix_range,
};

/// A complete binary tree of blocks, each node split into two equal halves
/// until the maximum prefix length is reached.
///
/// The tree is complete, so it is never materialized. Every node is
/// identified by its own block, and its children are the block's two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdivisionTree {
    root: Ipv4Net,
    max_prefix_len: u8,
}

impl SubdivisionTree {
    /// Build the tree for `root`, splitting down to `max_prefix_len`
    pub fn build(root: Ipv4Net, max_prefix_len: u8) -> Result<Self> {
        let root = root.trunc();
        check_prefix_range(root, max_prefix_len)?;
        Ok(Self {
            root,
            max_prefix_len,
        })
    }

    /// The root block
    #[must_use]
    pub fn root(&self) -> Ipv4Net {
        self.root
    }

    /// The (lower, upper) children of a node, or `None` for a leaf
    pub fn children(&self, node: Ipv4Net) -> Result<Option<(Ipv4Net, Ipv4Net)>> {
        if !self.root.contains(&node) {
            return Err(Error::InvalidSplit(node));
        }
        if node.prefix_len() < self.max_prefix_len {
            split(node).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Number of levels below the root
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.max_prefix_len - self.root.prefix_len()
    }

    /// Total number of nodes
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        (1u64 << (u32::from(self.depth()) + 1)) - 1
    }

    /// All leaf blocks, in address order
    pub fn leaves(&self) -> impl Iterator<Item = Ipv4Net> {
        // The prefix range was checked on construction
        self.root
            .subnets(self.max_prefix_len)
            .into_iter()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_depth_4() {
        let tree = SubdivisionTree::build("10.250.0.0/24".parse().unwrap(), 28).unwrap();
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.len(), 31);
        assert_eq!(tree.root(), "10.250.0.0/24".parse().unwrap());

        let leaves: Vec<Ipv4Net> = tree.leaves().collect();
        assert_eq!(leaves.len(), 16);
        assert!(leaves.iter().all(|leaf| leaf.prefix_len() == 28));
        assert_eq!(leaves[0], "10.250.0.0/28".parse().unwrap());
        assert_eq!(leaves[15], "10.250.0.240/28".parse().unwrap());
    }

    #[test]
    fn test_children_in_address_order() {
        let tree = SubdivisionTree::build("10.0.0.0/8".parse().unwrap(), 10).unwrap();
        let (lower, upper) = tree.children(tree.root()).unwrap().unwrap();
        assert_eq!(lower, "10.0.0.0/9".parse().unwrap());
        assert_eq!(upper, "10.128.0.0/9".parse().unwrap());

        let (lower, upper) = tree.children(upper).unwrap().unwrap();
        assert_eq!(lower, "10.128.0.0/10".parse().unwrap());
        assert_eq!(upper, "10.192.0.0/10".parse().unwrap());
        assert_eq!(tree.children(upper), Ok(None));
    }

    #[test]
    fn test_single_leaf() {
        let tree = SubdivisionTree::build("192.0.2.0/28".parse().unwrap(), 28).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.children(tree.root()), Ok(None));
        assert_eq!(tree.leaves().collect::<Vec<_>>(), vec![tree.root()]);
    }

    #[test]
    fn test_split_to_32() {
        let tree = SubdivisionTree::build("192.0.2.0/30".parse().unwrap(), 32).unwrap();
        let leaves: Vec<Ipv4Net> = tree.leaves().collect();
        assert_eq!(
            leaves,
            vec![
                "192.0.2.0/32".parse::<Ipv4Net>().unwrap(),
                "192.0.2.1/32".parse().unwrap(),
                "192.0.2.2/32".parse().unwrap(),
                "192.0.2.3/32".parse().unwrap(),
            ]
        );
    }

    #[test]
    fn test_deep_tree_is_not_materialized() {
        // 2^24 leaves: only the blocks actually asked for are ever computed
        let tree = SubdivisionTree::build("10.0.0.0/8".parse().unwrap(), 32).unwrap();
        assert_eq!(tree.depth(), 24);
        assert_eq!(tree.len(), (1 << 25) - 1);
        assert_eq!(
            tree.leaves().nth(1),
            Some("10.0.0.1/32".parse().unwrap())
        );

        let full = SubdivisionTree::build("0.0.0.0/0".parse().unwrap(), 32).unwrap();
        assert_eq!(full.len(), (1 << 33) - 1);
    }

    #[test]
    fn test_children_outside_tree() {
        let tree = SubdivisionTree::build("10.250.0.0/24".parse().unwrap(), 28).unwrap();
        let outside: Ipv4Net = "10.251.0.0/25".parse().unwrap();
        assert_eq!(tree.children(outside), Err(Error::InvalidSplit(outside)));
    }

    #[test]
    fn test_invalid_max_prefix() {
        assert_eq!(
            SubdivisionTree::build("10.250.0.0/24".parse().unwrap(), 20).unwrap_err(),
            Error::InvalidRequest {
                network: "10.250.0.0/24".parse().unwrap(),
                max_prefix_len: 20
            }
        );
    }
}
