//! Level-order distribution of a subdivision tree across recipients

use crate::{
    block::address_count,
    distribution::Distribution,
    error::{Error, Result},
    request::AllocationRequest,
    tree::SubdivisionTree,
};
use ipnet::Ipv4Net;

/// Build the tree for a single request and distribute it across `n` recipients
pub fn allocate(request: &AllocationRequest, n: usize) -> Result<Distribution> {
    // Don't bother building a tree nobody will receive
    if n == 0 {
        return Err(Error::NoRecipients);
    }

    let tree = SubdivisionTree::build(request.network(), request.max_prefix_len())?;
    let (network, depth) = (tree.root(), tree.depth());
    log::debug!("Distributing {network} across {n} recipients using a {depth}-level tree");
    allocate_tree(&tree, n)
}

/// Distribute the blocks of an existing tree across `n` recipients.
///
/// The tree is walked one level at a time. Each level is measured against a
/// per-recipient quota of `remaining / n` addresses. Blocks that fit the quota
/// are handed out whole in round-robin order, blocks that don't are replaced
/// by their two halves on the next level. A block that doesn't fit but is
/// already at the maximum prefix length is handed out anyway without being
/// charged against the remaining address count.
#[profiling::function]
pub fn allocate_tree(tree: &SubdivisionTree, n: usize) -> Result<Distribution> {
    if n == 0 {
        return Err(Error::NoRecipients);
    }

    let mut distribution = Distribution::new(n);
    let mut remaining = address_count(&tree.root());
    let mut cursor = 0;
    let n_addrs = n as u64;

    // The root itself is never handed out, only its descendants
    let mut frontier: Vec<Ipv4Net> = tree
        .children(tree.root())?
        .map(|(lower, upper)| vec![lower, upper])
        .unwrap_or_default();

    while remaining > 0 && !frontier.is_empty() {
        let mut quota = remaining / n_addrs;
        let mut next_frontier = Vec::new();

        // Every node on the level is visited, even if `remaining` hits zero part way
        for block in frontier {
            let size = address_count(&block);

            if size <= quota {
                log::trace!("Assigning {block} to recipient {cursor}");
                distribution.assign(cursor, block);
                remaining -= size;

                // A full round has completed, so shrink the quota to match
                if cursor == n - 1 {
                    quota = remaining / n_addrs;
                }
                cursor = (cursor + 1) % n;
            } else if let Some((lower, upper)) = tree.children(block)? {
                log::trace!("Deferring {block} to the next level");
                next_frontier.extend([lower, upper]);
            } else {
                // Can't split any further. `remaining` is deliberately left untouched
                log::debug!(
                    "Forcing {block} onto recipient {cursor} (over quota of {quota} addresses)"
                );
                distribution.assign(cursor, block);
                cursor = (cursor + 1) % n;
            }
        }

        frontier = next_frontier;
    }

    if !frontier.is_empty() {
        let (dropped, network) = (frontier.len(), tree.root());
        log::debug!("Dropping {dropped} deferred blocks of {network}");
    }

    Ok(distribution)
}
