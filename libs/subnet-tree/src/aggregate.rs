use crate::{
    allocator::allocate,
    distribution::Distribution,
    error::{Error, Result},
    request::AllocationRequest,
};

/// Distribute several blocks across the same `n` recipients.
///
/// Requests are handled in order, each with its own tree and its own
/// round-robin cursor. Every recipient ends up with the subnets it received
/// from the first request, followed by those from the second, and so on.
#[profiling::function]
pub fn allocate_many(requests: &[AllocationRequest], n: usize) -> Result<Distribution> {
    if n == 0 {
        return Err(Error::NoRecipients);
    }

    let mut distribution = Distribution::new(n);
    for request in requests {
        distribution.merge(allocate(request, n)?);
    }

    let (total, blocks) = (distribution.total_addresses(), requests.len());
    log::debug!("Distributed {total} addresses from {blocks} blocks across {n} recipients");
    Ok(distribution)
}
