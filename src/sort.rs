//! Divide-and-conquer merge sort specialized to record chains.
//!
//! The engine never converts the chain to an array and never swaps records
//! in place: it splits at the midpoint, sorts the halves recursively, and
//! rebuilds a descending chain by splicing the larger current head from
//! either half.

use tracing::debug;

use crate::chain::{Chain, Link, Node};
use crate::constants::sort::PARALLEL_CUTOFF;

/// Sorts a chain into descending order by value, consuming it.
///
/// Records with equal values keep their relative input order; the input
/// chain is dismantled and callers must use the returned chain.
pub fn merge_sort(chain: Chain) -> Chain {
    debug!(len = chain.len(), "sorting chain");
    sort_halves(chain)
}

/// Like [`merge_sort`], but sorts the halves of large chains on rayon
/// worker threads.
///
/// After the split the halves share no nodes, so each task owns its half
/// exclusively; the join completes before the merge reads either side.
/// Chains at or below [`PARALLEL_CUTOFF`] fall back to the sequential
/// engine.
pub fn par_merge_sort(chain: Chain) -> Chain {
    debug!(len = chain.len(), "sorting chain on worker threads");
    par_sort_halves(chain)
}

fn sort_halves(chain: Chain) -> Chain {
    if chain.len() < 2 {
        return chain;
    }
    let (left, right) = chain.split_at_midpoint();
    merge(sort_halves(left), sort_halves(right))
}

fn par_sort_halves(chain: Chain) -> Chain {
    if chain.len() <= PARALLEL_CUTOFF {
        return sort_halves(chain);
    }
    let (left, right) = chain.split_at_midpoint();
    let (left, right) = rayon::join(|| par_sort_halves(left), || par_sort_halves(right));
    merge(left, right)
}

/// Merges two descending chains into one descending chain.
///
/// The larger current head is detached from its side and spliced onto the
/// result's tail; equal values favor `left`, which preserves input order
/// among equal keys. When one side exhausts, the survivor attaches
/// wholesale. Linear in the combined length; no record is copied.
pub fn merge(left: Chain, right: Chain) -> Chain {
    let mut left = Some(left);
    let mut right = Some(right);
    let mut head: Link = None;
    let mut tail = &mut head;

    loop {
        let take_left = match (left.as_ref(), right.as_ref()) {
            (Some(l), Some(r)) => l.front().value >= r.front().value,
            _ => break,
        };
        let side = if take_left { &mut left } else { &mut right };
        let (node, rest) = side
            .take()
            .expect("compared side is non-empty")
            .detach_front();
        *side = rest;
        tail = attach(tail, node);
    }

    if let Some(survivor) = left.or(right) {
        *tail = survivor.into_head_link();
    }

    let head = head.expect("merging non-empty chains yields at least one node");
    Chain::from_head(head)
}

/// Links a detached node at the cursor and returns the next attachment
/// point.
fn attach(tail: &mut Link, node: Box<Node>) -> &mut Link {
    debug_assert!(node.next.is_none(), "detached nodes carry no successor");
    &mut tail.insert(node).next
}
