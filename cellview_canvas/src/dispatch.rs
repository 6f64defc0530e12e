// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer dispatch: pick candidate nodes and deliver until one consumes.
//!
//! Routing follows two simple rules:
//!
//! - Candidates are visited topmost first, i.e. in reverse paint order.
//! - [`Outcome::Consumed`] stops propagation; [`Outcome::Continue`] moves on to
//!   the next candidate.
//!
//! Which nodes become candidates is decided by a [`NodeFilter`]. The default,
//! [`default_filter`], keeps nodes that are [`NodeFlags::SELECTABLE`] and whose
//! anchor-adjusted bounds contain the pointer.
//!
//! The node that consumes a press captures the pointer: the canvas routes
//! later moves and the release to it alone, regardless of fresh hits, until
//! the release.
//!
//! ## Minimal example
//!
//! ```
//! use cellview_canvas::dispatch;
//! use cellview_node::Outcome;
//!
//! // Three stacked nodes; the middle one consumes.
//! let candidates = ["top", "middle", "bottom"];
//! let mut seen = Vec::new();
//! let consumer = dispatch::run(&candidates, &mut seen, |name, seen| {
//!     seen.push(*name);
//!     if *name == "middle" { Outcome::Consumed } else { Outcome::Continue }
//! });
//!
//! assert_eq!(consumer, Some(1));
//! assert_eq!(seen, ["top", "middle"]);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;
use smallvec::SmallVec;

use cellview_node::{NodeFlags, Outcome, RenderNode, ViewSnapshot, hit_test};

/// Shared handle to a node registered with a canvas.
pub type NodeHandle = Rc<RefCell<dyn RenderNode>>;

/// Candidate predicate: `(node, view, pointer position in viewport pixels)`.
pub type NodeFilter = dyn Fn(&dyn RenderNode, &ViewSnapshot, Point) -> bool;

/// Candidate list; most pointer events hit only a handful of nodes.
pub type Candidates = SmallVec<[NodeHandle; 8]>;

/// Default candidate predicate: selectable and under the pointer.
#[must_use]
pub fn default_filter(node: &dyn RenderNode, view: &ViewSnapshot, position: Point) -> bool {
    node.state().has(NodeFlags::SELECTABLE) && hit_test(node, view, position).is_some()
}

/// Collects the nodes accepted by `filter`, topmost first.
///
/// Nodes that are mutably borrowed elsewhere are skipped.
#[must_use]
pub fn candidates(
    nodes: &[NodeHandle],
    view: &ViewSnapshot,
    position: Point,
    filter: &NodeFilter,
) -> Candidates {
    nodes
        .iter()
        .rev()
        .filter(|handle| match handle.try_borrow() {
            Ok(node) => filter(&*node, view, position),
            Err(_) => {
                log::warn!("skipping node that is already borrowed during dispatch");
                false
            }
        })
        .cloned()
        .collect()
}

/// Runs `handler` over `candidates` in order until one returns
/// [`Outcome::Consumed`].
///
/// Returns the index of the consuming candidate, or `None` if every candidate
/// let the event through.
pub fn run<N, E>(
    candidates: &[N],
    event: &mut E,
    mut handler: impl FnMut(&N, &mut E) -> Outcome,
) -> Option<usize> {
    for (index, candidate) in candidates.iter().enumerate() {
        match handler(candidate, event) {
            Outcome::Continue => {}
            Outcome::Consumed => return Some(index),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::run;
    use cellview_node::Outcome;

    #[test]
    fn continue_visits_every_candidate() {
        let seq = [1, 2, 3];
        let mut seen: Vec<u32> = Vec::new();
        let consumer = run(&seq, &mut seen, |n, seen| {
            seen.push(*n);
            Outcome::Continue
        });
        assert_eq!(consumer, None);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn consumed_stops_propagation() {
        let seq = [1, 2, 3];
        let mut seen: Vec<u32> = Vec::new();
        let consumer = run(&seq, &mut seen, |n, seen| {
            seen.push(*n);
            if *n == 2 {
                Outcome::Consumed
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(consumer, Some(1));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn empty_sequence_is_not_consumed() {
        let seq: [u32; 0] = [];
        assert_eq!(run(&seq, &mut (), |_, _| Outcome::Consumed), None);
    }
}
