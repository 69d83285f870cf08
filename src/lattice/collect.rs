use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::{Lattice, LatticeError, Node, NodeId};

/// Depth bound used when no setting overrides it.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Gather every node reachable from `start` through `bnext`/`enext` whose
/// span length equals `target_length`.
///
/// Pre-order walk: a matching node is recorded, then its `bnext` branch is
/// explored before its `enext` branch. A branch ends at a boundary node, a
/// node whose length differs, a `(surface, feature)` pair already
/// collected, or once the depth exceeds `max_depth`. Each pair appears at
/// most once in the result, in discovery order.
pub fn collect_same_span_nodes(
    lattice: &Lattice,
    start: NodeId,
    target_length: usize,
    max_depth: usize,
) -> Result<Vec<NodeId>, LatticeError> {
    let _span = debug_span!("collect_same_span", start = start.0, target_length).entered();

    let node = lattice
        .node(start)
        .ok_or(LatticeError::MissingNode(start.0))?;

    let mut walk = Walk {
        lattice,
        target_length,
        max_depth,
        seen: HashSet::new(),
        found: Vec::new(),
    };
    walk.run(start, node)?;

    debug!(found = walk.found.len());
    Ok(walk.found)
}

struct Walk<'a> {
    lattice: &'a Lattice,
    target_length: usize,
    max_depth: usize,
    seen: HashSet<(&'a str, &'a str)>,
    found: Vec<NodeId>,
}

/// A node waiting to be visited: reached from `from` through `link`.
struct Pending {
    from: NodeId,
    link: NodeId,
    depth: usize,
}

impl<'a> Walk<'a> {
    /// Explicit stack, so long link chains cannot exhaust the call stack.
    /// Links are resolved when popped, which keeps both the visiting order
    /// and the first reported dangling link the same as a recursive walk.
    fn run(&mut self, start: NodeId, node: &'a Node) -> Result<(), LatticeError> {
        let mut stack = Vec::new();
        self.visit(start, node, 0, &mut stack);

        while let Some(Pending { from, link, depth }) = stack.pop() {
            let child = self.lattice.follow(from, link)?;
            self.visit(link, child, depth, &mut stack);
        }
        Ok(())
    }

    fn visit(&mut self, id: NodeId, node: &'a Node, depth: usize, stack: &mut Vec<Pending>) {
        if depth > self.max_depth || node.is_boundary() {
            return;
        }
        let key = (node.surface.as_str(), node.feature.as_str());
        if self.seen.contains(&key) || node.length != self.target_length {
            return;
        }
        self.seen.insert(key);
        self.found.push(id);

        // enext below bnext: the bnext branch is finished first.
        for link in [node.enext, node.bnext].into_iter().flatten() {
            stack.push(Pending {
                from: id,
                link,
                depth: depth + 1,
            });
        }
    }
}
