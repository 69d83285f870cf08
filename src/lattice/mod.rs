//! Read-only view of a morphological analyzer's word lattice.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. The
//! analyzer owns the link structure: `next` is the best path, `bnext`/`enext`
//! chain nodes sharing a begin/end boundary. Links may form cycles or point
//! outside the arena, so every hop goes through [`Lattice::follow`].

mod collect;
mod document;

pub use collect::{collect_same_span_nodes, DEFAULT_MAX_DEPTH};
pub use document::LatticeDocument;

use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Lattice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// One analyzer hypothesis: a surface span plus its feature string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub surface: String,
    /// Comma-delimited attributes (POS, readings, ...), schema depends on the dictionary.
    pub feature: String,
    /// Span length in characters as reported by the analyzer.
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bnext: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enext: Option<NodeId>,
}

impl Node {
    pub fn new(surface: impl Into<String>, feature: impl Into<String>, length: usize) -> Self {
        Self {
            surface: surface.into(),
            feature: feature.into(),
            length,
            next: None,
            bnext: None,
            enext: None,
        }
    }

    /// Feature string split into ordered fields.
    pub fn fields(&self) -> Vec<&str> {
        self.feature.split(',').collect()
    }

    /// Sentence boundary markers (BOS/EOS) carry no surface.
    pub fn is_boundary(&self) -> bool {
        self.surface.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error("node {from} links to missing node {to}")]
    DanglingLink { from: usize, to: usize },
    #[error("node {0} does not exist")]
    MissingNode(usize),
    #[error("invalid lattice document: {0}")]
    Document(String),
}

/// Arena of analyzer nodes plus the head of the primary path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    nodes: Vec<Node>,
    head: Option<NodeId>,
}

impl Lattice {
    pub fn new(nodes: Vec<Node>, head: Option<NodeId>) -> Self {
        Self { nodes, head }
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Resolve a link taken from `from`. Fails if `to` is outside the arena.
    pub fn follow(&self, from: NodeId, to: NodeId) -> Result<&Node, LatticeError> {
        self.nodes.get(to.0).ok_or(LatticeError::DanglingLink {
            from: from.0,
            to: to.0,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Walk the primary path from `head` along `next`.
    ///
    /// Stops at a missing link and after `len()` steps, so a cyclic `next`
    /// chain cannot loop forever.
    pub fn primary_path(&self) -> PrimaryPath<'_> {
        PrimaryPath {
            lattice: self,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }
}

pub struct PrimaryPath<'a> {
    lattice: &'a Lattice,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for PrimaryPath<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.lattice.node(id)?;
        self.remaining -= 1;
        self.cursor = node.next;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Lattice {
        let mut bos = Node::new("", "BOS/EOS,*,*,*", 0);
        bos.next = Some(NodeId(1));
        let mut a = Node::new("猫", "名詞,普通名詞,一般,*", 1);
        a.next = Some(NodeId(2));
        let eos = Node::new("", "BOS/EOS,*,*,*", 0);
        Lattice::new(vec![bos, a, eos], Some(NodeId(0)))
    }

    #[test]
    fn test_fields_split() {
        let node = Node::new("猫", "名詞,普通名詞,一般", 1);
        assert_eq!(node.fields(), vec!["名詞", "普通名詞", "一般"]);
        assert_eq!(Node::new("x", "", 1).fields(), vec![""]);
    }

    #[test]
    fn test_primary_path() {
        let lattice = chain();
        let surfaces: Vec<&str> = lattice
            .primary_path()
            .map(|(_, n)| n.surface.as_str())
            .collect();
        assert_eq!(surfaces, vec!["", "猫", ""]);
    }

    #[test]
    fn test_primary_path_cycle_terminates() {
        let mut lattice = chain();
        lattice.nodes[2].next = Some(NodeId(0));
        assert_eq!(lattice.primary_path().count(), 3);
    }

    #[test]
    fn test_primary_path_dangling_next_stops() {
        let mut lattice = chain();
        lattice.nodes[1].next = Some(NodeId(42));
        assert_eq!(lattice.primary_path().count(), 2);
    }

    #[test]
    fn test_follow_dangling() {
        let lattice = chain();
        let err = lattice.follow(NodeId(1), NodeId(9)).unwrap_err();
        assert!(matches!(err, LatticeError::DanglingLink { from: 1, to: 9 }));
        assert!(lattice.follow(NodeId(0), NodeId(1)).is_ok());
    }

    #[test]
    fn test_empty_lattice() {
        let lattice = Lattice::default();
        assert!(lattice.is_empty());
        assert_eq!(lattice.primary_path().count(), 0);
    }
}
