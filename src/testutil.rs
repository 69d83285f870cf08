#![cfg(test)]

use crate::lattice::{Lattice, Node, NodeId};

/// Incremental lattice construction for tests.
#[derive(Default)]
pub struct LatticeBuilder {
    nodes: Vec<Node>,
}

impl LatticeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, surface: &str, feature: impl Into<String>, length: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(surface, feature, length));
        id
    }

    /// Boundary (BOS/EOS) node.
    pub fn boundary(&mut self) -> NodeId {
        self.node("", "BOS/EOS,*,*,*,*,*,*,*,*", 0)
    }

    pub fn next(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].next = Some(to);
    }

    pub fn bnext(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].bnext = Some(to);
    }

    pub fn enext(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].enext = Some(to);
    }

    /// Link `ids` into a primary path in order.
    pub fn chain(&mut self, ids: &[NodeId]) {
        for pair in ids.windows(2) {
            self.next(pair[0], pair[1]);
        }
    }

    pub fn build(self, head: Option<NodeId>) -> Lattice {
        Lattice::new(self.nodes, head)
    }
}

/// UniDic-style feature row: pronunciation at field 9, kana at field 17.
pub fn unidic(pos: [&str; 3], pron: &str, kana: &str) -> String {
    let mut fields = vec!["*"; 21];
    fields[0] = pos[0];
    fields[1] = pos[1];
    fields[2] = pos[2];
    fields[9] = pron;
    fields[17] = kana;
    fields.join(",")
}

/// IPADIC-style feature row: reading at field 7, pronunciation at field 8.
pub fn ipadic(pos: [&str; 3], reading: &str, pron: &str) -> String {
    let mut fields = vec!["*"; 9];
    fields[0] = pos[0];
    fields[1] = pos[1];
    fields[2] = pos[2];
    fields[7] = reading;
    fields[8] = pron;
    fields.join(",")
}
