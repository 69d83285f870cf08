use serde::{Deserialize, Serialize};

use super::{Lattice, LatticeError, Node, NodeId};

/// JSON interchange form of a lattice, as produced by an analyzer bridge.
///
/// ```json
/// { "text": "今日は", "head": 0,
///   "nodes": [ { "surface": "", "feature": "BOS/EOS", "length": 0, "next": 1 }, ... ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatticeDocument {
    /// The analyzed line.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub head: Option<NodeId>,
    pub nodes: Vec<Node>,
}

impl LatticeDocument {
    pub fn from_json(json: &str) -> Result<Self, LatticeError> {
        serde_json::from_str(json).map_err(|e| LatticeError::Document(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, LatticeError> {
        serde_json::to_string(self).map_err(|e| LatticeError::Document(e.to_string()))
    }

    pub fn from_lattice(text: impl Into<String>, lattice: &Lattice) -> Self {
        Self {
            text: text.into(),
            head: lattice.head(),
            nodes: lattice.nodes().to_vec(),
        }
    }

    /// Check every link and build the lattice. Cycles are allowed; links to
    /// nodes that do not exist are not.
    pub fn into_lattice(self) -> Result<Lattice, LatticeError> {
        let count = self.nodes.len();
        if let Some(head) = self.head {
            if head.0 >= count {
                return Err(LatticeError::MissingNode(head.0));
            }
        }
        for (i, node) in self.nodes.iter().enumerate() {
            for link in [node.next, node.bnext, node.enext].into_iter().flatten() {
                if link.0 >= count {
                    return Err(LatticeError::DanglingLink { from: i, to: link.0 });
                }
            }
        }
        Ok(Lattice::new(self.nodes, self.head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "text": "声",
        "head": 0,
        "nodes": [
            { "surface": "", "feature": "BOS/EOS,*,*,*", "length": 0, "next": 1 },
            { "surface": "声", "feature": "名詞,普通名詞,一般,*", "length": 1, "next": 2, "bnext": 3 },
            { "surface": "", "feature": "BOS/EOS,*,*,*", "length": 0 },
            { "surface": "声", "feature": "名詞,普通名詞,一般,*,*,*,*,*,*,セイ", "length": 1, "enext": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let doc = LatticeDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.text, "声");
        let lattice = doc.into_lattice().unwrap();
        assert_eq!(lattice.len(), 4);
        assert_eq!(lattice.head(), Some(NodeId(0)));
        assert_eq!(lattice.node(NodeId(1)).unwrap().bnext, Some(NodeId(3)));
        assert_eq!(lattice.node(NodeId(2)).unwrap().next, None);
    }

    #[test]
    fn test_dangling_link_rejected() {
        let json = r#"{ "head": 0, "nodes": [
            { "surface": "a", "feature": "", "length": 1, "bnext": 5 }
        ] }"#;
        let err = LatticeDocument::from_json(json)
            .unwrap()
            .into_lattice()
            .unwrap_err();
        assert!(matches!(err, LatticeError::DanglingLink { from: 0, to: 5 }));
    }

    #[test]
    fn test_missing_head_rejected() {
        let json = r#"{ "head": 3, "nodes": [] }"#;
        let err = LatticeDocument::from_json(json)
            .unwrap()
            .into_lattice()
            .unwrap_err();
        assert!(matches!(err, LatticeError::MissingNode(3)));
    }

    #[test]
    fn test_malformed_json() {
        let err = LatticeDocument::from_json("{ nodes: ").unwrap_err();
        assert!(matches!(err, LatticeError::Document(_)));
    }

    #[test]
    fn test_serialized_form_reloads() {
        let lattice = LatticeDocument::from_json(SAMPLE)
            .unwrap()
            .into_lattice()
            .unwrap();
        let json = LatticeDocument::from_lattice("声", &lattice).to_json().unwrap();
        assert!(!json.contains("\"bnext\":null"));
        let again = LatticeDocument::from_json(&json)
            .unwrap()
            .into_lattice()
            .unwrap();
        assert_eq!(again, lattice);
    }
}
