//! Core data structures for the normalized tree.

/// A value in the normalized, serialization-ready tree.
///
/// Empty strings, `Null` and empty sequences are kept here; dropping them is the emitter's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null,
    Str(String),
    Int(u64),
    Seq(Vec<Node>),
    /// Ordered mapping; keys are field names with underscores.
    Map(Vec<(String, Node)>),
}

impl Node {
    /// Look up a key in a mapping node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the emitter leaves this value out of a mapping.
    pub fn is_omitted(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Str(s) => s.is_empty(),
            Node::Seq(items) => items.is_empty(),
            Node::Int(_) | Node::Map(_) => false,
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Str(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Str(s)
    }
}

/// A normalized entry together with the label it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDoc {
    pub label: String,
    pub root: Node,
}
