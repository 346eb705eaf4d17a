/// A node in a parsed outline tree.
///
/// `level` is the heading depth class (0 for the synthetic root, 1–3 for
/// `#`–`###`, parent level + 1 for bullets), not the tree depth: a `##`
/// heading sitting directly under the root has level 2 at depth 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Unique within one parse call. Not stable across parses.
    pub id: usize,
    pub label: String,
    pub level: usize,
    /// Source order. Ordering is significant: it fixes the vertical
    /// stacking order in the layout.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(id: usize, label: impl Into<String>, level: usize) -> Self {
        Self {
            id,
            label: label.into(),
            level,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count including this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }
}
