//! Document-tree collaboration: walking a host tree and updating its text.
//!
//! The engine never walks a document itself; it exposes
//! [`process`](Engine::process) and lets the host tree call it per text
//! node. [`DocumentTree`] is the contract a host tree implements to opt in
//! to [`auto_update`], and [`VecTree`] is a simple in-memory implementation
//! used by tests and demos.

use log::{debug, warn};
use stamp_engine::{CustomData, Engine};

/// Identifies a node within a [`DocumentTree`].
pub type NodeId = usize;

/// The conventional root selector for a page-like document.
pub const DEFAULT_SELECTOR: &str = "body";

/// The contract for a mutable, hierarchical host document.
///
/// Selector semantics are the tree's own; [`auto_update`] only needs one
/// starting node per selector, child enumeration, and text access on the
/// text-bearing leaves.
pub trait DocumentTree {
    /// The first node matching `selector`, if any.
    fn select(&self, selector: &str) -> Option<NodeId>;

    /// Child nodes of `node`, in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// The content of `node` when it is a text-bearing leaf.
    fn text(&self, node: NodeId) -> Option<String>;

    /// Replaces the content of a text-bearing leaf.
    fn set_text(&mut self, node: NodeId, text: String);
}

/// Walks the subtree under `selector` depth-first and rewrites every
/// text-bearing leaf containing the literal substring `{{` with the result
/// of [`Engine::process`], mutating only when the result differs.
///
/// A missing tree (non-document host) or an unmatched selector is a warned
/// no-op, never an error.
pub fn auto_update<T: DocumentTree>(
    tree: Option<&mut T>,
    selector: &str,
    data: &CustomData,
    engine: &Engine,
) {
    let Some(tree) = tree else {
        warn!("auto_update: no document tree available, nothing to do");
        return;
    };
    let Some(root) = tree.select(selector) else {
        warn!("auto_update: selector '{}' matched nothing", selector);
        return;
    };

    let mut pending = vec![root];
    let mut updated = 0usize;
    while let Some(node) = pending.pop() {
        if let Some(content) = tree.text(node) {
            if content.contains("{{") {
                let processed = engine.process(&content, data);
                if processed != content {
                    tree.set_text(node, processed);
                    updated += 1;
                }
            }
        }
        pending.extend(tree.children(node));
    }
    debug!("auto_update: rewrote {} node(s) under '{}'", updated, selector);
}

// --- In-memory tree ---

#[derive(Debug, Clone)]
enum VecNodeKind {
    Element(String),
    Text(String),
}

#[derive(Debug, Clone)]
struct VecNode {
    kind: VecNodeKind,
    children: Vec<NodeId>,
}

/// A simple in-memory [`DocumentTree`]: elements with string tag names and
/// text leaves. Selectors match element tag names exactly.
#[derive(Debug, Clone)]
pub struct VecTree {
    nodes: Vec<VecNode>,
}

impl VecTree {
    /// A tree holding a single root element named `document`.
    pub fn new() -> Self {
        Self {
            nodes: vec![VecNode {
                kind: VecNodeKind::Element("document".to_string()),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn add_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.push(parent, VecNodeKind::Element(tag.to_string()))
    }

    pub fn add_text(&mut self, parent: NodeId, content: &str) -> NodeId {
        self.push(parent, VecNodeKind::Text(content.to_string()))
    }

    /// The content of a text leaf, for assertions.
    pub fn text_of(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node].kind {
            VecNodeKind::Text(content) => Some(content),
            VecNodeKind::Element(_) => None,
        }
    }

    fn push(&mut self, parent: NodeId, kind: VecNodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(VecNode {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }
}

impl Default for VecTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree for VecTree {
    fn select(&self, selector: &str) -> Option<NodeId> {
        let mut pending = vec![self.root()];
        while let Some(id) = pending.pop() {
            if let VecNodeKind::Element(tag) = &self.nodes[id].kind {
                if tag == selector {
                    return Some(id);
                }
            }
            // Reverse keeps the scan in document order off a stack.
            pending.extend(self.nodes[id].children.iter().rev().copied());
        }
        None
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node].children.clone()
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.text_of(node).map(str::to_string)
    }

    fn set_text(&mut self, node: NodeId, text: String) {
        if let VecNodeKind::Text(content) = &mut self.nodes[node].kind {
            *content = text;
        }
    }
}
