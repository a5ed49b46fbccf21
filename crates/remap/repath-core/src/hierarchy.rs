//! Node hierarchy: arena tree plus the candidate index used by the resolver.
//!
//! The tree is an arena of nodes with explicit parent indices and a root
//! index. Ownership is root-down (a parent owns its ordered children);
//! "find my path" walks parent indices upward rather than chasing shared
//! back-references. The caller supplies the tree whole for the duration of
//! one resolution pass and the resolver never mutates it.
//!
//! Duplicate sibling names are legal (common in practice); they simply
//! produce multiple candidates with identical paths.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::NodeId;
use crate::path::NodePath;

/// Coarse marker describing what category of component a node plausibly
/// carries. Every node is implicitly transform-like; only the explicit tags
/// are listed here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    HasRenderer,
    HasParticleSystem,
}

/// A named vertex in the rooted, ordered tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub capabilities: Vec<Capability>,
}

impl Node {
    pub fn has_capability(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }
}

/// Arena-backed rooted tree.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Hierarchy {
    /// Create a hierarchy containing only a root node.
    pub fn with_root(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                name: name.into(),
                parent: None,
                children: Vec::new(),
                capabilities: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child with no explicit capabilities.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.add_child_with(parent, name, Vec::new())
    }

    /// Append a child carrying the given capability tags.
    pub fn add_child_with(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        capabilities: Vec<Capability>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            capabilities,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Follow `path`'s components child-by-child from the root. At each step
    /// the first child with a matching name is taken. Returns `None` when any
    /// component fails to match — the already-valid check in the resolver.
    pub fn resolve_path(&self, path: &NodePath) -> Option<NodeId> {
        let mut cur = self.root;
        for component in path.components() {
            let next = self.nodes[cur.index()]
                .children
                .iter()
                .copied()
                .find(|&c| self.nodes[c.index()].name == *component)?;
            cur = next;
        }
        Some(cur)
    }

    /// Depth-first pre-order traversal of all descendants of `root`, not
    /// including `root` itself. The order is deterministic; it only matters
    /// for tie-breaking among otherwise-equal candidates.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.index()]
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.index()].children.iter().rev().copied());
        }
        out
    }

    /// Walk `node` up via parent indices until reaching `root` (or a node
    /// with no parent), collecting names root-to-node order.
    ///
    /// The caller must guarantee `node` is a descendant of `root`; for a
    /// non-descendant the walk terminates at the parentless ancestor and the
    /// result is anchored wherever the walk stopped.
    pub fn relative_path(&self, root: NodeId, node: NodeId) -> NodePath {
        let mut names: Vec<String> = Vec::new();
        let mut cur = node;
        while cur != root {
            let n = &self.nodes[cur.index()];
            names.push(n.name.clone());
            match n.parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        names.reverse();
        NodePath::new(names)
    }
}

// ----- JSON schema (serde) -----
//
// Hierarchies deserialize from nested JSON:
//   { "name": "Root", "capabilities": ["has-renderer"], "children": [...] }
// The raw nested form is flattened into the arena on load.

#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    #[serde(default)]
    capabilities: Vec<Capability>,
    #[serde(default)]
    children: Vec<RawNode>,
}

fn flatten(raw: RawNode, parent: Option<NodeId>, h: &mut Hierarchy) {
    let RawNode {
        name,
        capabilities,
        children,
    } = raw;
    let id = match parent {
        None => {
            let root = h.root;
            let node = &mut h.nodes[root.index()];
            node.name = name;
            node.capabilities = capabilities;
            root
        }
        Some(p) => h.add_child_with(p, name, capabilities),
    };
    for child in children {
        flatten(child, Some(id), h);
    }
}

impl<'de> Deserialize<'de> for Hierarchy {
    fn deserialize<D>(deserializer: D) -> Result<Hierarchy, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawNode::deserialize(deserializer)?;
        let mut h = Hierarchy::with_root(String::new());
        flatten(raw, None, &mut h);
        Ok(h)
    }
}

/// One descendant considered during search, paired with its path relative to
/// the root.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub node: NodeId,
    pub path: NodePath,
}

/// Exhaustive `(node, relativePath)` listing for every descendant of the
/// root, in traversal order. Built once per root, up front, and never
/// invalidated mid-pass.
#[derive(Clone, Debug)]
pub struct HierarchyIndex {
    candidates: Vec<Candidate>,
}

impl HierarchyIndex {
    pub fn build(hierarchy: &Hierarchy) -> Self {
        let root = hierarchy.root();
        let candidates = hierarchy
            .descendants(root)
            .into_iter()
            .map(|node| Candidate {
                node,
                path: hierarchy.relative_path(root, node),
            })
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hierarchy {
        // Root
        // ├── Hips
        // │   ├── Spine
        // │   │   └── Head
        // │   └── Leg
        // └── Props
        let mut h = Hierarchy::with_root("Root");
        let hips = h.add_child(h.root(), "Hips");
        let spine = h.add_child(hips, "Spine");
        h.add_child(spine, "Head");
        h.add_child(hips, "Leg");
        h.add_child(h.root(), "Props");
        h
    }

    #[test]
    fn descendants_preorder_excludes_root() {
        let h = sample();
        let names: Vec<&str> = h
            .descendants(h.root())
            .into_iter()
            .map(|id| h.node(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["Hips", "Spine", "Head", "Leg", "Props"]);
    }

    #[test]
    fn relative_path_root_to_node_order() {
        let h = sample();
        let head = h.resolve_path(&NodePath::parse("Hips/Spine/Head").unwrap());
        let head = head.expect("head resolves");
        assert_eq!(
            h.relative_path(h.root(), head).to_string(),
            "Hips/Spine/Head"
        );
    }

    #[test]
    fn resolve_path_misses_unknown_component() {
        let h = sample();
        assert!(h.resolve_path(&NodePath::parse("Hips/Tail").unwrap()).is_none());
        assert!(h.resolve_path(&NodePath::parse("Spine").unwrap()).is_none());
    }

    #[test]
    fn duplicate_sibling_names_index_without_crash() {
        let mut h = Hierarchy::with_root("Root");
        let left = h.add_child(h.root(), "Arm");
        let right = h.add_child(h.root(), "Arm");
        h.add_child(left, "Hand");
        h.add_child(right, "Hand");
        let index = HierarchyIndex::build(&h);
        assert_eq!(index.len(), 4);
        // Both hands carry an identical relative path; traversal order decides.
        let hand_paths: Vec<String> = index
            .candidates()
            .iter()
            .filter(|c| c.path.leaf() == "Hand")
            .map(|c| c.path.to_string())
            .collect();
        assert_eq!(hand_paths, vec!["Arm/Hand", "Arm/Hand"]);
    }

    #[test]
    fn deserializes_nested_json() {
        let json = r#"{
            "name": "Root",
            "children": [
                {
                    "name": "Body",
                    "capabilities": ["has-renderer"],
                    "children": [{ "name": "Emitter", "capabilities": ["has-particle-system"] }]
                }
            ]
        }"#;
        let h: Hierarchy = serde_json::from_str(json).unwrap();
        assert_eq!(h.len(), 3);
        let body = h.resolve_path(&NodePath::parse("Body").unwrap()).unwrap();
        assert!(h.node(body).has_capability(Capability::HasRenderer));
        let emitter = h
            .resolve_path(&NodePath::parse("Body/Emitter").unwrap())
            .unwrap();
        assert!(h.node(emitter).has_capability(Capability::HasParticleSystem));
        assert!(!h.node(emitter).has_capability(Capability::HasRenderer));
    }
}
