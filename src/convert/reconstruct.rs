use crate::action::ActionNode;
use crate::graph::{FlowNode, Graph, NodeId};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, warn};

/// Rebuilds the canonical tree from a graph.
///
/// The root is the earliest-created node without an incoming edge. Nodes that
/// cannot be reached from it are ignored. Returns `None` for an empty graph or
/// one where every node has a parent.
pub fn reconstruct(graph: &Graph) -> Option<ActionNode> {
    let root = graph.root()?;
    let extra_roots = graph.roots().count() - 1;
    if extra_roots > 0 {
        debug!(
            root = %root.id,
            extra_roots,
            "Graph has several parentless nodes; using the earliest one as root"
        );
    }
    Some(TreeBuilder::new(graph).build(root))
}

/// Walks the graph from the root, emitting each node at most once.
struct TreeBuilder<'a> {
    // Key: parent id, Value: children sorted by position.x
    children: AHashMap<&'a NodeId, Vec<&'a FlowNode>>,
    visited: AHashSet<&'a NodeId>,
}

impl<'a> TreeBuilder<'a> {
    fn new(graph: &'a Graph) -> Self {
        let index: AHashMap<&NodeId, &FlowNode> = graph.nodes.iter().map(|n| (&n.id, n)).collect();

        let mut children: AHashMap<&NodeId, Vec<&FlowNode>> = AHashMap::new();
        for edge in &graph.edges {
            match index.get(&edge.target) {
                Some(&target) => children.entry(&edge.source).or_default().push(target),
                None => warn!(edge = %edge.id, target = %edge.target, "Edge points at a missing node"),
            }
        }
        // Stable, so equal x keeps edge insertion order.
        for siblings in children.values_mut() {
            siblings.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        }

        Self {
            children,
            visited: AHashSet::new(),
        }
    }

    fn build(&mut self, node: &'a FlowNode) -> ActionNode {
        self.visited.insert(&node.id);

        let limit = node.data.node_type().category().max_children();
        let candidates = self.children.get(&node.id).cloned().unwrap_or_default();
        let mut children = Vec::new();
        for child in candidates {
            if self.visited.contains(&child.id) {
                warn!(
                    parent = %node.id,
                    child = %child.id,
                    "Node already placed elsewhere in the tree; skipping edge"
                );
                continue;
            }
            if children.len() == limit {
                debug!(
                    parent = %node.id,
                    child = %child.id,
                    node_type = %node.data.node_type(),
                    "Ignoring edge beyond the node's child capacity"
                );
                continue;
            }
            children.push(self.build(child));
        }

        node.data.clone().with_children(children)
    }
}
