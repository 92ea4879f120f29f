use super::{EdgeId, NodeId};

/// Hands out fresh node and edge ids.
///
/// Counters only ever grow, so an id is never reused within a session and
/// numeric order matches creation order.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_node: u64,
    next_edge: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_node_id(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId::new(format!("node-{}", self.next_node))
    }

    pub fn next_edge_id(&mut self) -> EdgeId {
        self.next_edge += 1;
        EdgeId::new(format!("edge-{}", self.next_edge))
    }

    /// Moves the node counter past `id` if it has the allocator's own
    /// `node-N` form, so ids supplied from outside are never handed out again.
    pub fn observe_node_id(&mut self, id: &NodeId) {
        if let Some(n) = numeric_suffix(id.as_str(), "node-") {
            self.next_node = self.next_node.max(n);
        }
    }

    pub fn observe_edge_id(&mut self, id: &EdgeId) {
        if let Some(n) = numeric_suffix(id.as_str(), "edge-") {
            self.next_edge = self.next_edge.max(n);
        }
    }

    /// Number of node ids issued so far.
    pub fn issued_nodes(&self) -> u64 {
        self.next_node
    }
}

fn numeric_suffix(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}
