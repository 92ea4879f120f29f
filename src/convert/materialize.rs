use super::LayoutConfig;
use crate::action::{ActionNode, NodeCategory};
use crate::graph::{FlowEdge, FlowNode, Graph, IdAllocator, NodeId, Position};

/// Flattens a tree into a graph in depth-first pre-order, so the root is
/// always the first node created.
pub struct Materializer<'a> {
    ids: &'a mut IdAllocator,
    layout: &'a LayoutConfig,
    graph: Graph,
}

impl<'a> Materializer<'a> {
    pub fn new(ids: &'a mut IdAllocator, layout: &'a LayoutConfig) -> Self {
        Self {
            ids,
            layout,
            graph: Graph::new(),
        }
    }

    pub fn materialize(mut self, tree: &ActionNode) -> Graph {
        let anchor = self.layout.anchor;
        self.visit(tree, None, anchor);
        self.graph
    }

    fn visit(&mut self, node: &ActionNode, parent: Option<&NodeId>, position: Position) {
        let id = self.ids.next_node_id();
        self.graph
            .nodes
            .push(FlowNode::new(id.clone(), position, node.data()));
        if let Some(parent_id) = parent {
            self.graph.edges.push(FlowEdge::new(
                self.ids.next_edge_id(),
                parent_id.clone(),
                id.clone(),
            ));
        }

        match node.category() {
            NodeCategory::Container => {
                for (index, child) in node.children().iter().enumerate() {
                    let slot = self.layout.container_child(position, index);
                    self.visit(child, Some(&id), slot);
                }
            }
            NodeCategory::Gating => {
                if let Some(child) = node.children().first() {
                    let slot = self.layout.gate_child(position);
                    self.visit(child, Some(&id), slot);
                }
            }
            NodeCategory::Leaf => {}
        }
    }
}

/// Shorthand for `Materializer::new(ids, layout).materialize(tree)`.
pub fn materialize(tree: &ActionNode, ids: &mut IdAllocator, layout: &LayoutConfig) -> Graph {
    Materializer::new(ids, layout).materialize(tree)
}
