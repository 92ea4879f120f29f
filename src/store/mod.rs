//! The editor's state container.
//!
//! A `FlowStore` owns the canonical tree, the live graph and the entity
//! reference tables. Loading replaces the graph wholesale; every edit after
//! that goes to the graph only, and the tree is refreshed on export. Each
//! store is independent, so several editors can run side by side. It is not
//! synchronized: callers that dispatch from several threads wrap it in a
//! single mutex.

use crate::action::{ActionNode, NodeData, NodeType};
use crate::convert::{LayoutConfig, Materializer, reconstruct};
use crate::error::{EditError, FormatError};
use crate::graph::{
    Direction, EdgeChange, EdgeId, FlowNode, Graph, IdAllocator, NodeChange, NodeId, Position,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

mod builder;
mod references;

pub use builder::FlowStoreBuilder;
pub use references::EntityReferences;

pub struct FlowStore {
    tree: Option<ActionNode>,
    graph: Graph,
    references: EntityReferences,
    layout: LayoutConfig,
    ids: IdAllocator,
    stale: bool,
    rejections: Vec<EditError>,
}

impl FlowStore {
    pub fn builder() -> FlowStoreBuilder {
        FlowStoreBuilder::new()
    }

    pub fn new() -> Self {
        FlowStoreBuilder::new().build()
    }

    pub(crate) fn empty(layout: LayoutConfig, references: EntityReferences) -> Self {
        Self {
            tree: None,
            graph: Graph::new(),
            references,
            layout,
            ids: IdAllocator::new(),
            stale: false,
            rejections: Vec::new(),
        }
    }

    pub fn tree(&self) -> Option<&ActionNode> {
        self.tree.as_ref()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn references(&self) -> &EntityReferences {
        &self.references
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// True when the graph has been edited since the tree was last loaded or exported.
    pub fn is_tree_stale(&self) -> bool {
        self.stale
    }

    /// Why items of the most recent host intent were skipped, in batch order.
    /// Empty when everything applied.
    pub fn last_rejections(&self) -> &[EditError] {
        &self.rejections
    }

    // --- Load / export ---

    /// Materializes `tree` and replaces the graph with the result.
    pub fn load(&mut self, tree: ActionNode) {
        self.graph = Materializer::new(&mut self.ids, &self.layout).materialize(&tree);
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Materialized skill tree"
        );
        self.tree = Some(tree);
        self.stale = false;
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), FormatError> {
        let tree = ActionNode::from_json(json)?;
        self.load(tree);
        Ok(())
    }

    /// Reconstructs the tree from the current graph and keeps it as the canonical one.
    ///
    /// `None` means the graph is empty or has no node without a parent.
    pub fn export(&mut self) -> Option<&ActionNode> {
        self.tree = reconstruct(&self.graph);
        self.stale = false;
        if self.tree.is_none() && !self.graph.is_empty() {
            warn!(
                nodes = self.graph.node_count(),
                "Graph has no root; exported an empty tree"
            );
        }
        self.tree.as_ref()
    }

    pub fn export_json(&mut self) -> Result<Option<String>, FormatError> {
        self.export().map(ActionNode::to_json_pretty).transpose()
    }

    // --- Lifecycle ---

    pub fn add_node(
        &mut self,
        node_type: NodeType,
        parent: Option<&NodeId>,
    ) -> Result<NodeId, EditError> {
        let result = self
            .graph
            .add_node(node_type, parent, &mut self.ids, &self.layout);
        self.record("add_node", result)
    }

    pub fn insert_node(
        &mut self,
        data: NodeData,
        parent: Option<&NodeId>,
    ) -> Result<NodeId, EditError> {
        let result = self
            .graph
            .insert_node(data, parent, &mut self.ids, &self.layout);
        self.record("insert_node", result)
    }

    pub fn update_node(&mut self, id: &NodeId, patch: &Map<String, Value>) -> Result<(), EditError> {
        let result = self.graph.update_node(id, patch);
        self.record("update_node", result)
    }

    pub fn remove_node(&mut self, id: &NodeId) -> Result<FlowNode, EditError> {
        let result = self.graph.remove_node(id);
        self.record("remove_node", result)
    }

    pub fn reorder_node(&mut self, id: &NodeId, direction: Direction) -> Result<bool, EditError> {
        match self.graph.reorder_node(id, direction) {
            Ok(false) => {
                debug!(node = %id, ?direction, "Reorder had no neighbour to swap with");
                Ok(false)
            }
            result => self.record("reorder_node", result),
        }
    }

    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<EdgeId, EditError> {
        let result = self.graph.connect(source, target, &mut self.ids);
        self.record("connect", result)
    }

    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<(), EditError> {
        let result = self.graph.move_node(id, position);
        self.record("move_node", result)
    }

    /// Drops every node the root can no longer reach.
    pub fn prune_orphans(&mut self) -> Vec<FlowNode> {
        let removed = self.graph.prune_orphans();
        if !removed.is_empty() {
            debug!(removed = removed.len(), "Pruned detached nodes");
            self.stale = true;
        }
        removed
    }

    // --- Host intents ---

    /// Applies a batch of node changes in order. Changes that fail are skipped
    /// and listed in `last_rejections`.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> &Graph {
        self.rejections.clear();
        for change in changes {
            if let NodeChange::Add { node } = change {
                self.ids.observe_node_id(&node.id);
            }
            let result = self.graph.apply_node_change(change);
            self.collect("node_change", result);
        }
        &self.graph
    }

    /// Applies a batch of edge changes in order. Changes that fail are skipped
    /// and listed in `last_rejections`.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> &Graph {
        self.rejections.clear();
        for change in changes {
            if let EdgeChange::Add { edge } = change {
                self.ids.observe_edge_id(&edge.id);
            }
            let result = self.graph.apply_edge_change(change);
            self.collect("edge_change", result);
        }
        &self.graph
    }

    /// Handles a connection attempt from the rendering surface. A refusal is
    /// listed in `last_rejections`.
    pub fn on_connect(&mut self, source: &NodeId, target: &NodeId) -> &Graph {
        self.rejections.clear();
        let result = self.connect(source, target);
        if let Err(e) = result {
            self.rejections.push(e);
        }
        &self.graph
    }

    fn collect(&mut self, operation: &str, result: Result<(), EditError>) {
        if let Err(e) = self.record(operation, result) {
            self.rejections.push(e);
        }
    }

    /// Logs the outcome of an edit and marks the tree stale on success.
    fn record<T>(&mut self, operation: &str, result: Result<T, EditError>) -> Result<T, EditError> {
        match &result {
            Ok(_) => {
                self.stale = true;
                debug!(operation, "Graph edit applied");
            }
            Err(e) => warn!(operation, error = %e, "Graph edit rejected"),
        }
        result
    }
}

impl Default for FlowStore {
    fn default() -> Self {
        Self::new()
    }
}
