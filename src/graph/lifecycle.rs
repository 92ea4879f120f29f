use super::{EdgeId, FlowEdge, FlowNode, Graph, IdAllocator, NodeId, Position};
use crate::action::{NodeData, NodeType};
use crate::convert::LayoutConfig;
use crate::error::EditError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which neighbour a node swaps places with in `reorder_node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Structural edits. Every operation either applies completely or returns an
/// error with the graph untouched.
impl Graph {
    /// Adds a node of `node_type` with its default payload, optionally as the
    /// last child of `parent`.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        parent: Option<&NodeId>,
        ids: &mut IdAllocator,
        layout: &LayoutConfig,
    ) -> Result<NodeId, EditError> {
        self.insert_node(node_type.default_data(), parent, ids, layout)
    }

    /// Like `add_node`, but with a caller-supplied payload.
    pub fn insert_node(
        &mut self,
        data: NodeData,
        parent: Option<&NodeId>,
        ids: &mut IdAllocator,
        layout: &LayoutConfig,
    ) -> Result<NodeId, EditError> {
        let position = match parent {
            Some(parent_id) => {
                self.ensure_accepts_child(parent_id)?;
                self.next_child_slot(parent_id, layout)?
            }
            None => self.next_free_slot(layout),
        };

        let id = ids.next_node_id();
        self.nodes.push(FlowNode::new(id.clone(), position, data));
        if let Some(parent_id) = parent {
            self.edges
                .push(FlowEdge::new(ids.next_edge_id(), parent_id.clone(), id.clone()));
        }
        Ok(id)
    }

    /// Shallow-merges `patch` into the node's data. Position and edges are untouched.
    pub fn update_node(&mut self, id: &NodeId, patch: &Map<String, Value>) -> Result<(), EditError> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| EditError::NodeNotFound(id.clone()))?;
        node.data = node
            .data
            .merged(patch)
            .map_err(|e| EditError::InvalidPatch {
                node_id: id.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Removes the node and every edge touching it. Descendants stay in the
    /// graph, detached; see `prune_orphans`.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<FlowNode, EditError> {
        let index = self
            .nodes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| EditError::NodeNotFound(id.clone()))?;
        let node = self.nodes.remove(index);
        self.edges.retain(|e| &e.source != id && &e.target != id);
        Ok(node)
    }

    /// Swaps the node with its left or right sibling by exchanging `position.x`.
    ///
    /// Returns `Ok(false)` without changing anything for the root, for a move
    /// past either end of the sibling list, and when the neighbour shares the
    /// node's x.
    pub fn reorder_node(&mut self, id: &NodeId, direction: Direction) -> Result<bool, EditError> {
        let node_x = self
            .node(id)
            .ok_or_else(|| EditError::NodeNotFound(id.clone()))?
            .position
            .x;
        let Some(parent_id) = self.parent_of(id).cloned() else {
            return Ok(false);
        };

        let siblings: Vec<(NodeId, f64)> = self
            .children_of(&parent_id)
            .into_iter()
            .map(|n| (n.id.clone(), n.position.x))
            .collect();
        let Some(rank) = siblings.iter().position(|(sibling, _)| sibling == id) else {
            return Ok(false);
        };
        let target_rank = match direction {
            Direction::Left => rank.checked_sub(1),
            Direction::Right => Some(rank + 1),
        };
        let Some((target_id, target_x)) = target_rank.and_then(|r| siblings.get(r)).cloned() else {
            return Ok(false);
        };
        // Equal x: exchanging them would not change the exported order.
        if target_x == node_x {
            return Ok(false);
        }

        for node in self.nodes.iter_mut() {
            if &node.id == id {
                node.position.x = target_x;
            } else if node.id == target_id {
                node.position.x = node_x;
            }
        }
        Ok(true)
    }

    /// Adds the edge `source → target`.
    ///
    /// A Requirement that already has a child refuses a second one. Beyond
    /// that the edge is appended as-is; no cycle detection is done.
    pub fn connect(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        ids: &mut IdAllocator,
    ) -> Result<EdgeId, EditError> {
        self.ensure_linkable(source, target)?;

        let edge_id = ids.next_edge_id();
        self.edges
            .push(FlowEdge::new(edge_id.clone(), source.clone(), target.clone()));
        Ok(edge_id)
    }

    /// Adds a node built by the host, keeping its id and position.
    pub fn add_flow_node(&mut self, node: FlowNode) -> Result<(), EditError> {
        if self.contains(&node.id) {
            return Err(EditError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Adds an edge built by the host. Checked like `connect`.
    pub fn add_flow_edge(&mut self, edge: FlowEdge) -> Result<(), EditError> {
        if self.edge(&edge.id).is_some() {
            return Err(EditError::DuplicateEdge(edge.id));
        }
        self.ensure_linkable(&edge.source, &edge.target)?;
        self.edges.push(edge);
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &EdgeId) -> Result<FlowEdge, EditError> {
        let index = self
            .edges
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| EditError::EdgeNotFound(id.clone()))?;
        Ok(self.edges.remove(index))
    }

    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<(), EditError> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| EditError::NodeNotFound(id.clone()))?;
        node.position = position;
        Ok(())
    }

    /// Removes every node not reachable from the root, and their edges.
    /// Returns the removed nodes in creation order.
    pub fn prune_orphans(&mut self) -> Vec<FlowNode> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        let mut reachable: AHashSet<NodeId> = AHashSet::new();
        let mut stack = vec![root.id.clone()];
        while let Some(id) = stack.pop() {
            if !reachable.insert(id.clone()) {
                continue;
            }
            stack.extend(self.outgoing(&id).map(|e| e.target.clone()));
        }

        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.nodes)
            .into_iter()
            .partition(|n| reachable.contains(&n.id));
        self.nodes = kept;
        self.edges
            .retain(|e| reachable.contains(&e.source) && reachable.contains(&e.target));
        removed
    }

    fn ensure_linkable(&self, source: &NodeId, target: &NodeId) -> Result<(), EditError> {
        if !self.contains(target) {
            return Err(EditError::NodeNotFound(target.clone()));
        }
        if source == target {
            return Err(EditError::SelfConnection(source.clone()));
        }
        self.ensure_accepts_child(source)
    }

    /// Fails if `id` is missing or is a Requirement that already owns a child.
    fn ensure_accepts_child(&self, id: &NodeId) -> Result<(), EditError> {
        let node = self
            .node(id)
            .ok_or_else(|| EditError::NodeNotFound(id.clone()))?;
        if node.data.node_type().is_gate() && self.outgoing(id).next().is_some() {
            return Err(EditError::RequirementOccupied(id.clone()));
        }
        Ok(())
    }

    /// Right of the rightmost child, or directly below the parent when it has none.
    fn next_child_slot(&self, parent_id: &NodeId, layout: &LayoutConfig) -> Result<Position, EditError> {
        let parent = self
            .node(parent_id)
            .ok_or_else(|| EditError::NodeNotFound(parent_id.clone()))?;
        let slot = match self.children_of(parent_id).last() {
            Some(rightmost) => layout.right_of(rightmost.position),
            None if parent.data.node_type().is_gate() => layout.gate_child(parent.position),
            None => layout.container_child(parent.position, 0),
        };
        Ok(slot)
    }

    /// Right of everything already placed, at the anchor's height.
    fn next_free_slot(&self, layout: &LayoutConfig) -> Position {
        self.nodes
            .iter()
            .map(|n| n.position.x)
            .max_by(f64::total_cmp)
            .map_or(layout.anchor, |x| {
                Position::new(x + layout.spacing_x, layout.anchor.y)
            })
    }
}
