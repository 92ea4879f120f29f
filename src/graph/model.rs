use crate::action::{NodeData, NodeType};
use crate::error::FormatError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier, stable for the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

/// Opaque edge identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

macro_rules! impl_string_id {
    ($($id:ident),*) => {
        $(
            impl $id {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $id {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

impl_string_id!(NodeId, EdgeId);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A box in the graph editor.
///
/// Deserialization rejects a `type` that disagrees with the tag of `data`; a
/// missing `type` is taken from `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFlowNode")]
pub struct FlowNode {
    pub id: NodeId,
    /// Mirrors the tag of `data`.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Deserialize)]
struct RawFlowNode {
    id: NodeId,
    #[serde(rename = "type", default)]
    node_type: Option<NodeType>,
    #[serde(default)]
    position: Position,
    data: NodeData,
}

impl TryFrom<RawFlowNode> for FlowNode {
    type Error = String;

    fn try_from(raw: RawFlowNode) -> Result<Self, Self::Error> {
        match raw.node_type {
            Some(declared) if declared != raw.data.node_type() => Err(format!(
                "node '{}' is declared as {} but its data is {}",
                raw.id,
                declared,
                raw.data.node_type()
            )),
            _ => Ok(FlowNode::new(raw.id, raw.position, raw.data)),
        }
    }
}

impl FlowNode {
    pub fn new(id: NodeId, position: Position, data: NodeData) -> Self {
        Self {
            id,
            node_type: data.node_type(),
            position,
            data,
        }
    }
}

/// A parent→child connection: `target` is a child of `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl FlowEdge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }
}

/// The editor's working model. `nodes` are kept in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &NodeId) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a FlowEdge> + 'a {
        self.edges.iter().filter(move |e| &e.source == id)
    }

    /// The source of the first edge entering `id`.
    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.edges
            .iter()
            .find(|e| &e.target == id)
            .map(|e| &e.source)
    }

    /// Children of `id` ordered by `position.x`. Ties keep edge insertion order.
    pub fn children_of(&self, id: &NodeId) -> Vec<&FlowNode> {
        self.outgoing(id)
            .filter_map(|e| self.node(&e.target))
            .sorted_by(|a, b| a.position.x.total_cmp(&b.position.x))
            .collect()
    }

    /// Nodes without an incoming edge, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes
            .iter()
            .filter(move |n| !self.edges.iter().any(|e| e.target == n.id))
    }

    /// The earliest-created rootless node.
    pub fn root(&self) -> Option<&FlowNode> {
        self.roots().next()
    }

    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::GraphParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, FormatError> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::SerializeError(e.to_string()))
    }
}
