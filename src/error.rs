use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

/// Reasons a graph edit was refused. The graph is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Node '{0}' does not exist in the graph")]
    NodeNotFound(NodeId),

    #[error("Edge '{0}' does not exist in the graph")]
    EdgeNotFound(EdgeId),

    #[error("Node '{0}' already exists in the graph")]
    DuplicateNode(NodeId),

    #[error("Edge '{0}' already exists in the graph")]
    DuplicateEdge(EdgeId),

    #[error("Requirement node '{0}' already has a child and cannot accept another")]
    RequirementOccupied(NodeId),

    #[error("Node '{0}' cannot be connected to itself")]
    SelfConnection(NodeId),

    #[error("Patch for node '{node_id}' does not match its fields: {message}")]
    InvalidPatch { node_id: NodeId, message: String },
}

/// Errors reading or writing the JSON interchange formats.
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    #[error("Failed to parse skill tree JSON: {0}")]
    TreeParseError(String),

    #[error("Failed to parse graph JSON: {0}")]
    GraphParseError(String),

    #[error("Failed to parse entity references JSON: {0}")]
    ReferencesParseError(String),

    #[error("Failed to serialize: {0}")]
    SerializeError(String),
}
