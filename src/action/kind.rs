use super::{
    Animation, ContainerData, Delay, GateData, Hit, NodeData, Projectile, Sound, Status, Summon,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The discriminant of every action node variant, shared by the tree and the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Sequence,
    Parallel,
    Delay,
    Animation,
    Sound,
    Hit,
    Status,
    Summon,
    Requirement,
    Projectile,
}

/// How a node type relates to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// Ordered list of 0..n children (Sequence, Parallel).
    Container,
    /// At most one child, guarded by a requirement expression.
    Gating,
    /// No children.
    Leaf,
}

impl NodeCategory {
    /// Maximum number of children a node of this category may own.
    pub fn max_children(self) -> usize {
        match self {
            NodeCategory::Container => usize::MAX,
            NodeCategory::Gating => 1,
            NodeCategory::Leaf => 0,
        }
    }
}

impl NodeType {
    pub const ALL: [NodeType; 10] = [
        NodeType::Sequence,
        NodeType::Parallel,
        NodeType::Delay,
        NodeType::Animation,
        NodeType::Sound,
        NodeType::Hit,
        NodeType::Status,
        NodeType::Summon,
        NodeType::Requirement,
        NodeType::Projectile,
    ];

    /// Categorizes the type. No wildcard arm: a new variant must be placed here.
    pub fn category(self) -> NodeCategory {
        match self {
            NodeType::Sequence | NodeType::Parallel => NodeCategory::Container,
            NodeType::Requirement => NodeCategory::Gating,
            NodeType::Delay
            | NodeType::Animation
            | NodeType::Sound
            | NodeType::Hit
            | NodeType::Status
            | NodeType::Summon
            | NodeType::Projectile => NodeCategory::Leaf,
        }
    }

    pub fn is_container(self) -> bool {
        self.category() == NodeCategory::Container
    }

    pub fn is_gate(self) -> bool {
        self.category() == NodeCategory::Gating
    }

    pub fn is_leaf(self) -> bool {
        self.category() == NodeCategory::Leaf
    }

    /// The payload a freshly added node of this type starts with.
    pub fn default_data(self) -> NodeData {
        match self {
            NodeType::Sequence => NodeData::Sequence(ContainerData::named("Sequence")),
            NodeType::Parallel => NodeData::Parallel(ContainerData::named("Parallel")),
            NodeType::Requirement => NodeData::Requirement(GateData::default()),
            NodeType::Delay => NodeData::Delay(Delay::default()),
            NodeType::Animation => NodeData::Animation(Animation::default()),
            NodeType::Sound => NodeData::Sound(Sound::default()),
            NodeType::Hit => NodeData::Hit(Hit::default()),
            NodeType::Status => NodeData::Status(Status::default()),
            NodeType::Summon => NodeData::Summon(Summon::default()),
            NodeType::Projectile => NodeData::Projectile(Projectile::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Sequence => "Sequence",
            NodeType::Parallel => "Parallel",
            NodeType::Delay => "Delay",
            NodeType::Animation => "Animation",
            NodeType::Sound => "Sound",
            NodeType::Hit => "Hit",
            NodeType::Status => "Status",
            NodeType::Summon => "Summon",
            NodeType::Requirement => "Requirement",
            NodeType::Projectile => "Projectile",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
