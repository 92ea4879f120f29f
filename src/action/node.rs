use super::{
    Animation, Delay, Hit, NodeCategory, NodeType, Projectile, RequirementExpr, Sound, Status,
    Summon,
};
use crate::error::FormatError;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

fn default_loop() -> u32 {
    1
}

/// A container runs its children at least once.
fn positive_loop<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let count = u32::deserialize(deserializer)?;
    if count == 0 {
        return Err(de::Error::custom("loop must be at least 1"));
    }
    Ok(count)
}

/// A node of the canonical skill tree, the only durable artifact of the editor.
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type":"Sequence","name":"Root","loop":1,"children":[{"type":"Delay","name":"Wait","delay":1.0}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionNode {
    Sequence(Container),
    Parallel(Container),
    Requirement(Gate),
    Delay(Delay),
    Animation(Animation),
    Sound(Sound),
    Hit(Hit),
    Status(Status),
    Summon(Summon),
    Projectile(Projectile),
}

/// Body of a Sequence or Parallel node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(rename = "loop", default = "default_loop", deserialize_with = "positive_loop")]
    pub loop_count: u32,
    #[serde(default)]
    pub children: Vec<ActionNode>,
}

/// Body of a Requirement node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub name: String,
    #[serde(default)]
    pub requirement: RequirementExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<ActionNode>>,
}

/// A node's own fields without any children; what a `FlowNode` carries as `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    Sequence(ContainerData),
    Parallel(ContainerData),
    Requirement(GateData),
    Delay(Delay),
    Animation(Animation),
    Sound(Sound),
    Hit(Hit),
    Status(Status),
    Summon(Summon),
    Projectile(Projectile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerData {
    pub name: String,
    #[serde(rename = "loop", default = "default_loop", deserialize_with = "positive_loop")]
    pub loop_count: u32,
}

impl ContainerData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loop_count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateData {
    pub name: String,
    #[serde(default)]
    pub requirement: RequirementExpr,
}

impl Default for GateData {
    fn default() -> Self {
        Self {
            name: "Requirement".to_string(),
            requirement: RequirementExpr::default(),
        }
    }
}

impl ActionNode {
    pub fn sequence(name: impl Into<String>, children: Vec<ActionNode>) -> Self {
        ActionNode::Sequence(Container {
            name: name.into(),
            loop_count: 1,
            children,
        })
    }

    pub fn parallel(name: impl Into<String>, children: Vec<ActionNode>) -> Self {
        ActionNode::Parallel(Container {
            name: name.into(),
            loop_count: 1,
            children,
        })
    }

    pub fn requirement(
        name: impl Into<String>,
        requirement: RequirementExpr,
        child: Option<ActionNode>,
    ) -> Self {
        ActionNode::Requirement(Gate {
            name: name.into(),
            requirement,
            child: child.map(Box::new),
        })
    }

    pub fn delay(seconds: f64) -> Self {
        ActionNode::Delay(Delay {
            delay: seconds,
            ..Delay::default()
        })
    }

    pub fn sound(key: impl Into<String>) -> Self {
        ActionNode::Sound(Sound {
            key: key.into(),
            ..Sound::default()
        })
    }

    pub fn animation(key: impl Into<String>) -> Self {
        ActionNode::Animation(Animation {
            key: key.into(),
            ..Animation::default()
        })
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            ActionNode::Sequence(_) => NodeType::Sequence,
            ActionNode::Parallel(_) => NodeType::Parallel,
            ActionNode::Requirement(_) => NodeType::Requirement,
            ActionNode::Delay(_) => NodeType::Delay,
            ActionNode::Animation(_) => NodeType::Animation,
            ActionNode::Sound(_) => NodeType::Sound,
            ActionNode::Hit(_) => NodeType::Hit,
            ActionNode::Status(_) => NodeType::Status,
            ActionNode::Summon(_) => NodeType::Summon,
            ActionNode::Projectile(_) => NodeType::Projectile,
        }
    }

    pub fn category(&self) -> NodeCategory {
        self.node_type().category()
    }

    pub fn name(&self) -> &str {
        match self {
            ActionNode::Sequence(c) | ActionNode::Parallel(c) => &c.name,
            ActionNode::Requirement(g) => &g.name,
            ActionNode::Delay(p) => &p.name,
            ActionNode::Animation(p) => &p.name,
            ActionNode::Sound(p) => &p.name,
            ActionNode::Hit(p) => &p.name,
            ActionNode::Status(p) => &p.name,
            ActionNode::Summon(p) => &p.name,
            ActionNode::Projectile(p) => &p.name,
        }
    }

    /// Direct children in order. A Requirement yields zero or one; leaves yield none.
    pub fn children(&self) -> &[ActionNode] {
        match self {
            ActionNode::Sequence(c) | ActionNode::Parallel(c) => &c.children,
            ActionNode::Requirement(g) => match &g.child {
                Some(child) => std::slice::from_ref(&**child),
                None => &[],
            },
            _ => &[],
        }
    }

    /// Copies the node's own fields, leaving the children behind.
    pub fn data(&self) -> NodeData {
        match self {
            ActionNode::Sequence(c) => NodeData::Sequence(ContainerData {
                name: c.name.clone(),
                loop_count: c.loop_count,
            }),
            ActionNode::Parallel(c) => NodeData::Parallel(ContainerData {
                name: c.name.clone(),
                loop_count: c.loop_count,
            }),
            ActionNode::Requirement(g) => NodeData::Requirement(GateData {
                name: g.name.clone(),
                requirement: g.requirement.clone(),
            }),
            ActionNode::Delay(p) => NodeData::Delay(p.clone()),
            ActionNode::Animation(p) => NodeData::Animation(p.clone()),
            ActionNode::Sound(p) => NodeData::Sound(p.clone()),
            ActionNode::Hit(p) => NodeData::Hit(p.clone()),
            ActionNode::Status(p) => NodeData::Status(p.clone()),
            ActionNode::Summon(p) => NodeData::Summon(p.clone()),
            ActionNode::Projectile(p) => NodeData::Projectile(p.clone()),
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ActionNode::node_count)
            .sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ActionNode::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::TreeParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, FormatError> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::SerializeError(e.to_string()))
    }
}

impl NodeData {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeData::Sequence(_) => NodeType::Sequence,
            NodeData::Parallel(_) => NodeType::Parallel,
            NodeData::Requirement(_) => NodeType::Requirement,
            NodeData::Delay(_) => NodeType::Delay,
            NodeData::Animation(_) => NodeType::Animation,
            NodeData::Sound(_) => NodeType::Sound,
            NodeData::Hit(_) => NodeType::Hit,
            NodeData::Status(_) => NodeType::Status,
            NodeData::Summon(_) => NodeType::Summon,
            NodeData::Projectile(_) => NodeType::Projectile,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeData::Sequence(c) | NodeData::Parallel(c) => &c.name,
            NodeData::Requirement(g) => &g.name,
            NodeData::Delay(p) => &p.name,
            NodeData::Animation(p) => &p.name,
            NodeData::Sound(p) => &p.name,
            NodeData::Hit(p) => &p.name,
            NodeData::Status(p) => &p.name,
            NodeData::Summon(p) => &p.name,
            NodeData::Projectile(p) => &p.name,
        }
    }

    /// Rebuilds a tree node from these fields and already-built children.
    /// A Requirement keeps only the first child; leaves drop all of them.
    pub fn with_children(self, children: Vec<ActionNode>) -> ActionNode {
        match self {
            NodeData::Sequence(c) => ActionNode::Sequence(Container {
                name: c.name,
                loop_count: c.loop_count,
                children,
            }),
            NodeData::Parallel(c) => ActionNode::Parallel(Container {
                name: c.name,
                loop_count: c.loop_count,
                children,
            }),
            NodeData::Requirement(g) => ActionNode::Requirement(Gate {
                name: g.name,
                requirement: g.requirement,
                child: children.into_iter().next().map(Box::new),
            }),
            NodeData::Delay(p) => ActionNode::Delay(p),
            NodeData::Animation(p) => ActionNode::Animation(p),
            NodeData::Sound(p) => ActionNode::Sound(p),
            NodeData::Hit(p) => ActionNode::Hit(p),
            NodeData::Status(p) => ActionNode::Status(p),
            NodeData::Summon(p) => ActionNode::Summon(p),
            NodeData::Projectile(p) => ActionNode::Projectile(p),
        }
    }

    /// Shallow-merges the top-level keys of `patch` over these fields.
    ///
    /// The `type` key is ignored, so a merge never changes the variant.
    pub fn merged(&self, patch: &Map<String, Value>) -> Result<NodeData, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut value {
            for (key, field) in patch {
                if key == "type" {
                    continue;
                }
                fields.insert(key.clone(), field.clone());
            }
        }
        serde_json::from_value(value)
    }
}
