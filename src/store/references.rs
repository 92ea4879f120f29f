use crate::action::ActionNode;
use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// Identifiers the host project knows about, supplied from outside.
///
/// The engine only carries these around; it never checks leaf payloads
/// against them. The `has_*` helpers exist for callers that want to warn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityReferences {
    pub sounds: Vec<String>,
    pub animations: Vec<String>,
    pub characters: Vec<String>,
    pub statuses: Vec<String>,
}

impl EntityReferences {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::ReferencesParseError(e.to_string()))
    }

    pub fn has_sound(&self, key: &str) -> bool {
        self.sounds.iter().any(|s| s == key)
    }

    pub fn has_animation(&self, key: &str) -> bool {
        self.animations.iter().any(|a| a == key)
    }

    pub fn has_character(&self, key: &str) -> bool {
        self.characters.iter().any(|c| c == key)
    }

    pub fn has_status(&self, key: &str) -> bool {
        self.statuses.iter().any(|s| s == key)
    }

    /// Describes every leaf in `tree` whose non-empty key is absent from these tables.
    pub fn unresolved(&self, tree: &ActionNode) -> Vec<String> {
        let mut missing = Vec::new();
        self.collect_unresolved(tree, &mut missing);
        missing
    }

    fn collect_unresolved(&self, node: &ActionNode, missing: &mut Vec<String>) {
        let unknown = match node {
            ActionNode::Sound(p) if !p.key.is_empty() && !self.has_sound(&p.key) => {
                Some(("sound", &p.key))
            }
            ActionNode::Animation(p) if !p.key.is_empty() && !self.has_animation(&p.key) => {
                Some(("animation", &p.key))
            }
            ActionNode::Projectile(p) if !p.key.is_empty() && !self.has_animation(&p.key) => {
                Some(("animation", &p.key))
            }
            ActionNode::Summon(p) if !p.character.is_empty() && !self.has_character(&p.character) => {
                Some(("character", &p.character))
            }
            ActionNode::Status(p) if !p.status.is_empty() && !self.has_status(&p.status) => {
                Some(("status", &p.status))
            }
            _ => None,
        };
        if let Some((kind, key)) = unknown {
            missing.push(format!(
                "{} \"{}\" references unknown {} '{}'",
                node.node_type(),
                node.name(),
                kind,
                key
            ));
        }
        for child in node.children() {
            self.collect_unresolved(child, missing);
        }
    }
}
