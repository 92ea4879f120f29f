use super::{ActionNode, NodeData};
use std::fmt;

/// Renders a skill tree as an indented outline, one node per line.
///
/// ```text
/// Sequence "Root" x1
/// ├── Delay "Delay" 1s
/// └── Sound "Sound" hit1
/// ```
pub struct DisplayTree<'a> {
    pub tree: &'a ActionNode,
}

impl<'a> fmt::Display for DisplayTree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", NodeSummary(&self.tree.data()))?;
        self.fmt_children(self.tree, f, "")
    }
}

impl<'a> DisplayTree<'a> {
    pub fn new(tree: &'a ActionNode) -> Self {
        Self { tree }
    }

    fn fmt_children(
        &self,
        node: &ActionNode,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
    ) -> fmt::Result {
        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            let node_marker = if is_last { "└── " } else { "├── " };
            writeln!(f, "{}{}{}", prefix, node_marker, NodeSummary(&child.data()))?;

            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            self.fmt_children(child, f, &child_prefix)?;
        }
        Ok(())
    }
}

/// One-line description of a node's own fields.
pub struct NodeSummary<'a>(pub &'a NodeData);

impl<'a> fmt::Display for NodeSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;
        write!(f, "{} \"{}\"", data.node_type(), data.name())?;
        match data {
            NodeData::Sequence(c) | NodeData::Parallel(c) => write!(f, " x{}", c.loop_count),
            NodeData::Requirement(g) => write!(f, " {}", g.requirement),
            NodeData::Delay(p) => write!(f, " {}s", p.delay),
            NodeData::Animation(p) => write!(f, " {} @{}", p.key, p.speed),
            NodeData::Sound(p) => write!(f, " {}", p.key),
            NodeData::Hit(p) => write!(f, " {} {:?}", p.damage, p.damage_type),
            NodeData::Status(p) => write!(f, " {} {}s x{}", p.status, p.duration, p.stacks),
            NodeData::Summon(p) => write!(f, " {} x{}", p.character, p.count),
            NodeData::Projectile(p) => write!(f, " {} v{}", p.key, p.speed),
        }
    }
}
