//! Common test utilities for building skill trees and editor graphs.
use rand::Rng;
use rand::rngs::StdRng;
use waza::action::{Container, Delay, Hit, Projectile, Sound, Status, Summon};
use waza::prelude::*;

/// `Sequence("Root", loop=1, [Delay(1.0), Sound("hit1")])`
#[allow(dead_code)]
pub fn create_simple_tree() -> ActionNode {
    ActionNode::sequence("Root", vec![ActionNode::delay(1.0), ActionNode::sound("hit1")])
}

/// A tree using every category, including a Requirement with and without a child.
///
/// ```text
/// Sequence "Combo" x2
/// ├── Animation "Animation" windup @1
/// ├── Parallel "Impact" x1
/// │   ├── Hit "Slash" 25 Physical
/// │   └── Sound "Sound" slash
/// ├── Requirement "Finisher" ALL(health < 0.3)
/// │   └── Status "Bleed" bleed 4s x2
/// ├── Requirement "Empty" ANY()
/// └── Delay "Delay" 0.5s
/// ```
#[allow(dead_code)]
pub fn create_combo_tree() -> ActionNode {
    ActionNode::Sequence(Container {
        name: "Combo".to_string(),
        loop_count: 2,
        children: vec![
            ActionNode::animation("windup"),
            ActionNode::parallel(
                "Impact",
                vec![
                    ActionNode::Hit(Hit {
                        name: "Slash".to_string(),
                        damage: 25.0,
                        ..Hit::default()
                    }),
                    ActionNode::sound("slash"),
                ],
            ),
            ActionNode::requirement(
                "Finisher",
                RequirementExpr::all(vec![Predicate::HealthBelow { fraction: 0.3 }]),
                Some(ActionNode::Status(Status {
                    name: "Bleed".to_string(),
                    status: "bleed".to_string(),
                    duration: 4.0,
                    stacks: 2,
                    ..Status::default()
                })),
            ),
            ActionNode::requirement("Empty", RequirementExpr::any(vec![]), None),
            ActionNode::delay(0.5),
        ],
    })
}

/// Id of the node whose data carries `name`. Panics if there is none.
#[allow(dead_code)]
pub fn id_of(graph: &Graph, name: &str) -> NodeId {
    graph
        .nodes
        .iter()
        .find(|n| n.data.name() == name)
        .map(|n| n.id.clone())
        .unwrap_or_else(|| panic!("no node named '{}'", name))
}

#[allow(dead_code)]
pub fn root_id(graph: &Graph) -> NodeId {
    graph.root().expect("graph has a root").id.clone()
}

/// Child types of the exported tree's root, in order.
#[allow(dead_code)]
pub fn root_child_types(tree: &ActionNode) -> Vec<NodeType> {
    tree.children().iter().map(|c| c.node_type()).collect()
}

/// Builds a random well-formed tree whose root is a container.
#[allow(dead_code)]
pub fn random_tree(rng: &mut StdRng, depth: usize) -> ActionNode {
    random_container(rng, "Root".to_string(), depth.max(1))
}

fn random_container(rng: &mut StdRng, name: String, depth: usize) -> ActionNode {
    let count = rng.random_range(0..=4);
    let children = (0..count)
        .map(|i| random_node(rng, depth - 1, format!("{}.{}", name, i)))
        .collect();
    let body = Container {
        name,
        loop_count: rng.random_range(1..=3),
        children,
    };
    if rng.random_bool(0.5) {
        ActionNode::Sequence(body)
    } else {
        ActionNode::Parallel(body)
    }
}

fn random_node(rng: &mut StdRng, depth: usize, name: String) -> ActionNode {
    if depth > 0 {
        match rng.random_range(0..5) {
            0 => return random_container(rng, name, depth),
            1 => {
                let child = if rng.random_bool(0.7) {
                    Some(random_node(rng, depth - 1, format!("{}.0", name)))
                } else {
                    None
                };
                return ActionNode::requirement(
                    name,
                    RequirementExpr::any(vec![Predicate::Chance {
                        probability: rng.random_range(0.0..1.0),
                    }]),
                    child,
                );
            }
            _ => {}
        }
    }
    match rng.random_range(0..6) {
        0 => ActionNode::Delay(Delay {
            name,
            delay: rng.random_range(0.1..5.0),
        }),
        1 => ActionNode::Sound(Sound {
            name,
            key: format!("sfx_{}", rng.random_range(0..5)),
            volume: 1.0,
        }),
        2 => ActionNode::Hit(Hit {
            name,
            damage: rng.random_range(1.0..100.0),
            ..Hit::default()
        }),
        3 => ActionNode::Summon(Summon {
            name,
            character: "wolf".to_string(),
            count: rng.random_range(1..4),
            duration: 8.0,
        }),
        4 => ActionNode::Projectile(Projectile {
            name,
            ..Projectile::default()
        }),
        _ => ActionNode::Status(Status {
            name,
            status: "slow".to_string(),
            ..Status::default()
        }),
    }
}
