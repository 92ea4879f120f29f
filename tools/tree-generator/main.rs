use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use waza::action::{
    ActionNode, Container, DamageType, Delay, Gate, Hit, Predicate, Projectile, RequirementExpr,
    Scaler, Sound, Status, Summon,
};

/// A CLI tool to generate random skill trees for exercising the editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_skill.json")]
    output: String,

    /// Maximum nesting depth of the generated tree
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Maximum number of children per container
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.depth == 0 {
        eprintln!("Error: --depth must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating skill tree (depth <= {}, width <= {})...",
        cli.depth, cli.width
    );
    let tree = generate_container(&mut rng, "Root", cli.depth, cli.width);

    let json_output = serde_json::to_string_pretty(&tree)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated a tree of {} node(s) and saved it to '{}'",
        tree.node_count(),
        cli.output
    );

    Ok(())
}

fn generate_container(rng: &mut StdRng, name: &str, depth: usize, width: usize) -> ActionNode {
    let count = rng.random_range(1..=width.max(1));
    let children = (0..count)
        .map(|i| generate_node(rng, depth - 1, width, i))
        .collect();
    let body = Container {
        name: name.to_string(),
        loop_count: rng.random_range(1..=3),
        children,
    };
    if rng.random_bool(0.3) {
        ActionNode::Parallel(body)
    } else {
        ActionNode::Sequence(body)
    }
}

fn generate_node(rng: &mut StdRng, depth: usize, width: usize, index: usize) -> ActionNode {
    if depth > 0 {
        match rng.random_range(0..6) {
            0 => return generate_container(rng, &format!("Group {}", index), depth, width),
            1 => {
                let child = generate_node(rng, depth - 1, width, 0);
                return ActionNode::Requirement(Gate {
                    name: format!("Gate {}", index),
                    requirement: generate_requirement(rng),
                    child: Some(Box::new(child)),
                });
            }
            _ => {}
        }
    }
    generate_leaf(rng, index)
}

fn generate_requirement(rng: &mut StdRng) -> RequirementExpr {
    let predicates = vec![
        Predicate::HealthBelow {
            fraction: rng.random_range(0.1..0.9),
        },
        Predicate::Chance {
            probability: rng.random_range(0.05..1.0),
        },
    ];
    if rng.random_bool(0.5) {
        RequirementExpr::all(predicates)
    } else {
        RequirementExpr::any(predicates)
    }
}

fn generate_leaf(rng: &mut StdRng, index: usize) -> ActionNode {
    match rng.random_range(0..7) {
        0 => ActionNode::Delay(Delay {
            name: format!("Wait {}", index),
            delay: rng.random_range(0.1..3.0),
        }),
        1 => ActionNode::animation(format!("anim_{}", rng.random_range(0..10))),
        2 => ActionNode::Sound(Sound {
            key: format!("sfx_{}", rng.random_range(0..10)),
            volume: rng.random_range(0.2..1.0),
            ..Sound::default()
        }),
        3 => ActionNode::Hit(Hit {
            damage: rng.random_range(5.0..50.0),
            damage_type: if rng.random_bool(0.5) {
                DamageType::Physical
            } else {
                DamageType::Magical
            },
            scalers: vec![Scaler {
                stat: "attack".to_string(),
                factor: rng.random_range(0.1..1.5),
            }],
            ..Hit::default()
        }),
        4 => ActionNode::Status(Status {
            status: "burn".to_string(),
            duration: rng.random_range(1.0..6.0),
            ..Status::default()
        }),
        5 => ActionNode::Summon(Summon {
            character: format!("minion_{}", rng.random_range(0..3)),
            count: rng.random_range(1..=3),
            ..Summon::default()
        }),
        _ => ActionNode::Projectile(Projectile {
            key: "arrow".to_string(),
            speed: rng.random_range(5.0..30.0),
            ..Projectile::default()
        }),
    }
}
