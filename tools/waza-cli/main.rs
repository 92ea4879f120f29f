use clap::{Parser, Subcommand};
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use waza::prelude::*;

/// Converts skill trees to editor graphs and back
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn a skill tree JSON file into an editor graph
    Materialize {
        /// Path to the skill tree JSON file
        tree_path: String,
        /// Write the graph here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Optional layout configuration JSON file
        #[arg(short, long)]
        layout: Option<String>,
    },
    /// Rebuild a skill tree from an editor graph JSON file
    Reconstruct {
        /// Path to the graph JSON file
        graph_path: String,
        /// Write the tree here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a skill tree as an outline
    Show {
        /// Path to the skill tree JSON file
        tree_path: String,
    },
    /// Verify that a skill tree survives a trip through the editor graph
    Check {
        /// Path to the skill tree JSON file
        tree_path: String,
        /// Optional entity references JSON file; unknown keys are reported as warnings
        #[arg(short, long)]
        references: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Materialize {
            tree_path,
            output,
            layout,
        } => run_materialize(&tree_path, output, layout),
        Command::Reconstruct { graph_path, output } => run_reconstruct(&graph_path, output),
        Command::Show { tree_path } => run_show(&tree_path),
        Command::Check {
            tree_path,
            references,
        } => run_check(&tree_path, references),
    }
}

fn run_materialize(tree_path: &str, output: Option<String>, layout_path: Option<String>) {
    let tree = load_tree(tree_path);
    let layout: LayoutConfig = match layout_path {
        Some(path) => serde_json::from_str(&read_file(&path)).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to parse layout file '{}': {}", path, e))
        }),
        None => LayoutConfig::default(),
    };

    let mut ids = IdAllocator::new();
    let graph = materialize(&tree, &mut ids, &layout);
    let json = graph
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    write_output(output, &json);
}

fn run_reconstruct(graph_path: &str, output: Option<String>) {
    let graph = Graph::from_json(&read_file(graph_path))
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let Some(tree) = reconstruct(&graph) else {
        exit_with_error("Graph has no root node; nothing to reconstruct.");
    };
    let json = tree
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    write_output(output, &json);
}

fn run_show(tree_path: &str) {
    let tree = load_tree(tree_path);
    print!("{}", DisplayTree::new(&tree));
}

fn run_check(tree_path: &str, references_path: Option<String>) {
    let tree = load_tree(tree_path);

    let start = Instant::now();
    let mut store = FlowStore::builder().with_tree(tree.clone()).build();
    let graph_nodes = store.graph().node_count();
    let graph_edges = store.graph().edge_count();
    let exported = store.export().cloned();
    let duration = start.elapsed();

    println!("Nodes in tree:   {}", tree.node_count());
    println!("Tree depth:      {}", tree.depth());
    println!("Graph nodes:     {}", graph_nodes);
    println!("Graph edges:     {}", graph_edges);
    println!("Round trip:      {:?}", duration);

    if let Some(path) = references_path {
        let references = EntityReferences::from_json(&read_file(&path))
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        for warning in references.unresolved(&tree) {
            println!("  warning: {}", warning);
        }
    }

    match exported {
        Some(rebuilt) if rebuilt == tree => println!("\n-> Round trip preserved the tree."),
        Some(rebuilt) => {
            println!("\n-> Round trip changed the tree. Rebuilt version:");
            print!("{}", DisplayTree::new(&rebuilt));
            std::process::exit(2);
        }
        None => exit_with_error("Round trip produced no tree."),
    }
}

fn load_tree(path: &str) -> ActionNode {
    ActionNode::from_json(&read_file(path)).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)))
}

fn write_output(output: Option<String>, content: &str) {
    match output {
        Some(path) => {
            fs::write(&path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write file '{}': {}", path, e))
            });
            eprintln!("Wrote '{}'", path);
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
