use ahash::AHashMap;
use clap::Parser;
use coverflow::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Random-walk simulator for decision-flow definitions.
///
/// Walks a flow with uniformly random choices and reports how often each
/// result key was reached. Result keys that no walk ever reaches are a smoke
/// signal for dead branches or an unreachable reason-table entry.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    #[arg(default_value = "data/coverage_flow.json")]
    flow_path: String,

    /// Number of random walks to run
    #[arg(short, long, default_value_t = 1000)]
    walks: u64,

    /// Seed for reproducible walks
    #[arg(short, long)]
    seed: Option<u64>,

    /// Abort a walk after this many transitions (cycle guard)
    #[arg(long, default_value_t = 100)]
    max_steps: u32,
}

fn main() {
    let cli = Cli::parse();

    let flow = FlowDefinition::from_file(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load flow definition '{}': {}",
            &cli.flow_path, e
        ))
    });
    let flow = Arc::new(flow);

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut reached: AHashMap<String, u64> = AHashMap::new();
    let mut aborted: u64 = 0;

    for _ in 0..cli.walks {
        match random_walk(&flow, &mut rng, cli.max_steps) {
            Some(result_key) => *reached.entry(result_key).or_insert(0) += 1,
            None => aborted += 1,
        }
    }

    println!(
        "Ran {} walks over '{}' ({} nodes, {} results)",
        cli.walks,
        cli.flow_path,
        flow.nodes.len(),
        flow.results.len()
    );
    let mut counts: Vec<(&String, &u64)> = reached.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (key, count) in counts {
        println!("  {:<24} {}", key, count);
    }
    if aborted > 0 {
        println!("  {:<24} {}", "(aborted)", aborted);
    }

    let unreached: Vec<&String> = flow
        .results
        .keys()
        .filter(|key| !reached.contains_key(*key))
        .collect();
    if unreached.is_empty() {
        println!("\nEvery declared result key was reached.");
    } else {
        println!("\nWarning: result keys never reached: {:?}", unreached);
    }
}

/// Runs one random walk, returning the reached result key or `None` when the
/// step guard tripped first.
fn random_walk(flow: &Arc<FlowDefinition>, rng: &mut StdRng, max_steps: u32) -> Option<String> {
    enum Move {
        Action(String),
        Option(String),
        Finished(String),
    }

    let mut wizard = Wizard::new(Arc::clone(flow));

    for _ in 0..max_steps {
        let next_move = match wizard.session().current_node()? {
            FlowNode::Intro(intro) => Move::Action(pick(rng, &intro.actions)?.id.clone()),
            FlowNode::Helper(helper) => Move::Action(pick(rng, &helper.actions)?.id.clone()),
            FlowNode::Question(question) => {
                Move::Option(pick(rng, &question.options)?.value.clone())
            }
            FlowNode::Result(result) => Move::Finished(result.result_key.clone()),
        };

        match next_move {
            Move::Action(action_id) => {
                wizard.choose_action(&action_id).ok()?;
            }
            Move::Option(value) => {
                wizard.select(&value).ok()?;
                wizard.advance().ok()?;
            }
            Move::Finished(result_key) => return Some(result_key),
        }
    }
    None
}

/// Uniformly picks one element; `None` on an empty (dead-end) list.
fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
