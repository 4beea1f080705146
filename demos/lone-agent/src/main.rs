//! lone-agent — one agent's paid trail across the three-point graph.
//!
//! Steps a single agent round by round, printing what it pays for each hop,
//! then recaps the full trail once it runs out of unvisited options.

use anyhow::{bail, Result};

use wander_core::{Address, AgentName};
use wander_graph::{GraphBuilder, RoundObserver, RoundStatus};

const SEED: u64 = 1984;
const X: f64 = 0.2;
const Y: f64 = 0.7;

/// Rounds after which we assume the loop is broken and go bug hunting.
const ROUND_CAP: u64 = 4;

struct TollBooth;

impl RoundObserver for TollBooth {
    fn on_move(&mut self, name: &AgentName, from: &Address, to: &Address, cost: f64) {
        println!("{name} paid {cost} to get from {from} to {to}");
    }
}

fn main() -> Result<()> {
    let mut graph = GraphBuilder::new(SEED)
        .point("u", [("v", X), ("w", X)])
        .point("v", [("u", Y), ("w", X)])
        .point("w", [("u", Y), ("v", X)])
        .agent("Bill", "u")
        .build()?;

    let mut booth = TollBooth;
    while let RoundStatus::Progressed(report) = graph.advance_round(&mut booth) {
        if report.round > ROUND_CAP {
            bail!("Hunt for bugs!");
        }
    }

    let bill = graph
        .agent(&AgentName::from("Bill"))
        .expect("Bill was added at construction");
    let trail: Vec<&str> = bill.visited().iter().map(|h| h.to.as_str()).collect();
    println!(
        "Places that {} has been -> {:?}\n\tcurrently -> at {}",
        bill.name(),
        trail,
        bill.location()
    );
    Ok(())
}
