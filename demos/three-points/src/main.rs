//! three-points — four agents wandering a bi-directional three-point graph.
//!
//! Builds the symmetric `u↔v↔w↔u` triangle where the edges back to `u` are
//! priced out of contention, drops four agents on it, and prints every move,
//! retirement, and per-round point dump until everyone is off duty.

use anyhow::{bail, Result};

use wander_core::{Address, AgentName};
use wander_graph::{Graph, GraphBuilder, RoundObserver, RoundStatus};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const X: f64 = 0.2;
const O: f64 = 0.7;

/// Rounds after which we assume the loop is broken and go bug hunting.
const ROUND_CAP: u64 = 5;

const RULE: &str = "_________";

// ── Reporting ─────────────────────────────────────────────────────────────────

struct MovePrinter;

impl RoundObserver for MovePrinter {
    fn on_move(&mut self, name: &AgentName, from: &Address, to: &Address, cost: f64) {
        println!("{name} traveling from {from} to {to} paying {cost}");
    }

    fn on_retire(&mut self, name: &AgentName, _at: &Address) {
        println!("Moved {name} to off_duty");
    }
}

fn dump_points(graph: &Graph) {
    let mut points: Vec<_> = graph.points().collect();
    points.sort_by(|a, b| a.address().cmp(b.address()));
    for point in points {
        let occupants: Vec<&str> = point.population().iter().map(|n| n.as_str()).collect();
        println!("{} -> {:?}", point.address(), occupants);
    }
}

fn dump_off_duty(graph: &Graph) {
    let mut retired: Vec<_> = graph.off_duty().collect();
    retired.sort_by(|a, b| a.name().cmp(b.name()));
    for agent in retired {
        let trail: Vec<&str> = agent.visited().iter().map(|h| h.to.as_str()).collect();
        println!(
            "{} -> stopped at {} after {:?}, paid {:.1}",
            agent.name(),
            agent.location(),
            trail,
            agent.cost_paid()
        );
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut graph = GraphBuilder::new(SEED)
        .point("u", [("v", X), ("w", X)])
        .point("v", [("u", O), ("w", X)])
        .point("w", [("u", O), ("v", X)])
        .agent("Bob", "u")
        .agent("Alice", "u")
        .agent("Ted", "v")
        .agent("Jain", "w")
        .build()?;

    println!("## 0 {RULE}");
    dump_points(&graph);

    let mut printer = MovePrinter;
    while let RoundStatus::Progressed(report) = graph.advance_round(&mut printer) {
        if report.round > ROUND_CAP {
            bail!("Hunt for bugs!");
        }
        println!("## {} {RULE}", report.round);
        dump_points(&graph);
    }

    println!("## off duty {RULE}");
    dump_off_duty(&graph);
    Ok(())
}
