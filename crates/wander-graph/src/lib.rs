//! `wander-graph` — greedy cheapest-unvisited traversal engine.
//!
//! A [`Graph`] owns a set of [`Point`]s (nodes with costed edges) and a set
//! of [`Agent`]s.  Each round, every active agent moves to the cheapest
//! neighbor of its current point that it has not visited before, breaking
//! cost ties uniformly at random; an agent with no such neighbor left is
//! retired into the graph's off-duty set.  The walk is strictly greedy and
//! local — no multi-hop planning.
//!
//! # Round loop
//!
//! ```text
//! loop:
//!   ① Snapshot — the active roster is fixed at round start, in agent
//!                insertion order.
//!   ② Decide   — each agent picks an unvisited cheapest neighbor
//!                (Agent::decide_next), or reports exhaustion.
//!   ③ Apply    — moves update populations, visited trails, and locations;
//!                exhausted agents migrate to off_duty and keep their
//!                final population entry.
//!   ④ Report   — RoundStatus::Progressed(report), or Finished when no
//!                active agents remain (calling again stays a no-op).
//! ```
//!
//! # Quick-start
//!
//! ```
//! use wander_graph::{GraphBuilder, NoopObserver, RoundStatus};
//!
//! let mut graph = GraphBuilder::new(42)
//!     .point("u", [("v", 0.2), ("w", 0.2)])
//!     .point("v", [("u", 0.7), ("w", 0.2)])
//!     .point("w", [("u", 0.7), ("v", 0.2)])
//!     .agent("Bob", "u")
//!     .build()
//!     .unwrap();
//!
//! while let RoundStatus::Progressed(_) = graph.advance_round(&mut NoopObserver) {}
//! assert!(graph.is_finished());
//! ```

pub mod agent;
pub mod builder;
pub mod graph;
pub mod observer;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, Heading};
pub use builder::GraphBuilder;
pub use graph::{Graph, RoundReport, RoundStatus};
pub use observer::{NoopObserver, RoundObserver};
pub use point::Point;
