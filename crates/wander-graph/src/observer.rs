//! Round observer trait for progress reporting.

use wander_core::{Address, AgentName};

use crate::RoundReport;

/// Callbacks invoked by [`Graph::advance_round`][crate::Graph::advance_round]
/// at key points in the round.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl RoundObserver for MovePrinter {
///     fn on_move(&mut self, name: &AgentName, from: &Address, to: &Address, cost: f64) {
///         println!("{name} traveling from {from} to {to} paying {cost}");
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called before any agent is processed.  `round` is 1-based.
    fn on_round_start(&mut self, _round: u64) {}

    /// Called when an agent commits a move from `from` to `to`.
    fn on_move(&mut self, _name: &AgentName, _from: &Address, _to: &Address, _cost: f64) {}

    /// Called when an agent with no legal move left is retired; `at` is the
    /// point it stops at for good.
    fn on_retire(&mut self, _name: &AgentName, _at: &Address) {}

    /// Called once per round after every agent has been processed.
    fn on_round_end(&mut self, _report: &RoundReport) {}
}

/// A [`RoundObserver`] that does nothing.  Use when you need to call
/// `advance_round` but don't want progress callbacks.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
