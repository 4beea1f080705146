//! Agents and their per-step decision procedure.

use wander_core::{Address, AgentName, WanderRng};

use crate::Point;

/// A chosen-but-not-yet-applied move: destination and the cost to get there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub to:   Address,
    pub cost: f64,
}

/// A traveler bound to one point at a time.
///
/// The agent holds the *address* of its current point; the point itself is
/// owned by [`Graph`][crate::Graph].  `visited` is the append-only trail of
/// completed moves, in move order.  A `Some` heading never names an address
/// already present in `visited`.
#[derive(Debug, Clone)]
pub struct Agent {
    name:     AgentName,
    location: Address,
    visited:  Vec<Heading>,
    heading:  Option<Heading>,
}

impl Agent {
    pub(crate) fn new(name: AgentName, start: Address) -> Self {
        Self {
            name,
            location: start,
            visited: Vec::new(),
            heading: None,
        }
    }

    pub fn name(&self) -> &AgentName {
        &self.name
    }

    /// Address of the point the agent currently stands on (for retired
    /// agents, where it stopped).
    pub fn location(&self) -> &Address {
        &self.location
    }

    /// Completed moves, in move order.
    pub fn visited(&self) -> &[Heading] {
        &self.visited
    }

    /// The most recently computed intended move.  `None` before the first
    /// decision and after exhaustion.
    pub fn heading(&self) -> Option<&Heading> {
        self.heading.as_ref()
    }

    /// `true` if the agent has already completed a move to `address`.
    pub fn has_visited(&self, address: &Address) -> bool {
        self.visited.iter().any(|h| &h.to == address)
    }

    /// Total cost paid across all completed moves.
    pub fn cost_paid(&self) -> f64 {
        self.visited.iter().map(|h| h.cost).sum()
    }

    // ── Decision procedure ────────────────────────────────────────────────

    /// Compute the next heading: the cheapest unvisited neighbor of `point`,
    /// ties broken uniformly at random.
    ///
    /// Returns `None` when every cheapest candidate has already been visited
    /// (or the point has no neighbors at all) — the agent is exhausted and
    /// must be retired by the caller.  Exhaustion is terminal, not an error.
    ///
    /// The candidate list inherits the point's address order, so a fixed
    /// RNG seed reproduces the same pick.
    pub(crate) fn decide_next(&mut self, point: &Point, rng: &mut WanderRng) -> Option<Heading> {
        let candidates: Vec<(Address, f64)> = point
            .cheapest()
            .into_iter()
            .filter(|(address, _)| !self.has_visited(address))
            .collect();

        self.heading = match candidates.len() {
            0 => None,
            // Single candidate: no randomness consumed, the pick is forced.
            1 => candidates
                .into_iter()
                .next()
                .map(|(to, cost)| Heading { to, cost }),
            _ => rng
                .choose(&candidates)
                .map(|(to, cost)| Heading { to: to.clone(), cost: *cost }),
        };
        self.heading.clone()
    }

    /// Apply a decided move: record it in the trail and relocate.
    pub(crate) fn apply_move(&mut self, heading: Heading) {
        self.location = heading.to.clone();
        self.visited.push(heading);
    }
}
