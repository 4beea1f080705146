//! The `Graph` struct and its round loop.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use wander_core::{is_valid_cost, Address, AgentName, WanderError, WanderRng, WanderResult};

use crate::{Agent, Point, RoundObserver};

// ── Round outcome ─────────────────────────────────────────────────────────────

/// What one completed round did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// 1-based index of the round that just completed.
    pub round: u64,
    /// Agents that moved this round.
    pub moved: usize,
    /// Agents retired into off-duty this round.
    pub retired: usize,
    /// Agents still active after this round.
    pub remaining: usize,
}

/// Return value of [`Graph::advance_round`].
///
/// Replaces the iterator-exhaustion control flow of a `for`-driven design:
/// callers loop while `Progressed` and stop on `Finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    /// A round ran; the report says what happened.
    Progressed(RoundReport),
    /// No active agents remained, so nothing ran.  Advancing a finished
    /// graph is a no-op that keeps returning this.
    Finished,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Owns the points, the active agents, and the off-duty agents, and drives
/// the whole system one synchronous round at a time.
///
/// `agents` and `off_duty` partition the full agent set: every agent is in
/// exactly one of the two, and their union never changes after construction.
/// Topology is frozen once the first round has run.
///
/// Construct via [`GraphBuilder`][crate::GraphBuilder], which accepts points
/// in any order (mutual edges need that), or incrementally via
/// [`add_point`][Graph::add_point] / [`add_agent`][Graph::add_agent].
#[derive(Debug)]
pub struct Graph {
    pub(crate) points:   FxHashMap<Address, Point>,
    pub(crate) agents:   FxHashMap<AgentName, Agent>,
    /// Active agents in insertion order — the fixed per-round processing
    /// order.  Shrinks in lockstep with `agents`.
    pub(crate) roster:   Vec<AgentName>,
    pub(crate) off_duty: FxHashMap<AgentName, Agent>,
    pub(crate) rng:      WanderRng,
    pub(crate) round:    u64,
}

impl Graph {
    /// An empty graph whose tie-breaking RNG is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            points:   FxHashMap::default(),
            agents:   FxHashMap::default(),
            roster:   Vec::new(),
            off_duty: FxHashMap::default(),
            rng:      WanderRng::new(seed),
            round:    0,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a point with its outgoing edges.
    ///
    /// Every edge destination must already exist (or be the point itself);
    /// use [`GraphBuilder`][crate::GraphBuilder] for mutually-linked
    /// topologies.  Rejects duplicate addresses, invalid costs, unknown
    /// destinations, and any call once a round has run.
    pub fn add_point<A, N, I>(&mut self, address: A, neighbors: I) -> WanderResult<()>
    where
        A: Into<Address>,
        N: Into<Address>,
        I: IntoIterator<Item = (N, f64)>,
    {
        self.ensure_unfrozen()?;
        let address = address.into();
        if self.points.contains_key(&address) {
            return Err(WanderError::DuplicateAddress(address));
        }

        let mut edges = BTreeMap::new();
        for (to, cost) in neighbors {
            let to = to.into();
            if !is_valid_cost(cost) {
                return Err(WanderError::InvalidCost { from: address, to, cost });
            }
            if to != address && !self.points.contains_key(&to) {
                return Err(WanderError::UnknownAddress(to));
            }
            edges.insert(to, cost);
        }

        self.points.insert(address.clone(), Point::new(address, edges));
        Ok(())
    }

    /// Add an agent at `start` and register it in that point's population.
    ///
    /// Rejects names already known (active *or* off-duty), unknown start
    /// addresses, and any call once a round has run.
    pub fn add_agent<N, A>(&mut self, name: N, start: A) -> WanderResult<()>
    where
        N: Into<AgentName>,
        A: Into<Address>,
    {
        self.ensure_unfrozen()?;
        let name = name.into();
        let start = start.into();
        if self.agents.contains_key(&name) || self.off_duty.contains_key(&name) {
            return Err(WanderError::DuplicateAgentName(name));
        }
        let Some(point) = self.points.get_mut(&start) else {
            return Err(WanderError::UnknownAddress(start));
        };

        point.population_mut().insert(name.clone());
        self.roster.push(name.clone());
        self.agents.insert(name.clone(), Agent::new(name, start));
        Ok(())
    }

    fn ensure_unfrozen(&self) -> WanderResult<()> {
        if self.round > 0 {
            return Err(WanderError::TopologyFrozen { round: self.round });
        }
        Ok(())
    }

    // ── Round loop ────────────────────────────────────────────────────────

    /// Advance every active agent by one move.
    ///
    /// Agents are processed in insertion order over a snapshot of the
    /// active roster taken at round start.  Per agent:
    ///
    /// - exhausted → migrate from `agents` to `off_duty`; its name stays in
    ///   its final point's population and it is never asked to move again;
    /// - otherwise → vacate the old point's population, append the heading
    ///   to the visited trail, relocate, occupy the new point's population.
    ///
    /// Earlier agents' population edits are visible to later agents in the
    /// same round; edge costs never change, so decisions stay well-defined.
    pub fn advance_round<O: RoundObserver>(&mut self, observer: &mut O) -> RoundStatus {
        if self.agents.is_empty() {
            return RoundStatus::Finished;
        }

        let round = self.round + 1;
        observer.on_round_start(round);

        let snapshot: Vec<AgentName> = self.roster.clone();
        let mut moved = 0;
        let mut retired = 0;

        for name in snapshot {
            let Some(agent) = self.agents.get_mut(&name) else {
                continue;
            };
            let Some(point) = self.points.get(agent.location()) else {
                continue;
            };

            match agent.decide_next(point, &mut self.rng) {
                None => {
                    observer.on_retire(&name, agent.location());
                    self.roster.retain(|n| n != &name);
                    if let Some(agent) = self.agents.remove(&name) {
                        self.off_duty.insert(name, agent);
                    }
                    retired += 1;
                }
                Some(heading) => {
                    let from = agent.location().clone();
                    observer.on_move(&name, &from, &heading.to, heading.cost);
                    agent.apply_move(heading.clone());
                    if let Some(old) = self.points.get_mut(&from) {
                        old.population_mut().remove(&name);
                    }
                    if let Some(new) = self.points.get_mut(&heading.to) {
                        new.population_mut().insert(name);
                    }
                    moved += 1;
                }
            }
        }

        self.round = round;
        let report = RoundReport {
            round,
            moved,
            retired,
            remaining: self.agents.len(),
        };
        observer.on_round_end(&report);
        RoundStatus::Progressed(report)
    }

    /// `true` exactly when no active agents remain.  Idempotent; no side
    /// effects.
    pub fn is_finished(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Read-back accessors ───────────────────────────────────────────────

    /// Rounds completed so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn point(&self, address: &Address) -> Option<&Point> {
        self.points.get(address)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Look up an agent, active or off-duty.
    pub fn agent(&self, name: &AgentName) -> Option<&Agent> {
        self.agents.get(name).or_else(|| self.off_duty.get(name))
    }

    /// Active agents, in insertion (processing) order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.roster.iter().filter_map(|name| self.agents.get(name))
    }

    pub fn off_duty(&self) -> impl Iterator<Item = &Agent> {
        self.off_duty.values()
    }

    pub fn active_count(&self) -> usize {
        self.agents.len()
    }

    pub fn retired_count(&self) -> usize {
        self.off_duty.len()
    }
}
