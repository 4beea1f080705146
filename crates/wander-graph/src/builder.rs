//! Fluent builder for constructing a [`Graph`].

use std::collections::BTreeMap;

use wander_core::{is_valid_cost, Address, AgentName, WanderError, WanderResult};

use crate::{Graph, Point};

/// Collects points and agents, then validates everything in [`build`](Self::build).
///
/// Unlike [`Graph::add_point`], the builder accepts points in any order —
/// edge destinations are cross-checked only once all points are known, so
/// mutually-linked (cyclic) topologies need no ordering gymnastics.
///
/// # Checked at build time
///
/// - duplicate point addresses → [`WanderError::DuplicateAddress`]
/// - negative / non-finite edge costs → [`WanderError::InvalidCost`]
/// - edge destinations naming no point → [`WanderError::UnknownAddress`]
/// - duplicate agent names → [`WanderError::DuplicateAgentName`]
/// - agent starts naming no point → [`WanderError::UnknownAddress`]
///
/// Any failure aborts the build; no partially constructed graph escapes.
///
/// # Example
///
/// ```
/// use wander_graph::GraphBuilder;
///
/// let graph = GraphBuilder::new(42)
///     .point("u", [("v", 0.2), ("w", 0.2)])
///     .point("v", [("u", 0.7), ("w", 0.2)])
///     .point("w", [("u", 0.7), ("v", 0.2)])
///     .agent("Bob", "u")
///     .agent("Alice", "u")
///     .build()
///     .unwrap();
/// assert_eq!(graph.point_count(), 3);
/// assert_eq!(graph.active_count(), 2);
/// ```
pub struct GraphBuilder {
    seed:   u64,
    points: Vec<(Address, Vec<(Address, f64)>)>,
    agents: Vec<(AgentName, Address)>,
}

impl GraphBuilder {
    /// Start a builder; `seed` drives the graph's tie-breaking RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            points: Vec::new(),
            agents: Vec::new(),
        }
    }

    /// Queue a point with its outgoing `destination → cost` edges.
    pub fn point<A, N, I>(mut self, address: A, neighbors: I) -> Self
    where
        A: Into<Address>,
        N: Into<Address>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let edges = neighbors
            .into_iter()
            .map(|(to, cost)| (to.into(), cost))
            .collect();
        self.points.push((address.into(), edges));
        self
    }

    /// Queue an agent starting at `start`.  Agents are processed each round
    /// in the order they are queued here.
    pub fn agent<N, A>(mut self, name: N, start: A) -> Self
    where
        N: Into<AgentName>,
        A: Into<Address>,
    {
        self.agents.push((name.into(), start.into()));
        self
    }

    /// Validate and materialize the [`Graph`].
    pub fn build(self) -> WanderResult<Graph> {
        let mut graph = Graph::new(self.seed);

        for (address, neighbors) in self.points {
            if graph.points.contains_key(&address) {
                return Err(WanderError::DuplicateAddress(address));
            }
            let mut edges = BTreeMap::new();
            for (to, cost) in neighbors {
                if !is_valid_cost(cost) {
                    return Err(WanderError::InvalidCost { from: address, to, cost });
                }
                edges.insert(to, cost);
            }
            graph.points.insert(address.clone(), Point::new(address, edges));
        }

        // Destinations can only be cross-checked once every point is in.
        for point in graph.points.values() {
            for to in point.neighbors().keys() {
                if !graph.points.contains_key(to) {
                    return Err(WanderError::UnknownAddress(to.clone()));
                }
            }
        }

        for (name, start) in self.agents {
            graph.add_agent(name, start)?;
        }

        Ok(graph)
    }
}
