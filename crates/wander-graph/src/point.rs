//! Graph points and the cheapest-neighbor query.

use std::collections::{BTreeMap, BTreeSet};

use wander_core::{Address, AgentName};

/// A graph node: an address, its costed edges, and the agents standing on it.
///
/// `neighbors` is static after construction; `population` is mutated only by
/// [`Graph`][crate::Graph] as agents move.  Both use BTree collections so
/// that iteration — and therefore tie-candidate enumeration — is
/// deterministic by address order.
#[derive(Debug, Clone)]
pub struct Point {
    address:    Address,
    neighbors:  BTreeMap<Address, f64>,
    population: BTreeSet<AgentName>,
}

impl Point {
    pub(crate) fn new(address: Address, neighbors: BTreeMap<Address, f64>) -> Self {
        Self {
            address,
            neighbors,
            population: BTreeSet::new(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Outgoing edges as `destination → cost`, in address order.
    pub fn neighbors(&self) -> &BTreeMap<Address, f64> {
        &self.neighbors
    }

    /// Names of the agents currently situated at this point.
    ///
    /// Retired agents keep their final entry here; subtract the graph's
    /// off-duty set if only active occupants are wanted.
    pub fn population(&self) -> &BTreeSet<AgentName> {
        &self.population
    }

    pub(crate) fn population_mut(&mut self) -> &mut BTreeSet<AgentName> {
        &mut self.population
    }

    // ── Cheapest-neighbor query ───────────────────────────────────────────

    /// All outgoing edges tied for minimum cost, in address order.
    pub fn cheapest(&self) -> Vec<(Address, f64)> {
        Self::cheapest_of(self.neighbors.iter().map(|(a, &c)| (a, c)))
    }

    /// Min-set scan over an arbitrary `address → cost` mapping: returns
    /// every entry whose cost equals the minimum, and only those, in input
    /// order.  Empty input yields an empty result.  Ties are exact `==`;
    /// costs are validated non-NaN at construction, so `<` is total here.
    pub fn cheapest_of<'a, I>(routes: I) -> Vec<(Address, f64)>
    where
        I: IntoIterator<Item = (&'a Address, f64)>,
    {
        let mut headings: Vec<(Address, f64)> = Vec::new();
        let mut min = f64::INFINITY;
        for (address, cost) in routes {
            if cost < min {
                min = cost;
                headings.clear();
                headings.push((address.clone(), cost));
            } else if cost == min {
                headings.push((address.clone(), cost));
            }
        }
        headings
    }
}
