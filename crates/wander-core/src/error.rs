//! Shared error type.
//!
//! All construction-time failures across the workspace use this one enum.
//! Agent exhaustion (no unvisited cheapest neighbor left) is *not* an
//! error — it is the normal terminal condition of a walk and is reported
//! through the round loop's status value instead.

use thiserror::Error;

use crate::{Address, AgentName};

/// Construction and misuse errors for the wander workspace.
#[derive(Debug, Error)]
pub enum WanderError {
    #[error("point address {0} already exists")]
    DuplicateAddress(Address),

    #[error("unknown point address {0}")]
    UnknownAddress(Address),

    #[error("agent {0} already exists")]
    DuplicateAgentName(AgentName),

    #[error("invalid cost {cost} on edge {from} → {to}: costs must be finite and non-negative")]
    InvalidCost {
        from: Address,
        to:   Address,
        cost: f64,
    },

    #[error("topology is frozen after round {round}: points and agents can only be added before the first round")]
    TopologyFrozen { round: u64 },
}

/// Shorthand result type for the wander workspace.
pub type WanderResult<T> = Result<T, WanderError>;
