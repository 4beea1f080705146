//! `wander-core` — foundational types for the wander graph simulation.
//!
//! This crate has no workspace dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `Address`, `AgentName`                     |
//! | [`cost`]  | edge-cost validity rules                   |
//! | [`rng`]   | `WanderRng` (seeded tie-break randomness)  |
//! | [`error`] | `WanderError`, `WanderResult`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cost;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::is_valid_cost;
pub use error::{WanderError, WanderResult};
pub use ids::{Address, AgentName};
pub use rng::WanderRng;
