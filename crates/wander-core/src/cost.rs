//! Edge-cost validity rules.
//!
//! Costs are plain `f64`s.  A cost is valid iff it is finite and
//! non-negative; everything else (negative, NaN, ±infinity) is rejected at
//! graph construction time with [`WanderError::InvalidCost`].
//!
//! Ties between costs are decided by exact `==` — no epsilon tolerance.
//! Validated costs are never NaN, so `==` and `<` behave as a total order
//! over every cost the engine compares.
//!
//! [`WanderError::InvalidCost`]: crate::WanderError::InvalidCost

/// `true` iff `cost` is a legal edge cost (finite and non-negative).
#[inline]
pub fn is_valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}
