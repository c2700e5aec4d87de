use thiserror::Error;

// Raised when a cost category string does not name a known CostType.
//
// Not a range violation: an unknown category is a line to skip, not a
// failed order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cost type: {0}")]
pub struct UnknownCostType(pub String);
