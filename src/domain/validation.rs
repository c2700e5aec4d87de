use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

// Range Bound - the numeric constraints enforced across the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
  NonNegative,
  Positive,
  UnitInterval,
}

impl RangeBound {
  pub fn as_str(&self) -> &'static str {
    match self {
      RangeBound::NonNegative => "the value cannot be less than 0",
      RangeBound::Positive => "the value cannot be less than or equal to 0",
      RangeBound::UnitInterval => "the value must be between 0 and 1",
    }
  }
}

impl fmt::Display for RangeBound {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// Range Violation - rejected write to a validated numeric field
//
// Raised at the point of construction or mutation. There is no partial
// construction: a constructor that returns this error produced no instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} out of range: {value} ({bound})")]
pub struct RangeViolation {
  pub field: &'static str,
  pub value: Decimal,
  pub bound: RangeBound,
}

impl RangeViolation {
  pub fn new(field: &'static str, value: Decimal, bound: RangeBound) -> Self {
    Self {
      field,
      value,
      bound,
    }
  }

  /// Re-attributes the violation to the field name the caller knows it by.
  pub fn for_field(mut self, field: &'static str) -> Self {
    self.field = field;
    self
  }
}

/// Accepts any value >= 0.
pub fn check_non_negative(
  field: &'static str,
  value: Decimal,
) -> Result<Decimal, RangeViolation> {
  if value < Decimal::ZERO {
    return Err(RangeViolation::new(field, value, RangeBound::NonNegative));
  }
  Ok(value)
}

/// Accepts any value > 0.
pub fn check_positive(field: &'static str, value: Decimal) -> Result<Decimal, RangeViolation> {
  if value <= Decimal::ZERO {
    return Err(RangeViolation::new(field, value, RangeBound::Positive));
  }
  Ok(value)
}

/// Accepts any value in [0, 1] inclusive.
pub fn check_unit_interval(
  field: &'static str,
  value: Decimal,
) -> Result<Decimal, RangeViolation> {
  if value < Decimal::ZERO || value > Decimal::ONE {
    return Err(RangeViolation::new(field, value, RangeBound::UnitInterval));
  }
  Ok(value)
}
