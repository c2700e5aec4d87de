//! Fixed-rate financing math.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::domain::validation::{
  RangeBound, RangeViolation, check_positive, check_unit_interval,
};

/// Returns the periodic payment amortizing `present_value` over
/// `number_of_periods` at the fixed per-period `rate`.
///
/// The rate is per period: a 10% APR paid monthly is `0.10 / 12` here. With a
/// zero rate the present value is prorated evenly across the periods;
/// otherwise this is the ordinary-annuity payment with a zero future value
/// and payments at period end:
///
/// ```text
/// payment = rate * pv * (1 + rate)^n / ((1 + rate)^n - 1)
/// ```
///
/// The `(1 + rate)^n` growth factor goes through `f64`; everything else stays
/// in `Decimal`. The result is not rounded; callers quantize to their
/// currency convention (for example `round_dp(2)`).
pub fn payment(
  rate: Decimal,
  number_of_periods: u32,
  present_value: Decimal,
) -> Result<Decimal, RangeViolation> {
  check_unit_interval("rate", rate)?;
  if number_of_periods == 0 {
    return Err(RangeViolation::new(
      "number of periods",
      Decimal::from(number_of_periods),
      RangeBound::Positive,
    ));
  }
  check_positive("present value", present_value)?;

  let periods = Decimal::from(number_of_periods);
  if rate.is_zero() {
    return Ok(present_value / periods);
  }

  // Evaluated as rate * pv / (1 - (1 + rate)^-n): the inverted growth factor
  // stays in (0, 1], so the f64 round trip cannot overflow for any period
  // count.
  let inverse_growth = (Decimal::ONE + rate)
    .to_f64()
    .unwrap_or(1.0)
    .powf(-f64::from(number_of_periods));
  let denominator = Decimal::ONE - Decimal::from_f64(inverse_growth).unwrap_or(Decimal::ONE);

  // Rates below f64 resolution collapse the denominator to zero; prorate
  // like a zero rate instead of dividing by it.
  if denominator.is_zero() {
    return Ok(present_value / periods);
  }

  Ok(rate * present_value / denominator)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_zero_rate_prorates_exactly() {
    assert_eq!(payment(dec!(0), 12, dec!(1200)).unwrap(), dec!(100));
    assert_eq!(payment(dec!(0), 3, dec!(100)).unwrap().round_dp(2), dec!(33.33));
  }

  #[test]
  fn test_standard_annuity_payment() {
    // 1% per period over 12 periods on 1000
    let p = payment(dec!(0.01), 12, dec!(1000)).unwrap();
    assert_eq!(p.round_dp(2), dec!(88.85));
  }

  #[test]
  fn test_car_loan_payment() {
    // 4-year loan, 6% APR paid monthly
    let monthly_rate = dec!(0.06) / dec!(12);
    let p = payment(monthly_rate, 48, dec!(20000)).unwrap();
    assert_eq!(p.round_dp(2), dec!(469.70));
  }

  #[test]
  fn test_rate_bounds() {
    let err = payment(dec!(-0.01), 1, dec!(100)).unwrap_err();
    assert_eq!(err.field, "rate");

    let err = payment(dec!(1.01), 1, dec!(100)).unwrap_err();
    assert_eq!(err.field, "rate");

    assert!(payment(dec!(1), 1, dec!(100)).is_ok());
  }

  #[test]
  fn test_period_and_present_value_bounds() {
    let err = payment(dec!(0.05), 0, dec!(100)).unwrap_err();
    assert_eq!(err.field, "number of periods");

    let err = payment(dec!(0.05), 12, dec!(0)).unwrap_err();
    assert_eq!(err.field, "present value");

    let err = payment(dec!(0.05), 12, dec!(-100)).unwrap_err();
    assert_eq!(err.field, "present value");
  }

  #[test]
  fn test_full_rate_single_period() {
    // rate 1 over one period: pay back double the principal
    assert_eq!(payment(dec!(1), 1, dec!(100)).unwrap().round_dp(2), dec!(200.00));
  }
}
