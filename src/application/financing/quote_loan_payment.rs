use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::financing;
use crate::domain::validation::RangeViolation;

#[derive(Debug, Deserialize)]
pub struct QuoteLoanPaymentCommand {
  /// Per-period interest rate, not an APR.
  pub rate: Decimal,
  pub number_of_periods: u32,
  pub present_value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct LoanPaymentResponse {
  pub payment: Decimal,
  pub number_of_periods: u32,
  pub total_paid: Decimal,
}

pub struct QuoteLoanPaymentUseCase;

impl QuoteLoanPaymentUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    command: QuoteLoanPaymentCommand,
  ) -> Result<LoanPaymentResponse, RangeViolation> {
    let payment = financing::payment(
      command.rate,
      command.number_of_periods,
      command.present_value,
    )?;

    debug!(%payment, periods = command.number_of_periods, "quoted loan payment");

    Ok(LoanPaymentResponse {
      payment,
      number_of_periods: command.number_of_periods,
      total_paid: payment * Decimal::from(command.number_of_periods),
    })
  }
}

impl Default for QuoteLoanPaymentUseCase {
  fn default() -> Self {
    Self::new()
  }
}
