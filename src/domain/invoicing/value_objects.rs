use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::validation::{RangeViolation, check_positive, check_unit_interval};

// Tax Rate - fraction of the taxed base, 0 to 1 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
  pub fn new(value: Decimal) -> Result<Self, RangeViolation> {
    check_unit_interval("tax rate", value).map(Self)
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

impl fmt::Display for TaxRate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.2}%", self.0 * Decimal::ONE_HUNDRED)
  }
}

// Tax Rates - the validated pair every invoice carries
//
// Rates are fixed at construction and may only be replaced through the same
// validation the constructor applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
  provincial_sales_tax_rate: TaxRate,
  goods_and_services_tax_rate: TaxRate,
}

impl TaxRates {
  pub fn new(
    provincial_sales_tax_rate: Decimal,
    goods_and_services_tax_rate: Decimal,
  ) -> Result<Self, RangeViolation> {
    Ok(Self {
      provincial_sales_tax_rate: TaxRate::new(provincial_sales_tax_rate)
        .map_err(|e| e.for_field("provincial sales tax rate"))?,
      goods_and_services_tax_rate: TaxRate::new(goods_and_services_tax_rate)
        .map_err(|e| e.for_field("goods and services tax rate"))?,
    })
  }

  pub fn provincial_sales_tax_rate(&self) -> Decimal {
    self.provincial_sales_tax_rate.value()
  }

  pub fn goods_and_services_tax_rate(&self) -> Decimal {
    self.goods_and_services_tax_rate.value()
  }

  pub fn set_provincial_sales_tax_rate(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.provincial_sales_tax_rate =
      TaxRate::new(value).map_err(|e| e.for_field("provincial sales tax rate"))?;
    Ok(())
  }

  pub fn set_goods_and_services_tax_rate(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.goods_and_services_tax_rate =
      TaxRate::new(value).map_err(|e| e.for_field("goods and services tax rate"))?;
    Ok(())
  }
}

// Cost Ledger - accumulate-only charge bucket
//
// Starts at zero and only ever grows. There is no decrease and no reset; a
// rejected increase leaves the balance untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLedger(Decimal);

impl CostLedger {
  pub fn new() -> Self {
    Self(Decimal::ZERO)
  }

  /// Adds `amount` to the balance. The amount must be strictly positive.
  pub fn increase(&mut self, amount: Decimal) -> Result<(), RangeViolation> {
    check_positive("amount", amount)?;
    self.0 += amount;
    Ok(())
  }

  pub fn balance(&self) -> Decimal {
    self.0
  }
}
