use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::{AccessoryPackage, ExteriorFinish};
use crate::domain::invoicing::TaxRate;
use crate::domain::validation::{RangeViolation, check_non_negative, check_positive};

// SalesQuote - pricing for a single vehicle sale
//
// Every derived amount is recomputed on each read so it always reflects the
// latest mutation. The amount due may be negative when the trade-in exceeds
// the taxed total; that is a credit to the customer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQuote {
  vehicle_sale_price: Decimal,
  trade_in_amount: Decimal,
  sales_tax_rate: TaxRate,
  accessories_chosen: AccessoryPackage,
  exterior_finish_chosen: ExteriorFinish,
}

impl SalesQuote {
  /// Creates a quote with no accessories and no exterior finish chosen.
  pub fn new(
    vehicle_sale_price: Decimal,
    trade_in_amount: Decimal,
    sales_tax_rate: Decimal,
  ) -> Result<Self, RangeViolation> {
    Self::with_options(
      vehicle_sale_price,
      trade_in_amount,
      sales_tax_rate,
      AccessoryPackage::None,
      ExteriorFinish::None,
    )
  }

  pub fn with_options(
    vehicle_sale_price: Decimal,
    trade_in_amount: Decimal,
    sales_tax_rate: Decimal,
    accessories_chosen: AccessoryPackage,
    exterior_finish_chosen: ExteriorFinish,
  ) -> Result<Self, RangeViolation> {
    Ok(Self {
      vehicle_sale_price: check_positive("vehicle sale price", vehicle_sale_price)?,
      trade_in_amount: check_non_negative("trade in amount", trade_in_amount)?,
      sales_tax_rate: TaxRate::new(sales_tax_rate).map_err(|e| e.for_field("sales tax rate"))?,
      accessories_chosen,
      exterior_finish_chosen,
    })
  }

  pub fn vehicle_sale_price(&self) -> Decimal {
    self.vehicle_sale_price
  }

  pub fn trade_in_amount(&self) -> Decimal {
    self.trade_in_amount
  }

  pub fn sales_tax_rate(&self) -> Decimal {
    self.sales_tax_rate.value()
  }

  pub fn accessories_chosen(&self) -> AccessoryPackage {
    self.accessories_chosen
  }

  pub fn exterior_finish_chosen(&self) -> ExteriorFinish {
    self.exterior_finish_chosen
  }

  pub fn set_vehicle_sale_price(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.vehicle_sale_price = check_positive("vehicle sale price", value)?;
    Ok(())
  }

  pub fn set_trade_in_amount(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.trade_in_amount = check_non_negative("trade in amount", value)?;
    Ok(())
  }

  pub fn set_accessories_chosen(&mut self, value: AccessoryPackage) {
    self.accessories_chosen = value;
  }

  pub fn set_exterior_finish_chosen(&mut self, value: ExteriorFinish) {
    self.exterior_finish_chosen = value;
  }

  pub fn accessory_cost(&self) -> Decimal {
    self.accessories_chosen.cost()
  }

  pub fn finish_cost(&self) -> Decimal {
    self.exterior_finish_chosen.cost()
  }

  /// Vehicle price plus accessory and finish costs.
  pub fn subtotal(&self) -> Decimal {
    self.vehicle_sale_price + self.accessory_cost() + self.finish_cost()
  }

  pub fn sales_tax(&self) -> Decimal {
    self.sales_tax_rate.value() * self.subtotal()
  }

  pub fn total(&self) -> Decimal {
    self.sales_tax() + self.subtotal()
  }

  /// Total minus the trade-in credit. May be negative.
  pub fn amount_due(&self) -> Decimal {
    self.total() - self.trade_in_amount
  }
}

impl fmt::Display for SalesQuote {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Vehicle Sale Price: {:.2}", self.vehicle_sale_price)?;
    writeln!(f, "Trade-in Amount: {:.2}", self.trade_in_amount)?;
    writeln!(f, "Accessories Cost: {:.2}", self.accessory_cost())?;
    writeln!(f, "Finish Cost: {:.2}", self.finish_cost())?;
    writeln!(f, "Subtotal: {:.2}", self.subtotal())?;
    writeln!(f, "Total: {:.2}", self.total())?;
    write!(f, "Amount Due: {:.2}", self.amount_due())
  }
}
