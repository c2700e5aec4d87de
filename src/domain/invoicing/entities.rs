use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownCostType;
use super::value_objects::{CostLedger, TaxRates};
use crate::domain::validation::{RangeViolation, check_non_negative};

// Invoice - the polymorphic tax computation contract
//
// Each concrete invoice supplies its own subtotal and per-tax charge
// formulas; the total is always derived from them, never stored.
pub trait Invoice {
  fn tax_rates(&self) -> &TaxRates;

  /// Pre-tax sum of the chargeable cost components.
  fn subtotal(&self) -> Decimal;

  /// Amount of provincial sales tax charged to the customer.
  fn provincial_sales_tax_charged(&self) -> Decimal;

  /// Amount of goods and services tax charged to the customer.
  fn goods_and_services_tax_charged(&self) -> Decimal;

  /// Subtotal plus both tax charges.
  fn total(&self) -> Decimal {
    self.subtotal() + self.goods_and_services_tax_charged() + self.provincial_sales_tax_charged()
  }
}

// CarWashInvoice - wash package plus optional in-car fragrance
//
// Car washes charge goods and services tax only; the provincial charge is
// always zero regardless of the stored provincial rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarWashInvoice {
  tax_rates: TaxRates,
  package_cost: Decimal,
  fragrance_cost: Decimal,
}

impl CarWashInvoice {
  /// Creates an invoice with both costs at zero.
  pub fn new(
    provincial_sales_tax_rate: Decimal,
    goods_and_services_tax_rate: Decimal,
  ) -> Result<Self, RangeViolation> {
    Self::with_costs(
      provincial_sales_tax_rate,
      goods_and_services_tax_rate,
      Decimal::ZERO,
      Decimal::ZERO,
    )
  }

  pub fn with_costs(
    provincial_sales_tax_rate: Decimal,
    goods_and_services_tax_rate: Decimal,
    package_cost: Decimal,
    fragrance_cost: Decimal,
  ) -> Result<Self, RangeViolation> {
    Ok(Self {
      tax_rates: TaxRates::new(provincial_sales_tax_rate, goods_and_services_tax_rate)?,
      package_cost: check_non_negative("package cost", package_cost)?,
      fragrance_cost: check_non_negative("fragrance cost", fragrance_cost)?,
    })
  }

  pub fn package_cost(&self) -> Decimal {
    self.package_cost
  }

  pub fn fragrance_cost(&self) -> Decimal {
    self.fragrance_cost
  }

  pub fn set_package_cost(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.package_cost = check_non_negative("package cost", value)?;
    Ok(())
  }

  pub fn set_fragrance_cost(&mut self, value: Decimal) -> Result<(), RangeViolation> {
    self.fragrance_cost = check_non_negative("fragrance cost", value)?;
    Ok(())
  }

  pub fn tax_rates_mut(&mut self) -> &mut TaxRates {
    &mut self.tax_rates
  }
}

impl Invoice for CarWashInvoice {
  fn tax_rates(&self) -> &TaxRates {
    &self.tax_rates
  }

  fn subtotal(&self) -> Decimal {
    self.package_cost + self.fragrance_cost
  }

  fn provincial_sales_tax_charged(&self) -> Decimal {
    Decimal::ZERO
  }

  fn goods_and_services_tax_charged(&self) -> Decimal {
    self.subtotal() * self.tax_rates.goods_and_services_tax_rate()
  }
}

// Cost Type - categories a service order accumulates charges under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
  Labour,
  Part,
  Material,
}

impl CostType {
  pub fn as_str(&self) -> &'static str {
    match self {
      CostType::Labour => "labour",
      CostType::Part => "part",
      CostType::Material => "material",
    }
  }
}

impl fmt::Display for CostType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for CostType {
  type Err = UnknownCostType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "labour" | "labor" => Ok(CostType::Labour),
      "part" | "parts" => Ok(CostType::Part),
      "material" | "materials" => Ok(CostType::Material),
      _ => Err(UnknownCostType(s.to_string())),
    }
  }
}

// ServiceInvoice - repair order accumulating labour, parts and materials
//
// All three cost fields start at zero and only ever grow through add_cost.
// Labour is exempt from provincial sales tax; goods and services tax applies
// to the full subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInvoice {
  tax_rates: TaxRates,
  labour: CostLedger,
  parts: CostLedger,
  materials: CostLedger,
}

impl ServiceInvoice {
  pub fn new(
    provincial_sales_tax_rate: Decimal,
    goods_and_services_tax_rate: Decimal,
  ) -> Result<Self, RangeViolation> {
    Ok(Self {
      tax_rates: TaxRates::new(provincial_sales_tax_rate, goods_and_services_tax_rate)?,
      labour: CostLedger::new(),
      parts: CostLedger::new(),
      materials: CostLedger::new(),
    })
  }

  /// Adds `amount` to the ledger selected by `cost_type`.
  ///
  /// The amount must be strictly positive; a rejected amount leaves every
  /// ledger unchanged.
  pub fn add_cost(&mut self, cost_type: CostType, amount: Decimal) -> Result<(), RangeViolation> {
    match cost_type {
      CostType::Labour => self.labour.increase(amount),
      CostType::Part => self.parts.increase(amount),
      CostType::Material => self.materials.increase(amount),
    }
  }

  pub fn labour_cost(&self) -> Decimal {
    self.labour.balance()
  }

  pub fn parts_cost(&self) -> Decimal {
    self.parts.balance()
  }

  pub fn material_cost(&self) -> Decimal {
    self.materials.balance()
  }

  pub fn tax_rates_mut(&mut self) -> &mut TaxRates {
    &mut self.tax_rates
  }
}

impl Invoice for ServiceInvoice {
  fn tax_rates(&self) -> &TaxRates {
    &self.tax_rates
  }

  fn subtotal(&self) -> Decimal {
    self.parts_cost() + self.material_cost() + self.labour_cost()
  }

  fn provincial_sales_tax_charged(&self) -> Decimal {
    (self.parts_cost() + self.material_cost()) * self.tax_rates.provincial_sales_tax_rate()
  }

  fn goods_and_services_tax_charged(&self) -> Decimal {
    self.subtotal() * self.tax_rates.goods_and_services_tax_rate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_car_wash_rejects_out_of_range_rates() {
    assert!(CarWashInvoice::new(dec!(-0.01), dec!(0.05)).is_err());
    assert!(CarWashInvoice::new(dec!(0.08), dec!(1.01)).is_err());
    assert!(CarWashInvoice::new(dec!(0), dec!(0)).is_ok());
    assert!(CarWashInvoice::new(dec!(1), dec!(1)).is_ok());
  }

  #[test]
  fn test_car_wash_rejects_negative_costs() {
    let err = CarWashInvoice::with_costs(dec!(0.08), dec!(0.05), dec!(-1), dec!(0)).unwrap_err();
    assert_eq!(err.field, "package cost");

    let err = CarWashInvoice::with_costs(dec!(0.08), dec!(0.05), dec!(0), dec!(-1)).unwrap_err();
    assert_eq!(err.field, "fragrance cost");
  }

  #[test]
  fn test_car_wash_charges_gst_only() {
    let invoice =
      CarWashInvoice::with_costs(dec!(0.08), dec!(0.05), dec!(34.99), dec!(5.01)).unwrap();

    assert_eq!(invoice.subtotal(), dec!(40.00));
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(0));
    assert_eq!(invoice.goods_and_services_tax_charged(), dec!(2.0000));
    assert_eq!(invoice.total(), dec!(42.0000));
  }

  #[test]
  fn test_car_wash_pst_is_zero_even_at_full_rate() {
    let invoice = CarWashInvoice::with_costs(dec!(1), dec!(0), dec!(100), dec!(50)).unwrap();
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(0));
  }

  #[test]
  fn test_car_wash_setters_validate_independently() {
    let mut invoice = CarWashInvoice::new(dec!(0.08), dec!(0.05)).unwrap();

    invoice.set_package_cost(dec!(29.95)).unwrap();
    assert!(invoice.set_fragrance_cost(dec!(-2)).is_err());

    assert_eq!(invoice.package_cost(), dec!(29.95));
    assert_eq!(invoice.fragrance_cost(), dec!(0));
  }

  #[test]
  fn test_car_wash_rates_replaceable_under_same_rule() {
    let mut invoice = CarWashInvoice::with_costs(dec!(0.08), dec!(0.05), dec!(10), dec!(0)).unwrap();

    invoice
      .tax_rates_mut()
      .set_goods_and_services_tax_rate(dec!(0.10))
      .unwrap();
    assert_eq!(invoice.goods_and_services_tax_charged(), dec!(1.00));

    assert!(
      invoice
        .tax_rates_mut()
        .set_goods_and_services_tax_rate(dec!(2))
        .is_err()
    );
    assert_eq!(invoice.tax_rates().goods_and_services_tax_rate(), dec!(0.10));
  }

  #[test]
  fn test_cost_type_parsing() {
    assert_eq!("Labour".parse::<CostType>().unwrap(), CostType::Labour);
    assert_eq!("labor".parse::<CostType>().unwrap(), CostType::Labour);
    assert_eq!("parts".parse::<CostType>().unwrap(), CostType::Part);
    assert_eq!("MATERIAL".parse::<CostType>().unwrap(), CostType::Material);
    assert!("paint".parse::<CostType>().is_err());
  }

  #[test]
  fn test_service_invoice_starts_at_zero() {
    let invoice = ServiceInvoice::new(dec!(0.08), dec!(0.05)).unwrap();
    assert_eq!(invoice.labour_cost(), dec!(0));
    assert_eq!(invoice.parts_cost(), dec!(0));
    assert_eq!(invoice.material_cost(), dec!(0));
    assert_eq!(invoice.total(), dec!(0));
  }

  #[test]
  fn test_service_invoice_accumulates_per_category() {
    let mut invoice = ServiceInvoice::new(dec!(0.08), dec!(0.05)).unwrap();

    invoice.add_cost(CostType::Labour, dec!(100)).unwrap();
    invoice.add_cost(CostType::Part, dec!(50)).unwrap();
    invoice.add_cost(CostType::Material, dec!(10)).unwrap();

    assert_eq!(invoice.subtotal(), dec!(160));
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(4.80));
    assert_eq!(invoice.goods_and_services_tax_charged(), dec!(8.00));
    assert_eq!(invoice.total(), dec!(172.80));
  }

  #[test]
  fn test_service_invoice_labour_exempt_from_pst() {
    let mut invoice = ServiceInvoice::new(dec!(0.10), dec!(0)).unwrap();
    invoice.add_cost(CostType::Labour, dec!(500)).unwrap();

    assert_eq!(invoice.subtotal(), dec!(500));
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(0));
  }

  #[test]
  fn test_add_cost_failure_mutates_nothing() {
    let mut invoice = ServiceInvoice::new(dec!(0.08), dec!(0.05)).unwrap();
    invoice.add_cost(CostType::Part, dec!(75.25)).unwrap();

    let before = invoice.clone();
    assert!(invoice.add_cost(CostType::Part, dec!(0)).is_err());
    assert!(invoice.add_cost(CostType::Labour, dec!(-10)).is_err());
    assert_eq!(invoice, before);
  }

  #[test]
  fn test_add_cost_repeated_increments() {
    let mut invoice = ServiceInvoice::new(dec!(0), dec!(0)).unwrap();
    invoice.add_cost(CostType::Labour, dec!(10.10)).unwrap();
    invoice.add_cost(CostType::Labour, dec!(20.20)).unwrap();
    invoice.add_cost(CostType::Labour, dec!(0.01)).unwrap();

    assert_eq!(invoice.labour_cost(), dec!(30.31));
  }
}
