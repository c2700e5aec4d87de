use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::quoting::{AccessoryPackage, ExteriorFinish, SalesQuote};
use crate::domain::validation::RangeViolation;

#[derive(Debug, Deserialize)]
pub struct PrepareSalesQuoteCommand {
  pub vehicle_sale_price: Decimal,
  pub trade_in_amount: Decimal,
  pub sales_tax_rate: Decimal,
  #[serde(default)]
  pub accessories_chosen: Option<String>,
  #[serde(default)]
  pub exterior_finish_chosen: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SalesQuoteResponse {
  pub vehicle_sale_price: Decimal,
  pub trade_in_amount: Decimal,
  pub accessories_chosen: String,
  pub exterior_finish_chosen: String,
  pub accessory_cost: Decimal,
  pub finish_cost: Decimal,
  pub subtotal: Decimal,
  pub sales_tax: Decimal,
  pub total: Decimal,
  pub amount_due: Decimal,
}

pub struct PrepareSalesQuoteUseCase;

impl PrepareSalesQuoteUseCase {
  pub fn new() -> Self {
    Self
  }

  /// Prices a vehicle sale from raw input.
  ///
  /// A selection string that names no known option falls back to no
  /// selection; the closed option sets make every parsed value valid.
  pub fn execute(
    &self,
    command: PrepareSalesQuoteCommand,
  ) -> Result<SalesQuoteResponse, RangeViolation> {
    let accessories = Self::parse_selection(command.accessories_chosen.as_deref());
    let finish = Self::parse_finish(command.exterior_finish_chosen.as_deref());

    let quote = SalesQuote::with_options(
      command.vehicle_sale_price,
      command.trade_in_amount,
      command.sales_tax_rate,
      accessories,
      finish,
    )?;

    let response = SalesQuoteResponse {
      vehicle_sale_price: quote.vehicle_sale_price(),
      trade_in_amount: quote.trade_in_amount(),
      accessories_chosen: quote.accessories_chosen().as_str().to_string(),
      exterior_finish_chosen: quote.exterior_finish_chosen().as_str().to_string(),
      accessory_cost: quote.accessory_cost(),
      finish_cost: quote.finish_cost(),
      subtotal: quote.subtotal(),
      sales_tax: quote.sales_tax(),
      total: quote.total(),
      amount_due: quote.amount_due(),
    };

    debug!(subtotal = %response.subtotal, amount_due = %response.amount_due, "prepared sales quote");

    Ok(response)
  }

  fn parse_selection(value: Option<&str>) -> AccessoryPackage {
    match value {
      None => AccessoryPackage::None,
      Some(s) => s.parse().unwrap_or_else(|err| {
        warn!(selection = s, "falling back to no accessories: {err}");
        AccessoryPackage::None
      }),
    }
  }

  fn parse_finish(value: Option<&str>) -> ExteriorFinish {
    match value {
      None => ExteriorFinish::None,
      Some(s) => s.parse().unwrap_or_else(|err| {
        warn!(selection = s, "falling back to no finish: {err}");
        ExteriorFinish::None
      }),
    }
  }
}

impl Default for PrepareSalesQuoteUseCase {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn command(accessories: Option<&str>, finish: Option<&str>) -> PrepareSalesQuoteCommand {
    PrepareSalesQuoteCommand {
      vehicle_sale_price: dec!(20000),
      trade_in_amount: dec!(5000),
      sales_tax_rate: dec!(0.07),
      accessories_chosen: accessories.map(str::to_string),
      exterior_finish_chosen: finish.map(str::to_string),
    }
  }

  #[test]
  fn test_prepare_sales_quote() {
    let response = PrepareSalesQuoteUseCase::new()
      .execute(command(Some("stereo_and_leather"), Some("custom")))
      .unwrap();

    assert_eq!(response.accessory_cost, dec!(1515.15));
    assert_eq!(response.finish_cost, dec!(606.06));
    assert_eq!(response.subtotal, dec!(22121.21));
    assert_eq!(response.sales_tax, dec!(1548.4847));
    assert_eq!(response.total, dec!(23669.6947));
    assert_eq!(response.amount_due, dec!(18669.6947));
  }

  #[test]
  fn test_missing_selections_default_to_none() {
    let response = PrepareSalesQuoteUseCase::new()
      .execute(command(None, None))
      .unwrap();

    assert_eq!(response.accessories_chosen, "none");
    assert_eq!(response.exterior_finish_chosen, "none");
    assert_eq!(response.subtotal, dec!(20000));
  }

  #[test]
  fn test_unknown_selection_falls_back_to_none() {
    let response = PrepareSalesQuoteUseCase::new()
      .execute(command(Some("chrome_rims"), Some("matte")))
      .unwrap();

    assert_eq!(response.accessory_cost, dec!(0));
    assert_eq!(response.finish_cost, dec!(0));
  }

  #[test]
  fn test_validation_failure_propagates() {
    let err = PrepareSalesQuoteUseCase::new()
      .execute(PrepareSalesQuoteCommand {
        vehicle_sale_price: dec!(20000),
        trade_in_amount: dec!(5000),
        sales_tax_rate: dec!(1.5),
        accessories_chosen: None,
        exterior_finish_chosen: None,
      })
      .unwrap_err();

    assert_eq!(err.field, "sales tax rate");
  }

  #[test]
  fn test_response_serializes_to_json() {
    let response = PrepareSalesQuoteUseCase::new()
      .execute(command(Some("all"), Some("standard")))
      .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["accessories_chosen"], "all");
    assert_eq!(json["accessory_cost"], "3030.30");
  }
}
