use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::invoicing::{CarWashInvoice, Invoice};
use crate::domain::validation::RangeViolation;

#[derive(Debug, Deserialize)]
pub struct PriceCarWashCommand {
  pub provincial_sales_tax_rate: Decimal,
  pub goods_and_services_tax_rate: Decimal,
  #[serde(default)]
  pub package_cost: Decimal,
  #[serde(default)]
  pub fragrance_cost: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CarWashChargesResponse {
  pub package_cost: Decimal,
  pub fragrance_cost: Decimal,
  pub subtotal: Decimal,
  pub provincial_sales_tax_charged: Decimal,
  pub goods_and_services_tax_charged: Decimal,
  pub total: Decimal,
}

pub struct PriceCarWashUseCase;

impl PriceCarWashUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    command: PriceCarWashCommand,
  ) -> Result<CarWashChargesResponse, RangeViolation> {
    let invoice = CarWashInvoice::with_costs(
      command.provincial_sales_tax_rate,
      command.goods_and_services_tax_rate,
      command.package_cost,
      command.fragrance_cost,
    )?;

    let response = CarWashChargesResponse {
      package_cost: invoice.package_cost(),
      fragrance_cost: invoice.fragrance_cost(),
      subtotal: invoice.subtotal(),
      provincial_sales_tax_charged: invoice.provincial_sales_tax_charged(),
      goods_and_services_tax_charged: invoice.goods_and_services_tax_charged(),
      total: invoice.total(),
    };

    debug!(subtotal = %response.subtotal, total = %response.total, "priced car wash invoice");

    Ok(response)
  }
}

impl Default for PriceCarWashUseCase {
  fn default() -> Self {
    Self::new()
  }
}
