use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::invoicing::{CostType, Invoice, ServiceInvoice};
use crate::domain::validation::RangeViolation;

#[derive(Debug, Deserialize)]
pub struct CostLineDto {
  pub cost_type: String,
  pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct PriceServiceOrderCommand {
  pub provincial_sales_tax_rate: Decimal,
  pub goods_and_services_tax_rate: Decimal,
  #[serde(default)]
  pub cost_lines: Vec<CostLineDto>,
}

#[derive(Debug, Serialize)]
pub struct ServiceOrderResponse {
  pub labour_cost: Decimal,
  pub parts_cost: Decimal,
  pub material_cost: Decimal,
  pub subtotal: Decimal,
  pub provincial_sales_tax_charged: Decimal,
  pub goods_and_services_tax_charged: Decimal,
  pub total: Decimal,
}

pub struct PriceServiceOrderUseCase;

impl PriceServiceOrderUseCase {
  pub fn new() -> Self {
    Self
  }

  /// Prices a service order from raw cost lines.
  ///
  /// A line whose category names no known cost type is skipped; a line with
  /// a non-positive amount fails the whole order.
  pub fn execute(
    &self,
    command: PriceServiceOrderCommand,
  ) -> Result<ServiceOrderResponse, RangeViolation> {
    let mut invoice = ServiceInvoice::new(
      command.provincial_sales_tax_rate,
      command.goods_and_services_tax_rate,
    )?;

    for line in &command.cost_lines {
      match line.cost_type.parse::<CostType>() {
        Ok(cost_type) => invoice.add_cost(cost_type, line.amount)?,
        Err(err) => {
          warn!(cost_type = %line.cost_type, "skipping cost line: {err}");
        }
      }
    }

    let response = ServiceOrderResponse {
      labour_cost: invoice.labour_cost(),
      parts_cost: invoice.parts_cost(),
      material_cost: invoice.material_cost(),
      subtotal: invoice.subtotal(),
      provincial_sales_tax_charged: invoice.provincial_sales_tax_charged(),
      goods_and_services_tax_charged: invoice.goods_and_services_tax_charged(),
      total: invoice.total(),
    };

    debug!(
      lines = command.cost_lines.len(),
      subtotal = %response.subtotal,
      total = %response.total,
      "priced service order"
    );

    Ok(response)
  }
}

impl Default for PriceServiceOrderUseCase {
  fn default() -> Self {
    Self::new()
  }
}
