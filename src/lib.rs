//! Pricing and taxation for automotive service transactions.
//!
//! The domain layer carries the business rules: an invoice hierarchy with
//! per-variant tax formulas (`domain::invoicing`), a vehicle sales quote
//! pricing engine (`domain::quoting`), and fixed-rate financing math
//! (`domain::financing`). Every monetary value is an exact
//! [`rust_decimal::Decimal`]; out-of-range writes are rejected with a
//! [`RangeViolation`] at the point of construction or mutation.
//!
//! The application layer wraps the domain in command/response use cases for
//! callers working with raw primitives.

pub mod application;
pub mod domain;

pub use domain::financing::payment;
pub use domain::invoicing::{CarWashInvoice, CostType, Invoice, ServiceInvoice, TaxRates};
pub use domain::quoting::{AccessoryPackage, ExteriorFinish, SalesQuote};
pub use domain::validation::{RangeBound, RangeViolation};
