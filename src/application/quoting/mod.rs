pub mod prepare_sales_quote;

pub use prepare_sales_quote::{
  PrepareSalesQuoteCommand, PrepareSalesQuoteUseCase, SalesQuoteResponse,
};
