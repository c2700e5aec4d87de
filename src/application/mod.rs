pub mod financing;
pub mod invoicing;
pub mod quoting;
