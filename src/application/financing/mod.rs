pub mod quote_loan_payment;

pub use quote_loan_payment::{LoanPaymentResponse, QuoteLoanPaymentCommand, QuoteLoanPaymentUseCase};
