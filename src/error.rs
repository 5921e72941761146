use crate::domain::order::OrderId;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    /// The injected authorizer refused the payment. The order is left untouched.
    #[error("Not authorized to pay order {order_id}")]
    #[diagnostic(
        code(authpay::unauthorized),
        help("the authorization challenge was not passed; retry the payment to get a new challenge")
    )]
    Unauthorized { order_id: OrderId },
    #[error("IO error: {0}")]
    #[diagnostic(code(authpay::io))]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    #[diagnostic(code(authpay::validation))]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
