//! Application layer: the payment workflow and the authorization strategies
//! that can be injected into it.

pub mod authorizer;
pub mod processor;
