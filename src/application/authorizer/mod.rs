//! Concrete [`Authorizer`](crate::domain::ports::Authorizer) strategies.
//!
//! The payment processor only sees the trait, so new strategies can be added
//! here without touching it.

pub mod robot;
pub mod sms;

pub use robot::RobotCheckAuthorizer;
pub use sms::SmsAuthorizer;
