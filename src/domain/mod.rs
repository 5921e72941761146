//! Domain layer: the order entity, the SMS code value object and the ports
//! (traits) that the application layer depends on.

pub mod code;
pub mod order;
pub mod ports;
