use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to an order when it is created.
///
/// Six lowercase ASCII letters. Never changes once the order exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub const LENGTH: usize = 6;

    /// Draws a fresh identifier from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::LENGTH)
            .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an order.
///
/// `Open` and `Paid` are the states this crate drives. Any other value a
/// caller sets is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Open,
    Paid,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        match status {
            "open" => OrderStatus::Open,
            "paid" => OrderStatus::Paid,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "open" => OrderStatus::Open,
            "paid" => OrderStatus::Paid,
            _ => OrderStatus::Other(status),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq<&str> for OrderStatus {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer's order.
///
/// Created by the caller before payment is attempted and owned by the caller
/// afterwards. The payment processor only borrows it for the duration of `pay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    /// Creates an open order with an identifier drawn from the thread-local rng.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Creates an open order with an identifier drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            id: OrderId::generate(rng),
            status: OrderStatus::Open,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Overwrites the status. No validation is performed.
    pub fn set_status(&mut self, status: impl Into<OrderStatus>) {
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_order_is_open() {
        let order = Order::new();
        assert_eq!(order.status(), &OrderStatus::Open);
        assert_eq!(order.status().as_str(), "open");
    }

    #[test]
    fn test_order_id_is_six_lowercase_letters() {
        let order = Order::new();
        assert_eq!(order.id().as_str().len(), OrderId::LENGTH);
        assert!(order.id().as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_ids_are_reproducible() {
        let a = Order::with_rng(&mut StdRng::seed_from_u64(7));
        let b = Order::with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_set_status() {
        let mut order = Order::new();
        order.set_status("paid");
        assert_eq!(order.status(), &OrderStatus::Paid);
        assert_eq!(*order.status(), "paid");
    }

    #[test]
    fn test_set_status_keeps_unknown_values_verbatim() {
        let mut order = Order::new();
        for status in ["refunded", "PAID", " open", ""] {
            order.set_status(status);
            assert_eq!(order.status().as_str(), status);
        }
        assert_eq!(
            order.status(),
            &OrderStatus::Other(String::new()),
            "empty string is not coerced to a known state"
        );
    }

    #[test]
    fn test_order_serializes_status_as_string() {
        let mut order = Order::with_rng(&mut StdRng::seed_from_u64(1));
        order.set_status("paid");
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "paid");
        assert_eq!(json["id"], order.id().as_str());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
