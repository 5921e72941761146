use crate::error::Result;
use async_trait::async_trait;
use std::io;
use std::sync::Arc;

/// Where an authorizer gets the customer's answer from.
///
/// One call shows `prompt` and returns one line of input without its line
/// terminator. Implementations may block until a line is available.
#[async_trait]
pub trait InputSource: Send + Sync {
    async fn read_line(&self, prompt: &str) -> io::Result<String>;
}

/// Sink for the single diagnostic line emitted while a payment is processed.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, line: &str);
}

/// A challenge/response check that gates a payment.
///
/// `authorize` runs the challenge and overwrites the authorized state with
/// its outcome. `is_authorized` only reads that state.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self) -> Result<()>;
    fn is_authorized(&self) -> bool;
}

/// Authorizer shared between the caller and the processor it is injected into.
pub type AuthorizerRef = Arc<dyn Authorizer>;
/// Input source shared with the authorizer that reads from it.
pub type InputSourceRef = Arc<dyn InputSource>;
/// Notifier injected into the payment processor.
pub type NotifierRef = Arc<dyn Notifier>;
