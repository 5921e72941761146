use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::{AuthorizerRef, NotifierRef};
use crate::error::{PaymentError, Result};

/// Takes payment for orders once the injected authorizer agrees.
///
/// The processor never builds an authorizer itself and never looks at which
/// kind it was given. It shares the authorizer with the caller rather than
/// owning it, so the caller can keep issuing codes or inspecting its state.
pub struct PaymentProcessor {
    authorizer: AuthorizerRef,
    notifier: NotifierRef,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `authorizer` - The check every payment has to pass.
    /// * `notifier` - Where the "processing payment" line goes.
    pub fn new(authorizer: AuthorizerRef, notifier: NotifierRef) -> Self {
        Self {
            authorizer,
            notifier,
        }
    }

    /// The exact authorizer instance this processor was built with.
    pub fn authorizer(&self) -> &AuthorizerRef {
        &self.authorizer
    }

    /// Processes the payment for `order`.
    ///
    /// Runs the authorization challenge (which may wait on the customer) and,
    /// if it passes, marks the order as paid. On refusal the order is left as
    /// it was and `PaymentError::Unauthorized` is returned; retrying is up to
    /// the caller. Input failures from the authorizer are passed through.
    pub async fn pay(&self, order: &mut Order) -> Result<()> {
        self.authorizer.authorize().await?;
        if !self.authorizer.is_authorized() {
            tracing::warn!(order_id = %order.id(), "payment not authorized");
            return Err(PaymentError::Unauthorized {
                order_id: order.id().clone(),
            });
        }

        let line = format!("Processing payment for order with id {}", order.id());
        self.notifier.notify(&line).await;
        order.set_status(OrderStatus::Paid);
        tracing::info!(order_id = %order.id(), "order paid");
        Ok(())
    }
}
