use crate::errors::OrderError;
use crate::models::{Order, OrderId, OrderInput, Side};
use crate::store::OrderStore;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Source of fresh order identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// Random v4 UUIDs, hyphenated lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> OrderId {
        OrderId::new(Uuid::new_v4().to_string())
    }
}

/// Gatekeeper between incoming requests and the store.
pub struct OrderRegistrar {
    store: Arc<dyn OrderStore>,
    ids: Arc<dyn IdGenerator>,
}

impl OrderRegistrar {
    pub fn new(store: Arc<dyn OrderStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validates the request, assigns a fresh id and saves the order.
    /// The store is untouched unless every check passes.
    pub fn register(&self, input: OrderInput) -> Result<OrderId, OrderError> {
        let accepted = accept(input).inspect_err(|e| {
            metrics::counter!("orders_rejected_total").increment(1);
            tracing::warn!("Rejected order registration: {e}");
        })?;

        let order_id = self.ids.next_id();
        let order = Order::new(
            order_id.clone(),
            accepted.user_id,
            accepted.side,
            accepted.unit_price,
            accepted.quantity,
        );
        self.store.save(order);

        metrics::counter!("orders_registered_total").increment(1);
        tracing::info!(
            %order_id,
            side = ?accepted.side,
            unit_price = %accepted.unit_price,
            quantity = accepted.quantity,
            "Registered order"
        );

        Ok(order_id)
    }

    /// Always succeeds; cancelling an unknown id does nothing.
    pub fn cancel(&self, order_id: &OrderId) {
        self.store.cancel(order_id);
        metrics::counter!("orders_cancelled_total").increment(1);
        tracing::info!(%order_id, "Cancelled order");
    }
}

struct Accepted {
    user_id: String,
    side: Side,
    unit_price: Decimal,
    quantity: u64,
}

/// Checks run in a fixed order, so the first problem found is the one reported.
fn accept(input: OrderInput) -> Result<Accepted, OrderError> {
    if input.order_id.is_some() {
        return Err(violation("orderId cannot be present for the new record"));
    }
    let user_id = input
        .user_id
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| violation("userId is not present"))?;
    let side = input.side.ok_or_else(|| violation("side is not present"))?;
    let unit_price = input
        .unit_price
        .ok_or_else(|| violation("unitPrice is not present"))?;

    Ok(Accepted {
        user_id,
        side,
        unit_price,
        quantity: input.quantity,
    })
}

fn violation(message: &str) -> OrderError {
    OrderError::PreconditionViolation(message.to_string())
}
