pub mod memory;

use crate::models::{Order, OrderId};
pub use memory::InMemoryOrderStore;

/// Holds the currently active orders. Each call is atomic on its own;
/// nothing is promised about a sequence of calls.
pub trait OrderStore: Send + Sync {
    /// Inserts an order. The order must carry a freshly generated id.
    fn save(&self, order: Order);

    /// Removes the order with this id. Unknown ids are a no-op.
    fn cancel(&self, order_id: &OrderId);

    /// Snapshot of all active orders, in no particular order.
    fn list_all(&self) -> Vec<Order>;
}
