use super::OrderStore;
use crate::models::{Order, OrderId};
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<DashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn save(&self, order: Order) {
        self.inner.insert(order.order_id().clone(), order);
    }

    fn cancel(&self, order_id: &OrderId) {
        self.inner.remove(order_id);
    }

    /// Entries are cloned under their shard lock, so a reader sees each
    /// order either whole or not at all.
    fn list_all(&self) -> Vec<Order> {
        self.inner.iter().map(|r| r.value().clone()).collect()
    }
}
