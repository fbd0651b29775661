use crate::errors::OrderError;
use crate::models::{OrderId, OrderInput};
use crate::registrar::{IdGenerator, OrderRegistrar, UuidGenerator};
use crate::store::OrderStore;
use crate::summary::{LiveSummary, SummaryAggregator};
use std::sync::Arc;

/// The three operations offered to callers. Cheap to clone; every clone
/// works against the same store.
#[derive(Clone)]
pub struct LiveOrderBoard {
    registrar: Arc<OrderRegistrar>,
    aggregator: Arc<SummaryAggregator>,
}

impl LiveOrderBoard {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<dyn OrderStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            registrar: Arc::new(OrderRegistrar::new(Arc::clone(&store), ids)),
            aggregator: Arc::new(SummaryAggregator::new(store)),
        }
    }

    pub fn register_order(&self, input: OrderInput) -> Result<OrderId, OrderError> {
        self.registrar.register(input)
    }

    pub fn cancel_order(&self, order_id: &OrderId) {
        self.registrar.cancel(order_id);
    }

    /// Computed fresh from the store. Writes racing with this call may or
    /// may not be reflected.
    pub fn live_summary(&self) -> LiveSummary {
        metrics::counter!("live_summary_requests_total").increment(1);
        self.aggregator.live_summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use crate::store::InMemoryOrderStore;
    use rust_decimal::Decimal;
    use std::thread;

    fn board() -> (LiveOrderBoard, InMemoryOrderStore) {
        let store = InMemoryOrderStore::new();
        (LiveOrderBoard::new(Arc::new(store.clone())), store)
    }

    fn input(side: Side, price: &str, quantity: u64) -> OrderInput {
        OrderInput::new("user-1", side, price.parse::<Decimal>().unwrap(), quantity)
    }

    #[test]
    fn orders_with_equal_value_prices_merge_into_one_level() {
        let (board, _) = board();
        let first = board.register_order(input(Side::Buy, "2.50", 100)).unwrap();
        let second = board.register_order(input(Side::Buy, "2.5", 50)).unwrap();

        let summary = board.live_summary();

        assert!(summary.sell_levels.is_empty());
        assert_eq!(summary.buy_levels.len(), 1);
        let level = &summary.buy_levels[0];
        assert_eq!(level.price, "2.5".parse::<Decimal>().unwrap());
        assert_eq!(level.total_quantity, 150);
        let mut ids: Vec<_> = level.components.iter().map(|o| o.order_id().clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        let mut registered = vec![first, second];
        registered.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(ids, registered);
    }

    #[test]
    fn sides_are_sorted_in_opposite_directions() {
        let (board, _) = board();
        board.register_order(input(Side::Buy, "10", 5)).unwrap();
        board.register_order(input(Side::Sell, "8", 3)).unwrap();
        board.register_order(input(Side::Sell, "12", 7)).unwrap();

        let summary = board.live_summary();

        let sells: Vec<_> = summary
            .sell_levels
            .iter()
            .map(|l| (l.price.to_string(), l.total_quantity))
            .collect();
        assert_eq!(sells, vec![("8".to_string(), 3u128), ("12".to_string(), 7u128)]);
        assert_eq!(summary.buy_levels.len(), 1);
        assert_eq!(summary.buy_levels[0].total_quantity, 5);
    }

    #[test]
    fn cancelled_orders_leave_the_summary() {
        let (board, store) = board();
        let id = board.register_order(input(Side::Sell, "8", 3)).unwrap();
        board.register_order(input(Side::Sell, "9", 1)).unwrap();

        board.cancel_order(&id);
        board.cancel_order(&id);

        assert_eq!(store.len(), 1);
        let summary = board.live_summary();
        assert_eq!(summary.sell_levels.len(), 1);
        assert_eq!(summary.sell_levels[0].total_quantity, 1);
    }

    #[test]
    fn cancelling_an_unknown_id_changes_nothing() {
        let (board, store) = board();
        board.register_order(input(Side::Buy, "1", 1)).unwrap();
        let before = board.live_summary();

        board.cancel_order(&OrderId::new("never-registered"));

        assert_eq!(store.len(), 1);
        assert_eq!(board.live_summary(), before);
    }

    #[test]
    fn rejected_registration_leaves_store_untouched() {
        let (board, store) = board();
        let mut bad = input(Side::Buy, "1", 1);
        bad.order_id = Some(OrderId::new("preset"));

        assert!(matches!(
            board.register_order(bad),
            Err(OrderError::PreconditionViolation(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_registrations_are_all_summarised() {
        let (board, _) = board();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let board = board.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        board.register_order(input(Side::Buy, "3.00", 2)).unwrap();
                        board.register_order(input(Side::Sell, "3.0", 1)).unwrap();
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        let summary = board.live_summary();
        assert_eq!(summary.buy_levels.len(), 1);
        assert_eq!(summary.buy_levels[0].total_quantity, 400);
        assert_eq!(summary.sell_levels.len(), 1);
        assert_eq!(summary.sell_levels[0].total_quantity, 200);
    }
}
