use crate::models::{Order, Side};
use crate::store::OrderStore;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

/// One price level: every order sharing a numeric price, collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    /// Price as written on the first order that opened the level.
    pub price: Decimal,
    /// Wider than a single quantity, so a level never overflows.
    pub total_quantity: u128,
    /// Contributing orders, in the order they were encountered.
    pub components: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiveSummary {
    /// Highest bid first.
    pub buy_levels: Vec<SummaryRecord>,
    /// Lowest ask first.
    pub sell_levels: Vec<SummaryRecord>,
}

/// Recomputes the live summary from the store on every call.
pub struct SummaryAggregator {
    store: Arc<dyn OrderStore>,
}

impl SummaryAggregator {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub fn live_summary(&self) -> LiveSummary {
        let orders = self.store.list_all();
        let summary = aggregate(orders);

        tracing::debug!(
            buy_levels = summary.buy_levels.len(),
            sell_levels = summary.sell_levels.len(),
            "Computed live summary"
        );
        summary
    }
}

/// Groups orders by side, collapses equal prices and sorts each side.
pub fn aggregate(orders: impl IntoIterator<Item = Order>) -> LiveSummary {
    let (buys, sells): (Vec<Order>, Vec<Order>) =
        orders.into_iter().partition(|o| o.side() == Side::Buy);

    let mut buy_levels = collapse_levels(buys);
    let mut sell_levels = collapse_levels(sells);

    // bids descending, asks ascending
    buy_levels.sort_by(|a, b| b.price.cmp(&a.price));
    sell_levels.sort_by(|a, b| a.price.cmp(&b.price));

    LiveSummary {
        buy_levels,
        sell_levels,
    }
}

/// Buckets orders by numeric price. `2.5` and `2.50` land in the same
/// bucket, keyed by whichever was seen first.
fn collapse_levels(orders: Vec<Order>) -> Vec<SummaryRecord> {
    let mut buckets: Vec<(Decimal, Vec<Order>)> = Vec::new();

    for order in orders {
        let price = order.unit_price();
        match buckets.iter_mut().find(|(p, _)| same_price(*p, price)) {
            Some((_, members)) => members.push(order),
            None => buckets.push((price, vec![order])),
        }
    }

    buckets
        .into_iter()
        .map(|(price, components)| SummaryRecord {
            price,
            total_quantity: components.iter().map(|o| u128::from(o.quantity())).sum(),
            components,
        })
        .collect()
}

/// Value comparison; scale is ignored.
fn same_price(a: Decimal, b: Decimal) -> bool {
    a.cmp(&b) == Ordering::Equal
}
