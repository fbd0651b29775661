use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// Opaque order identifier, assigned once at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
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

/// A registered order. Immutable once built; only its presence in the
/// store changes over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: OrderId,
    user_id: String,
    side: Side,
    // price per 1000 grams
    unit_price: Decimal,
    quantity: u64,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        user_id: impl Into<String>,
        side: Side,
        unit_price: Decimal,
        quantity: u64,
    ) -> Self {
        Self {
            order_id,
            user_id: user_id.into(),
            side,
            unit_price,
            quantity,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// A registration request as it arrives from the calling layer.
/// Everything but `quantity` may be missing; the registrar decides what
/// is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderInput {
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default, deserialize_with = "exact_price")]
    pub unit_price: Option<Decimal>,
    pub quantity: u64,
}

impl OrderInput {
    pub fn new(user_id: impl Into<String>, side: Side, unit_price: Decimal, quantity: u64) -> Self {
        Self {
            order_id: None,
            user_id: Some(user_id.into()),
            side: Some(side),
            unit_price: Some(unit_price),
            quantity,
        }
    }
}

/// Prices arrive as strings only, so they never pass through f64.
fn exact_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| Decimal::from_str_exact(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}
