//! Live order board: a registry of buy/sell orders and a price-ranked
//! summary of open interest, recomputed on every query.

pub mod api;
pub mod board;
pub mod config;
pub mod errors;
pub mod models;
pub mod registrar;
pub mod store;
pub mod summary;

pub use board::LiveOrderBoard;
pub use errors::OrderError;
pub use models::{Order, OrderId, OrderInput, Side};
pub use summary::{LiveSummary, SummaryRecord};
