use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::types::Order;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Format mismatch: profile schema v{found}, expected v{expected}")]
    FormatMismatch { found: u32, expected: u32 },
}

pub type PersistResult<T> = Result<T, PersistError>;

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

// One user's persisted state: wallet balances and the standing orders
// they created through the convert flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub version: u32,
    // Reference currency on hand
    pub reference_balance: f64,
    // Network token on hand
    pub token_balance: f64,
    pub standing_orders: Vec<Order>,
    pub next_order_id: u64,
}

impl Profile {
    pub fn new(reference_balance: f64, token_balance: f64) -> Self {
        Self {
            version: PROFILE_SCHEMA_VERSION,
            reference_balance,
            token_balance,
            standing_orders: Vec::new(),
            next_order_id: 1,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::new(10_000.0, 5_000.0)
    }
}
