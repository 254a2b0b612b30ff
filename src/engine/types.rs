use serde::{Deserialize, Serialize};

// Which way the convert flow is pointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    // Reference currency in, network token out (consumes sell offers)
    Acquire,
    // Network token in, reference currency out (consumes buy offers)
    Dispose,
}

// Tie-break strategy for picking which standing orders to fill first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    // Cheapest first when acquiring, highest proceeds first when disposing
    BestPrice,
    // Largest standing orders first, both directions
    BestFill,
}

// A standing offer in the book, as supplied by the provider.
// Immutable from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    // Quantity of network token the order covers
    pub amount: f64,
    // Reference-currency price per unit of network token
    pub price: f64,
    // Reference-currency denomination and its network
    pub token: String,
    pub chain: String,
}

impl Order {
    // Full cost/proceeds of the order in reference currency
    pub fn reference_value(&self) -> f64 {
        self.amount * self.price
    }
}

// Destination currency pick, used to narrow the dispose-side pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub token: String,
    pub chain: String,
}

// One engine invocation, built fresh from current inputs on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRequest {
    pub direction: Direction,
    // Budget in reference currency (Acquire) or network-token quantity (Dispose)
    pub quantity: f64,
    pub sort_mode: SortMode,
    // Acquire only: restrict candidates to this reference token
    pub source_token: Option<String>,
    // Dispose only: restrict candidates to this (token, chain) pair
    pub destination: Option<Destination>,
}

impl AllocationRequest {
    pub fn acquire(quantity: f64, sort_mode: SortMode) -> Self {
        Self {
            direction: Direction::Acquire,
            quantity,
            sort_mode,
            source_token: None,
            destination: None,
        }
    }

    pub fn dispose(quantity: f64, sort_mode: SortMode) -> Self {
        Self {
            direction: Direction::Dispose,
            quantity,
            sort_mode,
            source_token: None,
            destination: None,
        }
    }

    pub fn with_source_token(mut self, token: impl Into<String>) -> Self {
        self.source_token = Some(token.into());
        self
    }

    pub fn with_destination(mut self, token: impl Into<String>, chain: impl Into<String>) -> Self {
        self.destination = Some(Destination { token: token.into(), chain: chain.into() });
        self
    }
}

// An order the allocator picked, annotated with the portion actually filled.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedOrder {
    pub order: Order,
    // <= order.amount; equal to it everywhere except a trailing partial fill
    pub filled_amount: f64,
    // Cost (Acquire) or proceeds (Dispose) in reference currency
    pub reference_value: f64,
    // Signed deviation from the 1:1 reference peg, shown as "savings"
    pub delta: f64,
}

impl SelectedOrder {
    pub fn is_partial(&self) -> bool {
        self.filled_amount < self.order.amount
    }
}

// Everything the summary panel, order list and confirm dialog need.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    pub direction: Direction,
    pub selected: Vec<SelectedOrder>,
    // totalCost (Acquire) or totalProceeds (Dispose)
    pub total_value: f64,
    // Network token received (Acquire) or sold (Dispose)
    pub total_moved: f64,
    // Unconsumed budget / unsold quantity
    pub gap: f64,
    pub is_fully_filled: bool,
}

impl AllocationResult {
    // The degenerate result for missing/zero/negative quantity.
    // Deliberately not "fully filled": nothing was requested, nothing moved.
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            selected: Vec::new(),
            total_value: 0.0,
            total_moved: 0.0,
            gap: 0.0,
            is_fully_filled: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
