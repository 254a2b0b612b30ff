use tracing::{info, instrument, warn};

use crate::book::BookSnapshot;
use crate::engine::types::{
    AllocationRequest, AllocationResult, Destination, Direction, Order, SortMode,
};
use crate::engine::allocate;
use crate::persist::{PersistResult, Profile, ProfileStore};
use crate::view::parse_amount;

/// Current convert-form state plus the data it operates on.
///
/// The engine itself never sees any of this: every input change rebuilds
/// a plain [`AllocationRequest`] and re-runs [`allocate`] against the
/// snapshot. `result` is always the output for the current inputs.
pub struct ConvertSession {
    pub book: BookSnapshot,
    pub profile: Profile,

    // Form state, as the UI would hold it
    pub amount_text: String,
    pub direction: Direction,
    pub sort_mode: SortMode,
    pub source_token: Option<String>,
    pub destination: Option<Destination>,

    pub result: AllocationResult,
}

impl ConvertSession {
    pub fn new(book: BookSnapshot, profile: Profile) -> Self {
        let mut session = Self {
            book,
            profile,
            amount_text: String::new(),
            direction: Direction::Acquire,
            sort_mode: SortMode::BestPrice,
            source_token: None,
            destination: None,
            result: AllocationResult::empty(Direction::Acquire),
        };
        session.recompute();
        session
    }

    // ---- input changes, each followed by a recompute ----

    pub fn set_amount(&mut self, text: &str) {
        self.amount_text = text.to_string();
        self.recompute();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.recompute();
    }

    pub fn toggle_sort_mode(&mut self) {
        self.sort_mode = match self.sort_mode {
            SortMode::BestPrice => SortMode::BestFill,
            SortMode::BestFill => SortMode::BestPrice,
        };
        self.recompute();
    }

    pub fn set_source_token(&mut self, token: Option<String>) {
        self.source_token = token;
        self.recompute();
    }

    pub fn set_destination(&mut self, destination: Option<Destination>) {
        self.destination = destination;
        self.recompute();
    }

    /// Build the request for the current form state.
    pub fn request(&self) -> AllocationRequest {
        AllocationRequest {
            direction: self.direction,
            quantity: parse_amount(&self.amount_text),
            sort_mode: self.sort_mode,
            source_token: self.source_token.clone(),
            destination: self.destination.clone(),
        }
    }

    fn recompute(&mut self) {
        let req = self.request();
        self.result = allocate(self.book.pool_for(self.direction), &req);
    }

    /// Candidate pool for the current direction, for the order list view.
    pub fn current_pool(&self) -> &[Order] {
        self.book.pool_for(self.direction)
    }

    // ---- confirm flow ----

    /// Apply the current selection: move balances, consume the filled
    /// orders out of the book copy, persist, and recompute against the
    /// shrunken pool.
    #[instrument(skip(self, store))]
    pub async fn confirm(&mut self, store: &mut dyn ProfileStore) -> PersistResult<bool> {
        if self.result.is_empty() {
            warn!("Nothing selected, confirm is a no-op");
            return Ok(false);
        }
        match self.direction {
            Direction::Acquire => {
                if self.result.total_value > self.profile.reference_balance {
                    warn!(
                        cost = self.result.total_value,
                        balance = self.profile.reference_balance,
                        "Insufficient reference balance"
                    );
                    return Ok(false);
                }
                self.profile.reference_balance -= self.result.total_value;
                self.profile.token_balance += self.result.total_moved;
            }
            Direction::Dispose => {
                if self.result.total_moved > self.profile.token_balance {
                    warn!(
                        sold = self.result.total_moved,
                        balance = self.profile.token_balance,
                        "Insufficient token balance"
                    );
                    return Ok(false);
                }
                self.profile.token_balance -= self.result.total_moved;
                self.profile.reference_balance += self.result.total_value;
            }
        }

        self.consume_filled_orders();
        info!(
            orders = self.result.selected.len(),
            value = self.result.total_value,
            moved = self.result.total_moved,
            "Conversion confirmed"
        );
        store.save(&self.profile).await?;
        self.recompute();
        Ok(true)
    }

    // Fully filled orders leave the pool; a trailing partial fill only
    // shrinks its order.
    fn consume_filled_orders(&mut self) {
        let fills: Vec<(u64, f64)> = self
            .result
            .selected
            .iter()
            .map(|s| (s.order.id, s.filled_amount))
            .collect();
        let pool = self.book.pool_for_mut(self.direction);
        for (id, filled) in fills {
            if let Some(pos) = pool.iter().position(|o| o.id == id) {
                if filled >= pool[pos].amount {
                    pool.remove(pos);
                } else {
                    pool[pos].amount -= filled;
                }
            }
        }
    }

    /// The "create standing order" sub-flow: the user posts their own
    /// offer into the book and it is remembered in the profile.
    #[instrument(skip(self, store))]
    pub async fn place_standing_order(
        &mut self,
        store: &mut dyn ProfileStore,
        amount: f64,
        price: f64,
        token: String,
        chain: String,
    ) -> PersistResult<Option<u64>> {
        if !(amount > 0.0) || !(price > 0.0) {
            warn!(amount, price, "Rejecting standing order with non-positive terms");
            return Ok(None);
        }
        let id = self
            .book
            .max_order_id()
            .max(self.profile.next_order_id)
            + 1;
        self.profile.next_order_id = id;
        let order = Order { id, amount, price, token, chain };

        // The user's own offer lands on the opposite side of the flow
        // they are in: an acquirer posts a buy offer, a disposer a sell.
        match self.direction {
            Direction::Acquire => self.book.buy_offers.push(order.clone()),
            Direction::Dispose => self.book.sell_offers.push(order.clone()),
        }
        self.profile.standing_orders.push(order);
        store.save(&self.profile).await?;
        info!(id, "Standing order placed");
        Ok(Some(id))
    }
}
