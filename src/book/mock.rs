use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::book::snapshot::{BookProvider, BookSnapshot};
use crate::engine::types::Order;

// Reference currencies the demo book quotes against, per network.
const SELL_SIDE_UNIVERSE: &[(&str, &str)] = &[
    ("USDC", "base"),
    ("USDC", "ethereum"),
    ("USDT", "tron"),
    ("DAI", "gnosis"),
];

const BUY_SIDE_UNIVERSE: &[(&str, &str)] = &[
    ("USDC", "base"),
    ("USDT", "tron"),
    ("USDT", "ethereum"),
];

/// Deterministic stand-in for the product's static book data.
/// Same seed, same book, so demo runs and tests are reproducible.
pub struct MockBookProvider {
    pub seed: u64,
    pub orders_per_side: usize,
}

impl MockBookProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed, orders_per_side: 12 }
    }

    fn generate(&self) -> BookSnapshot {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut next_id = 1u64;

        // Sellers ask a touch under the 1:1 peg, buyers bid a touch over;
        // that is what makes the convert flow look attractive in the UI.
        let mut sell_offers = Vec::with_capacity(self.orders_per_side);
        for _ in 0..self.orders_per_side {
            let (token, chain) = SELL_SIDE_UNIVERSE[rng.gen_range(0..SELL_SIDE_UNIVERSE.len())];
            sell_offers.push(Order {
                id: next_id,
                amount: (rng.gen_range(50.0..2_000.0f64)).round(),
                price: rng.gen_range(0.82..0.99f64),
                token: token.to_string(),
                chain: chain.to_string(),
            });
            next_id += 1;
        }

        let mut buy_offers = Vec::with_capacity(self.orders_per_side);
        for _ in 0..self.orders_per_side {
            let (token, chain) = BUY_SIDE_UNIVERSE[rng.gen_range(0..BUY_SIDE_UNIVERSE.len())];
            buy_offers.push(Order {
                id: next_id,
                amount: (rng.gen_range(50.0..2_000.0f64)).round(),
                price: rng.gen_range(1.01..1.20f64),
                token: token.to_string(),
                chain: chain.to_string(),
            });
            next_id += 1;
        }

        info!(
            seed = self.seed,
            sells = sell_offers.len(),
            buys = buy_offers.len(),
            "Generated mock order book"
        );
        BookSnapshot { sell_offers, buy_offers }
    }
}

impl BookProvider for MockBookProvider {
    fn snapshot(&self) -> BookSnapshot {
        self.generate()
    }
}
