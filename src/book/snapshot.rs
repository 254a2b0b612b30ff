use serde::{Deserialize, Serialize};

use crate::engine::types::{Direction, Order};

// Point-in-time view of the two disjoint pools. The engine only ever
// sees one side of it, as a plain slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    // Offers to sell the network token (consumed when acquiring)
    pub sell_offers: Vec<Order>,
    // Offers to buy the network token (consumed when disposing)
    pub buy_offers: Vec<Order>,
}

impl BookSnapshot {
    pub fn pool_for(&self, direction: Direction) -> &[Order] {
        match direction {
            Direction::Acquire => &self.sell_offers,
            Direction::Dispose => &self.buy_offers,
        }
    }

    pub fn pool_for_mut(&mut self, direction: Direction) -> &mut Vec<Order> {
        match direction {
            Direction::Acquire => &mut self.sell_offers,
            Direction::Dispose => &mut self.buy_offers,
        }
    }

    // Highest order id across both pools; used to mint ids for
    // user-created standing orders without colliding.
    pub fn max_order_id(&self) -> u64 {
        self.sell_offers
            .iter()
            .chain(self.buy_offers.iter())
            .map(|o| o.id)
            .max()
            .unwrap_or(0)
    }

    // Reference tokens available on the sell side, deduped in pool order.
    pub fn source_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for o in &self.sell_offers {
            if !tokens.contains(&o.token) {
                tokens.push(o.token.clone());
            }
        }
        tokens
    }

    // (token, chain) destinations available on the buy side, deduped in pool order.
    pub fn destinations(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for o in &self.buy_offers {
            let pair = (o.token.clone(), o.chain.clone());
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
        pairs
    }
}

// Whoever owns the order pools. The session snapshots once per change
// and feeds the engine a read-only slice.
pub trait BookProvider {
    fn snapshot(&self) -> BookSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u64, token: &str, chain: &str) -> Order {
        Order { id, amount: 10.0, price: 1.0, token: token.into(), chain: chain.into() }
    }

    #[test]
    fn test_pool_for_picks_the_right_side() {
        let snap = BookSnapshot {
            sell_offers: vec![order(1, "USDC", "base")],
            buy_offers: vec![order(2, "USDT", "tron"), order(3, "USDT", "tron")],
        };
        assert_eq!(snap.pool_for(Direction::Acquire).len(), 1);
        assert_eq!(snap.pool_for(Direction::Dispose).len(), 2);
    }

    #[test]
    fn test_max_order_id_spans_both_pools() {
        let snap = BookSnapshot {
            sell_offers: vec![order(7, "USDC", "base")],
            buy_offers: vec![order(42, "USDT", "tron")],
        };
        assert_eq!(snap.max_order_id(), 42);
        assert_eq!(BookSnapshot::default().max_order_id(), 0);
    }

    #[test]
    fn test_destinations_dedupe_in_pool_order() {
        let snap = BookSnapshot {
            sell_offers: vec![],
            buy_offers: vec![
                order(1, "USDT", "tron"),
                order(2, "USDC", "base"),
                order(3, "USDT", "tron"),
            ],
        };
        assert_eq!(
            snap.destinations(),
            vec![("USDT".into(), "tron".into()), ("USDC".into(), "base".into())]
        );
    }
}
