use crate::engine::types::{AllocationRequest, AllocationResult, Direction};

// Figures for the summary panel. Ratios are None whenever their
// denominator is zero; NaN and infinity never reach the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub direction: Direction,
    pub requested: f64,
    pub total_value: f64,
    pub total_moved: f64,
    pub gap: f64,
    pub is_fully_filled: bool,
    pub orders_touched: usize,
    // How much of the request was consumed, 0..=100
    pub percent_filled: Option<f64>,
    // Average reference price per network token actually paid/received
    pub unit_price: Option<f64>,
    // Aggregate deviation from the 1:1 peg ("you save N")
    pub total_delta: f64,
}

impl Summary {
    pub fn new(req: &AllocationRequest, result: &AllocationResult) -> Self {
        let consumed = match result.direction {
            Direction::Acquire => result.total_value,
            Direction::Dispose => result.total_moved,
        };
        let percent_filled = if req.quantity > 0.0 {
            Some(consumed / req.quantity * 100.0)
        } else {
            None
        };
        let unit_price = if result.total_moved > 0.0 {
            Some(result.total_value / result.total_moved)
        } else {
            None
        };
        Summary {
            direction: result.direction,
            requested: req.quantity,
            total_value: result.total_value,
            total_moved: result.total_moved,
            gap: result.gap,
            is_fully_filled: result.is_fully_filled,
            orders_touched: result.selected.len(),
            percent_filled,
            unit_price,
            total_delta: result.selected.iter().map(|s| s.delta).sum(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\n=== Convert Summary ===\n");
        match self.direction {
            Direction::Acquire => {
                out.push_str(&format!("Budget:        {:.2}\n", self.requested));
                out.push_str(&format!("Total cost:    {:.2}\n", self.total_value));
                out.push_str(&format!("Tokens gained: {:.2}\n", self.total_moved));
            }
            Direction::Dispose => {
                out.push_str(&format!("To sell:        {:.2}\n", self.requested));
                out.push_str(&format!("Total proceeds: {:.2}\n", self.total_value));
                out.push_str(&format!("Tokens sold:    {:.2}\n", self.total_moved));
            }
        }
        out.push_str(&format!(
            "Gap:           {:.2} ({})\n",
            self.gap,
            if self.is_fully_filled { "fully filled" } else { "partially filled" }
        ));
        if let Some(pct) = self.percent_filled {
            out.push_str(&format!("Filled:        {:.1}%\n", pct));
        }
        if let Some(px) = self.unit_price {
            out.push_str(&format!("Avg unit px:   {:.4}\n", px));
        }
        out.push_str(&format!("Peg delta:     {:+.2}\n", self.total_delta));
        out.push_str(&format!("Orders:        {}\n", self.orders_touched));
        out.push_str("=======================\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Order, SortMode};
    use crate::engine::allocate;

    fn pool() -> Vec<Order> {
        vec![
            Order { id: 1, amount: 500.0, price: 0.90, token: "USDC".into(), chain: "base".into() },
            Order { id: 2, amount: 300.0, price: 0.95, token: "USDC".into(), chain: "base".into() },
            Order { id: 3, amount: 200.0, price: 0.85, token: "USDC".into(), chain: "base".into() },
        ]
    }

    #[test]
    fn test_summary_figures() {
        let req = AllocationRequest::acquire(700.0, SortMode::BestPrice);
        let result = allocate(&pool(), &req);
        let summary = Summary::new(&req, &result);
        assert_eq!(summary.total_value, 620.0);
        assert_eq!(summary.orders_touched, 2);
        // 620 of the 700 budget consumed
        assert!((summary.percent_filled.unwrap() - 88.57142857142857).abs() < 1e-9);
        assert!((summary.unit_price.unwrap() - 620.0 / 700.0).abs() < 1e-12);
        assert_eq!(summary.total_delta, 80.0);
    }

    #[test]
    fn test_zero_denominators_suppress_ratios() {
        let req = AllocationRequest::acquire(0.0, SortMode::BestPrice);
        let result = allocate(&pool(), &req);
        let summary = Summary::new(&req, &result);
        assert_eq!(summary.percent_filled, None);
        assert_eq!(summary.unit_price, None);
        assert_eq!(summary.total_delta, 0.0);
    }

    #[test]
    fn test_render_mentions_fill_state() {
        let req = AllocationRequest::dispose(120.0, SortMode::BestPrice);
        let result = allocate(
            &[Order { id: 9, amount: 400.0, price: 1.95, token: "USDT".into(), chain: "tron".into() }],
            &req,
        );
        let text = Summary::new(&req, &result).render();
        assert!(text.contains("fully filled"));
        assert!(text.contains("Total proceeds"));
    }
}
