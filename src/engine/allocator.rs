use ordered_float::OrderedFloat;
use tracing::{debug, instrument, trace};

use crate::engine::types::{
    AllocationRequest, AllocationResult, Direction, Order, SelectedOrder, SortMode,
};

/// Run one allocation pass over a snapshot of standing orders.
///
/// Pure and synchronous: same inputs, same output, nothing retained
/// between calls. The input pool is never modified, only copied into
/// fill annotations.
#[instrument(level = "debug", skip(orders), fields(pool = orders.len()))]
pub fn allocate(orders: &[Order], req: &AllocationRequest) -> AllocationResult {
    // Missing/zero/negative/garbage quantity short-circuits to the empty
    // result before any filtering or sorting happens.
    if !(req.quantity > 0.0) {
        trace!(quantity = req.quantity, "Non-positive quantity, returning empty result");
        return AllocationResult::empty(req.direction);
    }

    let mut candidates = filter_candidates(orders, req);
    sort_candidates(&mut candidates, req.direction, req.sort_mode);
    debug!(candidates = candidates.len(), ?req.direction, ?req.sort_mode, "Candidates prepared");

    let result = match req.direction {
        Direction::Acquire => allocate_acquire(&candidates, req.quantity),
        Direction::Dispose => allocate_dispose(&candidates, req.quantity),
    };

    debug!(
        selected = result.selected.len(),
        total_value = result.total_value,
        total_moved = result.total_moved,
        gap = result.gap,
        fully_filled = result.is_fully_filled,
        "Allocation completed"
    );
    metrics::counter!("convertx_allocations_total").increment(1);
    result
}

// Narrow the pool to orders the current currency selection can settle in.
// Produces a fresh list; the underlying pool is untouched.
fn filter_candidates<'a>(orders: &'a [Order], req: &AllocationRequest) -> Vec<&'a Order> {
    match req.direction {
        Direction::Acquire => match &req.source_token {
            Some(token) => orders.iter().filter(|o| &o.token == token).collect(),
            None => orders.iter().collect(),
        },
        Direction::Dispose => match &req.destination {
            Some(dest) => orders
                .iter()
                .filter(|o| o.token == dest.token && o.chain == dest.chain)
                .collect(),
            None => orders.iter().collect(),
        },
    }
}

// Sort order is the whole policy here, so the sort must be stable:
// equal keys keep their relative pool order. Vec::sort_by guarantees
// that; OrderedFloat gives f64 keys a total order.
fn sort_candidates(candidates: &mut [&Order], direction: Direction, sort_mode: SortMode) {
    match sort_mode {
        SortMode::BestPrice => match direction {
            // Cheapest network token first
            Direction::Acquire => {
                candidates.sort_by_key(|o| OrderedFloat(o.price));
            }
            // Highest proceeds first
            Direction::Dispose => {
                candidates.sort_by_key(|o| std::cmp::Reverse(OrderedFloat(o.price)));
            }
        },
        // Fewest counterparties: largest standing orders first, both directions
        SortMode::BestFill => {
            candidates.sort_by_key(|o| std::cmp::Reverse(OrderedFloat(o.amount)));
        }
    }
}

// Greedy budget spend. Whole orders only: an order whose full cost
// exceeds the remaining budget is skipped, never split, and the pass
// never backtracks to revisit it.
fn allocate_acquire(candidates: &[&Order], budget: f64) -> AllocationResult {
    let mut remaining_budget = budget;
    let mut selected = Vec::new();

    for order in candidates {
        let cost = order.reference_value();
        if cost > remaining_budget {
            trace!(id = order.id, cost, remaining_budget, "Order too large for remaining budget, skipping");
            continue;
        }
        remaining_budget -= cost;
        trace!(id = order.id, amount = order.amount, cost, "Order selected in full");
        selected.push(SelectedOrder {
            order: (*order).clone(),
            filled_amount: order.amount,
            reference_value: cost,
            delta: order.amount - cost,
        });
    }

    let total_value: f64 = selected.iter().map(|s| s.reference_value).sum();
    let total_moved: f64 = selected.iter().map(|s| s.filled_amount).sum();
    let gap = budget - total_value;
    AllocationResult {
        direction: Direction::Acquire,
        selected,
        total_value,
        total_moved,
        gap,
        is_fully_filled: gap < 1.0,
    }
}

// Greedy liquidation. Unlike the acquire pass, the final order may be
// filled partially; everything before it in sort order is taken whole.
fn allocate_dispose(candidates: &[&Order], quantity: f64) -> AllocationResult {
    let mut remaining = quantity;
    let mut selected = Vec::new();

    for order in candidates {
        if remaining <= 0.0 {
            break;
        }
        let to_sell = order.amount.min(remaining);
        let proceeds = to_sell * order.price;
        remaining -= to_sell;
        trace!(id = order.id, to_sell, proceeds, remaining, "Order filled");
        selected.push(SelectedOrder {
            order: (*order).clone(),
            filled_amount: to_sell,
            reference_value: proceeds,
            delta: proceeds - to_sell,
        });
    }

    let total_value: f64 = selected.iter().map(|s| s.reference_value).sum();
    let total_moved: f64 = selected.iter().map(|s| s.filled_amount).sum();
    AllocationResult {
        direction: Direction::Dispose,
        selected,
        total_value,
        total_moved,
        gap: quantity - total_moved,
        is_fully_filled: remaining < 1.0,
    }
}
