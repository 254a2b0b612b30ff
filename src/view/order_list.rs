use std::collections::HashMap;

use crate::engine::types::{AllocationResult, Order};

// One row of the scrollable order list: the standing order plus what
// the current allocation would take from it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order: Order,
    pub selected: bool,
    pub filled_amount: f64,
    pub reference_value: f64,
}

/// Annotate the full candidate pool with the current selection.
/// Rows come back in pool order, selected or not, so the list view can
/// highlight without reordering under the user's cursor.
pub fn annotate_orders(pool: &[Order], result: &AllocationResult) -> Vec<OrderRow> {
    let by_id: HashMap<u64, (f64, f64)> = result
        .selected
        .iter()
        .map(|s| (s.order.id, (s.filled_amount, s.reference_value)))
        .collect();

    pool.iter()
        .map(|order| match by_id.get(&order.id) {
            Some(&(filled_amount, reference_value)) => OrderRow {
                order: order.clone(),
                selected: true,
                filled_amount,
                reference_value,
            },
            None => OrderRow {
                order: order.clone(),
                selected: false,
                filled_amount: 0.0,
                reference_value: 0.0,
            },
        })
        .collect()
}

pub fn render_rows(rows: &[OrderRow]) -> String {
    let mut out = String::new();
    out.push_str("    id |    amount |  price | token/chain        | fill\n");
    for row in rows {
        let mark = if row.selected { "*" } else { " " };
        out.push_str(&format!(
            "{} {:4} | {:9.2} | {:6.4} | {:.<18} | {}\n",
            mark,
            row.order.id,
            row.order.amount,
            row.order.price,
            format!("{}/{}", row.order.token, row.order.chain),
            if row.selected {
                format!("{:.2} ({:.2})", row.filled_amount, row.reference_value)
            } else {
                "-".to_string()
            }
        ));
    }
    out
}
