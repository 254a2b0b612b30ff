// Result consumption module entrypoint
pub mod order_list; // per-order rows for the scrollable list
pub mod summary;    // totals, gap, guarded ratios for the summary panel

pub use order_list::{annotate_orders, render_rows, OrderRow};
pub use summary::Summary;

/// Free-text amount field semantics: anything that does not parse to a
/// finite positive number is zero, never an error.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
