// Allocation engine entrypoint
pub mod allocator; // greedy fill selection over a sorted candidate list
pub mod types;     // orders, requests, results

pub use allocator::allocate;
pub use types::*;
