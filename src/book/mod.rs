// Order book provider module entrypoint
pub mod mock;     // seeded mock book standing in for the product's static data
pub mod snapshot; // the two disjoint pools handed to the engine

pub use mock::MockBookProvider;
pub use snapshot::{BookProvider, BookSnapshot};
