// convertx-rs: order-allocation engine for the launchpad convert flow,
// plus the collaborator surfaces around it.
pub mod book;      // order-book provider (mock snapshot source)
pub mod engine;    // pure allocation core
pub mod persist;   // wallet + standing-order profile storage
pub mod session;   // request construction + confirm flow
pub mod telemetry; // tracing / metrics init
pub mod view;      // summary figures and per-order annotation
