/// Per-hour control policies.
pub mod controller;
pub mod pipeline;
/// Peak summary over the processed table.
pub mod summary;
pub mod types;
