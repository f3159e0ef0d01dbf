/// CSV export of the processed table.
pub mod export;
