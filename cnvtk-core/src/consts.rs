//! Constants shared across the cnvtk crates.

/// Default seed for [`shuffle`](crate::models::GenomicTable::shuffle), so
/// pipelines that randomize row order stay reproducible run to run.
pub const SHUFFLE_SEED: u64 = 0xA5EED;
