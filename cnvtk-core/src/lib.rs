//! Core data structures for copy-number interval work.
//!
//! The central type is [`models::GenomicTable`], an ordered collection of
//! genomic bins with a fixed set of extra attribute columns. Tables know how
//! to sort themselves into genome order, group their rows by chromosome or by
//! another table's bins, and answer range queries against sorted coordinates.
//!
//! Coordinates are 0-based, half-open `[start, end)` throughout.
pub mod chrom;
pub mod consts;
pub mod errors;
pub mod models;

pub use errors::{Result, TableError};
pub use models::{Bin, GenomicTable, TrimMode, Value};
