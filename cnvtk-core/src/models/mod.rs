pub mod bin;
pub mod table;
pub mod value;

// Re-export the core model types for cleaner imports downstream.
pub use self::bin::Bin;
pub use self::table::{ByBin, ByChromosome, GenomicTable, TrimMode, REQUIRED_COLUMNS};
pub use self::value::Value;
