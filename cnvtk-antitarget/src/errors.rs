use thiserror::Error;

use cnvtk_core::TableError;
use cnvtk_io::FormatError;

/// Error type for background derivation.
#[derive(Error, Debug)]
pub enum AntitargetError {
    /// Reading a region file failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Table construction or lookup failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The accessible-region and target files name disjoint chromosome
    /// sets, so they come from incompatible references. Carries the first
    /// few names from each side for the error message.
    #[error(
        "chromosome names in the accessible regions file {access_file} {access_names:?} \
         do not match those in targets {target_file} {target_names:?}"
    )]
    ChromosomeMismatch {
        access_file: String,
        target_file: String,
        access_names: Vec<String>,
        target_names: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, AntitargetError>;
