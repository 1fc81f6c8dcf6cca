//! Derivation of off-target "background" bins for targeted capture panels.
//!
//! Hybrid-capture sequencing yields usable read depth outside the baited
//! regions. This crate turns a panel's target list, optionally combined
//! with a sequencing-accessibility map of the reference genome, into a set
//! of background bins covering that off-target space:
//!
//! 1. Accessible chromosomes are reconciled against the targeted ones,
//!    dropping untargeted mitochondria and alternative contigs (or, with
//!    no accessibility map, whole-chromosome spans are guessed from the
//!    targets themselves).
//! 2. Each chromosome is swept once, collecting the accessible stretches
//!    that stay clear of every target by a pad proportional to the
//!    sequencing insert size.
//! 3. The resulting regions are subdivided into bins of a workable size
//!    and labeled `Background`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cnvtk_antitarget::{BinSubdivider, get_background};
//! use cnvtk_core::GenomicTable;
//!
//! struct Whole;
//!
//! impl BinSubdivider for Whole {
//!     fn subdivide(
//!         &self,
//!         regions: GenomicTable,
//!         _avg: i64,
//!         _min: i64,
//!     ) -> cnvtk_core::Result<GenomicTable> {
//!         Ok(regions)
//!     }
//! }
//!
//! let background = get_background(
//!     Path::new("panel.bed"),
//!     Some(Path::new("access.hg38.bed")),
//!     100_000,
//!     5_000,
//!     &Whole,
//! )?;
//! # Ok::<(), cnvtk_antitarget::AntitargetError>(())
//! ```

pub mod background;
pub mod consts;
pub mod errors;
pub mod reconcile;

pub use background::{BinSubdivider, find_background_regions, get_background};
pub use errors::{AntitargetError, Result};
pub use reconcile::{guess_chromosome_regions, reconcile_access_chromosomes};
