//! Heuristic defaults for background derivation. All of them are plain
//! parameters of the algorithms here, so callers can override them; these
//! values are tuned for human genome assemblies.

/// Typical sequencing insert size. Targets are padded by twice this much
/// before subtraction, to keep target-adjacent signal out of the
/// background bins.
pub const INSERT_SIZE: i64 = 250;

/// Bases to skip at the start of a chromosome when accessible regions must
/// be guessed from target coordinates alone; the region that far in is
/// probably telomeric.
pub const TELOMERE_SIZE: i64 = 150_000;
