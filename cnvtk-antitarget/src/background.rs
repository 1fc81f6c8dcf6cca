//! Deriving off-target background regions from a capture panel.
//!
//! The accessible sequence of each chromosome is swept once against the
//! sorted target regions; whatever is left between padded targets becomes
//! a background region. Callers then subdivide those regions into bins of
//! a workable size and tag them for downstream bookkeeping.

use std::path::Path;

use cnvtk_core::models::Bin;
use cnvtk_core::{GenomicTable, Value};

use crate::consts::{INSERT_SIZE, TELOMERE_SIZE};
use crate::errors::Result;
use crate::reconcile::{guess_chromosome_regions, reconcile_access_chromosomes};

/// Splits oversized regions into consecutive bins of roughly
/// `avg_bin_size`, dropping any leftover shorter than `min_bin_size`.
pub trait BinSubdivider {
    fn subdivide(
        &self,
        regions: GenomicTable,
        avg_bin_size: i64,
        min_bin_size: i64,
    ) -> cnvtk_core::Result<GenomicTable>;
}

/// Sweep each chromosome's accessible regions against its targets,
/// collecting the stretches that stay clear of every target by `pad_size`.
///
/// Both group lists must be sorted by position within each chromosome.
/// The target cursor persists across accessible regions of the same
/// chromosome, so a target is only ever visited once. Accessible regions
/// too small to hold anything once padded are skipped, except on
/// chromosomes with no targets at all, where every accessible region is
/// kept and shrunk by the pad on both sides.
pub fn find_background_regions(
    access_groups: &[(String, GenomicTable)],
    target_groups: &[(String, GenomicTable)],
    pad_size: i64,
) -> Vec<Bin> {
    let mut backgrounds = Vec::new();
    for (chromosome, accessible) in access_groups {
        let spans: Vec<(i64, i64)> = target_groups
            .iter()
            .find(|(name, _)| name == chromosome)
            .map(|(_, targets)| targets.iter().map(|b| (b.start, b.end)).collect())
            .unwrap_or_default();
        if spans.is_empty() {
            for region in accessible.iter() {
                backgrounds.push(Bin::new(
                    chromosome.clone(),
                    region.start + pad_size,
                    region.end - pad_size,
                ));
            }
            continue;
        }
        debug_assert!(spans[0].0 < spans[0].1);
        let mut cursor = 0;
        let mut exhausted = false;
        for region in accessible.iter() {
            if region.end - region.start <= 2 * pad_size {
                // Too small to hold anything once padded.
                continue;
            }
            let mut bg_start = region.start + pad_size;
            while !exhausted && spans[cursor].0 < region.end {
                let (target_start, target_end) = spans[cursor];
                if target_end + pad_size > bg_start {
                    if target_start - pad_size > bg_start {
                        backgrounds.push(Bin::new(
                            chromosome.clone(),
                            bg_start,
                            target_start - pad_size,
                        ));
                    }
                    bg_start = target_end + pad_size;
                }
                cursor += 1;
                if cursor == spans.len() {
                    exhausted = true;
                }
            }
            let bg_end = region.end - pad_size;
            if bg_end - bg_start > 0 {
                backgrounds.push(Bin::new(chromosome.clone(), bg_start, bg_end));
            }
        }
    }
    backgrounds
}

/// Derive background bins for a capture panel.
///
/// Targets are read from `target_path` in any supported format. With an
/// accessible-regions file, its chromosomes are reconciled against the
/// targets first; without one, each target chromosome is assumed
/// accessible from just past the telomere to its furthest target end.
/// The swept regions are labeled `Background` in the gene column and
/// handed to the subdivider, which splits them into bins between
/// `min_bin_size` and roughly `avg_bin_size`.
pub fn get_background(
    target_path: &Path,
    access_path: Option<&Path>,
    avg_bin_size: i64,
    min_bin_size: i64,
    subdivider: &dyn BinSubdivider,
) -> Result<GenomicTable> {
    let targets = cnvtk_io::read_auto(target_path)?;
    let target_groups: Vec<(String, GenomicTable)> = targets.by_chromosome().collect();
    let target_names: Vec<String> =
        target_groups.iter().map(|(name, _)| name.clone()).collect();
    let access_groups = match access_path {
        Some(path) => {
            let access = cnvtk_io::read_auto(path)?;
            reconcile_access_chromosomes(
                access.by_chromosome().collect(),
                &target_names,
                &path.display().to_string(),
                &target_path.display().to_string(),
            )?
        }
        None => guess_chromosome_regions(&target_groups, TELOMERE_SIZE)?,
    };
    let pad_size = 2 * INSERT_SIZE;
    let regions = find_background_regions(&access_groups, &target_groups, pad_size);
    let mut background = GenomicTable::from_bins(regions)?;
    let labels = vec![Value::from("Background"); background.len()];
    background.set_column("gene", labels)?;
    Ok(subdivider.subdivide(background, avg_bin_size, min_bin_size)?)
}
