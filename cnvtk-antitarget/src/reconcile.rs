//! Reconciling accessible-region chromosomes against the targets.
//!
//! Accessible-region files cover whole reference assemblies, so they name
//! mitochondria and alternative contigs that capture panels never target.
//! Those are excluded up front; a complete mismatch between the two name
//! sets means the files come from different references and is an error.

use std::sync::LazyLock;

use log::info;
use regex::Regex;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

use crate::errors::{AntitargetError, Result};

/// Autosomes typically have numeric names; allosomes are X and Y.
static CANONICAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(chr)?(\d+|[XYxy])$").unwrap());

/// Drop accessible chromosomes that the targets do not cover and that look
/// like alternative contigs or mitochondria.
///
/// When any target chromosome has a canonical name, untargeted chromosomes
/// with non-canonical names are dropped; otherwise the targets are assumed
/// to use assembly-specific naming, and untargeted names longer than the
/// longest target name are dropped instead. Each drop is reported at info
/// level. Non-empty but fully disjoint name sets are an input mismatch and
/// an error; with no targets at all, nothing is dropped.
pub fn reconcile_access_chromosomes(
    access_groups: Vec<(String, GenomicTable)>,
    target_names: &[String],
    access_label: &str,
    target_label: &str,
) -> Result<Vec<(String, GenomicTable)>> {
    let disjoint = !access_groups.is_empty()
        && !target_names.is_empty()
        && access_groups
            .iter()
            .all(|(name, _)| !target_names.contains(name));
    if disjoint {
        return Err(AntitargetError::ChromosomeMismatch {
            access_file: access_label.to_string(),
            target_file: target_label.to_string(),
            access_names: first_names(access_groups.iter().map(|(n, _)| n.as_str())),
            target_names: first_names(target_names.iter().map(String::as_str)),
        });
    }
    if target_names.is_empty() {
        // Nothing to compare untargeted contigs against.
        return Ok(access_groups);
    }
    let any_canonical = target_names.iter().any(|n| CANONICAL_NAME.is_match(n));
    // Alternative contigs have long names.
    let max_name_len = target_names.iter().map(String::len).max().unwrap_or(0);
    Ok(access_groups
        .into_iter()
        .filter(|(name, _)| {
            if target_names.contains(name) {
                return true;
            }
            let skip = if any_canonical {
                !CANONICAL_NAME.is_match(name)
            } else {
                name.len() > max_name_len
            };
            if skip {
                info!("Skipping untargeted chromosome {name}");
            }
            !skip
        })
        .collect())
}

/// Synthesize one accessible region per target chromosome when no
/// accessible-region file is given: from the presumed-telomeric prefix to
/// the furthest target end seen on that chromosome.
pub fn guess_chromosome_regions(
    target_groups: &[(String, GenomicTable)],
    telomere_size: i64,
) -> Result<Vec<(String, GenomicTable)>> {
    let mut regions = Vec::with_capacity(target_groups.len());
    for (chromosome, targets) in target_groups {
        let end = targets.iter().map(|b| b.end).max().unwrap_or(telomere_size);
        let whole =
            GenomicTable::from_bins(vec![Bin::new(chromosome.clone(), telomere_size, end)])?;
        regions.push((chromosome.clone(), whole));
    }
    Ok(regions)
}

fn first_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(str::to_string).collect();
    names.sort();
    names.truncate(3);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn groups(names: &[&str]) -> Vec<(String, GenomicTable)> {
        names
            .iter()
            .map(|name| {
                let table =
                    GenomicTable::from_bins(vec![Bin::new(*name, 0, 1000)]).unwrap();
                (name.to_string(), table)
            })
            .collect()
    }

    fn names(groups: &[(String, GenomicTable)]) -> Vec<&str> {
        groups.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[rstest]
    fn untargeted_noncanonical_contigs_are_dropped() {
        let access = groups(&["chr1", "chr2", "chr3", "chrM", "chrUn_gl000220"]);
        let targets = vec!["chr1".to_string(), "chr2".to_string()];
        let kept =
            reconcile_access_chromosomes(access, &targets, "access.bed", "targets.bed")
                .unwrap();
        // chr3 is untargeted but canonical, so it stays.
        assert_eq!(names(&kept), vec!["chr1", "chr2", "chr3"]);
    }

    #[rstest]
    fn allosomes_count_as_canonical() {
        let access = groups(&["chrX", "chrY", "chrM"]);
        let targets = vec!["chrX".to_string()];
        let kept =
            reconcile_access_chromosomes(access, &targets, "access.bed", "targets.bed")
                .unwrap();
        assert_eq!(names(&kept), vec!["chrX", "chrY"]);
    }

    #[rstest]
    fn length_heuristic_applies_without_canonical_targets() {
        let access = groups(&["scaffold_12", "scaffold_7", "superscaffold_900"]);
        let targets = vec!["scaffold_12".to_string()];
        let kept =
            reconcile_access_chromosomes(access, &targets, "access.bed", "targets.bed")
                .unwrap();
        // "scaffold_7" is no longer than the longest target name; it stays.
        assert_eq!(names(&kept), vec!["scaffold_12", "scaffold_7"]);
    }

    #[rstest]
    fn disjoint_sets_are_an_input_mismatch() {
        let access = groups(&["alt4", "alt2", "alt3", "alt1"]);
        let targets = vec!["chr1".to_string()];
        let err =
            reconcile_access_chromosomes(access, &targets, "access.bed", "targets.bed")
                .unwrap_err();
        match err {
            AntitargetError::ChromosomeMismatch {
                access_file,
                target_file,
                access_names,
                target_names,
            } => {
                assert_eq!(access_file, "access.bed");
                assert_eq!(target_file, "targets.bed");
                // First three, sorted.
                assert_eq!(access_names, vec!["alt1", "alt2", "alt3"]);
                assert_eq!(target_names, vec!["chr1"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn empty_sides_are_not_a_mismatch() {
        let kept = reconcile_access_chromosomes(vec![], &["chr1".to_string()], "a", "t")
            .unwrap();
        assert!(kept.is_empty());

        // With no targets there is no reference set; keep everything.
        let access = groups(&["chrM", "chrUn_gl000220"]);
        let kept = reconcile_access_chromosomes(access, &[], "a", "t").unwrap();
        assert_eq!(names(&kept), vec!["chrM", "chrUn_gl000220"]);
    }

    #[rstest]
    fn guessed_regions_span_telomere_to_furthest_end() {
        let table = GenomicTable::from_bins(vec![
            Bin::new("chr1", 2000, 9000),
            Bin::new("chr1", 4000, 20000),
            Bin::new("chr1", 15000, 16000),
            Bin::new("chr2", 3000, 7000),
        ])
        .unwrap();
        let target_groups: Vec<(String, GenomicTable)> = table.by_chromosome().collect();
        let guessed = guess_chromosome_regions(&target_groups, 1000).unwrap();
        let spans: Vec<(String, Vec<String>)> = guessed
            .into_iter()
            .map(|(c, t)| (c, t.labels()))
            .collect();
        assert_eq!(
            spans,
            vec![
                ("chr1".to_string(), vec!["chr1:1000-20000".to_string()]),
                ("chr2".to_string(), vec!["chr2:1000-7000".to_string()]),
            ]
        );
    }
}
