//! Genome-aware ordering of chromosome names.
//!
//! Plain lexicographic order puts "chr10" before "chr2"; sorting by
//! [`chrom_sort_key`] instead yields the order a biologist expects:
//! numbered chromosomes in numeric order, then X, then Y, then everything
//! else (alternate contigs, unplaced scaffolds) alphabetically.

/// Sort key for a chromosome name. Keys compare by tier first, then within
/// the tier, so `Ord` on the enum gives the full genome ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChromKey {
    /// A numbered chromosome, with or without a "chr" prefix.
    Numbered(u64),
    /// A sex chromosome: X orders before Y.
    Allosome(u8),
    /// Anything else, compared as the full original name.
    Other(String),
}

/// Compute the sort key for a chromosome name.
///
/// The "chr" prefix (any case) is ignored for classification but does not
/// otherwise change the key, so "chr1" and "1" sort identically.
pub fn chrom_sort_key(name: &str) -> ChromKey {
    let body = strip_chr_prefix(name);
    if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(num) = body.parse::<u64>() {
            return ChromKey::Numbered(num);
        }
    }
    match body {
        "X" | "x" => ChromKey::Allosome(0),
        "Y" | "y" => ChromKey::Allosome(1),
        _ => ChromKey::Other(name.to_string()),
    }
}

fn strip_chr_prefix(name: &str) -> &str {
    if name.len() >= 3 && name[..3].eq_ignore_ascii_case("chr") {
        &name[3..]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn numbered_chromosomes_sort_numerically() {
        let mut names = vec!["chr10", "chr2", "chr1", "chr22", "chr11"];
        names.sort_by_key(|n| chrom_sort_key(n));
        assert_eq!(names, vec!["chr1", "chr2", "chr10", "chr11", "chr22"]);
    }

    #[rstest]
    fn allosomes_sort_after_autosomes() {
        let mut names = vec!["chrY", "chrX", "chr22", "chr1"];
        names.sort_by_key(|n| chrom_sort_key(n));
        assert_eq!(names, vec!["chr1", "chr22", "chrX", "chrY"]);
    }

    #[rstest]
    fn other_contigs_sort_last() {
        let mut names = vec!["chrUn_gl000220", "chrM", "chrY", "chr3"];
        names.sort_by_key(|n| chrom_sort_key(n));
        assert_eq!(names, vec!["chr3", "chrY", "chrM", "chrUn_gl000220"]);
    }

    #[rstest]
    #[case("chr7", "7")]
    #[case("chrX", "x")]
    #[case("CHR9", "9")]
    fn prefix_and_case_do_not_change_the_key(#[case] a: &str, #[case] b: &str) {
        assert_eq!(chrom_sort_key(a), chrom_sort_key(b));
    }

    #[rstest]
    fn numeric_overflow_falls_back_to_name_order() {
        // A digit string too long for u64 still gets a stable key.
        let key = chrom_sort_key("chr99999999999999999999999");
        assert_eq!(
            key,
            ChromKey::Other("chr99999999999999999999999".to_string())
        );
    }
}
