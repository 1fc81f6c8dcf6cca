//! Format auto-detection from the first non-blank line of a file.

use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use log::info;
use regex::Regex;

use crate::Format;
use crate::error::Result;
use crate::reader::open_reader;

/// A headerless interval-list row: name, two positions, a strand, a name.
static INTERVAL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\t\d+\t\d+\t(\+|-|\.)\t\S+").unwrap());

/// Guess the format of a region file by inspecting its first non-blank
/// line. Undetermined content falls back to [`Format::Tab`], as does an
/// entirely blank file.
pub(crate) fn sniff_format(path: &Path) -> Result<Format> {
    let reader = open_reader(path)?;
    let mut first = String::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            first = line;
            break;
        }
    }
    let format = detect(&first);
    match format {
        Format::Bed => info!("Detected file format: BED"),
        Format::Interval => info!("Detected file format: interval list"),
        _ => {}
    }
    Ok(format)
}

fn detect(line: &str) -> Format {
    if line.starts_with('@') || INTERVAL_LINE.is_match(line) {
        return Format::Interval;
    }
    if line.starts_with("track")
        || line.starts_with("browser")
        || line.split('\t').count() >= 3
    {
        return Format::Bed;
    }
    Format::Tab
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("@SQ\tSN:chr1\tLN:100", Format::Interval)]
    #[case("chr1\t101\t200\t+\texon1", Format::Interval)]
    #[case("chr1\t101\t200\t-\texon1", Format::Interval)]
    #[case("chr1\t100\t200", Format::Bed)]
    #[case("chr1\t100\t200\texon1", Format::Bed)]
    #[case("track name=\"t\"", Format::Bed)]
    #[case("browser position chr1", Format::Bed)]
    #[case("chr1:100-200", Format::Tab)]
    #[case("", Format::Tab)]
    fn first_lines_classify(#[case] line: &str, #[case] expected: Format) {
        assert_eq!(detect(line), expected);
    }
}
