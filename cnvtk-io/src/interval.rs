//! GATK/Picard-style interval lists: `@`-prefixed SAM header lines, then
//! `chrom  start  end  strand  name` rows, 1-based inclusive at both ends.

use std::io::{BufRead, Write};
use std::path::Path;

use log::info;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

use crate::error::{Result, bad_line, parse_coord};
use crate::attr_or;

pub(crate) fn read_interval(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    let mut bins = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('@') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(bad_line(
                path,
                idx + 1,
                format!("expected at least 3 fields, got {}", fields.len()),
            ));
        }
        let start = parse_coord(fields[1], "start", path, idx + 1)? - 1;
        let end = parse_coord(fields[2], "end", path, idx + 1)?;
        let strand = fields
            .get(3)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .unwrap_or("+");
        let gene = fields
            .get(4)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .unwrap_or("-");
        bins.push(
            Bin::new(fields[0], start, end)
                .with_attr("gene", gene)
                .with_attr("strand", strand),
        );
    }
    if bins.is_empty() {
        info!("Blank file?: {}", path.display());
        return Ok(GenomicTable::empty(Vec::new()));
    }
    let table = GenomicTable::new(vec!["gene".to_string(), "strand".to_string()], bins)?;
    Ok(table)
}

pub(crate) fn write_interval(table: &GenomicTable, writer: &mut dyn Write) -> Result<()> {
    for bin in table {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            bin.chromosome,
            bin.start + 1,
            bin.end,
            attr_or(bin, "strand", "+"),
            attr_or(bin, "gene", "-"),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use cnvtk_core::Value;

    const INTERVALS: &str = "@HD\tVN:1.5\n\
        @SQ\tSN:chr1\tLN:248956422\n\
        chr1\t101\t200\t+\texon1\n\
        chr1\t301\t400\n";

    #[rstest]
    fn skips_headers_and_converts_coordinates() {
        let table = read_interval(INTERVALS.as_bytes(), Path::new("t.interval_list")).unwrap();
        assert_eq!(table.labels(), vec!["chr1:100-200", "chr1:300-400"]);
        assert_eq!(
            table.cell_at(0, "gene").unwrap(),
            Value::Str("exon1".to_string())
        );
        assert_eq!(
            table.cell_at(1, "strand").unwrap(),
            Value::Str("+".to_string())
        );
    }

    #[rstest]
    fn header_only_input_is_blank() {
        let table =
            read_interval("@HD\tVN:1.5\n".as_bytes(), Path::new("t.interval_list")).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[rstest]
    fn round_trips_one_based_rows() {
        let table = read_interval(INTERVALS.as_bytes(), Path::new("t.interval_list")).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_interval(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t101\t200\t+\texon1\nchr1\t301\t400\t+\t-\n"
        );
    }
}
