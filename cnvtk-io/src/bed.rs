//! UCSC Browser Extensible Data (BED) format, 0-based half-open.
//!
//! The plain `bed` reader keeps the name and strand fields alongside the
//! coordinates; `bed3`/`bed4`/`bed6` fix the column count instead of
//! adapting to it.

use std::io::{BufRead, Write};
use std::path::Path;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

use crate::error::{Result, bad_line, parse_coord};
use crate::{Format, attr_or};

pub(crate) fn read_bed(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    let mut bins = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("browser")
            || line.starts_with("track")
            || line.starts_with('#')
        {
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
        let start = parse_coord(fields[1], "start", path, idx + 1)?;
        let end = parse_coord(fields[2], "end", path, idx + 1)?;
        let gene = fields
            .get(3)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .unwrap_or("-");
        let strand = fields
            .get(5)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .unwrap_or(".");
        bins.push(
            Bin::new(fields[0], start, end)
                .with_attr("gene", gene)
                .with_attr("strand", strand),
        );
    }
    let table = GenomicTable::new(vec!["gene".to_string(), "strand".to_string()], bins)?;
    Ok(table)
}

pub(crate) fn read_bed3(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    Ok(read_bed(reader, path)?.drop_extra_columns())
}

pub(crate) fn read_bed4(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    Ok(read_bed(reader, path)?.keep_columns(&["gene"])?)
}

/// Write in the given BED flavor. Plain `bed` adapts: 4 columns when a
/// `gene` column exists, else 3.
pub(crate) fn write_bed(
    table: &GenomicTable,
    writer: &mut dyn Write,
    flavor: Format,
) -> Result<()> {
    let width = match flavor {
        Format::Bed3 => 3,
        Format::Bed4 => 4,
        Format::Bed6 => 6,
        _ => {
            if table.contains_column("gene") {
                4
            } else {
                3
            }
        }
    };
    for bin in table {
        write!(writer, "{}\t{}\t{}", bin.chromosome, bin.start, bin.end)?;
        if width >= 4 {
            write!(writer, "\t{}", attr_or(bin, "gene", "-"))?;
        }
        if width >= 6 {
            // BED places a score between name and strand; none is tracked.
            write!(writer, "\t.\t{}", attr_or(bin, "strand", "."))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use cnvtk_core::Value;

    const BED: &str = "browser position chr1:100-600\n\
        track name=\"t\"\n\
        chr1\t100\t200\texon1\t0\t+\n\
        chr1\t300\t400\n";

    #[rstest]
    fn reads_with_defaults_for_short_rows() {
        let table = read_bed(BED.as_bytes(), Path::new("t.bed")).unwrap();
        assert_eq!(table.labels(), vec!["chr1:100-200", "chr1:300-400"]);
        assert_eq!(
            table.cell_at(0, "gene").unwrap(),
            Value::Str("exon1".to_string())
        );
        assert_eq!(
            table.cell_at(0, "strand").unwrap(),
            Value::Str("+".to_string())
        );
        assert_eq!(
            table.cell_at(1, "gene").unwrap(),
            Value::Str("-".to_string())
        );
        assert_eq!(
            table.cell_at(1, "strand").unwrap(),
            Value::Str(".".to_string())
        );
    }

    #[rstest]
    fn fixed_flavors_project_columns() {
        let bed3 = read_bed3(BED.as_bytes(), Path::new("t.bed")).unwrap();
        assert!(bed3.columns().is_empty());
        let bed4 = read_bed4(BED.as_bytes(), Path::new("t.bed")).unwrap();
        assert_eq!(bed4.columns(), &["gene".to_string()]);
    }

    #[rstest]
    fn short_data_line_is_an_error() {
        let err = read_bed("chr1\t100\n".as_bytes(), Path::new("t.bed")).unwrap_err();
        assert!(matches!(err, crate::FormatError::BadLine { line: 1, .. }));
    }

    #[rstest]
    fn writes_four_columns_when_genes_exist() {
        let table = read_bed(BED.as_bytes(), Path::new("t.bed")).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_bed(&table, &mut out, Format::Bed).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t100\t200\texon1\nchr1\t300\t400\t-\n"
        );
    }

    #[rstest]
    fn writes_three_columns_without_genes() {
        let table = GenomicTable::from_bins(vec![Bin::new("chr2", 0, 50)]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_bed(&table, &mut out, Format::Bed).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "chr2\t0\t50\n");

        let mut out6: Vec<u8> = Vec::new();
        write_bed(&table, &mut out6, Format::Bed6).unwrap();
        assert_eq!(String::from_utf8(out6).unwrap(), "chr2\t0\t50\t-\t.\t.\n");
    }
}
