//! The native tab-separated format: a header row naming the columns, then
//! one row per bin. This is the format the pipeline's own tables round-trip
//! through (`.cnn` and friends).

use std::io::{BufRead, Write};
use std::path::Path;

use log::{info, warn};

use cnvtk_core::models::REQUIRED_COLUMNS;
use cnvtk_core::{Bin, GenomicTable, TableError, Value};

use crate::error::{Result, bad_line, parse_coord};

struct Header {
    width: usize,
    chromosome: usize,
    start: usize,
    end: usize,
    extras: Vec<(String, usize)>,
}

impl Header {
    fn parse(line: &str) -> std::result::Result<Header, TableError> {
        let names: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
        let position = |name: &str| names.iter().position(|n| n == name);
        let (Some(chromosome), Some(start), Some(end)) =
            (position("chromosome"), position("start"), position("end"))
        else {
            let missing = REQUIRED_COLUMNS
                .iter()
                .filter(|c| position(c).is_none())
                .map(|c| c.to_string())
                .collect();
            return Err(TableError::MissingRequiredColumns { missing });
        };
        let extras = names
            .iter()
            .enumerate()
            .filter(|(_, n)| !REQUIRED_COLUMNS.contains(&n.as_str()))
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Ok(Header {
            width: names.len(),
            chromosome,
            start,
            end,
            extras,
        })
    }

    /// Parse a data row; `None` means the row has a missing `log2` and
    /// should be dropped.
    fn parse_row(&self, line: &str, path: &Path, lineno: usize) -> Result<Option<Bin>> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != self.width {
            return Err(bad_line(
                path,
                lineno,
                format!("expected {} fields, got {}", self.width, fields.len()),
            ));
        }
        let start = parse_coord(fields[self.start], "start", path, lineno)?;
        let end = parse_coord(fields[self.end], "end", path, lineno)?;
        let mut bin = Bin::new(fields[self.chromosome], start, end);
        let mut log2_missing = false;
        for (name, column) in &self.extras {
            let value = Value::parse(fields[*column]);
            if value.is_na() && name == "log2" {
                log2_missing = true;
            }
            bin = bin.with_attr(name.clone(), value);
        }
        Ok(if log2_missing { None } else { Some(bin) })
    }
}

pub(crate) fn read_tab(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    let mut lines = reader.lines();
    let mut lineno = 0usize;
    let mut header: Option<Header> = None;
    for line in lines.by_ref() {
        lineno += 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        header = Some(Header::parse(&line)?);
        break;
    }
    let Some(header) = header else {
        info!("Blank file?: {}", path.display());
        return Ok(GenomicTable::empty(Vec::new()));
    };
    let mut bins = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        lineno += 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match header.parse_row(&line, path, lineno)? {
            Some(bin) => bins.push(bin),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        // Every bin needs a log2 value; the other columns can be missing.
        warn!(
            "Dropped {} rows with missing log2 values from {}",
            dropped,
            path.display()
        );
    }
    let columns = header.extras.iter().map(|(n, _)| n.clone()).collect();
    Ok(GenomicTable::new(columns, bins)?)
}

pub(crate) fn write_tab(table: &GenomicTable, writer: &mut dyn Write) -> Result<()> {
    let mut names: Vec<&str> = REQUIRED_COLUMNS.to_vec();
    names.extend(table.columns().iter().map(String::as_str));
    writeln!(writer, "{}", names.join("\t"))?;
    for bin in table {
        write!(writer, "{}\t{}\t{}", bin.chromosome, bin.start, bin.end)?;
        for name in table.columns() {
            match bin.attr(name) {
                Some(value) => write!(writer, "\t{value}")?,
                None => write!(writer, "\t")?,
            }
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

    fn read_str(text: &str) -> Result<GenomicTable> {
        read_tab(text.as_bytes(), Path::new("test.cnn"))
    }

    #[rstest]
    fn reads_header_and_typed_cells() {
        let table = read_str(
            "chromosome\tstart\tend\tgene\tlog2\n\
             chr1\t100\t200\tA\t-0.25\n\
             chr1\t300\t400\tB\t0\n",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["gene".to_string(), "log2".to_string()]);
        assert_eq!(table.cell_at(0, "log2").unwrap(), Value::Float(-0.25));
        assert_eq!(table.cell_at(1, "log2").unwrap(), Value::Int(0));
    }

    #[rstest]
    fn drops_rows_with_missing_log2() {
        let table = read_str(
            "chromosome\tstart\tend\tlog2\n\
             chr1\t100\t200\t-0.5\n\
             chr1\t300\t400\t\n\
             chr1\t500\t600\tNaN\n",
        )
        .unwrap();
        assert_eq!(table.labels(), vec!["chr1:100-200"]);
    }

    #[rstest]
    fn keeps_missing_values_in_other_columns() {
        let table = read_str(
            "chromosome\tstart\tend\tgene\n\
             chr1\t100\t200\t\n",
        )
        .unwrap();
        assert_eq!(table.cell_at(0, "gene").unwrap(), Value::Na);
    }

    #[rstest]
    fn header_requires_coordinates() {
        let err = read_str("chromosome\tgene\nchr1\tA\n").unwrap_err();
        assert!(matches!(
            err,
            crate::FormatError::Table(TableError::MissingRequiredColumns { .. })
        ));
    }

    #[rstest]
    fn rejects_ragged_rows() {
        let err = read_str("chromosome\tstart\tend\nchr1\t100\n").unwrap_err();
        assert!(matches!(err, crate::FormatError::BadLine { line: 2, .. }));
    }

    #[rstest]
    fn blank_input_is_an_empty_table() {
        let table = read_str("\n  \n").unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[rstest]
    fn writes_header_and_g6_floats() {
        let table = GenomicTable::from_bins(vec![
            Bin::new("chr1", 100, 200)
                .with_attr("gene", "A")
                .with_attr("log2", 0.1 + 0.2),
            Bin::new("chr1", 300, 400)
                .with_attr("gene", Value::Na)
                .with_attr("log2", -1.0 / 3.0),
        ])
        .unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_tab(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chromosome\tstart\tend\tgene\tlog2\n\
             chr1\t100\t200\tA\t0.3\n\
             chr1\t300\t400\t\t-0.333333\n"
        );
    }
}
