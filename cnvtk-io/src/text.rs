//! Text coordinate format: one `"chrom:start-end"` or
//! `"chrom:start-end:gene"` label per line, 1-based inclusive in the file.

use std::io::{BufRead, Write};
use std::path::Path;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

use crate::error::{Result, bad_line, parse_coord};

pub(crate) fn read_text(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    let mut bins = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let label = line.trim();
        if label.is_empty() {
            continue;
        }
        let fields: Vec<&str> = label.split(':').collect();
        let (chromosome, span, gene) = match fields.as_slice() {
            [chromosome, span, gene] => (*chromosome, *span, *gene),
            [chromosome, span] => (*chromosome, *span, "-"),
            _ => return Err(bad_line(path, idx + 1, format!("bad line: '{label}'"))),
        };
        let Some((start, end)) = span.split_once('-') else {
            return Err(bad_line(
                path,
                idx + 1,
                format!("bad coordinate range '{span}'"),
            ));
        };
        // File coordinates are 1-based inclusive.
        let start = parse_coord(start, "start", path, idx + 1)? - 1;
        let end = parse_coord(end, "end", path, idx + 1)?;
        bins.push(Bin::new(chromosome, start, end).with_attr("gene", gene));
    }
    let table = GenomicTable::new(vec!["gene".to_string()], bins)?;
    Ok(table)
}

pub(crate) fn write_text(table: &GenomicTable, writer: &mut dyn Write) -> Result<()> {
    for bin in table {
        writeln!(writer, "{}:{}-{}", bin.chromosome, bin.start + 1, bin.end)?;
    }
    Ok(())
}
