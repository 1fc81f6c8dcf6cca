//! Minimal VCF site support: data lines become bins spanning the reference
//! allele, with `ref`/`alt` carried as attributes. Genotype and INFO
//! semantics belong to a variant-call container, not here.

use std::io::{BufRead, Write};
use std::path::Path;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

use crate::attr_or;
use crate::error::{Result, bad_line, parse_coord};

pub(crate) fn read_vcf(reader: impl BufRead, path: &Path) -> Result<GenomicTable> {
    let mut bins = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 5 {
            return Err(bad_line(
                path,
                idx + 1,
                format!("expected at least 5 fields, got {}", fields.len()),
            ));
        }
        let pos = parse_coord(fields[1], "position", path, idx + 1)?;
        let reference = fields[3];
        // POS is 1-based; the site covers the reference allele.
        let start = pos - 1;
        let end = start + reference.len() as i64;
        bins.push(
            Bin::new(fields[0], start, end)
                .with_attr("ref", reference)
                .with_attr("alt", fields[4]),
        );
    }
    let table = GenomicTable::new(vec!["ref".to_string(), "alt".to_string()], bins)?;
    Ok(table)
}

pub(crate) fn write_vcf(table: &GenomicTable, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "##fileformat=VCFv4.2")?;
    if let Some(sample) = table.sample_id() {
        writeln!(writer, "##sampleName={sample}")?;
    }
    writeln!(writer, "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO")?;
    for bin in table {
        writeln!(
            writer,
            "{}\t{}\t.\t{}\t{}\t.\t.\t.",
            bin.chromosome,
            bin.start + 1,
            attr_or(bin, "ref", "N"),
            attr_or(bin, "alt", "."),
        )?;
    }
    Ok(())
}
