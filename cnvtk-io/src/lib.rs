//! Reading and writing genomic interval tables in tabular formats.
//!
//! The format registry is a fixed set of tags. Each reader produces a
//! [`GenomicTable`] whose `sample_id` metadata is taken from the file name;
//! each writer renders floats with six significant digits so files stay
//! stable across runs. Paths ending in `.gz` are compressed and
//! decompressed transparently.
//!
//! ```no_run
//! use cnvtk_io::{Format, read, read_auto, write};
//!
//! let targets = read_auto("targets.bed")?;
//! write(&targets, "targets.cnn", Format::Tab)?;
//! # Ok::<(), cnvtk_io::FormatError>(())
//! ```
pub mod error;
pub mod reader;

mod bed;
mod interval;
mod sniff;
mod tab;
mod text;
mod vcf;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::info;

use cnvtk_core::GenomicTable;
use cnvtk_core::models::Bin;

pub use error::{FormatError, Result};
pub use reader::{fbase, open_reader, open_writer};

/// The registry of supported tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Native tab-separated format with a header row.
    Tab,
    /// BED, adapting to the columns present.
    Bed,
    /// BED, coordinates only.
    Bed3,
    /// BED with the name column.
    Bed4,
    /// BED with name and strand columns.
    Bed6,
    /// GATK/Picard interval list, 1-based inclusive.
    Interval,
    /// `"chrom:start-end"` labels, 1-based inclusive.
    Text,
    /// VCF sites.
    Vcf,
    /// Auto-detect among BED, interval list, and tab.
    Sniff,
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            "tab" => Ok(Format::Tab),
            "bed" => Ok(Format::Bed),
            "bed3" => Ok(Format::Bed3),
            "bed4" => Ok(Format::Bed4),
            "bed6" => Ok(Format::Bed6),
            "interval" => Ok(Format::Interval),
            "text" => Ok(Format::Text),
            "vcf" => Ok(Format::Vcf),
            "sniff" => Ok(Format::Sniff),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Format::Tab => "tab",
            Format::Bed => "bed",
            Format::Bed3 => "bed3",
            Format::Bed4 => "bed4",
            Format::Bed6 => "bed6",
            Format::Interval => "interval",
            Format::Text => "text",
            Format::Vcf => "vcf",
            Format::Sniff => "sniff",
        };
        f.write_str(tag)
    }
}

/// Read a table from `path` in the given format. [`Format::Sniff`] resolves
/// the format from the file content first. The table's `sample_id` is set
/// from the file name.
pub fn read(path: impl AsRef<Path>, format: Format) -> Result<GenomicTable> {
    let path = path.as_ref();
    let resolved = match format {
        Format::Sniff => sniff::sniff_format(path)?,
        other => other,
    };
    let reader = reader::open_reader(path)?;
    let mut table = match resolved {
        Format::Tab | Format::Sniff => tab::read_tab(reader, path)?,
        Format::Bed | Format::Bed6 => bed::read_bed(reader, path)?,
        Format::Bed3 => bed::read_bed3(reader, path)?,
        Format::Bed4 => bed::read_bed4(reader, path)?,
        Format::Interval => interval::read_interval(reader, path)?,
        Format::Text => text::read_text(reader, path)?,
        Format::Vcf => vcf::read_vcf(reader, path)?,
    };
    table
        .meta_mut()
        .insert("sample_id".to_string(), reader::fbase(path));
    Ok(table)
}

/// Read a table, auto-detecting the format from the file content.
pub fn read_auto(path: impl AsRef<Path>) -> Result<GenomicTable> {
    read(path, Format::Sniff)
}

/// Write a table to `path` in the given format. A `.gz` path compresses
/// the output. [`Format::Sniff`] writes the native tab format.
pub fn write(table: &GenomicTable, path: impl AsRef<Path>, format: Format) -> Result<()> {
    let path = path.as_ref();
    let mut writer = reader::open_writer(path)?;
    match format {
        Format::Tab | Format::Sniff => tab::write_tab(table, &mut writer)?,
        Format::Bed | Format::Bed3 | Format::Bed4 | Format::Bed6 => {
            bed::write_bed(table, &mut writer, format)?
        }
        Format::Interval => interval::write_interval(table, &mut writer)?,
        Format::Text => text::write_text(table, &mut writer)?,
        Format::Vcf => vcf::write_vcf(table, &mut writer)?,
    }
    writer.flush()?;
    info!("Wrote {} with {} regions", path.display(), table.len());
    Ok(())
}

/// One attribute as display text, with a default for absent or NA cells.
pub(crate) fn attr_or(bin: &Bin, name: &str, default: &str) -> String {
    match bin.attr(name) {
        Some(value) if !value.is_na() => value.to_string(),
        _ => default.to_string(),
    }
}
