use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::error::Result;

/// Open a file for buffered reading, decompressing on the fly when the path
/// ends in `.gz`.
pub fn open_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };
    Ok(BufReader::new(file))
}

/// Create a file for buffered writing, compressing when the path ends in
/// `.gz`.
pub fn open_writer(path: &Path) -> Result<Box<dyn Write>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::create(path)?;
    let writer: Box<dyn Write> = match is_gzipped {
        true => Box::new(GzEncoder::new(
            BufWriter::new(file),
            Compression::default(),
        )),
        false => Box::new(BufWriter::new(file)),
    };
    Ok(writer)
}

/// The sample id a path implies: the file name with `.gz` and the format
/// extension stripped.
pub fn fbase(path: &Path) -> String {
    let name = path.file_name().and_then(OsStr::to_str).unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(name);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("targets.bed", "targets")]
    #[case("sample.cnn.gz", "sample")]
    #[case("sample.targets.bed", "sample.targets")]
    #[case("README", "README")]
    #[case(".hidden", ".hidden")]
    fn fbase_strips_extensions(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(fbase(Path::new(name)), expected);
    }
}
