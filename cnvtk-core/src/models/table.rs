//! The genomic interval table.
//!
//! A [`GenomicTable`] is an ordered collection of [`Bin`]s that all carry the
//! same extra attribute columns, plus free-form metadata (sample id and
//! friends). It supports the operations the copy-number pipeline is built
//! from: genome-order sorting, grouping by chromosome or by another table's
//! bins, and binary-search range queries over sorted coordinates.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::chrom::chrom_sort_key;
use crate::errors::{Result, TableError};
use crate::models::{Bin, Value};

/// Coordinate columns every table has, in canonical order. They live on the
/// bins themselves rather than in the attribute schema.
pub const REQUIRED_COLUMNS: [&str; 3] = ["chromosome", "start", "end"];

/// Policy for rows straddling a bin boundary in [`GenomicTable::by_bin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    /// Keep straddling rows, clamped to the bin's boundaries.
    Trim,
    /// Keep only rows fully inside the bin.
    Drop,
    /// Keep straddling rows whole.
    Include,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenomicTable {
    /// Extra attribute columns, in order. Coordinates are not listed here.
    columns: Vec<String>,
    bins: Vec<Bin>,
    meta: HashMap<String, String>,
}

impl GenomicTable {
    /// Build a table from bins that all carry exactly the given columns.
    pub fn new(columns: Vec<String>, bins: Vec<Bin>) -> Result<Self> {
        let table = GenomicTable {
            columns,
            bins,
            meta: HashMap::new(),
        };
        for (row, bin) in table.bins.iter().enumerate() {
            if !table.row_matches_schema(bin) {
                return Err(TableError::RowSchemaMismatch {
                    row,
                    columns: table.columns.clone(),
                });
            }
        }
        Ok(table)
    }

    /// Build a table from bins, taking the column schema from the first one.
    pub fn from_bins(bins: Vec<Bin>) -> Result<Self> {
        let columns = bins
            .first()
            .map(|b| b.attrs().map(|(n, _)| n.to_string()).collect())
            .unwrap_or_default();
        Self::new(columns, bins)
    }

    /// Build a table column-wise. `chromosome`, `start`, and `end` are
    /// required; all other columns become extra attributes in the given
    /// order. Columns must have equal lengths.
    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&req| !columns.iter().any(|(name, _)| name.as_str() == req))
            .map(|req| req.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingRequiredColumns { missing });
        }
        let len = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for (_, values) in &columns {
            if values.len() != len {
                return Err(TableError::LengthMismatch {
                    expected: len,
                    actual: values.len(),
                });
            }
        }
        let mut chromosomes: Vec<String> = Vec::with_capacity(len);
        let mut starts: Vec<i64> = Vec::with_capacity(len);
        let mut ends: Vec<i64> = Vec::with_capacity(len);
        let mut extras: Vec<(String, Vec<Value>)> = Vec::new();
        for (name, values) in columns {
            if name == "chromosome" {
                for value in &values {
                    match value {
                        Value::Str(s) => chromosomes.push(s.clone()),
                        _ => {
                            return Err(TableError::TypeMismatch {
                                column: name.clone(),
                                expected: "string",
                            });
                        }
                    }
                }
            } else if name == "start" || name == "end" {
                let coords = if name == "start" { &mut starts } else { &mut ends };
                for value in &values {
                    match value {
                        Value::Int(i) => coords.push(*i),
                        _ => {
                            return Err(TableError::TypeMismatch {
                                column: name.clone(),
                                expected: "integer",
                            });
                        }
                    }
                }
            } else {
                extras.push((name, values));
            }
        }
        let mut bins = Vec::with_capacity(len);
        for row in 0..len {
            let mut bin = Bin::new(chromosomes[row].clone(), starts[row], ends[row]);
            for (name, values) in &extras {
                bin.attrs.push((name.clone(), values[row].clone()));
            }
            bins.push(bin);
        }
        let schema = extras.into_iter().map(|(name, _)| name).collect();
        Ok(GenomicTable {
            columns: schema,
            bins,
            meta: HashMap::new(),
        })
    }

    /// An empty table with the given extra-attribute schema.
    pub fn empty(columns: Vec<String>) -> Self {
        GenomicTable {
            columns,
            bins: Vec::new(),
            meta: HashMap::new(),
        }
    }

    fn empty_like(&self) -> Self {
        GenomicTable {
            columns: self.columns.clone(),
            bins: Vec::new(),
            meta: self.meta.clone(),
        }
    }

    fn row_matches_schema(&self, bin: &Bin) -> bool {
        bin.attrs.len() == self.columns.len()
            && self.columns.iter().all(|c| bin.attr(c).is_some())
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// The extra attribute columns, in order (coordinates not included).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether `name` is a column of this table, coordinates included.
    pub fn contains_column(&self, name: &str) -> bool {
        REQUIRED_COLUMNS.contains(&name) || self.columns.iter().any(|c| c == name)
    }

    pub fn meta(&self) -> &HashMap<String, String> {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.meta
    }

    /// The sample this table was read from, if recorded.
    pub fn sample_id(&self) -> Option<&str> {
        self.meta.get("sample_id").map(String::as_str)
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn bin_at(&self, row: usize) -> Option<&Bin> {
        self.bins.get(row)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }

    /// `(chromosome, start, end)` for every row, in order.
    pub fn coords(&self) -> impl Iterator<Item = (&str, i64, i64)> {
        self.bins.iter().map(|b| (b.chromosome.as_str(), b.start, b.end))
    }

    /// `"chrom:start-end"` for every row, in order.
    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(Bin::label).collect()
    }

    /// One whole column as values. Coordinate columns materialize on the fly.
    pub fn column(&self, name: &str) -> Result<Vec<Value>> {
        match name {
            "chromosome" => Ok(self
                .bins
                .iter()
                .map(|b| Value::Str(b.chromosome.clone()))
                .collect()),
            "start" => Ok(self.bins.iter().map(|b| Value::Int(b.start)).collect()),
            "end" => Ok(self.bins.iter().map(|b| Value::Int(b.end)).collect()),
            _ => {
                if !self.columns.iter().any(|c| c == name) {
                    return Err(TableError::ColumnNotFound(name.to_string()));
                }
                Ok(self
                    .bins
                    .iter()
                    .map(|b| b.attr(name).cloned().unwrap_or(Value::Na))
                    .collect())
            }
        }
    }

    pub fn cell_at(&self, row: usize, column: &str) -> Result<Value> {
        let bin = self.bins.get(row).ok_or(TableError::RowOutOfBounds {
            index: row,
            len: self.bins.len(),
        })?;
        match column {
            "chromosome" => Ok(Value::Str(bin.chromosome.clone())),
            "start" => Ok(Value::Int(bin.start)),
            "end" => Ok(Value::Int(bin.end)),
            _ => bin
                .attr(column)
                .cloned()
                .ok_or_else(|| TableError::ColumnNotFound(column.to_string())),
        }
    }

    /// The sub-table at the given row positions, in the given order. An
    /// empty index list yields an empty table with the same schema.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self> {
        let mut bins = Vec::with_capacity(rows.len());
        for &row in rows {
            let bin = self.bins.get(row).ok_or(TableError::RowOutOfBounds {
                index: row,
                len: self.bins.len(),
            })?;
            bins.push(bin.clone());
        }
        Ok(GenomicTable {
            columns: self.columns.clone(),
            bins,
            meta: self.meta.clone(),
        })
    }

    /// The sub-table of rows where `mask` is true. `mask` must cover every
    /// row exactly once.
    pub fn select_mask(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.bins.len() {
            return Err(TableError::LengthMismatch {
                expected: self.bins.len(),
                actual: mask.len(),
            });
        }
        let bins = self
            .bins
            .iter()
            .zip(mask)
            .filter(|&(_, &keep)| keep)
            .map(|(b, _)| b.clone())
            .collect();
        Ok(GenomicTable {
            columns: self.columns.clone(),
            bins,
            meta: self.meta.clone(),
        })
    }

    /// A contiguous row range, clamped to the table (never fails).
    pub fn slice(&self, range: Range<usize>) -> Self {
        let start = range.start.min(self.bins.len());
        let end = range.end.min(self.bins.len()).max(start);
        GenomicTable {
            columns: self.columns.clone(),
            bins: self.bins[start..end].to_vec(),
            meta: self.meta.clone(),
        }
    }

    /// Replace one row. The new bin must carry this table's columns.
    pub fn set_bin_at(&mut self, row: usize, bin: Bin) -> Result<()> {
        if row >= self.bins.len() {
            return Err(TableError::RowOutOfBounds {
                index: row,
                len: self.bins.len(),
            });
        }
        if !self.row_matches_schema(&bin) {
            return Err(TableError::RowSchemaMismatch {
                row,
                columns: self.columns.clone(),
            });
        }
        self.bins[row] = bin;
        Ok(())
    }

    /// Replace a column across all rows, or append it if absent. Assigning
    /// `chromosome`/`start`/`end` is type-checked and writes through to the
    /// bins' coordinates.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.bins.len() {
            return Err(TableError::LengthMismatch {
                expected: self.bins.len(),
                actual: values.len(),
            });
        }
        match name {
            "chromosome" => {
                let mut chromosomes = Vec::with_capacity(values.len());
                for value in &values {
                    match value {
                        Value::Str(s) => chromosomes.push(s.clone()),
                        _ => {
                            return Err(TableError::TypeMismatch {
                                column: name.to_string(),
                                expected: "string",
                            });
                        }
                    }
                }
                for (bin, chromosome) in self.bins.iter_mut().zip(chromosomes) {
                    bin.chromosome = chromosome;
                }
            }
            "start" | "end" => {
                let mut coords = Vec::with_capacity(values.len());
                for value in &values {
                    match value {
                        Value::Int(i) => coords.push(*i),
                        _ => {
                            return Err(TableError::TypeMismatch {
                                column: name.to_string(),
                                expected: "integer",
                            });
                        }
                    }
                }
                for (bin, coord) in self.bins.iter_mut().zip(coords) {
                    if name == "start" {
                        bin.start = coord;
                    } else {
                        bin.end = coord;
                    }
                }
            }
            _ => {
                if self.columns.iter().any(|c| c == name) {
                    for (bin, value) in self.bins.iter_mut().zip(values) {
                        bin.set_attr(name, value);
                    }
                } else {
                    self.columns.push(name.to_string());
                    for (bin, value) in self.bins.iter_mut().zip(values) {
                        bin.attrs.push((name.to_string(), value));
                    }
                }
            }
        }
        Ok(())
    }

    /// Replace one cell. Extra columns must already exist.
    pub fn set_cell(&mut self, row: usize, column: &str, value: Value) -> Result<()> {
        let len = self.bins.len();
        let bin = self
            .bins
            .get_mut(row)
            .ok_or(TableError::RowOutOfBounds { index: row, len })?;
        match column {
            "chromosome" => match value {
                Value::Str(s) => bin.chromosome = s,
                _ => {
                    return Err(TableError::TypeMismatch {
                        column: column.to_string(),
                        expected: "string",
                    });
                }
            },
            "start" | "end" => match value {
                Value::Int(i) => {
                    if column == "start" {
                        bin.start = i;
                    } else {
                        bin.end = i;
                    }
                }
                _ => {
                    return Err(TableError::TypeMismatch {
                        column: column.to_string(),
                        expected: "integer",
                    });
                }
            },
            _ => {
                if !bin.set_attr(column, value) {
                    return Err(TableError::ColumnNotFound(column.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Distinct chromosomes in first-appearance order, each with the row
    /// positions belonging to it.
    fn chromosome_groups(&self) -> Vec<(String, Vec<usize>)> {
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        for (row, bin) in self.bins.iter().enumerate() {
            match groups.iter_mut().find(|(c, _)| *c == bin.chromosome) {
                Some((_, rows)) => rows.push(row),
                None => groups.push((bin.chromosome.clone(), vec![row])),
            }
        }
        groups
    }

    fn chrom_rows(&self, chromosome: &str) -> Vec<usize> {
        self.bins
            .iter()
            .enumerate()
            .filter(|(_, b)| b.chromosome == chromosome)
            .map(|(row, _)| row)
            .collect()
    }

    /// Iterate `(chromosome, sub-table)` pairs. Chromosomes come out in
    /// first-appearance order and each group preserves this table's row
    /// order, whether or not the table is sorted.
    pub fn by_chromosome(&self) -> ByChromosome<'_> {
        ByChromosome {
            table: self,
            groups: self.chromosome_groups(),
            next: 0,
        }
    }

    /// Group this table's rows under another table's bins.
    ///
    /// Yields `(bin, sub-table)` for every row of `bins` in its own order.
    /// Rows of `self` are matched by overlap or containment per `mode`; a
    /// chromosome of `bins` absent from `self` yields empty sub-tables.
    /// Rows of `self` on each chromosome are assumed sorted by start.
    pub fn by_bin<'a>(&'a self, bins: &'a GenomicTable, mode: TrimMode) -> ByBin<'a> {
        ByBin {
            table: self,
            bins,
            mode,
            groups: bins.chromosome_groups(),
            group_idx: 0,
            bin_idx: 0,
            table_rows: Vec::new(),
            rows_cached: false,
        }
    }

    /// Row positions (within `rows`, assumed coordinate-sorted) selected by
    /// the query bounds. `overlap=false` keeps contained rows only.
    fn rows_in_range(
        &self,
        rows: &[usize],
        start: Option<i64>,
        end: Option<i64>,
        overlap: bool,
    ) -> Vec<usize> {
        let lo = match start {
            Some(qstart) if overlap => rows.partition_point(|&i| self.bins[i].end <= qstart),
            Some(qstart) => rows.partition_point(|&i| self.bins[i].start < qstart),
            None => 0,
        };
        let hi = match end {
            Some(qend) if overlap => rows.partition_point(|&i| self.bins[i].start < qend),
            Some(qend) => rows.partition_point(|&i| self.bins[i].end <= qend),
            None => rows.len(),
        };
        rows[lo..hi.max(lo)].to_vec()
    }

    fn range_subtable(
        &self,
        rows: &[usize],
        start: Option<i64>,
        end: Option<i64>,
        overlap: bool,
        clamp: bool,
    ) -> GenomicTable {
        let picked = self.rows_in_range(rows, start, end, overlap);
        let mut bins: Vec<Bin> = picked.iter().map(|&i| self.bins[i].clone()).collect();
        if clamp {
            if let Some(qstart) = start {
                for bin in &mut bins {
                    if bin.start < qstart {
                        bin.start = qstart;
                    }
                }
            }
            if let Some(qend) = end {
                for bin in &mut bins {
                    if bin.end > qend {
                        bin.end = qend;
                    }
                }
            }
        }
        GenomicTable {
            columns: self.columns.clone(),
            bins,
            meta: self.meta.clone(),
        }
    }

    /// The sub-table within `[start, end)` on one chromosome, located by
    /// binary search (rows per chromosome are assumed sorted by start; call
    /// [`sort`](Self::sort) first). `None` bounds are unbounded. With
    /// `trim=false` only rows fully inside the range are kept; with
    /// `trim=true` rows overlapping a bound are kept and clamped to it.
    /// A chromosome with no rows here is an error.
    pub fn in_range(
        &self,
        chromosome: &str,
        start: Option<i64>,
        end: Option<i64>,
        trim: bool,
    ) -> Result<Self> {
        let rows = self.chrom_rows(chromosome);
        if rows.is_empty() {
            return Err(TableError::ChromosomeNotFound(chromosome.to_string()));
        }
        Ok(self.range_subtable(&rows, start, end, trim, trim))
    }

    /// Like [`in_range`](Self::in_range) over several ranges at once,
    /// concatenating the per-range results in order. `starts` and `ends`
    /// must have equal lengths when both given; both `None` selects the
    /// chromosome's rows whole.
    pub fn in_ranges(
        &self,
        chromosome: &str,
        starts: Option<&[i64]>,
        ends: Option<&[i64]>,
        trim: bool,
    ) -> Result<Self> {
        let rows = self.chrom_rows(chromosome);
        if rows.is_empty() {
            return Err(TableError::ChromosomeNotFound(chromosome.to_string()));
        }
        let count = match (starts, ends) {
            (None, None) => {
                let bins = rows.iter().map(|&i| self.bins[i].clone()).collect();
                return Ok(GenomicTable {
                    columns: self.columns.clone(),
                    bins,
                    meta: self.meta.clone(),
                });
            }
            (Some(s), Some(e)) => {
                if s.len() != e.len() {
                    return Err(TableError::LengthMismatch {
                        expected: s.len(),
                        actual: e.len(),
                    });
                }
                s.len()
            }
            (Some(s), None) => s.len(),
            (None, Some(e)) => e.len(),
        };
        let mut out = self.empty_like();
        for k in 0..count {
            let start = starts.map(|s| s[k]);
            let end = ends.map(|e| e[k]);
            let sub = self.range_subtable(&rows, start, end, trim, trim);
            out.bins.extend(sub.bins);
        }
        Ok(out)
    }

    /// The sub-table with only the named extra columns (coordinates always
    /// survive; naming them is a no-op). Unknown columns are an error.
    pub fn keep_columns(&self, names: &[&str]) -> Result<Self> {
        let mut keep: Vec<String> = Vec::new();
        for name in names {
            if REQUIRED_COLUMNS.contains(name) {
                continue;
            }
            if !self.columns.iter().any(|c| c == name) {
                return Err(TableError::ColumnNotFound(name.to_string()));
            }
            keep.push(name.to_string());
        }
        let bins = self
            .bins
            .iter()
            .map(|b| {
                let mut kept = Bin::new(b.chromosome.clone(), b.start, b.end);
                for name in &keep {
                    if let Some(value) = b.attr(name) {
                        kept.attrs.push((name.clone(), value.clone()));
                    }
                }
                kept
            })
            .collect();
        Ok(GenomicTable {
            columns: keep,
            bins,
            meta: self.meta.clone(),
        })
    }

    /// Coordinates only; every extra column dropped.
    pub fn drop_extra_columns(&self) -> Self {
        let bins = self
            .bins
            .iter()
            .map(|b| Bin::new(b.chromosome.clone(), b.start, b.end))
            .collect();
        GenomicTable {
            columns: Vec::new(),
            bins,
            meta: self.meta.clone(),
        }
    }

    /// Rows satisfying the predicate. Chain calls to intersect constraints.
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Bin) -> bool,
    {
        let bins = self
            .bins
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect();
        GenomicTable {
            columns: self.columns.clone(),
            bins,
            meta: self.meta.clone(),
        }
    }

    /// Rows whose `column` equals `value` exactly.
    pub fn select_eq(&self, column: &str, value: &Value) -> Result<Self> {
        if !self.contains_column(column) {
            return Err(TableError::ColumnNotFound(column.to_string()));
        }
        Ok(self.select(|b| match column {
            "chromosome" => matches!(value, Value::Str(s) if *s == b.chromosome),
            "start" => matches!(value, Value::Int(i) if *i == b.start),
            "end" => matches!(value, Value::Int(i) if *i == b.end),
            _ => b.attr(column) == Some(value),
        }))
    }

    /// Sort rows into genome order: chromosomes per
    /// [`chrom_sort_key`](crate::chrom::chrom_sort_key), then start
    /// position. Stable, so equal keys keep their relative order. Row
    /// positions are reassigned; indices held from before do not survive.
    pub fn sort(mut self) -> Self {
        self.bins
            .sort_by_cached_key(|b| (chrom_sort_key(&b.chromosome), b.start));
        self
    }

    /// Permute rows with the caller's RNG. Returns the permutation that was
    /// applied (`result row k` came from `original row permutation[k]`), so
    /// a downstream consumer can reproduce or invert it.
    pub fn shuffle<R: Rng + ?Sized>(mut self, rng: &mut R) -> (Self, Vec<usize>) {
        let mut permutation: Vec<usize> = (0..self.bins.len()).collect();
        permutation.shuffle(rng);
        self.bins = permutation.iter().map(|&i| self.bins[i].clone()).collect();
        (self, permutation)
    }

    /// Append another table's rows and re-sort into genome order. The two
    /// tables must have the same extra columns (any order).
    pub fn merge(mut self, other: &GenomicTable) -> Result<Self> {
        let compatible = self.columns.len() == other.columns.len()
            && self.columns.iter().all(|c| other.columns.contains(c));
        if !compatible {
            return Err(TableError::IncompatibleColumns {
                left: self.columns.clone(),
                right: other.columns.clone(),
            });
        }
        self.bins.extend(other.bins.iter().cloned());
        Ok(self.sort())
    }
}

impl fmt::Display for GenomicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenomicTable with {} bins", self.bins.len())
    }
}

impl<'a> IntoIterator for &'a GenomicTable {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

impl IntoIterator for GenomicTable {
    type Item = Bin;
    type IntoIter = std::vec::IntoIter<Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.into_iter()
    }
}

/// Iterator over `(chromosome, sub-table)` groups; see
/// [`GenomicTable::by_chromosome`].
pub struct ByChromosome<'a> {
    table: &'a GenomicTable,
    groups: Vec<(String, Vec<usize>)>,
    next: usize,
}

impl Iterator for ByChromosome<'_> {
    type Item = (String, GenomicTable);

    fn next(&mut self) -> Option<Self::Item> {
        let (chromosome, rows) = self.groups.get(self.next)?.clone();
        self.next += 1;
        let bins = rows.iter().map(|&i| self.table.bins[i].clone()).collect();
        let sub = GenomicTable {
            columns: self.table.columns.clone(),
            bins,
            meta: self.table.meta.clone(),
        };
        Some((chromosome, sub))
    }
}

/// Iterator over `(bin, sub-table)` pairs; see [`GenomicTable::by_bin`].
pub struct ByBin<'a> {
    table: &'a GenomicTable,
    bins: &'a GenomicTable,
    mode: TrimMode,
    groups: Vec<(String, Vec<usize>)>,
    group_idx: usize,
    bin_idx: usize,
    table_rows: Vec<usize>,
    rows_cached: bool,
}

impl Iterator for ByBin<'_> {
    type Item = (Bin, GenomicTable);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.group_idx >= self.groups.len() {
                return None;
            }
            if self.bin_idx >= self.groups[self.group_idx].1.len() {
                self.group_idx += 1;
                self.bin_idx = 0;
                self.rows_cached = false;
                continue;
            }
            if !self.rows_cached {
                // Absent chromosomes leave this empty, which is fine: every
                // bin of the group then pairs with an empty sub-table.
                let chromosome = self.groups[self.group_idx].0.clone();
                self.table_rows = self.table.chrom_rows(&chromosome);
                self.rows_cached = true;
            }
            let bin_row = self.groups[self.group_idx].1[self.bin_idx];
            self.bin_idx += 1;
            let bin = self.bins.bins[bin_row].clone();
            let (overlap, clamp) = match self.mode {
                TrimMode::Trim => (true, true),
                TrimMode::Drop => (false, false),
                TrimMode::Include => (true, false),
            };
            let sub = self.table.range_subtable(
                &self.table_rows,
                Some(bin.start),
                Some(bin.end),
                overlap,
                clamp,
            );
            return Some((bin, sub));
        }
    }
}
