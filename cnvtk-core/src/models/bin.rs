use std::fmt;

use crate::models::Value;

/// One genomic interval with its extra attributes.
///
/// Coordinates are 0-based half-open and deliberately signed: padding and
/// subtraction can produce regions that run past a contig boundary or come
/// out inverted, and whether to discard those is the caller's call, not a
/// construction error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
    pub(crate) attrs: Vec<(String, Value)>,
}

impl Bin {
    pub fn new(chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Bin {
            chromosome: chromosome.into(),
            start,
            end,
            attrs: Vec::new(),
        }
    }

    /// Builder-style attribute attachment, in column order.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// The value of one extra attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// All extra attributes in column order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Replace an existing attribute in place; returns false if absent.
    pub(crate) fn set_attr(&mut self, name: &str, value: Value) -> bool {
        for (n, v) in &mut self.attrs {
            if n == name {
                *v = value;
                return true;
            }
        }
        false
    }

    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    /// Human-readable locus, e.g. `chr5:1000-5000`.
    pub fn label(&self) -> String {
        format!("{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn attrs_keep_insertion_order() {
        let bin = Bin::new("chr1", 100, 200)
            .with_attr("gene", "MYC")
            .with_attr("log2", -0.25);
        let names: Vec<&str> = bin.attrs().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["gene", "log2"]);
        assert_eq!(bin.attr("gene"), Some(&Value::Str("MYC".to_string())));
        assert_eq!(bin.attr("depth"), None);
    }

    #[rstest]
    fn width_and_label() {
        let bin = Bin::new("chrX", 1000, 5000);
        assert_eq!(bin.width(), 4000);
        assert_eq!(bin.label(), "chrX:1000-5000");
        assert_eq!(bin.to_string(), "chrX:1000-5000");
    }

    #[rstest]
    fn negative_coordinates_are_representable() {
        let bin = Bin::new("chr1", -500, 250);
        assert_eq!(bin.width(), 750);
    }
}
