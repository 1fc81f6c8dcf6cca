use std::fmt;

/// A single cell in an extra attribute column.
///
/// Tables carry heterogeneous annotations (gene names, log2 ratios, read
/// depths) without a schema fixed at compile time, so cells are tagged
/// values. Missing data is explicit: [`Value::Na`] rather than a sentinel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Na,
}

impl Value {
    /// Parse a text field the way tabular readers do: try integer, then
    /// float, otherwise keep the string. Recognized missing-data spellings
    /// ("", "NA", "NaN", "nan", "null") and non-finite floats become
    /// [`Value::Na`].
    pub fn parse(text: &str) -> Value {
        let field = text.trim();
        if matches!(field, "" | "NA" | "NaN" | "nan" | "null") {
            return Value::Na;
        }
        if let Ok(i) = field.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(x) = field.parse::<f64>() {
            if x.is_finite() {
                return Value::Float(x);
            }
            return Value::Na;
        }
        Value::Str(field.to_string())
    }

    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the cell; integers promote to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    /// Text form as written to tabular files: floats use six significant
    /// digits ([`format_g6`]), NA renders as the empty field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&format_g6(*x)),
            Value::Str(s) => f.write_str(s),
            Value::Na => Ok(()),
        }
    }
}

/// Format a float like C's `%.6g`: six significant digits, fixed or
/// scientific notation depending on the decimal exponent, trailing zeros
/// dropped. Keeps written log2 ratios short and stable across runs.
pub fn format_g6(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }
    // Decimal exponent after rounding to six significant digits.
    let sci = format!("{x:.5e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        let precision = (5 - exp).max(0) as usize;
        strip_trailing_zeros(format!("{x:.precision$}"))
    } else {
        let mantissa = strip_trailing_zeros(mantissa.to_string());
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

fn strip_trailing_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
