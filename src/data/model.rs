use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a headerless CSV
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the column dtypes a dataframe reader
/// would infer. Serializes as the bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Missing value marker (`""`, `NA`, `NaN`, ...). Written as `null`.
    Null,
}

// ---------------------------------------------------------------------------
// Number – one pixel coordinate component
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Parse a coordinate, ignoring surrounding whitespace. `NaN` and
    /// infinities are not coordinates.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Some(Number::Integer(i));
        }
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Widen to a float, keeping floats unchanged.
    pub fn to_float(self) -> Number {
        match self {
            Number::Integer(i) => Number::Float(i as f64),
            float => float,
        }
    }
}

/// One `[x, y]` sample.
pub type PixelPair = [Number; 2];

// ---------------------------------------------------------------------------
// Matrix – the generic converter output
// ---------------------------------------------------------------------------

/// Rows of cells in file order. Rows keep their own length, so ragged input
/// stays ragged.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    pub rows: Vec<Vec<CellValue>>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Matrix { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the widest row.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }
}
