//! Cell values stored in table records.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A single displayable value held by a [`Record`](super::Record) field.
///
/// Values are a closed set of kinds so that sorting is always a total order,
/// even when a column mixes kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (missing or null field).
    #[default]
    Empty,
    /// A boolean flag.
    Bool(bool),
    /// An integral number.
    Integer(i64),
    /// A decimal number (money, quantities).
    Number(f64),
    /// A calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
    /// A nested list of values (tags, benefits).
    List(Vec<CellValue>),
}

impl CellValue {
    /// Whether the value should be displayed as a placeholder dash.
    pub fn is_placeholder(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The plain string form used for searching.
    ///
    /// `Empty` has no string form, so it never matches a non-empty query.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            other => other.to_string(),
        }
    }

    /// Whether the lowercased string form contains `needle_lower`.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.search_text().to_lowercase().contains(needle_lower)
    }

    /// Rank used to order values of different kinds.
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Number(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
            CellValue::List(_) => 5,
        }
    }

    /// Total ordering between two values.
    ///
    /// Same-kind values compare naturally (numbers numerically, text
    /// lexically, dates chronologically). Different kinds are ordered by kind:
    /// `Empty < Bool < Number < Date < Text < List`.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Integer(a), CellValue::Number(b)) => (*a as f64).total_cmp(b),
            (CellValue::Number(a), CellValue::Integer(b)) => a.total_cmp(&(*b as f64)),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::List(a), CellValue::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = x.compare(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
            CellValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(value: Vec<T>) -> Self {
        CellValue::List(value.into_iter().map(Into::into).collect())
    }
}
