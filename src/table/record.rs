//! Table records.

use super::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// An ordered mapping from field name to value.
///
/// Records are identified by their position in the input list, not by a key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Get a field value, if present.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a field value, treating a missing field as [`CellValue::Empty`].
    pub fn value(&self, key: &str) -> &CellValue {
        self.get(key).unwrap_or(&EMPTY)
    }

    /// Iterate over all field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Whether any field's string form contains the lowercased needle.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.values().any(|v| v.contains_lowercase(needle_lower))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let record = Record::new().with("name", "Alpha").with("amount", 10.0);
        let values: Vec<&CellValue> = record.values().collect();
        assert_eq!(values, vec![&CellValue::from("Alpha"), &CellValue::Number(10.0)]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut record = Record::new().with("status", "pending");
        record.insert("status", "paid");
        assert_eq!(record.values().count(), 1);
        assert_eq!(record.value("status"), &CellValue::from("paid"));
    }

    #[test]
    fn test_missing_field_is_empty() {
        let record = Record::new().with("name", "Alpha");
        assert!(record.get("missing").is_none());
        assert_eq!(record.value("missing"), &CellValue::Empty);
    }

    #[test]
    fn test_matches_any_field() {
        let record = Record::new()
            .with("name", "Empresa ABC Ltda")
            .with("city", "São Paulo");
        assert!(record.matches("abc"));
        assert!(record.matches("são"));
        assert!(!record.matches("rio"));
    }

    #[test]
    fn test_from_iter() {
        let record: Record = vec![("a", 1_i64), ("b", 2_i64)].into_iter().collect();
        assert_eq!(record.value("b"), &CellValue::Integer(2));
        assert_eq!(record.values().count(), 2);
    }
}
