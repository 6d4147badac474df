use std::collections::HashMap;

/// One decoded CSV record, keyed by header name.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub line: usize,
    pub fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Trimmed value, `None` when the column is absent or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
