use crate::config::constants::{COUNT_FIELD, MONTH_FIELD, YEAR_FIELD};
use crate::structs::leaf_key::LeafKey;

/// Column layout and vocabulary of one CSV import page.
///
/// Every kind shares the `month,year,...,count` frame; only the group column
/// and the leaf column (with its closed set of values) differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSchema {
    pub group_field: &'static str,
    pub leaf_field: &'static str,
    pub allowed_leaves: &'static [&'static str],
    pub default_endpoint: &'static str,
}

impl ImportSchema {
    pub fn headers(&self) -> [&'static str; 5] {
        [MONTH_FIELD, YEAR_FIELD, self.group_field, self.leaf_field, COUNT_FIELD]
    }

    pub fn header_line(&self, delimiter: char) -> String {
        self.headers().join(&delimiter.to_string())
    }

    /// Case-insensitive lookup into the allowed leaf values.
    pub fn leaf_key(&self, value: &str) -> Option<LeafKey> {
        let value = value.trim();
        self.allowed_leaves
            .iter()
            .position(|allowed| allowed.eq_ignore_ascii_case(value))
            .map(|rank| LeafKey::new(rank, self.allowed_leaves[rank]))
    }
}
