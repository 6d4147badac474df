use std::fmt;
use serde::Serialize;
use crate::enums::month::Month;

/// Outer grouping key of every import: one DTO per month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PeriodKey {
    pub month: Month,
    pub year: u16,
}

impl PeriodKey {
    pub fn new(month: Month, year: u16) -> Self {
        Self { month, year }
    }
}

impl Ord for PeriodKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.year.cmp(&other.year).then(self.month.cmp(&other.month))
    }
}

impl PartialOrd for PeriodKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}
