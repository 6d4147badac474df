use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

const FULL_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan, Month::Feb, Month::Mar, Month::Apr, Month::May, Month::Jun,
        Month::Jul, Month::Aug, Month::Sep, Month::Oct, Month::Nov, Month::Dec,
    ];

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        if (1..=12).contains(&number) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl FromStr for Month {
    type Err = String;

    /// Accepts "Jan", "january", "JANUARY" or "1".."12".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if let Ok(number) = value.parse::<u32>() {
            return Month::from_number(number).ok_or_else(|| format!("month number out of range: {}", number));
        }

        let lower = value.to_lowercase();
        FULL_NAMES
            .iter()
            .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| format!("unknown month: {}", value))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_abbreviations_full_names_and_numbers() {
        assert_eq!("Jan".parse::<Month>(), Ok(Month::Jan));
        assert_eq!("september".parse::<Month>(), Ok(Month::Sep));
        assert_eq!(" DECEMBER ".parse::<Month>(), Ok(Month::Dec));
        assert_eq!("7".parse::<Month>(), Ok(Month::Jul));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("13".parse::<Month>().is_err());
        assert!("0".parse::<Month>().is_err());
        assert!("Ja".parse::<Month>().is_err());
        assert!("Janu".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn orders_by_calendar_position() {
        assert!(Month::Feb < Month::Nov);
        assert_eq!(Month::Dec.number(), 12);
        assert_eq!(Month::Mar.to_string(), "Mar");
    }
}
