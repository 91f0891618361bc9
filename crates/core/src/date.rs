//! Strict `YYYY-MM-DD` dates.
//!
//! chrono's `FromStr` for `NaiveDate` tolerates signs, unpadded fields and
//! surrounding whitespace. The wire form is exactly ten characters, so the
//! validator and the serde adapters below share [`parse`].
//!
//! ```ignore
//! #[serde(with = "erpnext_core::date")]
//! pub posting_date: NaiveDate,
//!
//! #[serde(default, with = "erpnext_core::date::option", skip_serializing_if = "Option::is_none")]
//! pub exp_end_date: Option<NaiveDate>,
//! ```

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serializer};

pub const FORMAT: &str = "%Y-%m-%d";

const EXPECTING: &str = "a date in YYYY-MM-DD form";

/// Parse a canonical `YYYY-MM-DD` date. Anything else is `None`.
pub fn parse(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let canonical = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !canonical {
        return None;
    }
    NaiveDate::parse_from_str(s, FORMAT).ok()
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&s), &EXPECTING))
}

/// Same as the parent module for optional fields; `null` reads as `None`.
pub mod option {
    use chrono::NaiveDate;
    use serde::de::{self, Deserializer, Unexpected};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                super::parse(&s)
                    .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&s), &super::EXPECTING))
            })
            .transpose()
    }
}
