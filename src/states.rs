//! Static lookup between US postal abbreviations and state names.
//!
//! Covers the 50 states plus the District of Columbia and Puerto Rico.
//! Lookups are exact and case-sensitive.

use crate::error::{LambdataError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// The raw table, sorted by code.
pub static STATES: [(&str, &str); 52] = [
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

static GLOBAL: LazyLock<StateLookup> = LazyLock::new(StateLookup::new);

/// Bidirectional index over [`STATES`].
#[derive(Debug)]
pub struct StateLookup {
    by_code: HashMap<&'static str, &'static str>,
    by_name: HashMap<&'static str, &'static str>,
}

impl StateLookup {
    fn new() -> Self {
        let by_code = STATES.iter().copied().collect();
        let by_name = STATES.iter().map(|&(code, name)| (name, code)).collect();
        StateLookup { by_code, by_name }
    }

    /// The process-wide table, built on first use and never mutated.
    pub fn global() -> &'static StateLookup {
        &GLOBAL
    }

    pub fn name_to_abbrev(&self, name: &str) -> Result<&'static str> {
        self.by_name.get(name).copied().ok_or_else(|| {
            tracing::debug!(name, "unknown state name");
            LambdataError::LookupMiss(name.to_string())
        })
    }

    pub fn abbrev_to_name(&self, code: &str) -> Result<&'static str> {
        self.by_code.get(code).copied().ok_or_else(|| {
            tracing::debug!(code, "unknown state code");
            LambdataError::LookupMiss(code.to_string())
        })
    }

    /// `(code, name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        STATES.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Postal abbreviation for a full state name, e.g. `"California"` -> `"CA"`.
pub fn state_abbrev(name: &str) -> Result<&'static str> {
    StateLookup::global().name_to_abbrev(name)
}

/// Full state name for a postal abbreviation, e.g. `"CA"` -> `"California"`.
pub fn state_name(code: &str) -> Result<&'static str> {
    StateLookup::global().abbrev_to_name(code)
}
