//! Consignment tracking numbers.

use std::fmt;

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

const MIN_LEN: usize = 6;
const MAX_LEN: usize = 24;

/// A normalized consignment tracking number: 6 to 24 uppercase ASCII
/// letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Normalizes user input (trims, drops spaces and dashes, uppercases)
    /// and validates the result.
    pub fn parse(input: &str) -> Result<Self, &'static str> {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if normalized.is_empty() {
            return Err("Enter a tracking number.");
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Tracking numbers only contain letters and digits.");
        }
        if !(MIN_LEN..=MAX_LEN).contains(&normalized.len()) {
            return Err("Tracking numbers are 6 to 24 characters long.");
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
