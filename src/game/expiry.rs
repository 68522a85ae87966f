//! Expiration specs: a positive integer followed by a unit, e.g. "30m",
//! "2h", "3d". The unit is case-insensitive.
//!
//! Creation validates specs strictly. Reads are lenient: a stored spec that
//! no longer parses (hand-edited record, pre-validation data) is treated as
//! "never expires" and logged at warn level rather than taking the game
//! offline. That default is deliberate but questionable; see the tests.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use log::warn;

use crate::game::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryUnit {
    Minutes,
    Hours,
    Days,
}

/// A parsed `<amount><unit>` duration spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationSpec {
    pub amount: u32,
    pub unit: ExpiryUnit,
}

impl ExpirationSpec {
    pub fn duration(&self) -> Duration {
        let amount = i64::from(self.amount);
        match self.unit {
            ExpiryUnit::Minutes => Duration::minutes(amount),
            ExpiryUnit::Hours => Duration::hours(amount),
            ExpiryUnit::Days => Duration::days(amount),
        }
    }
}

impl FromStr for ExpirationSpec {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let bad = || ValidationError::BadExpiration(s.trim().to_string());
        if spec.len() < 2 || !spec.is_ascii() {
            return Err(bad());
        }
        let (digits, unit) = spec.split_at(spec.len() - 1);
        let amount: u32 = digits.parse().map_err(|_| bad())?;
        if amount == 0 {
            return Err(bad());
        }
        let unit = match unit.to_ascii_lowercase().as_str() {
            "m" => ExpiryUnit::Minutes,
            "h" => ExpiryUnit::Hours,
            "d" => ExpiryUnit::Days,
            _ => return Err(bad()),
        };
        Ok(Self { amount, unit })
    }
}

/// Whether a game created at `created_at` has expired by `now`. The
/// comparison is strictly greater-than: elapsed time exactly equal to the
/// spec amount is NOT expired. An absent or empty spec never expires.
pub fn is_expired(spec: Option<&str>, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let Some(spec) = spec else {
        return false;
    };
    let spec = spec.trim();
    if spec.is_empty() {
        return false;
    }
    match spec.parse::<ExpirationSpec>() {
        Ok(parsed) => now.signed_duration_since(created_at) > parsed.duration(),
        Err(_) => {
            warn!("unparseable expiration spec '{spec}', treating game as non-expiring");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_units() {
        assert_eq!(
            "30m".parse::<ExpirationSpec>(),
            Ok(ExpirationSpec {
                amount: 30,
                unit: ExpiryUnit::Minutes
            })
        );
        assert_eq!(
            "2H".parse::<ExpirationSpec>(),
            Ok(ExpirationSpec {
                amount: 2,
                unit: ExpiryUnit::Hours
            })
        );
        assert_eq!(
            "3d".parse::<ExpirationSpec>(),
            Ok(ExpirationSpec {
                amount: 3,
                unit: ExpiryUnit::Days
            })
        );
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "m", "10", "0h", "-1d", "3w", "1.5h", "２h"] {
            assert!(bad.parse::<ExpirationSpec>().is_err(), "accepted {bad:?}");
        }
    }
}
