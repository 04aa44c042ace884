//! Argument maps and required-field validation
//!
//! Every family of extension units shares the same two mechanics:
//!
//! 1. a *validator table* — a handful of checks that each required field is
//!    present and well-shaped, failing with a descriptive error naming the
//!    unit and the field;
//! 2. an *argument merge* — family defaults overlaid with the unit's own
//!    overrides before the host call.
//!
//! Merge precedence is defaults-then-overrides: an override value always wins
//! on key collision, and unspecified keys keep their defaults.

use serde_json::Value;

use crate::error::Error;

/// Configuration map passed to host registration calls.
pub type ArgMap = serde_json::Map<String, Value>;

/// Merges unit-specific overrides over a family-level default set.
///
/// Later values win: every key in `overrides` replaces the matching default,
/// and defaults not mentioned by `overrides` are kept as-is.
pub fn merge_args(mut defaults: ArgMap, overrides: &ArgMap) -> ArgMap {
    for (key, value) in overrides {
        defaults.insert(key.clone(), value.clone());
    }
    defaults
}

/// Checks that a required string field is non-empty.
pub fn require_string(unit: &'static str, field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::requirement(
            unit,
            field,
            "must be a non-empty string",
        ));
    }

    Ok(())
}

/// Checks that a required list field has at least one entry.
pub fn require_list<T>(unit: &'static str, field: &'static str, items: &[T]) -> Result<(), Error> {
    if items.is_empty() {
        return Err(Error::requirement(unit, field, "must name at least one entry"));
    }

    Ok(())
}
