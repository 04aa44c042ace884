//! Error types for the registration framework
//!
//! Every failure surfaces to the activation caller; nothing is caught or
//! retried inside units or the registrar. A misconfigured unit must never
//! reach the host in a half-registered state.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating and registering extension units.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration field is missing, empty, or malformed.
    ///
    /// Raised before any call to the host is made, so a failing unit never
    /// partially registers.
    #[error("{unit}: requirement not met for `{field}`: {message}")]
    RequirementNotMet {
        /// Type name of the offending unit (e.g. `Menu`).
        unit: &'static str,
        /// The field that failed validation.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A declared asset could not be located at any candidate path.
    #[error("asset `{asset}` not found; tried {}", format_tried(.tried))]
    AssetNotFound {
        /// The asset file name that was requested.
        asset: String,
        /// Every candidate path checked, in order.
        tried: Vec<PathBuf>,
    },

    /// The host rejected a registration call.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

impl Error {
    /// Builds a [`Error::RequirementNotMet`] for a unit/field pair.
    pub fn requirement(unit: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Error::RequirementNotMet {
            unit,
            field,
            message: message.into(),
        }
    }
}

fn format_tried(tried: &[PathBuf]) -> String {
    let paths: Vec<String> = tried.iter().map(|p| p.display().to_string()).collect();
    paths.join(", ")
}
