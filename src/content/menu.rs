//! Navigation menu registration

use tracing::debug;

use crate::args::require_string;
use crate::error::Error;
use crate::host::Host;
use crate::lifecycle::Runnable;

const UNIT: &str = "Menu";

/// A navigation menu location.
///
/// Requires a non-empty `location` and `description`; there is no argument
/// map for this family — the host call takes the pair directly.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    location: String,
    description: String,
}

impl Menu {
    pub fn new(location: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            description: description.into(),
        }
    }

    /// Validates both fields and delegates the registration call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        require_string(UNIT, "location", &self.location)?;
        require_string(UNIT, "description", &self.description)?;

        host.register_menu(&self.location, &self.description)?;

        debug!(location = %self.location, "registered menu");
        Ok(())
    }
}

impl Runnable for Menu {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
