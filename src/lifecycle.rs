//! Lifecycle contract for extension units
//!
//! Every extension unit — a content type, a menu, an API endpoint, or a whole
//! nested registrar — exposes a single [`Runnable::run`] entry point invoked
//! exactly once when its owner activates. Side effects happen against the
//! injected [`Host`]; there is no teardown phase.
//!
//! Units that need the registrar's shared base path opt in through the
//! [`PathAware`] capability. The registrar discovers the capability via
//! [`Runnable::as_path_aware`] rather than any runtime introspection.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::host::Host;

/// The uniform entry point for every extension unit.
pub trait Runnable {
    /// Performs this unit's registration work against the host.
    ///
    /// Called exactly once per activation. Calling `run` a second time on the
    /// same unit is not a supported use case and its behavior is unspecified.
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error>;

    /// Opt-in hook for the shared base-path context.
    ///
    /// Units that need the owning registrar's base path return `Some(self)`
    /// here; the registrar injects the path before calling [`run`](Self::run).
    /// The default declines the capability.
    fn as_path_aware(&mut self) -> Option<&mut dyn PathAware> {
        None
    }
}

/// Capability for units that resolve files relative to a shared base path.
///
/// The path is written once by the owning registrar before the unit runs and
/// is read-only from the unit's perspective afterwards.
pub trait PathAware {
    /// Stores the base path injected by the registrar.
    fn set_base_path(&mut self, path: &Path);

    /// The injected base path, if one has been set.
    fn base_path(&self) -> Option<&Path>;
}

/// Minimal reusable storage for the [`PathAware`] capability.
///
/// Family types embed this rather than re-deriving the same two methods.
#[derive(Debug, Clone, Default)]
pub struct BasePath(Option<PathBuf>);

impl BasePath {
    pub fn set(&mut self, path: &Path) {
        self.0 = Some(path.to_path_buf());
    }

    pub fn get(&self) -> Option<&Path> {
        self.0.as_deref()
    }
}

/// Closures are accepted anywhere a generic service unit is expected.
impl<F> Runnable for F
where
    F: FnMut(&mut dyn Host) -> Result<(), Error>,
{
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn closure_acts_as_runnable() {
        let mut host = RecordingHost::new();
        let mut unit = |host: &mut dyn Host| -> Result<(), Error> {
            host.register_menu("footer", "Footer Nav")?;
            Ok(())
        };

        unit.run(&mut host).unwrap();

        assert_eq!(host.menus, vec![("footer".to_string(), "Footer Nav".to_string())]);
    }

    #[test]
    fn default_unit_declines_path_capability() {
        let mut unit = |_host: &mut dyn Host| -> Result<(), Error> { Ok(()) };

        assert!(Runnable::as_path_aware(&mut unit).is_none());
    }

    #[test]
    fn base_path_storage_round_trip() {
        let mut base = BasePath::default();
        assert!(base.get().is_none());

        base.set(Path::new("/ext/my-extension"));
        assert_eq!(base.get(), Some(Path::new("/ext/my-extension")));
    }
}
