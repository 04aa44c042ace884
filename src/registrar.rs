//! Service registrar and extension entry point
//!
//! A [`ServiceRegistrar`] is the composition root of an extension: an ordered
//! list of unit factories, run in insertion order during a single activation
//! pass. Units are constructed at activation time, not when they are added,
//! mirroring a registry of unit identifiers rather than live instances.
//!
//! Failure semantics are deliberately simple: the registrar catches nothing.
//! If constructing or running one unit fails, the error propagates to the
//! activation caller and no later unit is constructed or run.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::host::Host;
use crate::lifecycle::Runnable;

type UnitFactory = Box<dyn Fn() -> Box<dyn Runnable>>;

/// Composition root that owns and runs an ordered list of extension units.
#[derive(Default)]
pub struct ServiceRegistrar {
    factories: Vec<UnitFactory>,
    base_path: Option<PathBuf>,
}

impl ServiceRegistrar {
    /// Creates an empty registrar with no shared context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registrar whose units may receive the given base path.
    pub fn with_base_path(path: impl Into<PathBuf>) -> Self {
        Self {
            factories: Vec::new(),
            base_path: Some(path.into()),
        }
    }

    /// Sets or replaces the shared base path.
    pub fn set_base_path(&mut self, path: impl Into<PathBuf>) {
        self.base_path = Some(path.into());
    }

    /// The shared base path units opt into, if configured.
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Appends a unit constructible via [`Default`].
    ///
    /// Insertion order is execution order. Duplicates are permitted, though
    /// rarely what you want.
    pub fn add<U>(&mut self) -> &mut Self
    where
        U: Runnable + Default + 'static,
    {
        self.add_factory(U::default)
    }

    /// Appends a unit built by the given factory at activation time.
    pub fn add_factory<F, U>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> U + 'static,
        U: Runnable + 'static,
    {
        self.factories.push(Box::new(move || {
            let unit: Box<dyn Runnable> = Box::new(factory());
            unit
        }));
        self
    }

    /// Number of units this registrar will construct.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Constructs and runs every unit, in order.
    ///
    /// Units that expose the path capability receive the shared base path
    /// before they run. The first failure aborts the pass; units after it are
    /// never constructed.
    pub fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        let total = self.factories.len();

        for (index, factory) in self.factories.iter().enumerate() {
            let mut unit = factory();

            if let Some(path) = &self.base_path {
                if let Some(aware) = unit.as_path_aware() {
                    aware.set_base_path(path);
                }
            }

            debug!(unit = index + 1, total, "running extension unit");
            unit.run(host)?;
        }

        Ok(())
    }
}

/// A registrar is itself a unit, so registrars nest.
impl Runnable for ServiceRegistrar {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        ServiceRegistrar::run(self, host)
    }
}

/// Top-level entry point for one extension: a named registrar.
///
/// ```
/// use armature::{Extension, RecordingHost};
/// use armature::content::Menu;
///
/// let mut extension = Extension::new("my-extension")
///     .service_with(|| Menu::new("primary", "Primary Nav"));
///
/// let mut host = RecordingHost::new();
/// extension.activate(&mut host).unwrap();
/// assert_eq!(host.calls, vec!["menu:primary"]);
/// ```
pub struct Extension {
    name: String,
    registrar: ServiceRegistrar,
}

impl Extension {
    /// Creates an extension with no services and no base path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registrar: ServiceRegistrar::new(),
        }
    }

    /// Sets the base path shared with path-aware services.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registrar.set_base_path(path);
        self
    }

    /// Adds a service constructible via [`Default`].
    pub fn service<U>(mut self) -> Self
    where
        U: Runnable + Default + 'static,
    {
        self.registrar.add::<U>();
        self
    }

    /// Adds a service built by the given factory at activation time.
    pub fn service_with<F, U>(mut self, factory: F) -> Self
    where
        F: Fn() -> U + 'static,
        U: Runnable + 'static,
    {
        self.registrar.add_factory(factory);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs every service against the host, in declared order.
    pub fn activate(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        debug!(extension = %self.name, services = self.registrar.len(), "activating extension");
        self.registrar.run(host)
    }
}

impl Runnable for Extension {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.activate(host)
    }
}
