//! Editor block registration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::ArgMap;
use crate::error::Error;
use crate::host::Host;
use crate::lifecycle::{BasePath, PathAware, Runnable};

use super::assets::locate_asset;

const UNIT: &str = "Block";

/// Validated descriptor handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRegistration {
    /// Two-part namespaced block name, e.g. `library/book-showcase`.
    pub name: String,
    /// Resolved script path, when a script asset was declared.
    pub script: Option<PathBuf>,
    /// Resolved style path, when a style asset was declared.
    pub style: Option<PathBuf>,
    pub args: ArgMap,
}

/// A named UI block with optional script and style assets.
///
/// Requires a two-part namespaced `name`. Declared assets are resolved
/// against the injected base path before delegation; the block opts into the
/// registrar's path capability for exactly this reason.
#[derive(Debug, Clone, Default)]
pub struct Block {
    name: String,
    script: Option<String>,
    style: Option<String>,
    args: ArgMap,
    base: BasePath,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declares the script asset file name (resolved at registration time).
    pub fn script(mut self, file: impl Into<String>) -> Self {
        self.script = Some(file.into());
        self
    }

    /// Declares the style asset file name (resolved at registration time).
    pub fn style(mut self, file: impl Into<String>) -> Self {
        self.style = Some(file.into());
        self
    }

    /// Overrides or extends the registration arguments.
    pub fn arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    /// Sets the base path directly, for blocks registered outside a
    /// registrar with a shared path.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base.set(&path.into());
        self
    }

    /// Validates the name, resolves assets, and delegates the registration
    /// call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        self.validate_name()?;

        let base = match self.base.get() {
            Some(base) => Some(base),
            None if self.script.is_some() || self.style.is_some() => {
                return Err(Error::requirement(
                    UNIT,
                    "base_path",
                    "assets are declared but no base path was injected",
                ));
            }
            None => None,
        };

        let script = self.resolve(base, self.script.as_deref())?;
        let style = self.resolve(base, self.style.as_deref())?;

        let registration = BlockRegistration {
            name: self.name.clone(),
            script,
            style,
            args: self.args.clone(),
        };
        host.register_block(registration)?;

        debug!(name = %self.name, "registered block");
        Ok(())
    }

    fn validate_name(&self) -> Result<(), Error> {
        let mut parts = self.name.split('/');
        let valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(ns), Some(block), None) if !ns.trim().is_empty() && !block.trim().is_empty()
        );

        if !valid {
            return Err(Error::requirement(
                UNIT,
                "name",
                format!(
                    "`{}` is not a two-part namespaced name like `my-extension/my-block`",
                    self.name
                ),
            ));
        }

        Ok(())
    }

    fn resolve(&self, base: Option<&Path>, asset: Option<&str>) -> Result<Option<PathBuf>, Error> {
        match (base, asset) {
            (Some(base), Some(asset)) => locate_asset(base, asset).map(Some),
            _ => Ok(None),
        }
    }
}

impl PathAware for Block {
    fn set_base_path(&mut self, path: &Path) {
        self.base.set(path);
    }

    fn base_path(&self) -> Option<&Path> {
        self.base.get()
    }
}

impl Runnable for Block {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }

    fn as_path_aware(&mut self) -> Option<&mut dyn PathAware> {
        Some(self)
    }
}
