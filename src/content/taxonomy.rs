//! Taxonomy registration

use serde_json::json;
use tracing::debug;

use crate::args::{merge_args, require_list, require_string, ArgMap};
use crate::error::Error;
use crate::host::Host;
use crate::lifecycle::Runnable;

const UNIT: &str = "Taxonomy";

/// A named taxonomy attached to one or more content types.
///
/// Requires a non-empty `slug` and at least one object type to attach to.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    slug: String,
    object_types: Vec<String>,
    labels: ArgMap,
    args: ArgMap,
}

impl Taxonomy {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Attaches this taxonomy to a content-type slug. May be called multiple
    /// times.
    pub fn object_type(mut self, slug: impl Into<String>) -> Self {
        self.object_types.push(slug.into());
        self
    }

    /// Adds a display label.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .insert(key.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Overrides or extends the registration arguments.
    pub fn arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    /// Validates slug and object types, then delegates the registration call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        require_string(UNIT, "slug", &self.slug)?;
        require_list(UNIT, "object_types", &self.object_types)?;

        let merged = merge_args(self.default_args(), &self.args);
        host.register_taxonomy(&self.slug, &self.object_types, &merged)?;

        debug!(slug = %self.slug, "registered taxonomy");
        Ok(())
    }

    fn default_args(&self) -> ArgMap {
        let mut defaults = ArgMap::new();
        defaults.insert("labels".to_string(), json!(self.labels));
        defaults
    }
}

impl Runnable for Taxonomy {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
