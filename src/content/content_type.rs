//! Structured-content type registration

use serde_json::json;
use tracing::debug;

use crate::args::{merge_args, require_string, ArgMap};
use crate::error::Error;
use crate::host::Host;
use crate::lifecycle::Runnable;

const UNIT: &str = "ContentType";

/// A named structured-content type.
///
/// Requires a non-empty `slug`. Family defaults make the type public with
/// title and editor support; overrides supplied through [`arg`](Self::arg)
/// win over defaults on key collision.
#[derive(Debug, Clone, Default)]
pub struct ContentType {
    slug: String,
    labels: ArgMap,
    args: ArgMap,
}

impl ContentType {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            labels: ArgMap::new(),
            args: ArgMap::new(),
        }
    }

    /// Adds a display label (e.g. `singular_name`).
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

    /// Validates the slug and delegates the registration call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        require_string(UNIT, "slug", &self.slug)?;

        let merged = merge_args(self.default_args(), &self.args);
        host.register_content_type(&self.slug, &merged)?;

        debug!(slug = %self.slug, "registered content type");
        Ok(())
    }

    fn default_args(&self) -> ArgMap {
        let mut defaults = ArgMap::new();
        defaults.insert("labels".to_string(), json!(self.labels));
        defaults.insert("public".to_string(), json!(true));
        defaults.insert("supports".to_string(), json!(["title", "editor"]));
        defaults
    }
}

impl Runnable for ContentType {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
