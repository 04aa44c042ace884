//! API endpoint registration

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::args::{merge_args, require_string, ArgMap};
use crate::error::Error;
use crate::host::{Host, RouteHandler};
use crate::lifecycle::Runnable;

const UNIT: &str = "Endpoint";

/// Validated descriptor handed to the host, minus the request handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRegistration {
    pub namespace: String,
    pub route: String,
    /// Merged registration arguments (`methods` plus any overrides).
    pub args: ArgMap,
}

/// An API route under a namespace.
///
/// Requires a non-empty `namespace`, a route — either set explicitly or
/// derived from a `slug` as `/{slug}` — and a request handler. The family
/// default allows `GET` only; override `methods` to widen it.
#[derive(Default)]
pub struct Endpoint {
    namespace: String,
    route: Option<String>,
    slug: Option<String>,
    handler: Option<RouteHandler>,
    args: ArgMap,
}

impl Endpoint {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Sets the route explicitly (takes precedence over `slug`).
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Sets a slug from which the route is derived as `/{slug}`.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the request handler invoked by the host.
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Overrides or extends the registration arguments (e.g. `methods`).
    pub fn arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    /// Derives the route, validates, and delegates the registration call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        require_string(UNIT, "namespace", &self.namespace)?;

        let route = match (&self.route, &self.slug) {
            (Some(route), _) => route.clone(),
            (None, Some(slug)) => format!("/{slug}"),
            (None, None) => String::new(),
        };
        if route.trim().is_empty() {
            return Err(Error::requirement(
                UNIT,
                "route",
                "set a route, or a slug to derive one from",
            ));
        }

        let handler = self.handler.as_ref().ok_or_else(|| {
            Error::requirement(UNIT, "handler", "a request handler must be provided")
        })?;

        let mut defaults = ArgMap::new();
        defaults.insert("methods".to_string(), json!(["GET"]));
        let merged = merge_args(defaults, &self.args);

        let registration = RouteRegistration {
            namespace: self.namespace.clone(),
            route: route.clone(),
            args: merged,
        };
        host.register_route(registration, Arc::clone(handler))?;

        debug!(namespace = %self.namespace, route = %route, "registered endpoint");
        Ok(())
    }
}

impl Runnable for Endpoint {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
