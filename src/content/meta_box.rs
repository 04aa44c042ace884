//! Meta box (UI panel) registration

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::{require_list, require_string, ArgMap};
use crate::error::Error;
use crate::host::{Host, RenderHandler};
use crate::lifecycle::Runnable;

const UNIT: &str = "MetaBox";

/// Where on the edit screen the panel is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaBoxContext {
    Normal,
    #[default]
    Side,
    Advanced,
}

impl MetaBoxContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaBoxContext::Normal => "normal",
            MetaBoxContext::Side => "side",
            MetaBoxContext::Advanced => "advanced",
        }
    }
}

/// Ordering of the panel within its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaBoxPriority {
    High,
    Low,
    #[default]
    Default,
}

impl MetaBoxPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaBoxPriority::High => "high",
            MetaBoxPriority::Low => "low",
            MetaBoxPriority::Default => "default",
        }
    }
}

/// Validated descriptor handed to the host, minus the render callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaBoxRegistration {
    pub id: String,
    pub title: String,
    pub screens: Vec<String>,
    pub context: MetaBoxContext,
    pub priority: MetaBoxPriority,
    /// Passed back to the render callback at display time.
    pub callback_args: ArgMap,
}

/// A UI panel displayed on one or more edit screens.
///
/// Requires a non-empty `id`, at least one target screen, and a render
/// handler. Placement and priority are typed, so only the enumerated values
/// exist.
#[derive(Default)]
pub struct MetaBox {
    id: String,
    title: String,
    screens: Vec<String>,
    context: MetaBoxContext,
    priority: MetaBoxPriority,
    callback_args: ArgMap,
    render: Option<RenderHandler>,
}

impl MetaBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Title shown at the top of the panel.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a screen the panel appears on. May be called multiple times.
    pub fn screen(mut self, screen: impl Into<String>) -> Self {
        self.screens.push(screen.into());
        self
    }

    pub fn context(mut self, context: MetaBoxContext) -> Self {
        self.context = context;
        self
    }

    pub fn priority(mut self, priority: MetaBoxPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds an argument forwarded to the render callback at display time.
    pub fn callback_arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.callback_args.insert(key.into(), value);
        self
    }

    /// Sets the render callback producing the panel markup.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&ArgMap) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Validates the panel and delegates the registration call.
    pub fn register(&self, host: &mut dyn Host) -> Result<(), Error> {
        require_string(UNIT, "id", &self.id)?;
        require_list(UNIT, "screens", &self.screens)?;

        let render = self.render.as_ref().ok_or_else(|| {
            Error::requirement(UNIT, "render", "a render handler must be provided")
        })?;

        let registration = MetaBoxRegistration {
            id: self.id.clone(),
            title: self.title.clone(),
            screens: self.screens.clone(),
            context: self.context,
            priority: self.priority,
            callback_args: self.callback_args.clone(),
        };

        host.register_meta_box(registration, Arc::clone(render))?;

        debug!(id = %self.id, "registered meta box");
        Ok(())
    }
}

impl Runnable for MetaBox {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
