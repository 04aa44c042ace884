//! Host platform boundary
//!
//! The host platform's registration functions are ambient globals in the kind
//! of runtime this crate targets. Here they are modeled as one trait with a
//! method per registration kind, so the core stays testable: activation code
//! receives `&mut dyn Host`, and tests substitute [`RecordingHost`].
//!
//! The framework's only contract with these methods is: call with validated,
//! merged arguments, exactly once per unit, in registration order. What the
//! host does with a call is opaque; failures it reports propagate unchanged
//! to the activation caller.

use std::sync::Arc;

use serde_json::Value;

use crate::args::ArgMap;
use crate::content::{MetaBoxRegistration, RouteRegistration};
use crate::editor::BlockRegistration;

/// Callback invoked by the host to render a meta box panel.
///
/// Receives the `callback_args` the unit registered with.
pub type RenderHandler = Arc<dyn Fn(&ArgMap) -> String + Send + Sync>;

/// Callback invoked by the host when an API route is hit.
pub type RouteHandler = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Callback invoked by the host to expand a shortcode occurrence.
///
/// Receives the call-time attributes and enclosed content; must always yield
/// a string.
pub type ShortcodeHandler = Arc<dyn Fn(ArgMap, &str) -> String + Send + Sync>;

/// The registration surface of the host platform.
///
/// Each method corresponds to one opaque registration function on the real
/// platform. Implementations decide what a call means; the framework only
/// guarantees the arguments it passes have been validated and merged.
pub trait Host {
    /// Registers a named structured-content type with a configuration map.
    fn register_content_type(&mut self, slug: &str, args: &ArgMap) -> anyhow::Result<()>;

    /// Registers a named taxonomy against a set of content-type slugs.
    fn register_taxonomy(
        &mut self,
        slug: &str,
        object_types: &[String],
        args: &ArgMap,
    ) -> anyhow::Result<()>;

    /// Registers a navigation menu location with a description.
    fn register_menu(&mut self, location: &str, description: &str) -> anyhow::Result<()>;

    /// Registers a UI panel against a set of screens with a render callback.
    fn register_meta_box(
        &mut self,
        registration: MetaBoxRegistration,
        render: RenderHandler,
    ) -> anyhow::Result<()>;

    /// Registers an API route under a namespace with a request handler.
    fn register_route(
        &mut self,
        registration: RouteRegistration,
        handler: RouteHandler,
    ) -> anyhow::Result<()>;

    /// Registers a text-substitution tag with a processing callback.
    fn register_shortcode(&mut self, tag: &str, handler: ShortcodeHandler) -> anyhow::Result<()>;

    /// Registers a named UI block with its resolved assets.
    fn register_block(&mut self, registration: BlockRegistration) -> anyhow::Result<()>;
}

/// In-memory [`Host`] double that records every registration call.
///
/// Ships as part of the public API so downstream extensions can assert
/// against their own activation sequences the same way this crate's tests do.
/// The `calls` log captures cross-kind ordering; the per-kind vectors keep
/// the full arguments, including the callbacks, which tests may invoke.
#[derive(Default)]
pub struct RecordingHost {
    /// One entry per call, in order, formatted `kind:identifier`.
    pub calls: Vec<String>,
    pub content_types: Vec<(String, ArgMap)>,
    pub taxonomies: Vec<(String, Vec<String>, ArgMap)>,
    pub menus: Vec<(String, String)>,
    pub meta_boxes: Vec<(MetaBoxRegistration, RenderHandler)>,
    pub routes: Vec<(RouteRegistration, RouteHandler)>,
    pub shortcodes: Vec<(String, ShortcodeHandler)>,
    pub blocks: Vec<BlockRegistration>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a recorded shortcode handler by tag.
    pub fn shortcode_handler(&self, tag: &str) -> Option<&ShortcodeHandler> {
        self.shortcodes
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, handler)| handler)
    }
}

impl Host for RecordingHost {
    fn register_content_type(&mut self, slug: &str, args: &ArgMap) -> anyhow::Result<()> {
        self.calls.push(format!("content_type:{slug}"));
        self.content_types.push((slug.to_string(), args.clone()));
        Ok(())
    }

    fn register_taxonomy(
        &mut self,
        slug: &str,
        object_types: &[String],
        args: &ArgMap,
    ) -> anyhow::Result<()> {
        self.calls.push(format!("taxonomy:{slug}"));
        self.taxonomies
            .push((slug.to_string(), object_types.to_vec(), args.clone()));
        Ok(())
    }

    fn register_menu(&mut self, location: &str, description: &str) -> anyhow::Result<()> {
        self.calls.push(format!("menu:{location}"));
        self.menus
            .push((location.to_string(), description.to_string()));
        Ok(())
    }

    fn register_meta_box(
        &mut self,
        registration: MetaBoxRegistration,
        render: RenderHandler,
    ) -> anyhow::Result<()> {
        self.calls.push(format!("meta_box:{}", registration.id));
        self.meta_boxes.push((registration, render));
        Ok(())
    }

    fn register_route(
        &mut self,
        registration: RouteRegistration,
        handler: RouteHandler,
    ) -> anyhow::Result<()> {
        self.calls.push(format!(
            "route:{}{}",
            registration.namespace, registration.route
        ));
        self.routes.push((registration, handler));
        Ok(())
    }

    fn register_shortcode(&mut self, tag: &str, handler: ShortcodeHandler) -> anyhow::Result<()> {
        self.calls.push(format!("shortcode:{tag}"));
        self.shortcodes.push((tag.to_string(), handler));
        Ok(())
    }

    fn register_block(&mut self, registration: BlockRegistration) -> anyhow::Result<()> {
        self.calls.push(format!("block:{}", registration.name));
        self.blocks.push(registration);
        Ok(())
    }
}
