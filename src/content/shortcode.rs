//! Shortcode (text-substitution tag) registration
//!
//! A shortcode differs from the other families in that the host calls back
//! into the unit after registration: every occurrence of the tag in content
//! triggers the handler with the call-time attributes and enclosed content.
//! The intermediary handler installed here first stores those inputs on the
//! unit, then returns the unit's rendered string unmodified — the host
//! requires string output, never nothing.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::args::{require_string, ArgMap};
use crate::error::Error;
use crate::host::{Host, ShortcodeHandler};
use crate::lifecycle::Runnable;

const UNIT: &str = "Shortcode";

/// Call-time inputs captured before rendering.
#[derive(Debug, Clone, Default)]
pub struct ShortcodeInput {
    /// Attributes supplied at the call site.
    pub attributes: ArgMap,
    /// Content enclosed by the tag, empty for self-closing occurrences.
    pub content: String,
}

/// A text-substitution tag.
///
/// Implementors own a [`ShortcodeInput`] and render from it; the provided
/// [`process_output`](Shortcode::process_output) wires the two together and
/// is what the host ends up invoking.
pub trait Shortcode: Send {
    /// The tag this shortcode replaces.
    fn tag(&self) -> &str;

    /// The captured call-time inputs.
    fn input(&self) -> &ShortcodeInput;

    /// Mutable access for input capture.
    fn input_mut(&mut self) -> &mut ShortcodeInput;

    /// Produces the replacement string from the current inputs.
    fn render(&self) -> String;

    /// Stores the call-time inputs, then renders.
    ///
    /// Always reflects the latest inputs: calling twice with different
    /// attributes renders from the second set.
    fn process_output(&mut self, attributes: ArgMap, content: &str) -> String {
        let input = self.input_mut();
        input.attributes = attributes;
        input.content = content.to_string();
        self.render()
    }
}

/// Lifecycle wrapper that registers a [`Shortcode`] with the host.
///
/// On `run`, the shortcode is validated, moved into a shared-state handler,
/// and handed to the host. Running the service again after the unit has been
/// handed over is a documented no-op.
pub struct ShortcodeService {
    shortcode: Option<Box<dyn Shortcode>>,
}

impl ShortcodeService {
    pub fn new(shortcode: impl Shortcode + 'static) -> Self {
        Self {
            shortcode: Some(Box::new(shortcode)),
        }
    }

    /// Validates the tag and delegates the registration call.
    pub fn register(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        if let Some(shortcode) = self.shortcode.as_ref() {
            require_string(UNIT, "tag", shortcode.tag())?;
        }

        // Validated; hand the unit over to the host.
        let Some(shortcode) = self.shortcode.take() else {
            return Ok(());
        };
        let tag = shortcode.tag().to_string();

        let state = Mutex::new(shortcode);
        let handler: ShortcodeHandler = Arc::new(move |attributes, content| {
            let mut unit = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            unit.process_output(attributes, content)
        });

        host.register_shortcode(&tag, handler)?;

        debug!(tag = %tag, "registered shortcode");
        Ok(())
    }
}

impl Runnable for ShortcodeService {
    fn run(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        self.register(host)
    }
}
