//! Content-type unit families
//!
//! Each family pairs a small required-field validator with a single delegated
//! host call. Concrete units supply data — the required fields and any
//! argument overrides — rather than overriding behavior:
//!
//! | Family | Required fields | Host call |
//! |--------|-----------------|-----------|
//! | [`ContentType`] | `slug` | structured-content type |
//! | [`Taxonomy`] | `slug`, `object_types` | taxonomy |
//! | [`Menu`] | `location`, `description` | navigation menu location |
//! | [`MetaBox`] | `id`, `screens`, render handler | UI panel |
//! | [`Endpoint`] | `namespace`, `route` (or `slug`), handler | API route |
//! | [`ShortcodeService`] | `tag` | text-substitution tag |
//!
//! Validation failures stop registration before the host is touched; there is
//! no partial registration.

mod content_type;
mod endpoint;
mod menu;
mod meta_box;
mod shortcode;
mod taxonomy;

pub use content_type::ContentType;
pub use endpoint::{Endpoint, RouteRegistration};
pub use menu::Menu;
pub use meta_box::{MetaBox, MetaBoxContext, MetaBoxPriority, MetaBoxRegistration};
pub use shortcode::{Shortcode, ShortcodeInput, ShortcodeService};
pub use taxonomy::Taxonomy;
