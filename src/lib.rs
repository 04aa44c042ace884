//! Armature - a structured lifecycle and registration framework for
//! content-management host extensions
//!
//! Armature gives plugin-style extensions a uniform shape: every unit of an
//! extension (a content type, a menu, an API endpoint, a UI block) validates
//! its required fields and then delegates a single call to the host platform,
//! and a registrar composes many such units into one ordered activation pass.
//!
//! The host itself is abstracted behind the [`Host`] trait, so activation
//! logic is testable against [`RecordingHost`] without a live platform.
//!
//! ```
//! use armature::{Extension, RecordingHost};
//! use armature::content::{ContentType, Menu, Taxonomy};
//!
//! let mut extension = Extension::new("library")
//!     .service_with(|| ContentType::new("book").label("singular_name", "Book"))
//!     .service_with(|| Taxonomy::new("genre").object_type("book"))
//!     .service_with(|| Menu::new("primary", "Primary Nav"));
//!
//! let mut host = RecordingHost::new();
//! extension.activate(&mut host).unwrap();
//!
//! assert_eq!(host.calls, vec!["content_type:book", "taxonomy:genre", "menu:primary"]);
//! ```

pub mod args;
pub mod content;
pub mod editor;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod registrar;

pub use args::{merge_args, ArgMap};
pub use error::Error;
pub use host::{Host, RecordingHost, RenderHandler, RouteHandler, ShortcodeHandler};
pub use lifecycle::{PathAware, Runnable};
pub use registrar::{Extension, ServiceRegistrar};
