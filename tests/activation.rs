//! Activation integration tests
//!
//! These exercise a whole extension the way a host would: build an
//! [`Extension`] from several unit families, activate it once against a
//! recording host, and assert on the exact sequence and arguments of the
//! registration calls.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use armature::content::{
    ContentType, Endpoint, Menu, MetaBox, Shortcode, ShortcodeInput, ShortcodeService, Taxonomy,
};
use armature::editor::Block;
use armature::{ArgMap, Error, Extension, Host, RecordingHost, Runnable};

/// Creates an extension directory with a built editor script.
fn extension_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/editor.js"), "// js").unwrap();
    dir
}

#[derive(Default)]
struct Copyright {
    input: ShortcodeInput,
}

impl Shortcode for Copyright {
    fn tag(&self) -> &str {
        "copyright"
    }

    fn input(&self) -> &ShortcodeInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut ShortcodeInput {
        &mut self.input
    }

    fn render(&self) -> String {
        let year = self
            .input
            .attributes
            .get("year")
            .and_then(|v| v.as_u64())
            .unwrap_or(2024);
        format!("© {year}")
    }
}

#[test]
fn full_extension_activates_in_declared_order() {
    let dir = extension_dir();

    let mut extension = Extension::new("library")
        .base_path(dir.path())
        .service_with(|| ContentType::new("book").label("singular_name", "Book"))
        .service_with(|| Taxonomy::new("genre").object_type("book"))
        .service_with(|| Menu::new("primary", "Primary Nav"))
        .service_with(|| {
            MetaBox::new("release-details")
                .title("Release Details")
                .screen("book")
                .render(|_| "<p>details</p>".to_string())
        })
        .service_with(|| {
            Endpoint::new("library/v1")
                .slug("books")
                .handler(|params| params)
        })
        .service_with(|| ShortcodeService::new(Copyright::default()))
        .service_with(|| Block::new("library/book-showcase").script("editor.js"));

    let mut host = RecordingHost::new();
    extension.activate(&mut host).unwrap();

    assert_eq!(
        host.calls,
        vec![
            "content_type:book",
            "taxonomy:genre",
            "menu:primary",
            "meta_box:release-details",
            "route:library/v1/books",
            "shortcode:copyright",
            "block:library/book-showcase",
        ]
    );
}

#[test]
fn base_path_flows_from_extension_to_blocks() {
    let dir = extension_dir();

    let mut extension = Extension::new("library")
        .base_path(dir.path())
        .service_with(|| Block::new("library/book-showcase").script("editor.js"));

    let mut host = RecordingHost::new();
    extension.activate(&mut host).unwrap();

    assert_eq!(
        host.blocks[0].script.as_deref(),
        Some(dir.path().join("build/editor.js").as_path())
    );
}

#[test]
fn misconfigured_unit_aborts_the_rest_of_the_pass() {
    let mut extension = Extension::new("library")
        .service_with(|| ContentType::new("book"))
        .service_with(|| Menu::new("primary", "")) // invalid: empty description
        .service_with(|| Taxonomy::new("genre").object_type("book"));

    let mut host = RecordingHost::new();
    let err = extension.activate(&mut host).unwrap_err();

    assert!(matches!(
        err,
        Error::RequirementNotMet {
            unit: "Menu",
            field: "description",
            ..
        }
    ));
    // The first unit registered; the failing one and everything after did not.
    assert_eq!(host.calls, vec!["content_type:book"]);
}

#[test]
fn fixing_the_reported_field_makes_activation_succeed() {
    let mut host = RecordingHost::new();

    let err = Menu::new("primary", "").register(&mut host).unwrap_err();
    assert!(matches!(
        err,
        Error::RequirementNotMet {
            field: "description",
            ..
        }
    ));

    Menu::new("primary", "Primary Nav")
        .register(&mut host)
        .unwrap();
    assert_eq!(
        host.menus,
        vec![("primary".to_string(), "Primary Nav".to_string())]
    );
}

#[test]
fn host_failures_propagate_to_the_activation_caller() {
    /// Host that rejects every call.
    struct RefusingHost;

    impl Host for RefusingHost {
        fn register_content_type(&mut self, slug: &str, _args: &ArgMap) -> anyhow::Result<()> {
            anyhow::bail!("host refused content type `{slug}`")
        }

        fn register_taxonomy(
            &mut self,
            _slug: &str,
            _object_types: &[String],
            _args: &ArgMap,
        ) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }

        fn register_menu(&mut self, _location: &str, _description: &str) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }

        fn register_meta_box(
            &mut self,
            _registration: armature::content::MetaBoxRegistration,
            _render: armature::RenderHandler,
        ) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }

        fn register_route(
            &mut self,
            _registration: armature::content::RouteRegistration,
            _handler: armature::RouteHandler,
        ) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }

        fn register_shortcode(
            &mut self,
            _tag: &str,
            _handler: armature::ShortcodeHandler,
        ) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }

        fn register_block(
            &mut self,
            _registration: armature::editor::BlockRegistration,
        ) -> anyhow::Result<()> {
            anyhow::bail!("refused")
        }
    }

    let mut extension =
        Extension::new("library").service_with(|| ContentType::new("book"));

    let mut host = RefusingHost;
    let err = extension.activate(&mut host).unwrap_err();

    match err {
        Error::Host(inner) => {
            assert!(inner.to_string().contains("host refused content type `book`"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn shortcode_handler_reflects_latest_call_inputs() {
    let mut host = RecordingHost::new();
    ShortcodeService::new(Copyright::default())
        .run(&mut host)
        .unwrap();

    let handler = host.shortcode_handler("copyright").unwrap();

    let mut attrs = ArgMap::new();
    attrs.insert("year".to_string(), json!(1998));
    assert_eq!(handler(attrs, ""), "© 1998");

    let mut attrs = ArgMap::new();
    attrs.insert("year".to_string(), json!(2001));
    assert_eq!(handler(attrs, ""), "© 2001");
}

#[test]
fn nested_registrars_run_depth_first_in_order() {
    use armature::ServiceRegistrar;

    let mut extension = Extension::new("library")
        .service_with(|| {
            let mut inner = ServiceRegistrar::new();
            inner.add_factory(|| ContentType::new("book"));
            inner.add_factory(|| Taxonomy::new("genre").object_type("book"));
            inner
        })
        .service_with(|| Menu::new("primary", "Primary Nav"));

    let mut host = RecordingHost::new();
    extension.activate(&mut host).unwrap();

    assert_eq!(
        host.calls,
        vec!["content_type:book", "taxonomy:genre", "menu:primary"]
    );
}
