//! Block asset location

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::Error;

/// Candidate asset directories under a base path, in resolution order.
pub const CANDIDATE_DIRS: &[&str] = &["assets", "dist", "build"];

/// Resolves an asset file against the candidate directories.
///
/// The first candidate directory containing the file wins. When none does,
/// the error names the asset and every path tried.
pub fn locate_asset(base: &Path, asset: &str) -> Result<PathBuf, Error> {
    let mut tried = Vec::with_capacity(CANDIDATE_DIRS.len());

    for dir in CANDIDATE_DIRS {
        let candidate = base.join(dir).join(asset);
        if candidate.is_file() {
            trace!(asset, path = %candidate.display(), "resolved block asset");
            return Ok(candidate);
        }
        tried.push(candidate);
    }

    Err(Error::AssetNotFound {
        asset: asset.to_string(),
        tried,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn picks_first_candidate_containing_the_file() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("dist")).unwrap();
        fs::create_dir(base.path().join("build")).unwrap();
        fs::write(base.path().join("dist/editor.js"), "// js").unwrap();
        fs::write(base.path().join("build/editor.js"), "// js").unwrap();

        let resolved = locate_asset(base.path(), "editor.js").unwrap();

        // `assets/` has no file, so `dist/` wins over `build/`.
        assert_eq!(resolved, base.path().join("dist/editor.js"));
    }

    #[test]
    fn missing_asset_names_every_candidate() {
        let base = TempDir::new().unwrap();

        let err = locate_asset(base.path(), "editor.js").unwrap_err();

        match err {
            Error::AssetNotFound { asset, tried } => {
                assert_eq!(asset, "editor.js");
                assert_eq!(
                    tried,
                    vec![
                        base.path().join("assets/editor.js"),
                        base.path().join("dist/editor.js"),
                        base.path().join("build/editor.js"),
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directories_are_not_assets() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("assets/editor.js")).unwrap();

        assert!(locate_asset(base.path(), "editor.js").is_err());
    }
}
