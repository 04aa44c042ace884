//! Editor-block unit family
//!
//! Blocks are the one family with a filesystem concern: their script and
//! style assets live under the extension's base path, which the owning
//! registrar injects through the path capability. Asset resolution walks a
//! fixed list of candidate directories and fails loudly when nothing
//! matches.

mod assets;
mod block;

pub use assets::{locate_asset, CANDIDATE_DIRS};
pub use block::{Block, BlockRegistration};
