//! mqf-core: scan a source tree and normalize quotes in page metadata exports
//!
//! The surface is deliberately small:
//! - `rewrite`: pure text transform of one file's content
//! - `walk`: recursive lookup of `.tsx` / `.jsx` candidates
//! - `fixer`: per-file rewrite on disk and the whole-tree pass with its report
//!
pub mod error;
pub mod fixer;
pub mod rewrite;
pub mod walk;

pub use error::FixError;
pub use fixer::{FixOpts, Outcome, Summary, fix_file, process, transform};
pub use rewrite::{METADATA_MARKER, find_metadata_block, normalize_metadata_quotes};
pub use walk::{SOURCE_EXTENSIONS, find_sources};

/// Directory scanned when no root is given, relative to the working directory.
pub const DEFAULT_ROOT: &str = "src";
