use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions scanned, one full pass each and in this order.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["tsx", "jsx"];

/// All files under `root` (recursive) whose extension is `ext`, sorted.
///
/// Unreadable directories are logged and skipped; they never abort the scan.
pub fn find_sources(root: &Path, ext: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some(ext) {
            out.push(p.to_path_buf());
        }
    }
    out.sort();
    out
}
