use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FixError;
use crate::rewrite::normalize_metadata_quotes;
use crate::walk::{SOURCE_EXTENSIONS, find_sources};

#[derive(Clone, Copy, Debug, Default)]
pub struct FixOpts {
    /// Run the transform but never write the result back.
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Fixed,
    Unchanged,
    Failed(FixError),
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Summary {
    pub scanned: usize,
    pub modified: usize,
    pub failed: usize,
    pub fixed_files: Vec<PathBuf>,
}

fn rewrite_file(path: &Path, opts: FixOpts) -> Result<bool, FixError> {
    let data = fs::read(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(data).map_err(|source| FixError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let Cow::Owned(fixed) = normalize_metadata_quotes(&content) else {
        tracing::trace!(path = %path.display(), "unchanged");
        return Ok(false);
    };
    if opts.dry_run {
        tracing::debug!(path = %path.display(), "dry run, skipping write");
    } else {
        fs::write(path, &fixed).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = fixed.len(), "rewrote file");
    }
    Ok(true)
}

/// Rewrites a single file in place; errors are folded into the outcome.
pub fn fix_file(path: &Path, opts: FixOpts) -> Outcome {
    match rewrite_file(path, opts) {
        Ok(true) => Outcome::Fixed,
        Ok(false) => Outcome::Unchanged,
        Err(e) => Outcome::Failed(e),
    }
}

fn report<W: Write>(path: &Path, outcome: &Outcome, opts: FixOpts, out: &mut W) {
    match outcome {
        Outcome::Fixed if opts.dry_run => writeln!(out, "Would fix: {}", path.display()).ok(),
        Outcome::Fixed => writeln!(out, "Fixed: {}", path.display()).ok(),
        Outcome::Failed(e) => writeln!(out, "Error processing {}: {}", path.display(), e).ok(),
        Outcome::Unchanged => None,
    };
}

/// Rewrites one file and prints its report line. Returns whether it was modified.
pub fn transform<W: Write>(path: &Path, opts: FixOpts, out: &mut W) -> bool {
    let outcome = fix_file(path, opts);
    report(path, &outcome, opts, out);
    matches!(outcome, Outcome::Fixed)
}

/// Scans `root` for `.tsx` then `.jsx` files and normalizes each one.
///
/// Only a missing root is an error; per-file failures are printed and counted
/// in the summary.
pub fn process<W: Write>(root: &Path, opts: FixOpts, out: &mut W) -> Result<Summary, FixError> {
    if !root.is_dir() {
        return Err(FixError::RootNotFound(root.to_path_buf()));
    }
    writeln!(out, "Normalizing metadata quotes under {}...", root.display()).ok();

    let mut summary = Summary::default();
    for ext in SOURCE_EXTENSIONS {
        let files = find_sources(root, ext);
        tracing::debug!(ext, count = files.len(), "collected candidates");
        for path in files {
            summary.scanned += 1;
            let outcome = fix_file(&path, opts);
            report(&path, &outcome, opts, out);
            match outcome {
                Outcome::Fixed => {
                    summary.modified += 1;
                    summary.fixed_files.push(path);
                }
                Outcome::Failed(_) => summary.failed += 1,
                Outcome::Unchanged => {}
            }
        }
    }

    let verb = if opts.dry_run { "Would fix" } else { "Fixed" };
    writeln!(out, "{} {} file(s)", verb, summary.modified).ok();
    writeln!(
        out,
        "Scanned {} file(s), {} failed",
        summary.scanned, summary.failed
    )
    .ok();
    Ok(summary)
}
