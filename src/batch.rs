//! Batch decoding: input discovery and multi-file decode.
//!
//! # Parallel decode
//!
//! [`decode_files`] decodes every input independently.  With the
//! `parallel` feature it fans out over Rayon's global pool; without it the
//! files are decoded one after another.  Either way the results come back
//! in input order and one bad file never aborts the others.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::decoder::{decode_file, DecodedDictionary};
use crate::error::Result;

pub const SCEL_EXTENSION: &str = "scel";

/// Outcome of decoding one input.
#[derive(Debug)]
pub struct FileOutcome {
    pub path:   PathBuf,
    pub result: Result<DecodedDictionary>,
}

impl FileOutcome {
    /// File name without the `.scel` extension.
    pub fn stem(&self) -> String {
        source_name(&self.path)
    }
}

pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Expand `inputs` into a list of cell dictionary files.
///
/// Files are taken as given.  Directories contribute their `*.scel`
/// entries (not recursive), sorted by file name.
pub fn collect_inputs(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry.path()),
                    Err(e) => {
                        warn!(dir = %input.display(), error = %e, "unreadable directory entry, skipping");
                        None
                    }
                })
                .filter(|p| p.is_file() && has_scel_extension(p))
                .collect();
            found.sort();
            debug!(dir = %input.display(), files = found.len(), "collected cell dictionaries");
            out.extend(found);
        } else {
            out.push(input.clone());
        }
    }
    Ok(out)
}

fn has_scel_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(SCEL_EXTENSION))
        .unwrap_or(false)
}

/// Decode every path, keeping input order.
pub fn decode_files(paths: &[PathBuf]) -> Vec<FileOutcome> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|path| FileOutcome { path: path.clone(), result: decode_file(path) })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        paths
            .iter()
            .map(|path| FileOutcome { path: path.clone(), result: decode_file(path) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directories_expand_to_sorted_scel_files() {
        let dir = tempdir().unwrap();
        for name in ["b.scel", "a.SCEL", "notes.txt", "c.scel"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.scel")).unwrap();
        let extra = PathBuf::from("elsewhere.scel");

        let got = collect_inputs(&[dir.path().to_path_buf(), extra.clone()]).unwrap();
        let names: Vec<String> = got.iter().map(|p| source_name(p)).collect();
        assert_eq!(names, vec!["a", "b", "c", "elsewhere"]);
        assert_eq!(got.last(), Some(&extra));
    }

    #[test]
    fn failures_stay_with_their_file() {
        let dir = tempdir().unwrap();
        let junk = dir.path().join("junk.scel");
        fs::write(&junk, b"definitely not a cell dictionary").unwrap();
        let missing = dir.path().join("missing.scel");

        let outcomes = decode_files(&[junk.clone(), missing.clone()]);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].path, junk);
        assert!(matches!(
            outcomes[0].result,
            Err(crate::ScelError::NotACellDictionary { .. })
        ));
        assert!(matches!(outcomes[1].result, Err(crate::ScelError::Io(_))));
        assert_eq!(outcomes[1].stem(), "missing");
    }
}
