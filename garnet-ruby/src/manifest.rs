/*!
A write-only sink for emitted files; relative path to text content. Paths are normalized before
insertion, duplicate identical writes are tolerated, and conflicting writes fail with
`ManifestConflict`. Files iterate in path order so downstream processing is deterministic.
*/

use garnet_core::error::{ErrorKind, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The set of files produced by one generation.
///
#[derive(Debug, Default)]
pub struct FileManifest {
    files: BTreeMap<String, String>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl FileManifest {
    /// Construct a new, empty, manifest.
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Add a file to the manifest. Writing identical content to an existing path is a no-op;
    /// writing different content to an existing path is a `ManifestConflict` failure.
    ///
    pub fn write_file(&mut self, path: &str, content: String) -> Result<()> {
        let path = normalize(path)?;
        if let Some(existing) = self.files.get(&path) {
            if *existing == content {
                return Ok(());
            }
            return Err(ErrorKind::ManifestConflict(path).into());
        }
        let _ = self.files.insert(path, content);
        Ok(())
    }

    /// Returns `true` if the manifest contains the given path, else `false`.
    pub fn has_file(&self, path: &str) -> bool {
        normalize(path)
            .map(|path| self.files.contains_key(&path))
            .unwrap_or(false)
    }

    /// Return the content held for the given path.
    pub fn file(&self, path: &str) -> Option<&String> {
        self.files.get(&normalize(path).ok()?)
    }

    /// Return an iterator over all (path, content) pairs, in path order.
    pub fn files(&self) -> impl Iterator<Item = (&String, &String)> {
        self.files.iter()
    }

    /// Return an iterator over all paths, in order.
    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.files.keys()
    }

    /// The number of files in the manifest.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the manifest holds no files, else `false`.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    ///
    /// Write every file in the manifest beneath `root`, creating directories as required.
    ///
    pub fn write_to(&self, root: &Path) -> Result<()> {
        for (path, content) in self.files() {
            let full_path = root.join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn normalize(path: &str) -> Result<String> {
    let path = path.replace('\\', "/");
    let mut segments: Vec<&str> = Default::default();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(ErrorKind::InvalidManifestPath(path.clone()).into()),
            segment => segments.push(segment),
        }
    }
    if segments.is_empty() || path.starts_with('/') {
        return Err(ErrorKind::InvalidManifestPath(path).into());
    }
    Ok(segments.join("/"))
}
