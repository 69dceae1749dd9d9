//! Core data types for Hub repositories
//!
//! This module contains the fundamental data structures describing a remote
//! repository and its file manifest: the repository descriptor built from
//! command-line input, and the per-file entries returned by the Hub
//! metadata API.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::hub;

/// Error returned when a repository type string is not recognized
///
/// The message is user-facing: it is printed verbatim (behind an
/// `Error: ` prefix) when an unsupported `--type` value is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRepoType;

impl fmt::Display for InvalidRepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid repo_type. Please choose 'model' or 'dataset'.")
    }
}

impl std::error::Error for InvalidRepoType {}

/// Kind of repository hosted on the Hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    Model,
    Dataset,
}

impl RepoType {
    /// API path segment used when querying metadata for this repository kind
    pub fn api_path(&self) -> &'static str {
        match self {
            RepoType::Model => hub::API_MODELS_PATH,
            RepoType::Dataset => hub::API_DATASETS_PATH,
        }
    }

    /// URL prefix inserted before the repository id when resolving files
    ///
    /// Model files live directly under the repository id; dataset files
    /// are namespaced under `datasets/`.
    pub fn resolve_prefix(&self) -> &'static str {
        match self {
            RepoType::Model => "",
            RepoType::Dataset => "datasets/",
        }
    }
}

impl FromStr for RepoType {
    type Err = InvalidRepoType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" => Ok(RepoType::Model),
            "dataset" => Ok(RepoType::Dataset),
            _ => Err(InvalidRepoType),
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoType::Model => write!(f, "model"),
            RepoType::Dataset => write!(f, "dataset"),
        }
    }
}

/// Identifies one remote repository for the duration of a run
///
/// Built once from command-line input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    /// Repository id, e.g. `google/flan-t5-xxl`
    pub repo_id: String,
    /// Repository kind
    pub repo_type: RepoType,
}

impl RepoDescriptor {
    /// Create a descriptor for the given repository
    pub fn new(repo_id: impl Into<String>, repo_type: RepoType) -> Self {
        Self {
            repo_id: repo_id.into(),
            repo_type,
        }
    }

    /// Filesystem-safe directory name for this repository
    ///
    /// Every path separator in the repository id is replaced by an
    /// underscore, so `google/flan-t5-xxl` becomes `google_flan-t5-xxl`.
    pub fn local_dir_name(&self) -> String {
        self.repo_id.replace('/', "_")
    }

    /// Local directory for this repository under `base_output_dir`
    pub fn local_dir(&self, base_output_dir: &Path) -> PathBuf {
        base_output_dir.join(self.local_dir_name())
    }

    /// Relative API path for this repository's metadata endpoint
    pub fn metadata_path(&self) -> String {
        format!("{}/{}", self.repo_type.api_path(), self.repo_id)
    }

    /// Relative path for resolving one file at the default revision
    pub fn resolve_path(&self, rfilename: &str) -> String {
        format!(
            "{}{}/resolve/{}/{}",
            self.repo_type.resolve_prefix(),
            self.repo_id,
            hub::DEFAULT_REVISION,
            rfilename
        )
    }
}

impl fmt::Display for RepoDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.repo_type, self.repo_id)
    }
}

/// Size of one remote file, which the Hub may or may not report
///
/// Modeled as an explicit sum type so every consumer has to handle the
/// absent case: unknown sizes contribute zero to the declared total and
/// zero to progress increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileSize {
    Known(u64),
    #[default]
    Unknown,
}

impl FileSize {
    /// Bytes to count towards totals and progress (zero when unknown)
    pub fn known_bytes(&self) -> u64 {
        match self {
            FileSize::Known(bytes) => *bytes,
            FileSize::Unknown => 0,
        }
    }

    /// Whether the Hub reported a size for this file
    pub fn is_known(&self) -> bool {
        matches!(self, FileSize::Known(_))
    }
}

impl<'de> Deserialize<'de> for FileSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The Hub serializes an absent size as `null` (or omits the key,
        // which serde handles via Default)
        Ok(match Option::<u64>::deserialize(deserializer)? {
            Some(bytes) => FileSize::Known(bytes),
            None => FileSize::Unknown,
        })
    }
}

/// One file belonging to a repository, as listed by the metadata API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    /// Path of the file relative to the repository root
    pub rfilename: String,
    /// Reported size, when the Hub knows it
    #[serde(default)]
    pub size: FileSize,
}

impl FileEntry {
    /// Destination path for this entry under `local_dir`
    ///
    /// Manifest names are remote-controlled input: an absolute name, or
    /// one containing a `..` component, would escape the output
    /// directory, so such entries yield `None` and the transfer must be
    /// rejected instead of joined blindly.
    pub fn destination(&self, local_dir: &Path) -> Option<PathBuf> {
        if self.rfilename.is_empty() {
            return None;
        }

        let relative = Path::new(&self.rfilename);
        let safe = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        safe.then(|| local_dir.join(relative))
    }
}

/// Ordered collection of files describing a repository at query time
///
/// Fetched once at startup and consumed top-to-bottom exactly once; the
/// order is whatever the Hub returned (not contractually sorted).
#[derive(Debug, Clone, Default)]
pub struct RepoManifest {
    files: Vec<FileEntry>,
}

impl RepoManifest {
    /// Create a manifest from entries in registry order
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { files }
    }

    /// Number of files in the repository
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the repository lists no files at all
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter()
    }

    /// Sum of all known file sizes in bytes
    ///
    /// This is the total declared to the progress bar; entries with an
    /// unknown size contribute nothing, so an all-unknown manifest
    /// declares a zero total.
    pub fn total_known_bytes(&self) -> u64 {
        self.files
            .iter()
            .map(|entry| entry.size.known_bytes())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(name: &str, size: FileSize) -> FileEntry {
        FileEntry {
            rfilename: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_repo_type_parsing() {
        assert_eq!("model".parse::<RepoType>().unwrap(), RepoType::Model);
        assert_eq!("dataset".parse::<RepoType>().unwrap(), RepoType::Dataset);

        // Anything else is rejected, including case variants
        assert!("repo".parse::<RepoType>().is_err());
        assert!("Model".parse::<RepoType>().is_err());
        assert!("".parse::<RepoType>().is_err());
    }

    #[test]
    fn test_invalid_repo_type_message() {
        let error = "repo".parse::<RepoType>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid repo_type. Please choose 'model' or 'dataset'."
        );
    }

    #[test]
    fn test_local_dir_name_replaces_separators() {
        let repo = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
        assert_eq!(repo.local_dir_name(), "google_flan-t5-xxl");

        // Ids without a separator pass through unchanged
        let repo = RepoDescriptor::new("gpt2", RepoType::Model);
        assert_eq!(repo.local_dir_name(), "gpt2");

        // Every separator is replaced, not just the first
        let repo = RepoDescriptor::new("a/b/c", RepoType::Model);
        assert_eq!(repo.local_dir_name(), "a_b_c");
    }

    #[test]
    fn test_local_dir_joins_base() {
        let repo = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
        assert_eq!(
            repo.local_dir(Path::new("out")),
            Path::new("out").join("google_flan-t5-xxl")
        );
    }

    #[test]
    fn test_metadata_path_by_repo_type() {
        let model = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
        assert_eq!(model.metadata_path(), "api/models/google/flan-t5-xxl");

        let dataset = RepoDescriptor::new("squad", RepoType::Dataset);
        assert_eq!(dataset.metadata_path(), "api/datasets/squad");
    }

    #[test]
    fn test_resolve_path_by_repo_type() {
        let model = RepoDescriptor::new("gpt2", RepoType::Model);
        assert_eq!(
            model.resolve_path("config.json"),
            "gpt2/resolve/main/config.json"
        );

        let dataset = RepoDescriptor::new("squad", RepoType::Dataset);
        assert_eq!(
            dataset.resolve_path("data/train.parquet"),
            "datasets/squad/resolve/main/data/train.parquet"
        );
    }

    #[test]
    fn test_file_size_known_bytes() {
        assert_eq!(FileSize::Known(1024).known_bytes(), 1024);
        assert_eq!(FileSize::Unknown.known_bytes(), 0);
        assert!(FileSize::Known(0).is_known());
        assert!(!FileSize::Unknown.is_known());
    }

    #[test]
    fn test_file_entry_deserialization() {
        let entry: FileEntry =
            serde_json::from_str(r#"{"rfilename": "config.json", "size": 570}"#).unwrap();
        assert_eq!(entry.rfilename, "config.json");
        assert_eq!(entry.size, FileSize::Known(570));

        // Explicit null size
        let entry: FileEntry =
            serde_json::from_str(r#"{"rfilename": "weights.bin", "size": null}"#).unwrap();
        assert_eq!(entry.size, FileSize::Unknown);

        // Omitted size key
        let entry: FileEntry = serde_json::from_str(r#"{"rfilename": "weights.bin"}"#).unwrap();
        assert_eq!(entry.size, FileSize::Unknown);
    }

    #[test]
    fn test_destination_stays_inside_local_dir() {
        let dir = Path::new("out/org_repo");

        let plain = entry("config.json", FileSize::Known(1));
        assert_eq!(
            plain.destination(dir).unwrap(),
            dir.join("config.json")
        );

        // Nested repository paths are preserved
        let nested = entry("plain_text/train.parquet", FileSize::Unknown);
        assert_eq!(
            nested.destination(dir).unwrap(),
            dir.join("plain_text/train.parquet")
        );
    }

    #[test]
    fn test_destination_rejects_escaping_names() {
        let dir = Path::new("out/org_repo");

        for name in ["../outside.txt", "a/../../b", "/etc/passwd", ""] {
            let escaping = entry(name, FileSize::Known(1));
            assert_eq!(escaping.destination(dir), None, "accepted {:?}", name);
        }
    }

    #[test]
    fn test_manifest_total_sums_known_sizes_only() {
        let manifest = RepoManifest::new(vec![
            entry("a.json", FileSize::Known(100)),
            entry("b.bin", FileSize::Unknown),
            entry("c.txt", FileSize::Known(23)),
        ]);
        assert_eq!(manifest.total_known_bytes(), 123);
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_manifest_all_unknown_declares_zero_total() {
        let manifest = RepoManifest::new(vec![
            entry("a.bin", FileSize::Unknown),
            entry("b.bin", FileSize::Unknown),
        ]);
        assert_eq!(manifest.total_known_bytes(), 0);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_manifest_preserves_registry_order() {
        let manifest = RepoManifest::new(vec![
            entry("z.txt", FileSize::Known(1)),
            entry("a.txt", FileSize::Known(2)),
        ]);
        let names: Vec<_> = manifest.iter().map(|e| e.rfilename.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }
}
