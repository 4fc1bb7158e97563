use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::sync::content_type::content_type_for;

/// A file under the image root that is eligible for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Location on disk
    pub path: PathBuf,
    /// Object key: the path relative to the root, forward slashes
    pub key: String,
    pub content_type: &'static str,
}

/// Object key for `path` below `root`, separators normalized to `/`.
///
/// Returns `None` when `path` is not under `root` or contains non-UTF-8
/// components; such entries are skipped by the walker.
pub fn object_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let components = relative
        .iter()
        .map(|part| part.to_str())
        .collect::<Option<Vec<&str>>>()?;
    Some(components.join("/"))
}

/// Lazily walk `root` and yield every recognized image file.
///
/// The traversal is recursive and depth-unbounded, in whatever order the
/// filesystem returns entries. Directories, unreadable entries and files
/// with unmapped extensions are filtered out; a missing root yields nothing.
pub fn image_files(root: &Path) -> impl Iterator<Item = ImageFile> + '_ {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(move |entry| {
            let content_type = content_type_for(entry.path())?;
            let key = object_key(root, entry.path())?;
            Some(ImageFile {
                path: entry.path().to_path_buf(),
                key,
                content_type,
            })
        })
}
