//! Project root discovery

use std::path::{Path, PathBuf};

/// Directory entries that mark a project root, nearest ancestor first
const ROOT_MARKERS: &[(&str, Marker)] = &[(".sweep", Marker::Dir), (".git", Marker::Any)];

#[derive(Clone, Copy)]
enum Marker {
    Dir,
    /// `.git` may be a file inside a worktree
    Any,
}

/// Walk upward from `start` to the first directory holding a root marker
///
/// A `.sweep/` directory beats a `.git` in the same or a higher directory.
/// Without any marker the invocation directory is the root.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| {
            ROOT_MARKERS.iter().any(|(name, marker)| {
                let candidate = dir.join(name);
                match marker {
                    Marker::Dir => candidate.is_dir(),
                    Marker::Any => candidate.exists(),
                }
            })
        })
        .unwrap_or(start)
        .to_path_buf()
}
