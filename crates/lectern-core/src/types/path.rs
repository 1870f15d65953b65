//! Canonical catalog path handling.
//!
//! Folders are addressed by absolute string paths (`/A/B`); navigation
//! layers work with ordered segment lists. This module converts between the
//! two representations. Segments must not contain the `/` separator; that
//! is validated by the mutation caller, not here.

/// The canonical root path.
pub const ROOT: &str = "/";

/// Display name of the root folder.
pub const ROOT_NAME: &str = "Root";

/// Convert a list of segments into a canonical absolute path.
///
/// An empty list maps to the root path `/`.
pub fn segments_to_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return ROOT.to_string();
    }
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    path
}

/// Compute the canonical path of `name` under `parent`.
///
/// The root parent is special-cased so `/` + `A` yields `/A`, not `//A`.
pub fn child_path(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("/{name}")
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}

/// Split a canonical path into its parent path and final segment.
///
/// Returns `None` for the root path, which has no parent.
pub fn split_path(path: &str) -> Option<(&str, &str)> {
    if path == ROOT {
        return None;
    }
    let idx = path.rfind('/')?;
    let name = &path[idx + 1..];
    let parent = if idx == 0 { ROOT } else { &path[..idx] };
    Some((parent, name))
}

/// Whether `path` is the catalog root.
pub fn is_root(path: &str) -> bool {
    path == ROOT
}
