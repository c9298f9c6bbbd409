//! Path joining and normalization
//!
//! Package roots and declared locations are plain strings: they may name a
//! directory on disk, a prefix inside a virtual archive, or anything else a
//! resolution context understands. These helpers therefore work on `/`
//! separated strings instead of `std::path::Path`, following POSIX
//! `path.join` / `path.normalize` semantics.

const SEPARATOR: char = '/';

/// Returns true if the path is rooted (starts with `/`)
#[inline]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Normalize a path string
///
/// - Repeated separators collapse into one
/// - `.` segments are dropped
/// - `..` consumes the previous segment; above the root of an absolute path
///   it is dropped, in a relative path it is kept
/// - A trailing separator is preserved
/// - The empty path normalizes to `.`
///
/// # Example
/// ```rust
/// use lsd_metadata::utils::normalize_path;
///
/// assert_eq!(normalize_path("/pkgs//foo/./bar/../baz"), "/pkgs/foo/baz");
/// assert_eq!(normalize_path("../a/b/.."), "../a");
/// ```
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = is_absolute(path);
    let trailing_separator = path.ends_with(SEPARATOR);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => continue,
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");

    if normalized.is_empty() {
        if absolute {
            return "/".to_string();
        }
        return if trailing_separator { "./" } else { "." }.to_string();
    }

    if trailing_separator {
        normalized.push(SEPARATOR);
    }

    if absolute {
        normalized.insert(0, SEPARATOR);
    }

    normalized
}

/// Join any number of path parts and normalize the result
///
/// Empty parts are skipped. An absolute part does not reset the join; it is
/// appended like any other segment.
pub fn join_all<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .filter(|part| !part.as_ref().is_empty())
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return ".".to_string();
    }

    normalize_path(&joined)
}

/// Join a relative location onto a base location
///
/// # Example
/// ```rust
/// use lsd_metadata::utils::join_path;
///
/// assert_eq!(
///     join_path("/pkgs/foo", "components/index.jsonld"),
///     "/pkgs/foo/components/index.jsonld"
/// );
/// ```
pub fn join_path(base: &str, relative: &str) -> String {
    join_all([base, relative])
}
