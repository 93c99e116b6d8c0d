use std::path::{Component, Path, PathBuf};

/// Separator used by every normalized path string
pub const SEPARATOR: char = '/';

/// Normalize a path string to forward slashes with no doubled separators
pub fn normalize<P: AsRef<Path>>(path: P) -> String {
    let raw = path.as_ref().to_string_lossy();
    let mut result = String::with_capacity(raw.len());

    for ch in raw.chars() {
        let ch = if ch == '\\' { SEPARATOR } else { ch };
        if ch == SEPARATOR && result.ends_with(SEPARATOR) {
            continue;
        }
        result.push(ch);
    }

    result
}

/// Get the final component (file or directory name) of a path
pub fn path_token<P: AsRef<Path>>(path: P) -> Option<String> {
    let normalized = normalize(path);
    normalized
        .trim_end_matches(SEPARATOR)
        .rsplit(SEPARATOR)
        .next()
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Resolve "." and ".." components lexically, without touching the filesystem
pub fn clean_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => match result.components().next_back() {
                // Go up one level over a named component
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                // ".." at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(component),
            },
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Path of `path` relative to `root`, compared component by component
pub fn relative_to<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> Option<PathBuf> {
    let path = clean_path(path);
    let root = clean_path(root);

    path.strip_prefix(&root).ok().map(Path::to_path_buf)
}
