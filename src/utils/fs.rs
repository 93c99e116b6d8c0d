use std::fs;
use std::path::Path;

use fs_extra::file::{self, CopyOptions};

use crate::utils::error::{OmdError, OmdResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> OmdResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a single directory entry, recursing into directories
pub fn remove_entry<P: AsRef<Path>>(path: P) -> OmdResult<()> {
    let path = path.as_ref();
    // Symlinks are removed, never followed
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Move a file, falling back to copy and delete across filesystems.
///
/// The parent of `to` must already exist.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> OmdResult<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    let parent_missing = to.parent().map_or(false, |parent| {
        !parent.as_os_str().is_empty() && !parent.is_dir()
    });
    if parent_missing {
        return Err(OmdError::Relocate {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            message: "destination directory does not exist".to_string(),
        });
    }

    // Never replace an output that is already in place
    let options = CopyOptions::new();
    file::move_file(from, to, &options).map_err(|e| OmdError::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
