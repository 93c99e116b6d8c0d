use std::fs;
use std::path::Path;
use log::debug;

use crate::utils::error::OmdResult;
use crate::utils::path::{clean_path, normalize, path_token};

/// Create one destination directory per immediate subdirectory of `origin`.
///
/// Only the first level is mirrored. Files nested deeper than that have no
/// directory to land in and fail when they are moved.
pub fn mirror_subdirectories(origin: &Path, destination: &Path) -> OmdResult<usize> {
    let destination_abs = clean_path(std::path::absolute(destination)?);
    let mut created = 0;

    let mut entries = fs::read_dir(origin)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();

        // Ignore files; symlinks are not followed, matching the batch walk
        if !entry.file_type()?.is_dir() {
            continue;
        }

        // The destination itself may live inside the origin
        if clean_path(std::path::absolute(&path)?) == destination_abs {
            continue;
        }

        let Some(name) = path_token(&path) else {
            continue;
        };

        let new_folder = destination.join(name);
        debug!("Creating OMD output directory '{}'...", normalize(&new_folder));
        fs::create_dir(&new_folder)?;
        created += 1;
    }

    Ok(created)
}
