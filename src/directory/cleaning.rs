use std::fs;
use std::path::Path;
use log::{debug, info};

use crate::utils::error::{OmdError, OmdResult};
use crate::utils::fs::{create_directory, remove_entry};
use crate::utils::path::normalize;

/// Remove everything inside the destination directory, keeping the directory itself.
///
/// A missing destination is created so the rest of the run has somewhere to write.
pub fn clear_destination(destination: &Path) -> OmdResult<usize> {
    if !destination.exists() {
        info!("Creating destination directory: {}", normalize(destination));
        create_directory(destination)?;
        return Ok(0);
    }

    if !destination.is_dir() {
        return Err(OmdError::Config(format!(
            "Destination path is not a directory: {}", destination.display()
        )));
    }

    let mut removed = 0;
    for entry in fs::read_dir(destination)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            debug!("Removing old .omd directory '{}'...", normalize(&path));
        } else {
            debug!("Removing old .omd file '{}'...", normalize(&path));
        }

        remove_entry(&path)?;
        removed += 1;
    }

    info!("Cleared {} entries from {}", removed, normalize(destination));
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clear_removes_stray_files_and_directories() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("omd");
        fs::create_dir_all(destination.join("stale").join("deeper")).unwrap();
        fs::write(destination.join("old.omd"), b"old").unwrap();
        fs::write(destination.join("stale").join("deeper").join("x.omd"), b"old").unwrap();

        let removed = clear_destination(&destination).unwrap();

        assert_eq!(removed, 2);
        assert!(destination.is_dir());
        assert_eq!(fs::read_dir(&destination).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_creates_missing_destination() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("omd");

        assert_eq!(clear_destination(&destination).unwrap(), 0);
        assert!(destination.is_dir());
    }

    #[test]
    fn test_clear_rejects_a_file() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("omd");
        fs::write(&destination, b"").unwrap();

        assert!(clear_destination(&destination).is_err());
    }
}
