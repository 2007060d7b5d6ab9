//! Recursive directory walking
//!
//! This module visits every regular file below a root directory and hands a
//! [`FileRecord`] for each one to a caller-supplied sink.

use std::{fs, path::Path};

use crate::errors::AppError;

/// A regular file found while walking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base file name only
    pub name: String,
    /// Path of the file, the walk root joined with every component below it
    pub full_path: String,
    /// File size in bytes
    pub size: u64,
}

/// Recursively walk a directory and emit every regular file
///
/// Entries whose own type is a directory are descended into. Every other entry
/// is stat'ed through any link and emitted when it resolves to a regular file,
/// so directories, special files and links to directories are never emitted.
/// Emission order follows `read_dir` and is not stable across platforms.
///
/// # Arguments
///
/// * `root` - The directory to start walking from
/// * `emit` - Called exactly once per regular file
///
/// # Errors
///
/// Returns [`AppError::Io`] for the first filesystem failure, including a
/// `NotFound` error when `root` does not exist. A dangling link anywhere in
/// the tree also yields `NotFound`, from the stat through it. Records emitted
/// before the failure are not retracted.
pub fn walk_files<F>(root: &Path, emit: &mut F) -> Result<(), AppError>
where
    F: FnMut(FileRecord),
{
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            walk_files(&path, emit)?;
            continue;
        }

        let metadata = fs::metadata(&path)?;
        if metadata.is_file() {
            emit(FileRecord {
                name: entry.file_name().to_string_lossy().into_owned(),
                full_path: path.to_string_lossy().into_owned(),
                size: metadata.len(),
            });
        }
    }

    Ok(())
}
