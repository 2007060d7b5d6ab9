//! BucketFS listing API
//!
//! Host-side client of the list-files UDF. It runs the UDF below a configured
//! base path and turns the emitted rows into [`BfsFile`] values.

use log::debug;

use crate::{
    context::{CollectingContext, run},
    errors::AppError,
    walker::FileRecord,
};

/// A file in BucketFS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsFile {
    /// Path starting with the base path, e.g. `/buckets/bfsdefault/default/a.jar`
    pub path: String,
    /// File name
    pub name: String,
    /// File size in bytes
    pub size: u64,
}

impl From<FileRecord> for BfsFile {
    fn from(record: FileRecord) -> Self {
        Self {
            path: record.full_path,
            name: record.name,
            size: record.size,
        }
    }
}

/// Access to the files below one BucketFS base path
#[derive(Debug, Clone)]
pub struct BucketFs {
    base_path: String,
}

impl BucketFs {
    /// Create an API for `base_path`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyBasePath`] if `base_path` is empty.
    pub fn new(base_path: impl Into<String>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if base_path.is_empty() {
            return Err(AppError::EmptyBasePath);
        }
        Ok(Self { base_path })
    }

    /// Base path the UDF is run against
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// List all files below the base path recursively, ordered by full path
    pub fn list_files(&self) -> Result<Vec<BfsFile>, AppError> {
        let mut ctx = CollectingContext::new(self.base_path.as_str());
        run(&mut ctx)?;

        let mut files: Vec<BfsFile> = ctx.into_rows().into_iter().map(BfsFile::from).collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Find the absolute path of a file by its name
    ///
    /// If files with this name exist in several folders, the one with the
    /// smallest full path is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FileNotFound`] if no file has this name, or
    /// [`AppError::Io`] if the walk fails.
    pub fn find_absolute_path(&self, file_name: &str) -> Result<String, AppError> {
        let found = self
            .list_files()?
            .into_iter()
            .find(|file| file.name == file_name)
            .map(|file| file.path);

        match found {
            Some(path) => {
                debug!("Resolved {} to {}", file_name, path);
                Ok(path)
            }
            None => Err(AppError::FileNotFound {
                name: file_name.to_string(),
            }),
        }
    }
}
