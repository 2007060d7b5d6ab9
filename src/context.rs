//! UDF invocation
//!
//! The host engine calls the UDF with a context that supplies the base path
//! and collects emitted rows. [`run`] is that entry point; [`CollectingContext`]
//! is a context that simply keeps every row it is given.

use log::{debug, info};
use std::path::Path;

use crate::{
    errors::AppError,
    walker::{FileRecord, walk_files},
};

/// Host-side execution context of the list-files UDF
pub trait UdfContext {
    /// Base path the UDF was invoked with
    fn path(&self) -> &str;

    /// Emit one output row: file name, full path and size in bytes
    fn emit(&mut self, name: &str, full_path: &str, size: u64);
}

/// Run the list-files UDF
///
/// Walks the context's base path and emits one row per regular file.
/// Nothing is emitted for directories.
///
/// # Errors
///
/// Returns [`AppError::Io`] for the first filesystem failure. Rows emitted
/// before it stay with the context.
pub fn run<C: UdfContext + ?Sized>(ctx: &mut C) -> Result<(), AppError> {
    let root = ctx.path().to_owned();
    debug!("Listing files below {}", root);

    let mut emitted = 0usize;
    walk_files(Path::new(&root), &mut |record: FileRecord| {
        ctx.emit(&record.name, &record.full_path, record.size);
        emitted += 1;
    })?;

    info!("Emitted {} file(s) below {}", emitted, root);
    Ok(())
}

/// Context that records emitted rows in call order
#[derive(Debug, Clone)]
pub struct CollectingContext {
    path: String,
    rows: Vec<FileRecord>,
}

impl CollectingContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }

    /// Rows emitted so far
    pub fn rows(&self) -> &[FileRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<FileRecord> {
        self.rows
    }
}

impl UdfContext for CollectingContext {
    fn path(&self) -> &str {
        &self.path
    }

    fn emit(&mut self, name: &str, full_path: &str, size: u64) {
        debug!("emit: ({}, {}, {})", name, full_path, size);
        self.rows.push(FileRecord {
            name: name.to_string(),
            full_path: full_path.to_string(),
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_get_emitted_rows(path: &Path) -> Vec<FileRecord> {
        let mut ctx = CollectingContext::new(path.to_string_lossy());
        run(&mut ctx).unwrap();
        ctx.into_rows()
    }

    fn row(name: &str, path: &Path, size: u64) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            full_path: path.to_string_lossy().into_owned(),
            size,
        }
    }

    #[test]
    fn test_run_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(run_get_emitted_rows(tmp.path()).len(), 0);
    }

    #[test]
    fn test_run_single_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file1 = tmp.path().join("file1.txt");
        fs::write(&file1, "content").unwrap();

        assert_eq!(run_get_emitted_rows(tmp.path()), vec![row("file1.txt", &file1, 7)]);
    }

    #[test]
    fn test_run_sub_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let file1 = tmp.path().join("dir1").join("file1.txt");
        let file2 = tmp.path().join("dir2").join("file2.txt");
        fs::create_dir_all(file1.parent().unwrap()).unwrap();
        fs::create_dir_all(file2.parent().unwrap()).unwrap();
        fs::write(&file1, "content").unwrap();
        fs::write(&file2, "even more content").unwrap();

        let rows = run_get_emitted_rows(tmp.path());
        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&row("file1.txt", &file1, 7)));
        assert!(rows.contains(&row("file2.txt", &file2, 17)));
    }

    #[test]
    fn test_run_missing_path_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = CollectingContext::new(tmp.path().join("nope").to_string_lossy());

        let err = run(&mut ctx).unwrap_err();
        assert!(err.is_not_found());
        assert!(ctx.rows().is_empty());
    }

    struct CountingContext {
        path: String,
        calls: usize,
    }

    impl UdfContext for CountingContext {
        fn path(&self) -> &str {
            &self.path
        }

        fn emit(&mut self, _name: &str, _full_path: &str, _size: u64) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_run_emits_once_per_file() {
        let tmp = tempfile::tempdir().unwrap();
        for i in 0..5 {
            let dir = tmp.path().join(format!("dir{}", i));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("a.txt"), "a").unwrap();
            fs::write(dir.join("b.txt"), "bb").unwrap();
        }

        let mut ctx = CountingContext {
            path: tmp.path().to_string_lossy().into_owned(),
            calls: 0,
        };
        run(&mut ctx).unwrap();
        assert_eq!(ctx.calls, 10);
    }
}
