#![forbid(unsafe_code)]

//! List-files UDF
//!
//! A user-defined function that recursively lists the files below a base path
//! and emits, for each regular file, its name, full path and size in bytes.
//! The host engine supplies the base path and the emit sink through a
//! [`UdfContext`]. [`BucketFs`] is the host-side client that runs the UDF and
//! reads back its rows.

pub mod bfs;
pub mod context;
pub mod errors;
pub mod walker;

pub use bfs::{BfsFile, BucketFs};
pub use context::{CollectingContext, UdfContext, run};
pub use errors::AppError;
pub use walker::{FileRecord, walk_files};
