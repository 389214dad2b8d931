//! Local implementations of the filesystem ports.

pub mod local_fs;

pub use local_fs::{LocalDirectoryWalker, LocalDocumentStore};
