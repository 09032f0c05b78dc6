//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the file operations the
//! manifest loader performs, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `fs` - File system operations (read, copy)

mod fs;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Read a whole file into a string.
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Copy `from` to `to`, overwriting `to`. Returns the number of bytes copied.
    async fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        self.copy_impl(from, to).await
    }
}
