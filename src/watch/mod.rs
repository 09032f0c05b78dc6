//! Watch phase
//!
//! A [`PackageWatcher`] turns a [`RunState`] into a [`Subscription`] of
//! [`ChangeEvent`]s. The only implementation today is [`InertWatcher`], which
//! reports the state and hands back a subscription that is already closed.

mod inert;
mod subscription;

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::graph::RunState;

pub use inert::InertWatcher;
pub use subscription::{Publisher, Subscription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A file inside a local package changed.
    PackageChanged {
        package: String,
        path: PathBuf,
        /// Packages that depend on `package` and need rebuilding.
        rebuild: Vec<String>,
    },
}

impl ChangeEvent {
    pub fn package_changed(state: &RunState, package: &str, path: PathBuf) -> Self {
        ChangeEvent::PackageChanged {
            package: package.to_string(),
            path,
            rebuild: state.dependents_of(package).to_vec(),
        }
    }
}

#[async_trait]
pub trait PackageWatcher: Send + Sync {
    /// Start watching the packages of `state`. The state is read-only input.
    async fn subscribe(&self, state: &RunState) -> Result<Subscription>;
}

#[async_trait]
impl<T: PackageWatcher + ?Sized> PackageWatcher for &T {
    async fn subscribe(&self, state: &RunState) -> Result<Subscription> {
        (**self).subscribe(state).await
    }
}
