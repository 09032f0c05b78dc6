use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use super::{PackageWatcher, Subscription};
use crate::graph::RunState;

/// Reports the run state and watches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertWatcher;

#[async_trait]
impl PackageWatcher for InertWatcher {
    #[tracing::instrument(skip_all)]
    async fn subscribe(&self, state: &RunState) -> Result<Subscription> {
        info!(
            "Root package {} at {:?}; {} local package(s)",
            state.root.name(),
            state.root.location,
            state.package_map.len()
        );
        for (name, dependents) in state.graph.iter() {
            debug!("{} is depended on by {:?}", name, dependents);
        }
        let orphans = state.orphans();
        if !orphans.is_empty() {
            info!("Unreachable local package(s): {:?}", orphans);
        }

        Ok(Subscription::closed())
    }
}
