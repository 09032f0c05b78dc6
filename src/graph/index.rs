use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use std::path::PathBuf;

use super::Package;
use crate::error::{Error, Result};
use crate::manifest::Descriptor;

/// Name to package lookup over every local package of a run.
///
/// Keys are unique and keep input order. Built once; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageIndex {
    packages: IndexMap<String, Package>,
}

impl PackageIndex {
    /// Build an index, rejecting two packages that share a name.
    pub fn build(packages: impl IntoIterator<Item = Package>) -> Result<Self> {
        let mut index: IndexMap<String, Package> = IndexMap::new();

        for package in packages {
            match index.entry(package.name().to_string()) {
                Entry::Occupied(existing) => {
                    return Err(Error::DuplicateLocalName {
                        name: existing.key().clone(),
                        first: existing.get().location.clone(),
                        second: package.location,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(package);
                }
            }
        }

        Ok(Self { packages: index })
    }

    /// Pair each location with the descriptor loaded from it.
    pub fn from_parts(locations: &[PathBuf], descriptors: Vec<Descriptor>) -> Result<Self> {
        if locations.len() != descriptors.len() {
            return Err(Error::MisalignedInputs {
                locations: locations.len(),
                descriptors: descriptors.len(),
            });
        }

        Self::build(
            descriptors
                .into_iter()
                .zip(locations)
                .map(|(descriptor, location)| Package::new(descriptor, location.clone())),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }
}
