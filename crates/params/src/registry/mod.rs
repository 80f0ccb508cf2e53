//! Read-only registry of validated parameter sets

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{ParamsError, Result};
use crate::set::{ParameterRow, ParameterSet};
use crate::table::PARAMETER_TABLE;

/// An indexed, immutable table of [`ParameterSet`]s.
///
/// Construction validates every row and fails on the first bad one; after
/// that the registry only hands out shared references.
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    sets: Vec<ParameterSet>,
}

impl ParameterRegistry {
    /// Build a registry from literal rows.
    ///
    /// `dem_key_sizes` lists the key lengths the paired DEM accepts; a row
    /// whose `kappa_bytes` is not among them is rejected.
    pub fn new(rows: &[ParameterRow], dem_key_sizes: &[usize]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        let mut sets = Vec::with_capacity(rows.len());

        for row in rows {
            if !seen.insert(row.name) {
                warn!(name = row.name, "duplicate parameter set name");
                return Err(ParamsError::DuplicateName { name: row.name });
            }
            let set = ParameterSet::from_row(row).inspect_err(|err| {
                warn!(name = row.name, %err, "rejecting parameter set");
            })?;
            if !dem_key_sizes.contains(&set.shared_secret_bytes) {
                warn!(
                    name = row.name,
                    kappa_bytes = set.shared_secret_bytes,
                    "shared secret size is not a DEM key size"
                );
                return Err(ParamsError::InvalidRow {
                    name: row.name,
                    reason: format!(
                        "shared secret of {} bytes is not a DEM key size {:?}",
                        set.shared_secret_bytes, dem_key_sizes
                    ),
                });
            }
            sets.push(set);
        }

        debug!(count = sets.len(), "parameter registry ready");
        Ok(Self { sets })
    }

    /// The built-in table, validated against `dem_key_sizes`.
    pub fn standard(dem_key_sizes: &[usize]) -> Result<Self> {
        Self::new(&PARAMETER_TABLE, dem_key_sizes)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Lookup by fixed index.
    pub fn by_index(&self, index: usize) -> Result<&ParameterSet> {
        self.sets.get(index).ok_or(ParamsError::IndexOutOfRange {
            index,
            len: self.sets.len(),
        })
    }

    /// Lookup by exact name. There is no fallback set.
    pub fn by_name(&self, name: &str) -> Result<&ParameterSet> {
        self.sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| ParamsError::NotFound { name: name.to_owned() })
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSet> {
        self.sets.iter()
    }
}
