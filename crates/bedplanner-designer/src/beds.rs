//! Named bed groupings.
//!
//! A bed references shapes by id; it does not own their lifetime. Deleting
//! a shape must strip its id from every bed so no dangling reference is
//! ever left behind.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use bedplanner_core::{DesignError, Result};

use crate::model::ShapeId;

/// A named set of shape references grouping shapes conceptually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub name: String,
    pub shape_ids: BTreeSet<ShapeId>,
}

/// Registry of all beds in the current garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BedRegistry {
    beds: Vec<Bed>,
}

impl BedRegistry {
    pub fn new() -> Self {
        Self { beds: Vec::new() }
    }

    /// Creates a bed referencing the given shapes.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::DuplicateBed`] if a bed with the same name
    /// already exists.
    pub fn create_bed(
        &mut self,
        name: impl Into<String>,
        shape_ids: impl IntoIterator<Item = ShapeId>,
    ) -> Result<()> {
        let name = name.into();
        if self.beds.iter().any(|b| b.name == name) {
            return Err(DesignError::DuplicateBed { name });
        }
        self.beds.push(Bed {
            name,
            shape_ids: shape_ids.into_iter().collect(),
        });
        Ok(())
    }

    pub fn bed(&self, name: &str) -> Option<&Bed> {
        self.beds.iter().find(|b| b.name == name)
    }

    pub fn beds(&self) -> impl Iterator<Item = &Bed> {
        self.beds.iter()
    }

    pub fn len(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }

    /// Renames a bed.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::BedNotFound`] if no bed has `old_name`, or
    /// [`DesignError::DuplicateBed`] if `new_name` is already taken.
    pub fn rename_bed(&mut self, old_name: &str, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if self.beds.iter().any(|b| b.name == new_name) {
            return Err(DesignError::DuplicateBed { name: new_name });
        }
        let bed = self
            .beds
            .iter_mut()
            .find(|b| b.name == old_name)
            .ok_or_else(|| DesignError::BedNotFound {
                name: old_name.to_string(),
            })?;
        bed.name = new_name;
        Ok(())
    }

    /// Removes a bed. The shapes it referenced are untouched.
    pub fn remove_bed(&mut self, name: &str) -> Result<Bed> {
        let index = self
            .beds
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| DesignError::BedNotFound {
                name: name.to_string(),
            })?;
        Ok(self.beds.remove(index))
    }

    /// Adds a shape reference to an existing bed.
    pub fn assign(&mut self, name: &str, id: ShapeId) -> Result<()> {
        let bed = self
            .beds
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| DesignError::BedNotFound {
                name: name.to_string(),
            })?;
        bed.shape_ids.insert(id);
        Ok(())
    }

    /// Removes a shape reference from an existing bed, if present.
    pub fn unassign(&mut self, name: &str, id: ShapeId) -> Result<()> {
        let bed = self
            .beds
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| DesignError::BedNotFound {
                name: name.to_string(),
            })?;
        bed.shape_ids.remove(&id);
        Ok(())
    }

    /// Strips a deleted shape's id from every bed.
    pub fn forget_shape(&mut self, id: ShapeId) {
        for bed in &mut self.beds {
            bed.shape_ids.remove(&id);
        }
    }

    /// Replaces the registry contents, e.g. when a saved garden is loaded.
    pub fn replace_all(&mut self, beds: Vec<Bed>) {
        self.beds = beds;
    }

    pub(crate) fn to_vec(&self) -> Vec<Bed> {
        self.beds.clone()
    }

    pub fn clear(&mut self) {
        self.beds.clear();
    }
}
