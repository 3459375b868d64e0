use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::SeedError;
use crate::models::{NewProperty, Property};

/// Properties submitted by owners, held in process memory only.
///
/// Ids are `count + 1` at insertion time. The count and the insert happen
/// under the same lock, but nothing here survives a restart.
#[derive(Debug, Default)]
pub struct PropertyDrafts {
    properties: Mutex<BTreeMap<i32, Property>>,
}

impl PropertyDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds drafts from a JSON object keyed by property id.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, SeedError> {
        let properties: BTreeMap<i32, Property> = serde_json::from_reader(reader)?;
        Ok(Self {
            properties: Mutex::new(properties),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SeedError> {
        let file = std::fs::File::open(path)?;
        Self::from_json(std::io::BufReader::new(file))
    }

    pub fn add(&self, property: NewProperty) -> Property {
        let mut properties = self.lock();
        let id = next_id(properties.len());
        let property = property.with_id(id);
        properties.insert(id, property.clone());
        property
    }

    pub fn get(&self, id: i32) -> Option<Property> {
        self.lock().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<i32, Property>> {
        self.properties
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// `count + 1`, pinned at `i32::MAX` once the count no longer fits an id.
fn next_id(count: usize) -> i32 {
    i32::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .unwrap_or(i32::MAX)
}
