//! Generic keyed collection backing each entity kind.
//!
//! One `Keyspace` per entity kind, each behind its own reader-writer lock,
//! so user and todo operations never contend with each other.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use common::{AppError, AppResult, CreatePolicy, OptionExt};
use domain::Entity;

/// Records of one kind keyed by their ID.
///
/// All reads hand out clones; callers never alias stored records.
pub struct Keyspace<T: Entity> {
    records: RwLock<HashMap<String, T>>,
}

impl<T: Entity> Keyspace<T> {
    /// Create an empty keyspace
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, T>>> {
        self.records
            .read()
            .map_err(|_| AppError::internal(format!("{} keyspace lock poisoned", T::KIND)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, T>>> {
        self.records
            .write()
            .map_err(|_| AppError::internal(format!("{} keyspace lock poisoned", T::KIND)))
    }

    /// Find record by ID
    pub fn get(&self, id: &str) -> AppResult<T> {
        self.read()?.get(id).cloned().ok_or_not_found(T::KIND, id)
    }

    /// All records, unordered
    pub fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Records matching `predicate`, by full scan
    pub fn filter<P>(&self, predicate: P) -> AppResult<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Insert a record under its ID
    pub fn create(&self, record: T, policy: CreatePolicy) -> AppResult<()> {
        record.validate_identity()?;

        let mut records = self.write()?;
        if policy == CreatePolicy::Reject && records.contains_key(record.id()) {
            return Err(AppError::conflict(format!("{} {}", T::KIND, record.id())));
        }
        records.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Replace an existing record wholesale
    pub fn update(&self, record: T) -> AppResult<()> {
        let mut records = self.write()?;
        let slot = records
            .get_mut(record.id())
            .ok_or_not_found(T::KIND, record.id())?;
        *slot = record;
        Ok(())
    }

    /// Remove a record by ID
    pub fn delete(&self, id: &str) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_not_found(T::KIND, id)
    }

    /// Mutate a stored record in place under the write lock
    pub fn modify<F>(&self, id: &str, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.write()?;
        let record = records.get_mut(id).ok_or_not_found(T::KIND, id)?;
        f(record);
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<T: Entity> Default for Keyspace<T> {
    fn default() -> Self {
        Self::new()
    }
}
