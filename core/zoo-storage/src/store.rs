use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info};
use zoo_model::{filter_by_query, find_by_id, Animal, Criteria, NewAnimal};

use crate::{AnimalDocument, StorageError, StorageResult};

/// The in-memory record store, optionally mirrored to a durable file.
///
/// Share it between request handlers as `Arc<AnimalStore>`. Every operation
/// takes the internal lock, so id assignment, append and persist happen as
/// one step. `create` holds the lock across the file rewrite, so any call
/// may block for the length of a disk write; async callers should go through
/// `spawn_blocking`.
pub struct AnimalStore {
    animals: Mutex<Vec<Animal>>,
    path: Option<PathBuf>,
}

impl AnimalStore {
    /// Load the store from the durable file at `path`.
    ///
    /// A missing file gives an empty store; the first create writes it.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let document = AnimalDocument::load(&path)?;
        info!("Loaded {} animals from {}", document.animals.len(), path.display());
        Ok(Self {
            animals: Mutex::new(document.animals),
            path: Some(path),
        })
    }

    /// A store with no durable file. Creates only touch memory.
    pub fn in_memory(animals: Vec<Animal>) -> Self {
        Self {
            animals: Mutex::new(animals),
            path: None,
        }
    }

    /// Path of the durable file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Vec<Animal>>> {
        self.animals.lock().map_err(|_| StorageError::Poisoned)
    }

    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> StorageResult<Vec<Animal>> {
        Ok(self.lock()?.clone())
    }

    /// Records matching `criteria`, in insertion order.
    pub fn query(&self, criteria: &Criteria) -> StorageResult<Vec<Animal>> {
        let animals = self.lock()?;
        let results: Vec<Animal> = filter_by_query(criteria, &animals)
            .into_iter()
            .cloned()
            .collect();
        debug!("Query {:?} matched {} of {}", criteria, results.len(), animals.len());
        Ok(results)
    }

    /// The record with the given id, if present.
    pub fn get(&self, id: &str) -> StorageResult<Option<Animal>> {
        Ok(find_by_id(id, &self.lock()?).cloned())
    }

    /// Assign the next id, append the record and rewrite the durable file.
    ///
    /// The id is the decimal record count before the append. If the durable
    /// write fails the append is undone and the error returned.
    pub fn create(&self, candidate: NewAnimal) -> StorageResult<Animal> {
        let mut animals = self.lock()?;
        let animal = candidate.with_id(animals.len().to_string());
        animals.push(animal.clone());

        if let Some(path) = &self.path {
            if let Err(e) = AnimalDocument::write(path, &animals) {
                animals.pop();
                error!("Failed to persist animals to {}: {}", path.display(), e);
                return Err(e);
            }
        }

        info!("Created animal {} ({}, {})", animal.id, animal.name, animal.species);
        Ok(animal)
    }
}
