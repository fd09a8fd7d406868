//! Staff record store: filtered listing and CRUD over a single storage slot
//!
//! The whole collection lives as one JSON array under a fixed key. Every
//! mutation is a read-modify-write of that array; with two writers on the same
//! slot the last write wins.

use crate::domain::{seed_staff, NewStaff, Staff, StaffFilter, StaffPatch};
use crate::error::{Result, StaffbookError};
use crate::infrastructure::config::DEFAULT_STORAGE_KEY;
use crate::infrastructure::{Config, KeyValueStorage, Latency, Operation};
use uuid::Uuid;

/// How many fresh ids to try before giving up on a collision
pub const MAX_ID_ATTEMPTS: usize = 3;

type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// Result of [`StaffStore::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The slot was empty and now holds the seed roster
    Seeded,
    /// The slot already held data and was left untouched
    AlreadyPresent,
}

pub struct StaffStore<S> {
    storage: S,
    key: String,
    latency: Latency,
    next_id: IdGenerator,
}

impl<S: KeyValueStorage> StaffStore<S> {
    /// Store over the default `staff` slot, no latency, UUID v4 ids
    pub fn new(storage: S) -> Self {
        StaffStore {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            latency: Latency::NONE,
            next_id: Box::new(|| Uuid::new_v4().to_string()),
        }
    }

    /// Store configured from a workspace config (slot key and latency)
    pub fn from_config(storage: S, config: &Config) -> Self {
        Self::new(storage)
            .with_key(config.storage_key.clone())
            .with_latency(config.latency)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_id_generator(
        mut self,
        next_id: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the seed roster if the slot is empty. Never overwrites existing data.
    pub fn initialize(&self) -> Result<SeedOutcome> {
        if self.storage.get(&self.key)?.is_some() {
            tracing::debug!(key = %self.key, "store already initialized");
            return Ok(SeedOutcome::AlreadyPresent);
        }

        self.save(&seed_staff())?;
        tracing::info!(key = %self.key, "seeded store with example roster");
        Ok(SeedOutcome::Seeded)
    }

    /// Replace whatever the slot holds with the seed roster
    pub fn reseed(&self) -> Result<usize> {
        let seed = seed_staff();
        self.save(&seed)?;
        tracing::info!(key = %self.key, "store reset to seed roster");
        Ok(seed.len())
    }

    /// All records matching `filter`, in storage order
    pub fn list(&self, filter: &StaffFilter) -> Result<Vec<Staff>> {
        self.latency.pause(Operation::List);

        let mut staff = self.load()?;
        filter.apply(&mut staff);

        tracing::debug!(key = %self.key, matched = staff.len(), "listed staff");
        Ok(staff)
    }

    pub fn get(&self, id: &str) -> Result<Option<Staff>> {
        self.latency.pause(Operation::Get);

        Ok(self.load()?.into_iter().find(|s| s.id == id))
    }

    /// Append a new record under a freshly generated id
    pub fn create(&self, new: NewStaff) -> Result<Staff> {
        self.latency.pause(Operation::Create);

        let mut staff = self.load()?;
        let id = self.generate_id(&staff)?;
        let created = Staff::from_new(id, new);

        staff.push(created.clone());
        self.save(&staff)?;

        tracing::info!(id = %created.id, "created staff record");
        Ok(created)
    }

    /// Merge `patch` over the record with `id`. Fails with `StaffNotFound` if absent.
    pub fn update(&self, id: &str, patch: StaffPatch) -> Result<Staff> {
        self.latency.pause(Operation::Update);

        let mut staff = self.load()?;
        let record = staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StaffbookError::StaffNotFound(id.to_string()))?;

        record.apply(patch);
        let updated = record.clone();
        self.save(&staff)?;

        tracing::info!(id, "updated staff record");
        Ok(updated)
    }

    /// Remove the record with `id`, returning it. `None` leaves the slot untouched.
    pub fn remove(&self, id: &str) -> Result<Option<Staff>> {
        self.latency.pause(Operation::Delete);

        let mut staff = self.load()?;
        let Some(index) = staff.iter().position(|s| s.id == id) else {
            tracing::debug!(id, "delete of unknown staff id");
            return Ok(None);
        };

        let removed = staff.remove(index);
        self.save(&staff)?;

        tracing::info!(id, "deleted staff record");
        Ok(Some(removed))
    }

    /// Whether a record was actually removed. Absence is not an error here.
    pub fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.remove(id)?.is_some())
    }

    fn load(&self) -> Result<Vec<Staff>> {
        let blob = self
            .storage
            .get(&self.key)?
            .ok_or_else(|| StaffbookError::StoreNotInitialized(self.key.clone()))?;

        serde_json::from_str(&blob).map_err(|source| {
            tracing::warn!(key = %self.key, error = %source, "malformed store slot");
            StaffbookError::CorruptStore {
                key: self.key.clone(),
                source,
            }
        })
    }

    fn save(&self, staff: &[Staff]) -> Result<()> {
        let blob = serde_json::to_string(staff)?;
        self.storage.set(&self.key, &blob)
    }

    fn generate_id(&self, staff: &[Staff]) -> Result<String> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = (self.next_id)();
            if !staff.iter().any(|s| s.id == id) {
                return Ok(id);
            }
            tracing::warn!(id = %id, attempt, "generated staff id collided, retrying");
        }
        Err(StaffbookError::IdCollision(MAX_ID_ATTEMPTS))
    }
}
