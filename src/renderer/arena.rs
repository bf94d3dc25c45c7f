//! Shared renderer storage with copy-on-write detachment.
//!
//! Renderer records live in one arena per [`crate::tree::Gui`], keyed by
//! [`RendererId`]. Several widgets may point at the same record (a shared
//! theme); each holder is counted explicitly. Writing through a shared id
//! first clones the record into a fresh slot so the other holders keep the
//! old styling, then applies the write to the clone.

use slotmap::{new_key_type, SlotMap};

use crate::property::value::Value;
use crate::renderer::data::{PropertyError, RendererData};

new_key_type! {
    /// Key of a renderer record in the arena.
    pub struct RendererId;
}

struct Record {
    data: RendererData,
    holders: usize,
}

/// Arena of reference-counted renderer records.
#[derive(Default)]
pub struct RendererArena {
    records: SlotMap<RendererId, Record>,
}

impl RendererArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh record with a single holder.
    pub fn insert(&mut self, data: RendererData) -> RendererId {
        self.records.insert(Record { data, holders: 1 })
    }

    /// Register another holder of an existing record.
    pub fn share(&mut self, id: RendererId) {
        if let Some(record) = self.records.get_mut(id) {
            record.holders += 1;
        }
    }

    /// Drop one holder; the record is freed when the last holder releases.
    pub fn release(&mut self, id: RendererId) {
        let remove = match self.records.get_mut(id) {
            Some(record) => {
                record.holders -= 1;
                record.holders == 0
            }
            None => false,
        };
        if remove {
            self.records.remove(id);
        }
    }

    pub fn get(&self, id: RendererId) -> Option<&RendererData> {
        self.records.get(id).map(|record| &record.data)
    }

    /// How many holders currently share a record. Zero for stale ids.
    pub fn holders(&self, id: RendererId) -> usize {
        self.records.get(id).map_or(0, |record| record.holders)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set a property through one holder's id, detaching first if the record
    /// is shared. Returns the id the holder must use from now on; it differs
    /// from `id` exactly when a detach happened.
    ///
    /// Validation runs before the detach, so a rejected write never splits a
    /// shared record.
    pub fn set(
        &mut self,
        id: RendererId,
        name: &str,
        value: Value,
    ) -> Result<RendererId, PropertyError> {
        let record = self.records.get(id).ok_or(PropertyError::StaleRenderer)?;
        if record.holders > 1 {
            let mut clone = record.data.clone();
            clone.set(name, value)?;
            self.release(id);
            let new_id = self.records.insert(Record { data: clone, holders: 1 });
            log::debug!("renderer detached on write to '{name}'");
            Ok(new_id)
        } else {
            // Sole holder: write in place.
            let record = self.records.get_mut(id).ok_or(PropertyError::StaleRenderer)?;
            record.data.set(name, value)?;
            Ok(id)
        }
    }

    /// Remove a property override through one holder's id, detaching first
    /// if the record is shared. Returns the id the holder must use.
    pub fn reset(&mut self, id: RendererId, name: &str) -> RendererId {
        let Some(record) = self.records.get(id) else {
            return id;
        };
        if record.holders > 1 {
            if !record.data.overrides().contains(name) {
                return id;
            }
            let mut clone = record.data.clone();
            clone.reset(name);
            self.release(id);
            let new_id = self.records.insert(Record { data: clone, holders: 1 });
            log::debug!("renderer detached on reset of '{name}'");
            new_id
        } else {
            if let Some(record) = self.records.get_mut(id) {
                record.data.reset(name);
            }
            id
        }
    }
}
