//! One editable collection

use serde_json::Value;
use shared::admin::{RecordChanges, SaveOutcome};
use shared::error::{AppError, ErrorCode};
use shared::models::{Editable, is_temp_id, temp_id};

use crate::ClientResult;

/// In-memory list of records plus the ids removed since the last save
#[derive(Debug, Clone, PartialEq)]
pub struct ListSection<R> {
    records: Vec<R>,
    pending_deletions: Vec<String>,
}

impl<R> Default for ListSection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            pending_deletions: Vec::new(),
        }
    }
}

impl<R: Editable> ListSection<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            pending_deletions: Vec::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn pending_deletions(&self) -> &[String] {
        &self.pending_deletions
    }

    /// Whether any record has not been saved yet
    pub fn has_unsaved(&self) -> bool {
        self.records.iter().any(|r| is_temp_id(r.id()))
    }

    /// Push a placeholder record under a fresh temporary id and return the id
    pub fn append(&mut self) -> String {
        let id = temp_id(R::TEMP_KIND);
        self.records.push(R::placeholder(id.clone()));
        id
    }

    /// Remove `id` from the list.
    ///
    /// Persisted ids are remembered for deletion on the next save; temporary
    /// ids were never stored and are simply dropped.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            return false;
        };
        self.records.remove(pos);
        if !is_temp_id(id) && !self.pending_deletions.iter().any(|d| d == id) {
            self.pending_deletions.push(id.to_string());
        }
        true
    }

    /// Replace one property of one record.
    ///
    /// The record is left untouched when the key is unknown or the value has
    /// the wrong shape.
    pub fn update_field(&mut self, id: &str, key: &str, value: Value) -> ClientResult<()> {
        if key == "id" {
            return Err(invalid_field(key, "Record ids cannot be edited").into());
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::NotFound, format!("Record {id} not found"))
                    .with_detail("id", id)
            })?;

        let mut raw = serde_json::to_value(&*record)?;
        let Some(fields) = raw.as_object_mut() else {
            return Err(invalid_field(key, "Record is not an object").into());
        };
        if !fields.contains_key(key) {
            return Err(invalid_field(key, "Unknown field").into());
        }
        fields.insert(key.to_string(), value);

        let updated: R = serde_json::from_value(raw)
            .map_err(|e| invalid_field(key, format!("Invalid value: {e}")))?;
        *record = updated;
        Ok(())
    }

    /// Changes to send with the next save
    pub fn changes(&self) -> RecordChanges<R> {
        RecordChanges::new(self.records.clone(), self.pending_deletions.clone())
    }

    /// Adopt server-assigned ids for records and their parent references,
    /// then forget the deletions that were just committed.
    pub fn apply_outcome(&mut self, outcome: &SaveOutcome) {
        for record in &mut self.records {
            if let Some(real) = outcome.id_map.get(record.id()) {
                record.set_id(real.clone());
            }
            let parent = record
                .parent_id()
                .and_then(|p| outcome.id_map.get(p))
                .cloned();
            if let Some(real) = parent {
                record.set_parent_id(real);
            }
        }
        self.pending_deletions.clear();
    }
}

fn invalid_field(key: &str, message: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::InvalidField, message).with_detail("field", key)
}
