//! Activity log for completed transforms
//!
//! An explicit, injectable store: callers own a [`HistoryStore`] value and
//! pass it where it is needed, instead of reaching for ambient global state.
//! The cipher engine itself never touches this module — callers append after
//! each successful transform.
//!
//! The log is append-only in spirit and size-capped: entries are kept
//! newest-first and the oldest entries are evicted past the capacity
//! (100 by default). Mutations notify explicitly registered subscribers,
//! replacing the original design's implicit broadcast event.

use crate::cipher::{Algorithm, Mode};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Default maximum number of retained entries
pub const DEFAULT_CAPACITY: usize = 100;

/// One recorded transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Store-assigned id, unique and increasing within one store
    pub id: u64,
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub input: String,
    pub output: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

/// Store mutation notification delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Appended(u64),
    Deleted(u64),
    Cleared,
}

/// Export serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array of entries
    Json,
    /// Line-oriented text blocks, one per entry
    Text,
}

type Listener = Box<dyn Fn(&HistoryEvent) + Send + Sync>;

/// Size-capped, newest-first activity log
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a store retaining at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback invoked after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&HistoryEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, event: HistoryEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Records one transform, evicting the oldest entry past capacity
    ///
    /// # Returns
    /// The id assigned to the new entry
    pub fn append(&mut self, algorithm: Algorithm, mode: Mode, input: &str, output: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push_front(HistoryEntry {
            id,
            algorithm,
            mode,
            input: input.to_string(),
            output: output.to_string(),
            timestamp: now_millis(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }

        tracing::debug!("history: appended entry {} ({} {})", id, algorithm, mode);
        self.notify(HistoryEvent::Appended(id));
        id
    }

    /// All retained entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry with `id`, reporting whether it existed
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() < before;
        if removed {
            self.notify(HistoryEvent::Deleted(id));
        }
        removed
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        tracing::debug!("history: cleared");
        self.notify(HistoryEvent::Cleared);
    }

    /// Case-insensitive substring search over algorithm name, input and output
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.algorithm.name().contains(&query)
                    || entry.input.to_lowercase().contains(&query)
                    || entry.output.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Entries for one algorithm; `None` selects all
    pub fn filter(&self, algorithm: Option<Algorithm>) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| algorithm.is_none_or(|a| entry.algorithm == a))
            .collect()
    }

    /// Serializes the log for download or transfer
    pub fn export(&self, format: ExportFormat) -> crate::Result<String> {
        match format {
            ExportFormat::Json => {
                let entries: Vec<&HistoryEntry> = self.entries.iter().collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            ExportFormat::Text => {
                let mut out = String::new();
                for entry in &self.entries {
                    let when = format_timestamp(entry.timestamp)?;
                    out.push_str(&format!(
                        "[{}] {} - {}\nInput: {}\nOutput: {}\n{}\n\n",
                        when,
                        entry.algorithm.name().to_uppercase(),
                        entry.mode.to_string().to_uppercase(),
                        entry.input,
                        entry.output,
                        "=".repeat(50),
                    ));
                }
                Ok(out)
            }
        }
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

fn format_timestamp(millis: i64) -> crate::Result<String> {
    let when = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)?;
    Ok(when.format(&Rfc3339)?)
}
