//! Output records and their keyed, deduplicated collection.
//!
//! On the wire a [`RecordBook`] is one flat JSON object keyed by record key:
//!
//! ```text
//! { "<key>": { "timestamp": 1000, "metrics": { "spread": .., "imbalance": .., "intensity": .. }, "decision": "favorable" } }
//! ```

use std::collections::HashSet;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::{Decision, MetricSample};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Content-derived identity; equal inputs give equal keys.
    pub key: String,
    pub timestamp: i64,
    pub metrics: MetricSample,
    pub decision: Decision,
}

impl Record {
    /// Value half of the keyed wire form.
    pub fn body(&self) -> RecordBody<'_> {
        RecordBody {
            timestamp: self.timestamp,
            metrics: &self.metrics,
            decision: self.decision,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    pub timestamp: i64,
    pub metrics: &'a MetricSample,
    pub decision: Decision,
}

/// Records in first-seen order with duplicate keys dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordBook {
    records: Vec<Record>,
    seen: HashSet<String>,
    duplicates: usize,
}

impl RecordBook {
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::default();
        for r in records {
            book.insert(r);
        }
        book
    }

    /// Returns false (and keeps the existing entry) when the key is already present.
    pub fn insert(&mut self, record: Record) -> bool {
        if !self.seen.insert(record.key.clone()) {
            self.duplicates += 1;
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records rejected because their key was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.seen.contains(key)
    }
}

impl Serialize for RecordBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for r in &self.records {
            map.serialize_entry(&r.key, &r.body())?;
        }
        map.end()
    }
}
