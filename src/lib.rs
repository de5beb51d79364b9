pub mod error;
pub mod model;
pub mod tokenizer;
pub mod storage;
pub mod index;
pub mod ranker;
pub mod source;
pub mod server;
pub mod parser;
pub mod manager;

use std::fmt;
use std::time::Instant;
use tracing::debug;
use crate::index::InvertedIndex;
use crate::model::{Position, Record, SearchResponse};
use crate::storage::RecordStore;
use crate::tokenizer::tokenize;

pub use crate::error::{LensError, Result};

/// In-memory search engine over log records.
///
/// Built with `&mut` access during the load phase; once wrapped in an `Arc`
/// for serving it is read-only and queries run without locks.
#[derive(Default)]
pub struct LogLens {
    store: RecordStore,
    index: InvertedIndex,
}

impl fmt::Debug for LogLens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLens")
        .field("record_count", &self.store.len())
        .field("term_count", &self.index.term_count())
        .finish()
    }
}

impl LogLens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch and indexes it. Every position assigned here is
    /// greater than all positions from earlier calls.
    pub fn ingest(&mut self, batch: Vec<Record>) -> usize {
        let count = batch.len();
        self.store.reserve(count);

        for record in batch {
            let terms = tokenize(&record.indexable_text());
            let position = self.store.append(record);
            for term in terms {
                self.index.insert(term, position);
            }
        }
        count
    }

    /// Records containing every query term, newest first.
    /// Blank or unknown input gives an empty result, never an error.
    pub fn query(&self, text: &str) -> Vec<Record> {
        let terms = tokenize(text);
        let (first, rest) = match terms.split_first() {
            Some(split) => split,
            None => return Vec::new(),
        };

        let mut positions = self.index.postings(first).to_vec();
        for term in rest {
            positions = InvertedIndex::intersect(&positions, self.index.postings(term));
        }

        let matches = positions
        .iter()
        .filter_map(|&p| self.store.get(p))
        .cloned()
        .collect();
        ranker::rank(matches)
    }

    /// `query` plus the count and how long evaluation took.
    pub fn search(&self, text: &str) -> SearchResponse {
        let start = Instant::now();
        let results = self.query(text);
        let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(query = text, count = results.len(), time_ms, "search");
        SearchResponse {
            count: results.len(),
            results,
            time_ms,
        }
    }

    pub fn get(&self, position: Position) -> Option<&Record> {
        self.store.get(position)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }
}
