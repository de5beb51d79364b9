use crate::model::{Position, Record};

/// Append-only record log. A position handed out by `append` addresses the
/// same record for the life of the store.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Record) -> Position {
        let position = self.records.len();
        self.records.push(record);
        position
    }

    pub fn get(&self, position: Position) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
