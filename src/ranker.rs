use std::cmp::Reverse;
use crate::model::Record;

/// Newest first. The sort is stable, so records with equal timestamps keep
/// their incoming (ingestion) order. Non-numeric timestamps order as 0 and
/// out-of-range ones saturate, so an overflowing value ranks newest.
pub fn rank(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|r| Reverse(r.sort_key()));
    records
}
