//! The filter engine.
//!
//! Every function here is pure: the result depends only on the records and
//! the conditions passed in, and surviving records keep their input order.

use crate::query::QueryList;
use crate::record::Lens;

/// Returns the records that satisfy every condition, in catalog order.
///
/// An empty condition list returns every record.
pub fn compute_filtered_records<'a>(records: &'a [Lens], queries: &QueryList) -> Vec<&'a Lens> {
    records.iter().filter(|lens| queries.matches(lens)).collect()
}

/// Like [`compute_filtered_records`], but returns owned copies.
pub fn compute_filtered_records_cloned(records: &[Lens], queries: &QueryList) -> Vec<Lens> {
    compute_filtered_records(records, queries)
        .into_iter()
        .cloned()
        .collect()
}

/// Counts the records that satisfy every condition.
pub fn count_matching(records: &[Lens], queries: &QueryList) -> usize {
    records.iter().filter(|lens| queries.matches(lens)).count()
}
