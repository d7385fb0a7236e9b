//! Active conditions and the list that holds them.
//!
//! A [`QueryList`] keeps at most one [`Query`] per query type name. Upserting
//! a kind that is already present removes the old entry and appends the new
//! one, so the most recently edited condition is always last.

use crate::kind::QueryType;
use crate::record::Lens;

/// One active condition: a query type and its canonical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub kind: &'static QueryType,
    pub value: f64,
}

impl Query {
    /// Creates a new condition.
    pub fn new(kind: &'static QueryType, value: f64) -> Self {
        Query { kind, value }
    }

    /// Name of the query type this condition instantiates.
    pub fn name(&self) -> &'static str {
        self.kind.name
    }

    /// Returns `true` if the record satisfies this condition.
    pub fn matches(&self, lens: &Lens) -> bool {
        self.kind.matches(lens, self.value)
    }
}

/// Ordered set of active conditions, at most one per query type.
///
/// Order is display order only. Filtering ANDs every condition, so it does
/// not depend on order.
///
/// # Example
///
/// ```
/// use lensdb_seeker::{find_query_type, QueryList};
///
/// let max_weight = find_query_type("MaxWeight").unwrap();
/// let drip_proof = find_query_type("IsDripProof").unwrap();
///
/// let mut list = QueryList::new();
/// list.upsert(max_weight, 500.0).upsert(drip_proof, 0.0);
/// list.upsert(max_weight, 700.0);
///
/// let names: Vec<_> = list.iter().map(|q| q.name()).collect();
/// assert_eq!(names, ["IsDripProof", "MaxWeight"]);
/// assert_eq!(list.get("MaxWeight").unwrap().value, 700.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryList {
    queries: Vec<Query>,
}

impl QueryList {
    /// Creates an empty list. An empty list keeps every record.
    pub fn new() -> Self {
        QueryList::default()
    }

    /// Replaces any condition for `kind` and appends the new one at the end.
    pub fn upsert(&mut self, kind: &'static QueryType, value: f64) -> &mut Self {
        self.queries.retain(|q| q.name() != kind.name);
        self.queries.push(Query::new(kind, value));
        self
    }

    /// Removes the condition for `name`. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.queries.retain(|q| q.name() != name);
        self
    }

    /// Removes every condition.
    pub fn clear(&mut self) {
        self.queries.clear();
    }

    /// Returns the condition for `name`, if active.
    pub fn get(&self, name: &str) -> Option<&Query> {
        self.queries.iter().find(|q| q.name() == name)
    }

    /// Returns `true` if a condition for `name` is active.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.queries.iter()
    }

    pub fn as_slice(&self) -> &[Query] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Returns `true` if the record satisfies every condition.
    pub fn matches(&self, lens: &Lens) -> bool {
        self.queries.iter().all(|q| q.matches(lens))
    }
}

impl<'a> IntoIterator for &'a QueryList {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

/// Returns a new list with `kind` upserted. The input list is unchanged.
pub fn upsert_query(list: &QueryList, kind: &'static QueryType, value: f64) -> QueryList {
    let mut next = list.clone();
    next.upsert(kind, value);
    next
}

/// Returns a new list without the condition for `name`.
pub fn remove_query(list: &QueryList, name: &str) -> QueryList {
    let mut next = list.clone();
    next.remove(name);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::find_query_type;
    use crate::parse::BOOLEAN_SENTINEL;

    fn kind(name: &str) -> &'static QueryType {
        find_query_type(name).unwrap()
    }

    fn names(list: &QueryList) -> Vec<&'static str> {
        list.iter().map(|q| q.name()).collect()
    }

    #[test]
    fn empty_list() {
        let list = QueryList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.get("MaxWeight").is_none());
    }

    #[test]
    fn upsert_appends_new_kinds() {
        let mut list = QueryList::new();
        list.upsert(kind("MaxWeight"), 500.0)
            .upsert(kind("MaxPrice"), 100_000.0);
        assert_eq!(names(&list), ["MaxWeight", "MaxPrice"]);
    }

    #[test]
    fn upsert_replaces_and_moves_to_end() {
        let mut list = QueryList::new();
        list.upsert(kind("MaxWeight"), 500.0)
            .upsert(kind("MaxPrice"), 100_000.0)
            .upsert(kind("MaxWeight"), 650.0);

        assert_eq!(list.len(), 2);
        assert_eq!(names(&list), ["MaxPrice", "MaxWeight"]);
        assert_eq!(list.get("MaxWeight").unwrap().value, 650.0);
    }

    #[test]
    fn boolean_upsert_is_idempotent_not_toggle() {
        let mut list = QueryList::new();
        list.upsert(kind("IsDripProof"), BOOLEAN_SENTINEL);
        list.upsert(kind("IsDripProof"), BOOLEAN_SENTINEL);
        list.upsert(kind("IsDripProof"), BOOLEAN_SENTINEL);
        assert_eq!(names(&list), ["IsDripProof"]);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut list = QueryList::new();
        list.upsert(kind("MaxWeight"), 500.0)
            .upsert(kind("IsInnerZoom"), BOOLEAN_SENTINEL);

        let before = list.clone();
        list.remove("NonExistentKind");
        assert_eq!(list, before);

        list.remove("MaxWeight");
        assert_eq!(names(&list), ["IsInnerZoom"]);

        list.remove("MaxWeight");
        assert_eq!(names(&list), ["IsInnerZoom"]);
    }

    #[test]
    fn free_functions_leave_input_untouched() {
        let original = upsert_query(&QueryList::new(), kind("MaxWeight"), 500.0);
        let updated = upsert_query(&original, kind("MaxWeight"), 900.0);
        assert_eq!(original.get("MaxWeight").unwrap().value, 500.0);
        assert_eq!(updated.get("MaxWeight").unwrap().value, 900.0);

        let removed = remove_query(&updated, "MaxWeight");
        assert!(removed.is_empty());
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn clear_empties_list() {
        let mut list = QueryList::new();
        list.upsert(kind("MaxWeight"), 500.0);
        list.clear();
        assert!(list.is_empty());
    }
}
