//! Name-keyed API for front ends.
//!
//! A [`Session`] owns the two pieces of mutable state, the record store and
//! the condition list, and addresses query types by their stable names the
//! way a selector widget or a command line does.

use crate::error::{LoadError, Result, SeekerError};
use crate::filter::compute_filtered_records;
use crate::kind::{find_query_type, list_query_types, QueryType};
use crate::parse::{parse_value, BOOLEAN_SENTINEL};
use crate::query::QueryList;
use crate::record::Lens;
use crate::store::{CatalogSource, LoadState, RecordStore};

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: RecordStore,
    queries: QueryList,
}

impl Session {
    /// Creates a session with a pending store and no conditions.
    pub fn new() -> Self {
        Session::default()
    }

    /// Creates a session over an already loaded store.
    pub fn with_store(store: RecordStore) -> Self {
        Session {
            store,
            queries: QueryList::new(),
        }
    }

    pub fn list_query_types(&self) -> &'static [QueryType] {
        list_query_types()
    }

    /// Resolves a query type name.
    pub fn query_type(&self, name: &str) -> Result<&'static QueryType> {
        find_query_type(name).ok_or_else(|| SeekerError::UnknownQueryType(name.to_string()))
    }

    /// Parses raw input for the named query type.
    pub fn parse_value(&self, kind_name: &str, raw: &str) -> Result<f64> {
        let kind = self.query_type(kind_name)?;
        Ok(parse_value(kind, raw)?)
    }

    /// Upserts a condition with an already canonical value.
    pub fn upsert_query(&mut self, kind_name: &str, value: f64) -> Result<&QueryList> {
        let kind = self.query_type(kind_name)?;
        self.queries.upsert(kind, value);
        tracing::debug!(kind = kind.name, value, "condition set");
        Ok(&self.queries)
    }

    /// Parses `raw` and upserts the resulting condition.
    ///
    /// Boolean kinds skip parsing and store [`BOOLEAN_SENTINEL`]. On any
    /// error the condition list is left unchanged.
    pub fn add_condition(&mut self, kind_name: &str, raw: &str) -> Result<&QueryList> {
        let kind = self.query_type(kind_name)?;
        let value = if kind.is_boolean() {
            BOOLEAN_SENTINEL
        } else {
            parse_value(kind, raw)?
        };
        self.queries.upsert(kind, value);
        tracing::debug!(kind = kind.name, raw, value, "condition set");
        Ok(&self.queries)
    }

    /// Removes the condition for `kind_name`. Absent names are a no-op.
    pub fn remove_query(&mut self, kind_name: &str) -> &QueryList {
        if self.queries.contains(kind_name) {
            tracing::debug!(kind = kind_name, "condition removed");
        }
        self.queries.remove(kind_name)
    }

    /// Removes every condition.
    pub fn clear_queries(&mut self) {
        self.queries.clear();
    }

    pub fn queries(&self) -> &QueryList {
        &self.queries
    }

    pub fn records(&self) -> &[Lens] {
        self.store.records()
    }

    /// The records visible under the current conditions.
    pub fn filtered(&self) -> Vec<&Lens> {
        compute_filtered_records(self.store.records(), &self.queries)
    }

    pub fn load(&mut self, source: &dyn CatalogSource) -> std::result::Result<usize, LoadError> {
        self.store.load(source)
    }

    pub fn retry(&mut self, source: &dyn CatalogSource) -> std::result::Result<usize, LoadError> {
        self.store.retry(source)
    }

    pub fn load_state(&self) -> &LoadState {
        self.store.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::lens;

    fn session() -> Session {
        let mut a = lens(1);
        a.wide_min_focus_distance = 200.0;
        a.is_drip_proof = true;
        let mut b = lens(2);
        b.wide_min_focus_distance = 450.0;
        Session::with_store(RecordStore::from_records(vec![a, b]).unwrap())
    }

    #[test]
    fn unknown_kind_is_reported() {
        let mut s = session();
        assert!(matches!(
            s.add_condition("MaxZoomRatio", "3"),
            Err(SeekerError::UnknownQueryType(name)) if name == "MaxZoomRatio"
        ));
        assert!(matches!(
            s.upsert_query("MaxZoomRatio", 3.0),
            Err(SeekerError::UnknownQueryType(_))
        ));
        assert!(s.queries().is_empty());
    }

    #[test]
    fn parse_failure_leaves_state_unchanged() {
        let mut s = session();
        s.add_condition("MaxWeight", "900").unwrap();
        let before = s.queries().clone();

        let err = s.add_condition("MaxWeight", "heavy").unwrap_err();
        assert!(matches!(err, SeekerError::Parse(_)));
        assert_eq!(s.queries(), &before);
        assert_eq!(s.records().len(), 2);
    }

    #[test]
    fn meter_input_filters_in_millimeters() {
        let mut s = session();
        s.add_condition("MaxWideMinFocusDistance", "0.3").unwrap();
        let ids: Vec<_> = s.filtered().iter().map(|l| l.id).collect();
        assert_eq!(ids, [1]);
        assert_eq!(s.queries().get("MaxWideMinFocusDistance").unwrap().value, 300.0);
    }

    #[test]
    fn boolean_kinds_ignore_raw_text() {
        let mut s = session();
        s.add_condition("IsDripProof", "whatever").unwrap();
        assert_eq!(s.queries().get("IsDripProof").unwrap().value, BOOLEAN_SENTINEL);
        assert_eq!(s.filtered().len(), 1);
    }

    #[test]
    fn remove_then_filter_restores_all() {
        let mut s = session();
        s.add_condition("IsDripProof", "").unwrap();
        assert_eq!(s.filtered().len(), 1);
        s.remove_query("IsDripProof");
        assert_eq!(s.filtered().len(), 2);
        s.remove_query("IsDripProof");
        assert!(s.queries().is_empty());
    }

    #[test]
    fn pending_session_filters_to_nothing() {
        let mut s = Session::new();
        s.add_condition("MaxWeight", "1000").unwrap();
        assert_eq!(s.load_state(), &LoadState::Pending);
        assert!(s.filtered().is_empty());
    }

    #[test]
    fn parse_value_by_name() {
        let s = Session::new();
        assert_eq!(s.parse_value("MaxTelephotoMinFocusDistance", "0.001").unwrap(), 1.0);
        assert!(s.parse_value("Nope", "1").is_err());
    }
}
