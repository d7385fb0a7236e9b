//! LensDB Seeker - filter-kind registry and predicate engine for lens catalogs.
//!
//! Seeker narrows a read-only catalog of [`Lens`] records to those matching a
//! set of independently chosen conditions. It provides:
//!
//! - A fixed, ordered registry of filter kinds ([`QueryType`])
//! - A strict numeric parser with exact meter-to-millimeter conversion
//! - A condition list that keeps at most one active condition per kind
//! - A pure filter function recomputed whenever its inputs change
//! - A write-once record store with an observable, retryable load state
//!
//! # Quick Start
//!
//! ```rust
//! use lensdb_seeker::{Session, StrSource};
//!
//! let json = r#"[
//!   {"id": 1, "maker": "Acme", "name": "Wide 12-24", "product_number": "W1224",
//!    "wide_focal_length": 24.0, "telephoto_focal_length": 48.0,
//!    "wide_f_number": 4.0, "telephoto_f_number": 4.0,
//!    "wide_min_focus_distance": 200.0, "telephoto_min_focus_distance": 200.0,
//!    "max_photographing_magnification": 0.25, "filter_diameter": 72.0,
//!    "is_drip_proof": true, "has_image_stabilization": false, "is_inner_zoom": false,
//!    "overall_diameter": 80.0, "overall_length": 100.0, "weight": 500.0, "price": 120000}
//! ]"#;
//!
//! let mut session = Session::new();
//! session.load(&StrSource::new(json)).unwrap();
//!
//! // Meter input is converted to millimeters exactly: 0.2 m -> 200 mm
//! session.add_condition("MaxWideMinFocusDistance", "0.2").unwrap();
//! session.add_condition("IsDripProof", "").unwrap();
//!
//! assert_eq!(session.filtered().len(), 1);
//! ```
//!
//! # Condition Semantics
//!
//! ```text
//! keep(record) = for every active condition c: c.kind.predicate(record, c.value)
//! ```
//!
//! - An empty condition list keeps every record
//! - Surviving records keep their catalog order
//! - Adding a condition for a kind already present replaces it and moves it
//!   to the end of the list
//!
//! # Input Kinds
//!
//! | Kind | Raw input | Canonical value |
//! |------|-----------|-----------------|
//! | `Canonical` | decimal literal | the parsed number |
//! | `MetersToMillimeters` | decimal literal in meters | exact value × 1000 |
//! | `Boolean` | ignored | [`BOOLEAN_SENTINEL`] |

mod error;
mod filter;
mod kind;
mod op;
mod parse;
mod query;
mod record;
mod session;
mod store;

// Re-export public API
pub use error::{LoadError, ParseFailure, Result, SeekerError};
pub use filter::{compute_filtered_records, compute_filtered_records_cloned, count_matching};
pub use kind::{
    boolean_query_type_names, find_query_type, list_query_types, meter_input_query_type_names,
    InputKind, Predicate, QueryType,
};
pub use op::Op;
pub use parse::{parse_value, BOOLEAN_SENTINEL, MILLIMETERS_PER_METER};
pub use query::{remove_query, upsert_query, Query, QueryList};
pub use record::{FlagField, Lens, NumericField};
pub use session::Session;
pub use store::{parse_catalog, CatalogSource, FileSource, LoadState, RecordStore, StrSource};
