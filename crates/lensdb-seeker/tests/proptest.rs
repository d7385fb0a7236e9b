//! Property-based tests for the filter engine using proptest.

use lensdb_seeker::{
    compute_filtered_records, list_query_types, upsert_query, Lens, QueryList, QueryType,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn lens_strategy() -> impl Strategy<Value = Lens> {
    (
        (10.0f64..600.0, 1.0f64..16.0, 50.0f64..2000.0, 0.05f64..1.5),
        (0u8..4, any::<bool>(), any::<bool>(), any::<bool>()),
        (40.0f64..160.0, 30.0f64..400.0, 100.0f64..3000.0, 0u64..800_000),
    )
        .prop_map(
            |(
                (focal, f_number, focus, magnification),
                (filter, drip, stabilized, inner),
                (diameter, length, weight, price),
            )| Lens {
                id: 0,
                maker: "Acme".into(),
                name: "Generated".into(),
                product_number: "G".into(),
                wide_focal_length: focal,
                telephoto_focal_length: focal * 2.0,
                wide_f_number: f_number,
                telephoto_f_number: f_number + 1.0,
                wide_min_focus_distance: focus,
                telephoto_min_focus_distance: focus * 1.5,
                max_photographing_magnification: magnification,
                filter_diameter: [58.0, 67.0, 72.0, 77.0][filter as usize],
                is_drip_proof: drip,
                has_image_stabilization: stabilized,
                is_inner_zoom: inner,
                overall_diameter: diameter,
                overall_length: length,
                weight,
                price,
            },
        )
}

/// Catalog with unique ids in index order.
fn catalog_strategy() -> impl Strategy<Value = Vec<Lens>> {
    prop::collection::vec(lens_strategy(), 0..40).prop_map(|mut records| {
        for (i, lens) in records.iter_mut().enumerate() {
            lens.id = i as i64;
        }
        records
    })
}

fn kind_strategy() -> impl Strategy<Value = &'static QueryType> {
    prop::sample::select(list_query_types().iter().collect::<Vec<_>>())
}

fn condition_strategy() -> impl Strategy<Value = (&'static QueryType, f64)> {
    (kind_strategy(), 0.0f64..3000.0)
}

fn build(conditions: &[(&'static QueryType, f64)]) -> QueryList {
    conditions
        .iter()
        .fold(QueryList::new(), |list, &(kind, value)| {
            upsert_query(&list, kind, value)
        })
}

fn ids(records: &[&Lens]) -> Vec<i64> {
    records.iter().map(|l| l.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtering twice with the same inputs gives the same output.
    #[test]
    fn filter_is_deterministic(
        records in catalog_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..6),
    ) {
        let queries = build(&conditions);
        let first = compute_filtered_records(&records, &queries);
        let second = compute_filtered_records(&records, &queries);
        prop_assert_eq!(first, second);
    }

    /// An empty condition list returns the catalog unchanged.
    #[test]
    fn empty_conditions_are_identity(records in catalog_strategy()) {
        let result = compute_filtered_records(&records, &QueryList::new());
        prop_assert_eq!(result.len(), records.len());
        for (kept, original) in result.iter().zip(records.iter()) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    /// After any upsert sequence each kind appears once, with its last value.
    #[test]
    fn upsert_keeps_one_entry_per_kind(
        conditions in prop::collection::vec(condition_strategy(), 0..30),
    ) {
        let queries = build(&conditions);

        let mut names: Vec<_> = queries.iter().map(|q| q.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        prop_assert_eq!(before, names.len());

        for query in &queries {
            let last = conditions
                .iter()
                .rev()
                .find(|(kind, _)| kind.name == query.name())
                .map(|(_, value)| *value);
            prop_assert_eq!(last, Some(query.value));
        }
    }

    /// The most recently upserted kind is always last.
    #[test]
    fn upsert_moves_to_end(
        conditions in prop::collection::vec(condition_strategy(), 1..20),
    ) {
        let queries = build(&conditions);
        let (last_kind, _) = conditions[conditions.len() - 1];
        prop_assert_eq!(queries.iter().last().map(|q| q.name()), Some(last_kind.name));
    }

    /// Adding a condition never grows the result.
    #[test]
    fn adding_condition_narrows(
        records in catalog_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..5),
        extra in condition_strategy(),
    ) {
        // Upserting `extra` may replace a condition of the same kind, which is
        // not narrowing, so only fresh kinds are checked.
        let queries = build(&conditions);
        prop_assume!(!queries.contains(extra.0.name));

        let base = ids(&compute_filtered_records(&records, &queries));
        let narrowed = ids(&compute_filtered_records(
            &records,
            &upsert_query(&queries, extra.0, extra.1),
        ));
        prop_assert!(narrowed.len() <= base.len());
        prop_assert!(narrowed.iter().all(|id| base.contains(id)));
    }

    /// Surviving records keep catalog order.
    #[test]
    fn filter_is_stable(
        records in catalog_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..4),
    ) {
        let result = ids(&compute_filtered_records(&records, &build(&conditions)));
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    /// Condition order does not change the result.
    #[test]
    fn filter_ignores_condition_order(
        records in catalog_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..6),
    ) {
        // One condition per kind, so both orders hold the same values.
        let mut seen = std::collections::HashSet::new();
        let unique: Vec<_> = conditions
            .into_iter()
            .filter(|(kind, _)| seen.insert(kind.name))
            .collect();
        let reversed: Vec<_> = unique.iter().rev().copied().collect();
        let forward = build(&unique);
        let backward = build(&reversed);

        prop_assert_eq!(
            ids(&compute_filtered_records(&records, &forward)),
            ids(&compute_filtered_records(&records, &backward))
        );
    }
}
