//! The query type registry.
//!
//! A [`QueryType`] is a named filter definition: how to label it, how its
//! raw input is interpreted ([`InputKind`]), and how to test a record
//! against a canonical value ([`Predicate`]). The registry is built once and
//! only ever handed out as `&'static` data.

use once_cell::sync::Lazy;

use crate::op::Op;
use crate::record::{FlagField, Lens, NumericField};

/// How the raw input of a query type becomes a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    /// Input is already in the units the predicate compares.
    #[default]
    Canonical,
    /// No input; the predicate reads a boolean field.
    Boolean,
    /// Input is in meters, compared in millimeters.
    MetersToMillimeters,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Canonical => "canonical",
            InputKind::Boolean => "boolean",
            InputKind::MetersToMillimeters => "meters",
        }
    }
}

/// Test applied to a record for a given canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `field <op> value`.
    Compare { field: NumericField, op: Op },
    /// The field is `true`. The value is ignored.
    Flag(FlagField),
}

impl Predicate {
    /// Evaluates the predicate. Total: never panics, never fails.
    pub fn eval(&self, lens: &Lens, value: f64) -> bool {
        match *self {
            Predicate::Compare { field, op } => op.eval(lens.number(field), value),
            Predicate::Flag(field) => lens.flag(field),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Compare { field, op } => {
                write!(f, "{} {} value", field.as_str(), op.symbol())
            }
            Predicate::Flag(field) => write!(f, "{}", field.as_str()),
        }
    }
}

/// A named, reusable filter definition.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryType {
    /// Stable identifier, unique across the registry.
    pub name: &'static str,
    /// Label shown before the input control.
    pub prefix: &'static str,
    /// Label shown after the input control (the unit hint).
    pub suffix: &'static str,
    pub input: InputKind,
    pub predicate: Predicate,
}

impl QueryType {
    const fn compare(
        name: &'static str,
        prefix: &'static str,
        suffix: &'static str,
        input: InputKind,
        field: NumericField,
        op: Op,
    ) -> Self {
        QueryType {
            name,
            prefix,
            suffix,
            input,
            predicate: Predicate::Compare { field, op },
        }
    }

    const fn flag(name: &'static str, prefix: &'static str, field: FlagField) -> Self {
        QueryType {
            name,
            prefix,
            suffix: "",
            input: InputKind::Boolean,
            predicate: Predicate::Flag(field),
        }
    }

    /// Returns `true` if the record satisfies this kind for `value`.
    pub fn matches(&self, lens: &Lens, value: f64) -> bool {
        self.predicate.eval(lens, value)
    }

    pub fn is_boolean(&self) -> bool {
        self.input == InputKind::Boolean
    }

    pub fn is_meter_input(&self) -> bool {
        self.input == InputKind::MetersToMillimeters
    }
}

static REGISTRY: Lazy<Vec<QueryType>> = Lazy::new(build_registry);

static BOOLEAN_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    REGISTRY
        .iter()
        .filter(|kind| kind.is_boolean())
        .map(|kind| kind.name)
        .collect()
});

static METER_INPUT_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    REGISTRY
        .iter()
        .filter(|kind| kind.is_meter_input())
        .map(|kind| kind.name)
        .collect()
});

fn build_registry() -> Vec<QueryType> {
    use InputKind::{Canonical, MetersToMillimeters};
    use NumericField as F;

    vec![
        QueryType::compare(
            "MaxWideFocalLength",
            "Wide-end focal length at most",
            "mm",
            Canonical,
            F::WideFocalLength,
            Op::Lte,
        ),
        QueryType::compare(
            "MinTelephotoFocalLength",
            "Telephoto-end focal length at least",
            "mm",
            Canonical,
            F::TelephotoFocalLength,
            Op::Gte,
        ),
        QueryType::compare(
            "MaxWideFNumber",
            "Wide-end maximum aperture at most",
            "F",
            Canonical,
            F::WideFNumber,
            Op::Lte,
        ),
        QueryType::compare(
            "MaxTelephotoFNumber",
            "Telephoto-end maximum aperture at most",
            "F",
            Canonical,
            F::TelephotoFNumber,
            Op::Lte,
        ),
        QueryType::compare(
            "MaxWideMinFocusDistance",
            "Wide-end minimum focus distance at most",
            "m",
            MetersToMillimeters,
            F::WideMinFocusDistance,
            Op::Lte,
        ),
        QueryType::compare(
            "MaxTelephotoMinFocusDistance",
            "Telephoto-end minimum focus distance at most",
            "m",
            MetersToMillimeters,
            F::TelephotoMinFocusDistance,
            Op::Lte,
        ),
        QueryType::compare(
            "MinMaxPhotographingMagnification",
            "Maximum magnification at least",
            "x",
            Canonical,
            F::MaxPhotographingMagnification,
            Op::Gte,
        ),
        QueryType::compare(
            "FilterDiameter",
            "Filter diameter equal to",
            "mm",
            Canonical,
            F::FilterDiameter,
            Op::Eq,
        ),
        QueryType::flag("IsDripProof", "Dust and splash sealed", FlagField::DripProof),
        QueryType::flag(
            "HasImageStabilization",
            "Has image stabilization",
            FlagField::ImageStabilization,
        ),
        QueryType::flag("IsInnerZoom", "Internal zoom", FlagField::InnerZoom),
        QueryType::compare(
            "MaxOverallDiameter",
            "Maximum diameter at most",
            "mm",
            Canonical,
            F::OverallDiameter,
            Op::Lte,
        ),
        QueryType::compare(
            "MaxOverallLength",
            "Overall length at most",
            "mm",
            Canonical,
            F::OverallLength,
            Op::Lte,
        ),
        QueryType::compare(
            "MaxWeight",
            "Weight at most",
            "g",
            Canonical,
            F::Weight,
            Op::Lte,
        ),
        QueryType::compare(
            "MinPrice",
            "Price (tax excluded) at least",
            "yen",
            Canonical,
            F::Price,
            Op::Gte,
        ),
        QueryType::compare(
            "MaxPrice",
            "Price (tax excluded) at most",
            "yen",
            Canonical,
            F::Price,
            Op::Lte,
        ),
    ]
}

/// Returns every registered query type in display order.
pub fn list_query_types() -> &'static [QueryType] {
    &REGISTRY
}

/// Looks up a query type by its stable name.
pub fn find_query_type(name: &str) -> Option<&'static QueryType> {
    REGISTRY.iter().find(|kind| kind.name == name)
}

/// Names of the query types that take no input.
pub fn boolean_query_type_names() -> &'static [&'static str] {
    &BOOLEAN_NAMES
}

/// Names of the query types whose input is in meters.
pub fn meter_input_query_type_names() -> &'static [&'static str] {
    &METER_INPUT_NAMES
}
