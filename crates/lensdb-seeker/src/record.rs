//! Lens records and typed field access.
//!
//! Predicates never match on field names at runtime. They carry a
//! [`NumericField`] or [`FlagField`] and read the record through
//! [`Lens::number`] and [`Lens::flag`].

use serde::{Deserialize, Serialize};

/// One catalog entry. Lengths are in millimeters, weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lens {
    pub id: i64,
    pub maker: String,
    pub name: String,
    pub product_number: String,
    /// 35mm-equivalent focal length at the wide end.
    pub wide_focal_length: f64,
    /// 35mm-equivalent focal length at the telephoto end.
    pub telephoto_focal_length: f64,
    pub wide_f_number: f64,
    pub telephoto_f_number: f64,
    pub wide_min_focus_distance: f64,
    pub telephoto_min_focus_distance: f64,
    pub max_photographing_magnification: f64,
    pub filter_diameter: f64,
    pub is_drip_proof: bool,
    pub has_image_stabilization: bool,
    pub is_inner_zoom: bool,
    pub overall_diameter: f64,
    pub overall_length: f64,
    pub weight: f64,
    /// Suggested retail price, tax excluded.
    pub price: u64,
}

/// Numeric fields a predicate can compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    WideFocalLength,
    TelephotoFocalLength,
    WideFNumber,
    TelephotoFNumber,
    WideMinFocusDistance,
    TelephotoMinFocusDistance,
    MaxPhotographingMagnification,
    FilterDiameter,
    OverallDiameter,
    OverallLength,
    Weight,
    Price,
}

impl NumericField {
    pub const ALL: [NumericField; 12] = [
        NumericField::WideFocalLength,
        NumericField::TelephotoFocalLength,
        NumericField::WideFNumber,
        NumericField::TelephotoFNumber,
        NumericField::WideMinFocusDistance,
        NumericField::TelephotoMinFocusDistance,
        NumericField::MaxPhotographingMagnification,
        NumericField::FilterDiameter,
        NumericField::OverallDiameter,
        NumericField::OverallLength,
        NumericField::Weight,
        NumericField::Price,
    ];

    /// Returns the dataset key of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::WideFocalLength => "wide_focal_length",
            NumericField::TelephotoFocalLength => "telephoto_focal_length",
            NumericField::WideFNumber => "wide_f_number",
            NumericField::TelephotoFNumber => "telephoto_f_number",
            NumericField::WideMinFocusDistance => "wide_min_focus_distance",
            NumericField::TelephotoMinFocusDistance => "telephoto_min_focus_distance",
            NumericField::MaxPhotographingMagnification => "max_photographing_magnification",
            NumericField::FilterDiameter => "filter_diameter",
            NumericField::OverallDiameter => "overall_diameter",
            NumericField::OverallLength => "overall_length",
            NumericField::Weight => "weight",
            NumericField::Price => "price",
        }
    }
}

/// Boolean fields a flag predicate can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    DripProof,
    ImageStabilization,
    InnerZoom,
}

impl FlagField {
    /// Returns the dataset key of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FlagField::DripProof => "is_drip_proof",
            FlagField::ImageStabilization => "has_image_stabilization",
            FlagField::InnerZoom => "is_inner_zoom",
        }
    }
}

impl Lens {
    /// Returns the value of a numeric field.
    pub fn number(&self, field: NumericField) -> f64 {
        match field {
            NumericField::WideFocalLength => self.wide_focal_length,
            NumericField::TelephotoFocalLength => self.telephoto_focal_length,
            NumericField::WideFNumber => self.wide_f_number,
            NumericField::TelephotoFNumber => self.telephoto_f_number,
            NumericField::WideMinFocusDistance => self.wide_min_focus_distance,
            NumericField::TelephotoMinFocusDistance => self.telephoto_min_focus_distance,
            NumericField::MaxPhotographingMagnification => self.max_photographing_magnification,
            NumericField::FilterDiameter => self.filter_diameter,
            NumericField::OverallDiameter => self.overall_diameter,
            NumericField::OverallLength => self.overall_length,
            NumericField::Weight => self.weight,
            NumericField::Price => self.price as f64,
        }
    }

    /// Returns the value of a boolean field.
    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::DripProof => self.is_drip_proof,
            FlagField::ImageStabilization => self.has_image_stabilization,
            FlagField::InnerZoom => self.is_inner_zoom,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A lens with every measurement set to a neutral value.
    pub(crate) fn lens(id: i64) -> Lens {
        Lens {
            id,
            maker: "Acme".to_string(),
            name: format!("Lens {id}"),
            product_number: format!("AC-{id:03}"),
            wide_focal_length: 24.0,
            telephoto_focal_length: 70.0,
            wide_f_number: 2.8,
            telephoto_f_number: 2.8,
            wide_min_focus_distance: 380.0,
            telephoto_min_focus_distance: 380.0,
            max_photographing_magnification: 0.2,
            filter_diameter: 82.0,
            is_drip_proof: false,
            has_image_stabilization: false,
            is_inner_zoom: false,
            overall_diameter: 88.0,
            overall_length: 120.0,
            weight: 800.0,
            price: 198_000,
        }
    }

    #[test]
    fn number_reads_each_field() {
        let l = lens(7);
        assert_eq!(l.number(NumericField::WideFocalLength), 24.0);
        assert_eq!(l.number(NumericField::TelephotoFocalLength), 70.0);
        assert_eq!(l.number(NumericField::FilterDiameter), 82.0);
        assert_eq!(l.number(NumericField::Price), 198_000.0);
    }

    #[test]
    fn flag_reads_each_field() {
        let mut l = lens(1);
        l.has_image_stabilization = true;
        assert!(!l.flag(FlagField::DripProof));
        assert!(l.flag(FlagField::ImageStabilization));
        assert!(!l.flag(FlagField::InnerZoom));
    }

    #[test]
    fn field_names_match_dataset_keys() {
        let json = serde_json::to_value(lens(1)).unwrap();
        for field in NumericField::ALL {
            assert!(json.get(field.as_str()).is_some(), "{}", field.as_str());
        }
        for field in [
            FlagField::DripProof,
            FlagField::ImageStabilization,
            FlagField::InnerZoom,
        ] {
            assert!(json.get(field.as_str()).is_some(), "{}", field.as_str());
        }
    }

    #[test]
    fn unknown_dataset_keys_are_rejected() {
        let mut json = serde_json::to_value(lens(1)).unwrap();
        json["mount"] = serde_json::Value::String("E".into());
        assert!(serde_json::from_value::<Lens>(json).is_err());
    }
}
