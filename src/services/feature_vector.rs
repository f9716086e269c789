//! Feature vector construction
//!
//! Preference and dish records are turned into fixed-order numeric vectors
//! through a declared [`FeatureSchema`]. The schema, not the record, decides
//! which fields exist and in what position, so vectors built from different
//! record types under the same schema are comparable position by position.

use thiserror::Error;

use crate::models::{Dish, UserPreferences};

/// Error types for vector construction
#[derive(Debug, Error, PartialEq)]
pub enum VectorError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Unknown feature schema: {0}")]
    UnknownSchema(String),
}

/// A named position in a feature vector and the value used when a record lacks it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: f64,
}

impl FieldSpec {
    pub const fn zeroed(name: &'static str) -> Self {
        Self { name, default: 0.0 }
    }
}

/// Versioned, ordered field contract for feature vectors
#[derive(Debug, PartialEq)]
pub struct FeatureSchema {
    pub version: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Six-dimension taste schema: the five flavors plus spice
pub static TASTE_V2: FeatureSchema = FeatureSchema {
    version: "taste-v2",
    fields: &[
        FieldSpec::zeroed("sweet"),
        FieldSpec::zeroed("sour"),
        FieldSpec::zeroed("salty"),
        FieldSpec::zeroed("bitter"),
        FieldSpec::zeroed("umami"),
        FieldSpec::zeroed("spice"),
    ],
};

/// Three-dimension schema used by the first catalog revision
pub static TASTE_V1: FeatureSchema = FeatureSchema {
    version: "taste-v1",
    fields: &[
        FieldSpec::zeroed("sweet"),
        FieldSpec::zeroed("umami"),
        FieldSpec::zeroed("spice"),
    ],
};

/// Every schema the service knows how to build
pub static SCHEMAS: &[&FeatureSchema] = &[&TASTE_V2, &TASTE_V1];

/// A record that can expose named numeric features
pub trait FeatureSource {
    /// Value of the named feature, or `None` when the record does not carry it
    fn feature(&self, name: &str) -> Option<f64>;

    /// Whether the record carries the field that identifies it
    fn is_identified(&self) -> bool;

    /// Human readable label used in error messages
    fn describe(&self) -> String;
}

impl FeatureSource for UserPreferences {
    fn feature(&self, name: &str) -> Option<f64> {
        match name {
            "spice" => Some(self.spice_tolerance),
            other => self.flavors.get(other),
        }
    }

    fn is_identified(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    fn describe(&self) -> String {
        "user preferences without a user_id".to_string()
    }
}

impl FeatureSource for Dish {
    fn feature(&self, name: &str) -> Option<f64> {
        self.attribute(name)
    }

    fn is_identified(&self) -> bool {
        self.dish_id > 0 || !self.name.trim().is_empty()
    }

    fn describe(&self) -> String {
        "dish without an id or name".to_string()
    }
}

/// Numeric vector tagged with the schema that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: &'static str,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Wraps raw values under a schema version
    pub fn new(schema: &'static str, values: Vec<f64>) -> Self {
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static str {
        self.schema
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Returns a copy with every component multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            schema: self.schema,
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }
}

impl FeatureSchema {
    /// Looks up a schema by its version string
    pub fn by_version(version: &str) -> Result<&'static FeatureSchema, VectorError> {
        SCHEMAS
            .iter()
            .copied()
            .find(|schema| schema.version == version)
            .ok_or_else(|| VectorError::UnknownSchema(version.to_string()))
    }

    pub fn dimensions(&self) -> usize {
        self.fields.len()
    }

    /// Field names in vector order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Builds the vector for one record.
    ///
    /// Missing and non-finite values take the field default.
    pub fn build<S: FeatureSource + ?Sized>(&self, record: &S) -> Result<FeatureVector, VectorError> {
        if !record.is_identified() {
            return Err(VectorError::InvalidRecord(record.describe()));
        }

        let values = self
            .fields
            .iter()
            .map(|field| match record.feature(field.name) {
                Some(value) if value.is_finite() => value,
                _ => field.default,
            })
            .collect();

        Ok(FeatureVector::new(self.version, values))
    }

    /// Builds vectors for a slice of records, preserving order
    pub fn build_all<S: FeatureSource>(&self, records: &[S]) -> Result<Vec<FeatureVector>, VectorError> {
        records.iter().map(|record| self.build(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlavorProfile, NewDish};

    fn sample_preferences() -> UserPreferences {
        UserPreferences::new("test_user_123")
            .with_flavors(FlavorProfile {
                sweet: 1.0,
                sour: 1.0,
                salty: 5.0,
                bitter: 0.0,
                umami: 8.0,
            })
            .with_spice_tolerance(2.0)
    }

    #[test]
    fn test_user_vector_follows_schema_order() {
        let vector = TASTE_V2.build(&sample_preferences()).unwrap();
        assert_eq!(vector.values(), &[1.0, 1.0, 5.0, 0.0, 8.0, 2.0]);
        assert_eq!(vector.schema(), "taste-v2");
    }

    #[test]
    fn test_dish_vector_follows_schema_order() {
        let dish = NewDish::new("Beef Pho", [2.0, 2.0, 5.0, 0.0, 8.0, 1.0]).into_dish(2);
        let vector = TASTE_V2.build(&dish).unwrap();
        assert_eq!(vector.values(), &[2.0, 2.0, 5.0, 0.0, 8.0, 1.0]);
    }

    #[test]
    fn test_legacy_schema_selects_three_fields() {
        let vector = TASTE_V1.build(&sample_preferences()).unwrap();
        assert_eq!(vector.values(), &[1.0, 8.0, 2.0]);
        assert_eq!(TASTE_V1.dimensions(), 3);
        assert_eq!(TASTE_V1.field_names(), vec!["sweet", "umami", "spice"]);
    }

    #[test]
    fn test_missing_and_non_finite_values_default_to_zero() {
        let mut prefs = UserPreferences::new("partial");
        prefs.flavors.sweet = f64::NAN;
        prefs.flavors.umami = 6.0;

        let vector = TASTE_V2.build(&prefs).unwrap();
        assert_eq!(vector.values(), &[0.0, 0.0, 0.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_field_defaults_apply_to_absent_features() {
        static WITH_TEXTURE: FeatureSchema = FeatureSchema {
            version: "test",
            fields: &[
                FieldSpec::zeroed("sweet"),
                FieldSpec {
                    name: "crunch",
                    default: 3.0,
                },
            ],
        };

        let vector = WITH_TEXTURE.build(&sample_preferences()).unwrap();
        assert_eq!(vector.values(), &[1.0, 3.0]);
    }

    #[test]
    fn test_unidentified_record_is_invalid() {
        let prefs = UserPreferences::new("  ");
        let err = TASTE_V2.build(&prefs).unwrap_err();
        assert!(matches!(err, VectorError::InvalidRecord(_)));
    }

    #[test]
    fn test_schema_lookup() {
        assert_eq!(FeatureSchema::by_version("taste-v2").unwrap(), &TASTE_V2);
        assert_eq!(FeatureSchema::by_version("taste-v1").unwrap(), &TASTE_V1);
        assert_eq!(
            FeatureSchema::by_version("taste-v9"),
            Err(VectorError::UnknownSchema("taste-v9".to_string()))
        );
    }

    #[test]
    fn test_vector_norm_and_zero() {
        let vector = FeatureVector::new("taste-v2", vec![3.0, 4.0]);
        assert_eq!(vector.norm(), 5.0);
        assert!(!vector.is_zero());
        assert!(FeatureVector::new("taste-v2", vec![0.0, 0.0]).is_zero());
    }
}
