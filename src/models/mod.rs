use serde::{Deserialize, Deserializer, Serialize};

pub mod dish;
pub mod user_preferences;

pub use dish::{Dish, NewDish};
pub use user_preferences::{FlavorProfile, UserPreferences};

/// Upper bound of the intensity scale shared by survey answers and dish attributes
pub const SCALE_MAX: f64 = 10.0;

/// Returns true when `value` is a usable intensity on the 0..=10 scale
pub fn within_scale(value: f64) -> bool {
    value.is_finite() && (0.0..=SCALE_MAX).contains(&value)
}

/// Accepts either a single string or a list of strings.
///
/// Older catalog revisions stored `cuisine` as a plain string while newer ones
/// use a `cuisines` array; both shapes land in the same `Vec<String>`.
pub(crate) fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
        OneOrMany::Null(()) => Vec::new(),
    })
}

/// Reads an intensity, treating `null` and non-numeric values as zero.
///
/// Numeric strings such as `"7"` are parsed. Anything else that is not a
/// finite number falls back to 0.0, the same as an absent field.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Intensity {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Intensity::deserialize(deserializer)? {
        Intensity::Number(value) => value,
        Intensity::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        Intensity::Other(_) => 0.0,
    };

    Ok(if value.is_finite() { value } else { 0.0 })
}

// ============================================================================
// Recommendation Types
// ============================================================================

/// A single ranked dish in a recommendation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedDish {
    pub dish_id: i64,
    pub name: String,
    /// Cosine similarity rounded to two decimals
    pub score: f64,
}

/// Ordered top-K recommendations for one user, best match first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RecommendationResult {
    pub dishes: Vec<RecommendedDish>,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Dish names in ranked order
    pub fn names(&self) -> Vec<&str> {
        self.dishes.iter().map(|d| d.name.as_str()).collect()
    }
}
