use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_f64, string_or_vec};

/// Flavor intensities on the 0..=10 scale; any key left out of a submission,
/// or sent as `null` or a non-number, is zero
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlavorProfile {
    #[serde(deserialize_with = "lenient_f64")]
    pub sweet: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub sour: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub salty: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub bitter: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub umami: f64,
}

impl FlavorProfile {
    /// Looks up a flavor by its canonical name
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "sweet" => Some(self.sweet),
            "sour" => Some(self.sour),
            "salty" => Some(self.salty),
            "bitter" => Some(self.bitter),
            "umami" => Some(self.umami),
            _ => None,
        }
    }

    /// Sets a flavor by name, returning false for unknown names
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "sweet" => &mut self.sweet,
            "sour" => &mut self.sour,
            "salty" => &mut self.salty,
            "bitter" => &mut self.bitter,
            "umami" => &mut self.umami,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// All five flavors in canonical order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("sweet", self.sweet),
            ("sour", self.sour),
            ("salty", self.salty),
            ("bitter", self.bitter),
            ("umami", self.umami),
        ]
    }
}

/// A user's taste survey, stored wholesale and keyed by `user_id`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    pub user_id: String,
    #[serde(default)]
    pub flavors: FlavorProfile,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub spice_tolerance: f64,
    #[serde(default, alias = "cuisine", deserialize_with = "string_or_vec")]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, alias = "allergens")]
    pub allergies: Vec<String>,
    /// When the survey was last stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl UserPreferences {
    /// Creates preferences with all intensities at zero and empty lists
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_flavors(mut self, flavors: FlavorProfile) -> Self {
        self.flavors = flavors;
        self
    }

    pub fn with_spice_tolerance(mut self, spice_tolerance: f64) -> Self {
        self.spice_tolerance = spice_tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preferences_are_zeroed() {
        let prefs = UserPreferences::new("alice");
        assert_eq!(prefs.user_id, "alice");
        assert_eq!(prefs.flavors, FlavorProfile::default());
        assert_eq!(prefs.spice_tolerance, 0.0);
        assert!(prefs.cuisines.is_empty());
        assert!(prefs.submitted_at.is_none());
    }

    #[test]
    fn test_missing_flavor_keys_default_to_zero() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"user_id": "bob", "flavors": {"sweet": 3, "umami": 7}}"#,
        )
        .unwrap();

        assert_eq!(prefs.flavors.sweet, 3.0);
        assert_eq!(prefs.flavors.umami, 7.0);
        assert_eq!(prefs.flavors.sour, 0.0);
        assert_eq!(prefs.flavors.salty, 0.0);
        assert_eq!(prefs.flavors.bitter, 0.0);
        assert_eq!(prefs.spice_tolerance, 0.0);
    }

    #[test]
    fn test_null_intensities_default_to_zero() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"user_id": "erin", "flavors": {"sweet": null, "umami": 7}, "spice_tolerance": null}"#,
        )
        .unwrap();

        assert_eq!(prefs.flavors.sweet, 0.0);
        assert_eq!(prefs.flavors.umami, 7.0);
        assert_eq!(prefs.spice_tolerance, 0.0);
    }

    #[test]
    fn test_legacy_field_aliases() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"user_id": "carol", "cuisine": "Thai", "allergens": ["peanuts"]}"#,
        )
        .unwrap();

        assert_eq!(prefs.cuisines, vec!["Thai"]);
        assert_eq!(prefs.allergies, vec!["peanuts"]);
    }

    #[test]
    fn test_flavor_get_and_set() {
        let mut flavors = FlavorProfile::default();
        assert!(flavors.set("salty", 5.0));
        assert!(!flavors.set("spicy", 5.0));
        assert_eq!(flavors.get("salty"), Some(5.0));
        assert_eq!(flavors.get("spice"), None);
    }

    #[test]
    fn test_submitted_at_omitted_when_unset() {
        let json = serde_json::to_value(UserPreferences::new("dave")).unwrap();
        assert!(json.get("submitted_at").is_none());
    }
}
