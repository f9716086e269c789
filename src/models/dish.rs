use serde::{Deserialize, Serialize};

use super::{string_or_vec, within_scale};

/// A dish in the catalog with its flavor attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Dish {
    pub dish_id: i64,
    pub name: String,
    pub sweet: f64,
    pub sour: f64,
    pub salty: f64,
    pub bitter: f64,
    pub umami: f64,
    pub spice: f64,
    #[serde(default, alias = "cuisine", deserialize_with = "string_or_vec")]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub sensitive_ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, alias = "allergens")]
    pub allergies: Vec<String>,
}

impl Dish {
    /// Looks up one of the six numeric attributes by name
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "sweet" => Some(self.sweet),
            "sour" => Some(self.sour),
            "salty" => Some(self.salty),
            "bitter" => Some(self.bitter),
            "umami" => Some(self.umami),
            "spice" => Some(self.spice),
            _ => None,
        }
    }

    /// Name normalized for duplicate detection across catalog revisions
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// A dish that has not been assigned an id yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDish {
    pub name: String,
    pub sweet: f64,
    pub sour: f64,
    pub salty: f64,
    pub bitter: f64,
    pub umami: f64,
    pub spice: f64,
    #[serde(default, alias = "cuisine", deserialize_with = "string_or_vec")]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub sensitive_ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, alias = "allergens")]
    pub allergies: Vec<String>,
}

impl NewDish {
    /// Creates a dish with the six numeric attributes and empty lists
    pub fn new(name: impl Into<String>, [sweet, sour, salty, bitter, umami, spice]: [f64; 6]) -> Self {
        Self {
            name: name.into(),
            sweet,
            sour,
            salty,
            bitter,
            umami,
            spice,
            cuisines: Vec::new(),
            textures: Vec::new(),
            sensitive_ingredients: Vec::new(),
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
        }
    }

    /// Checks the name is present and every attribute sits on the 0..=10 scale
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Dish name must not be empty".to_string());
        }

        let attributes = [
            ("sweet", self.sweet),
            ("sour", self.sour),
            ("salty", self.salty),
            ("bitter", self.bitter),
            ("umami", self.umami),
            ("spice", self.spice),
        ];
        for (name, value) in attributes {
            if !within_scale(value) {
                return Err(format!("{} must be between 0 and 10, got {}", name, value));
            }
        }

        Ok(())
    }

    /// Attaches the store-assigned id
    pub fn into_dish(self, dish_id: i64) -> Dish {
        Dish {
            dish_id,
            name: self.name,
            sweet: self.sweet,
            sour: self.sour,
            salty: self.salty,
            bitter: self.bitter,
            umami: self.umami,
            spice: self.spice,
            cuisines: self.cuisines,
            textures: self.textures,
            sensitive_ingredients: self.sensitive_ingredients,
            dietary_restrictions: self.dietary_restrictions,
            allergies: self.allergies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dish_into_dish() {
        let dish = NewDish::new("Beef Pho", [2.0, 2.0, 5.0, 0.0, 8.0, 1.0]).into_dish(4);
        assert_eq!(dish.dish_id, 4);
        assert_eq!(dish.name, "Beef Pho");
        assert_eq!(dish.umami, 8.0);
        assert_eq!(dish.attribute("spice"), Some(1.0));
        assert_eq!(dish.attribute("texture"), None);
    }

    #[test]
    fn test_validate_rejects_out_of_scale() {
        let dish = NewDish::new("Inferno Wings", [0.0, 0.0, 3.0, 0.0, 2.0, 11.0]);
        let err = dish.validate().unwrap_err();
        assert!(err.contains("spice"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let dish = NewDish::new("   ", [1.0; 6]);
        assert!(dish.validate().is_err());
    }

    #[test]
    fn test_legacy_cuisine_string() {
        let dish: NewDish = serde_json::from_str(
            r#"{"name": "Tiramisu", "sweet": 4, "sour": 0, "salty": 1, "bitter": 1,
                "umami": 2, "spice": 1, "cuisine": "Italian"}"#,
        )
        .unwrap();
        assert_eq!(dish.cuisines, vec!["Italian"]);
        assert!(dish.validate().is_ok());
    }

    #[test]
    fn test_numeric_attributes_are_required() {
        let result: Result<NewDish, _> =
            serde_json::from_str(r#"{"name": "Mystery Stew", "sweet": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_name() {
        let dish = NewDish::new("  Margherita PIZZA ", [1.0; 6]).into_dish(1);
        assert_eq!(dish.normalized_name(), "margherita pizza");
    }
}
