//! Survey submissions
//!
//! Turns an incoming survey payload into [`UserPreferences`]. Two shapes are
//! accepted: the flat JSON body posted by the app, and the webhook body sent
//! by Typeform, where answers arrive as a list keyed by each question's `ref`.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{within_scale, FlavorProfile, UserPreferences},
};

/// Typeform webhook envelope
#[derive(Debug, Deserialize)]
struct TypeformWebhook {
    form_response: TypeformResponse,
}

#[derive(Debug, Deserialize)]
struct TypeformResponse {
    #[serde(default)]
    hidden: serde_json::Map<String, Value>,
    #[serde(default)]
    answers: Vec<TypeformAnswer>,
}

#[derive(Debug, Deserialize)]
struct TypeformAnswer {
    field: TypeformField,
    #[serde(default)]
    number: Option<f64>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    choice: Option<TypeformChoice>,
    #[serde(default)]
    choices: Option<TypeformChoices>,
}

#[derive(Debug, Deserialize)]
struct TypeformField {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "ref", default)]
    reference: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeformChoice {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    other: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeformChoices {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    other: Option<String>,
}

impl TypeformField {
    fn key(&self) -> Option<&str> {
        self.reference.as_deref().or(self.id.as_deref())
    }
}

impl TypeformAnswer {
    /// Labels picked in a choice or multiple-choice answer, or free text
    fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(choice) = &self.choice {
            labels.extend(choice.label.iter().chain(choice.other.iter()).cloned());
        }
        if let Some(choices) = &self.choices {
            labels.extend(choices.labels.iter().cloned());
            labels.extend(choices.other.iter().cloned());
        }
        if labels.is_empty() {
            if let Some(text) = &self.text {
                labels.extend(
                    text.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
        }
        labels
    }
}

/// Parses a survey payload in either accepted shape and validates it
pub fn parse_submission(payload: Value) -> AppResult<UserPreferences> {
    let preferences = if payload.get("form_response").is_some() {
        unwrap_typeform(payload)?
    } else {
        serde_json::from_value::<UserPreferences>(payload)
            .map_err(|e| AppError::InvalidInput(format!("Malformed survey: {}", e)))?
    };

    validate(&preferences)?;
    Ok(preferences)
}

/// Maps a Typeform webhook body onto preferences
fn unwrap_typeform(payload: Value) -> AppResult<UserPreferences> {
    let webhook: TypeformWebhook = serde_json::from_value(payload)
        .map_err(|e| AppError::InvalidInput(format!("Malformed Typeform payload: {}", e)))?;
    let response = webhook.form_response;

    let user_id = match response.hidden.get("user_id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };

    let mut preferences = UserPreferences::new(user_id);
    let mut flavors = FlavorProfile::default();

    for answer in &response.answers {
        let Some(key) = answer.field.key() else {
            continue;
        };

        match key {
            "spice_tolerance" | "spice" => {
                if let Some(value) = answer.number {
                    preferences.spice_tolerance = value;
                }
            }
            "cuisines" | "cuisine" => preferences.cuisines = answer.labels(),
            "textures" => preferences.textures = answer.labels(),
            "dietary_restrictions" => preferences.dietary_restrictions = answer.labels(),
            "allergies" | "allergens" => preferences.allergies = answer.labels(),
            flavor => {
                let applied = answer
                    .number
                    .map(|value| flavors.set(flavor, value))
                    .unwrap_or(false);
                if !applied {
                    tracing::debug!(field = %flavor, "Ignoring unmapped Typeform answer");
                }
            }
        }
    }

    preferences.flavors = flavors;
    Ok(preferences)
}

/// Requires a user id and keeps every intensity on the 0..10 scale
fn validate(preferences: &UserPreferences) -> AppResult<()> {
    if preferences.user_id.trim().is_empty() {
        return Err(AppError::InvalidInput("Missing field: user_id".to_string()));
    }

    let intensities = preferences
        .flavors
        .entries()
        .into_iter()
        .chain(std::iter::once(("spice_tolerance", preferences.spice_tolerance)));

    for (name, value) in intensities {
        if !within_scale(value) {
            return Err(AppError::InvalidInput(format!(
                "{} must be between 0 and 10, got {}",
                name, value
            )));
        }
    }

    Ok(())
}
