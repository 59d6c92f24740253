use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming body for `POST /style-me`.
///
/// Fields are taken as-is: no type coercion, no bounds checks. A missing
/// `gender`, `occasion` or `budget` is interpolated into the prompt as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylingRequest {
    #[serde(default)]
    pub gender: Value,
    #[serde(default)]
    pub occasion: Value,
    #[serde(default)]
    pub budget: Value,
    #[serde(default)]
    pub preferences: Option<Value>,
    #[serde(default)]
    pub wardrobe: Option<Value>,
}

impl StylingRequest {
    pub fn gender_text(&self) -> String {
        render_value(&self.gender)
    }

    pub fn occasion_text(&self) -> String {
        render_value(&self.occasion)
    }

    pub fn budget_text(&self) -> String {
        render_value(&self.budget)
    }

    /// Empty string when absent.
    pub fn preferences_text(&self) -> String {
        render_optional(self.preferences.as_ref())
    }

    /// Empty string when absent.
    pub fn wardrobe_text(&self) -> String {
        render_optional(self.wardrobe.as_ref())
    }

    /// Lower-cased occasion, gender and preferences used for example matching.
    /// Absent or null fields become empty strings.
    pub fn match_criteria(&self) -> [String; 3] {
        [
            criterion(&self.occasion),
            criterion(&self.gender),
            self.preferences.as_ref().map(criterion).unwrap_or_default(),
        ]
    }
}

/// Strings verbatim, `null` as `null`, anything else as its JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_optional(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => render_value(v),
    }
}

fn criterion(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => render_value(other).to_lowercase(),
    }
}

/// Response body. `error` is present only on failure, with an empty plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePlanResponse {
    pub style_plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StylePlanResponse {
    pub fn success(style_plan: String) -> Self {
        Self {
            style_plan,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            style_plan: String::new(),
            error: Some(error),
        }
    }
}
