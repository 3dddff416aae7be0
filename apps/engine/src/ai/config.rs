//! AI configuration handling.
//!
//! Extracts the standard fields from a JSON config while preserving
//! AI-specific custom fields for individual implementations to query.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// `seed` drives deterministic behavior: the same seed must produce the
/// same decisions, which keeps simulations and test fixtures reproducible.
/// Everything else stays in `custom` for the AI that knows what to do
/// with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from an optional JSON value, falling back to an
    /// empty config when the input is absent or malformed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Null,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Query an AI-specific field preserved from the original config.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.as_object().and_then(|map| map.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_seed_and_preserves_custom_fields() {
        let json = serde_json::json!({"seed": 123, "aggression": 0.7});
        let config = AiConfig::from_json(Some(&json));
        assert_eq!(config.seed(), Some(123));
        assert_eq!(
            config.get_custom("aggression"),
            Some(&serde_json::json!(0.7))
        );
        assert_eq!(config.get_custom("missing"), None);
    }

    #[test]
    fn absent_config_is_empty() {
        let config = AiConfig::from_json(None);
        assert_eq!(config.seed(), None);
    }
}
