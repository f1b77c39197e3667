use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ErrorKind;
use crate::models::{Route, Value};

/// Tagged outcome of a command invocation. Carries no partial state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Success {
        output: Value,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

/// Result of a single `run` call, stamped for journaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub id: Uuid,
    pub route: Route,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// The command's return value, when successful.
    pub fn output(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success { output } => Some(output),
            Outcome::Failure { .. } => None,
        }
    }

    /// The failure classification, when failed.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_accessors() {
        let result = InvocationResult {
            id: Uuid::new_v4(),
            route: "equity.price.historical".to_string(),
            timestamp: Utc::now(),
            duration_ms: 3,
            outcome: Outcome::Success {
                output: json!([{"close": 102.5}]),
            },
        };
        assert!(result.is_success());
        assert_eq!(result.output(), Some(&json!([{"close": 102.5}])));
        assert_eq!(result.error_kind(), None);

        let result = InvocationResult {
            outcome: Outcome::Failure {
                kind: ErrorKind::RouteNotFound,
                message: "Route not found: x".to_string(),
            },
            ..result
        };
        assert!(!result.is_success());
        assert_eq!(result.error_kind(), Some(ErrorKind::RouteNotFound));
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let result = InvocationResult {
            id: Uuid::new_v4(),
            route: "equity.price.historical".to_string(),
            timestamp: Utc::now(),
            duration_ms: 0,
            outcome: Outcome::Failure {
                kind: ErrorKind::ParameterValidation,
                message: "Invalid value for parameter 'limit'".to_string(),
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["kind"], "parameter_validation");
        assert_eq!(value["route"], "equity.price.historical");
        assert!(value.get("durationMs").is_some());
    }
}
