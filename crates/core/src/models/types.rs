/// Dotted identifier for a logical command, e.g. "equity.price.historical"
pub type Route = String;

/// Provider identifier, e.g. "YAHOO", "ALPHA_VANTAGE"
pub type ProviderId = String;

/// Dynamic argument value as supplied by heterogeneous call sites
pub type Value = serde_json::Value;

/// Named argument mapping, both raw and validated
pub type ParamMap = serde_json::Map<String, serde_json::Value>;
