use super::types::{ProviderId, Value};

/// Typed view over a single `provider_choices` entry value.
///
/// An entry value is either `null` (explicitly unset, resolved to the system
/// default at execution time), a single provider name, or a list of provider
/// names. Anything else is malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProviderChoice {
    /// Explicit "unset": defer to the system default at execution time.
    Unset,
    One(ProviderId),
    Many(Vec<ProviderId>),
}

impl ProviderChoice {
    /// Parse an entry value. Returns `None` for malformed values.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ProviderChoice::Unset),
            Value::String(name) => Some(ProviderChoice::One(name.clone())),
            Value::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(name) => names.push(name.clone()),
                        _ => return None,
                    }
                }
                Some(ProviderChoice::Many(names))
            }
            _ => None,
        }
    }

    /// Concrete provider names carried by this choice. Empty when unset.
    pub fn names(&self) -> &[ProviderId] {
        match self {
            ProviderChoice::Unset => &[],
            ProviderChoice::One(name) => std::slice::from_ref(name),
            ProviderChoice::Many(names) => names,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ProviderChoice::Unset)
    }
}
