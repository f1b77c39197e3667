//! Canonical description of a command's parameters.
//!
//! A [`CommandSignature`] is produced once per command by the parameter
//! builder and every later pipeline step works against this typed structure
//! instead of re-inspecting the command.

use serde::{Deserialize, Serialize};

use super::types::Value;

/// How a parameter may receive its value during merging.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Bindable positionally or by keyword.
    PositionalOrKeyword,

    /// Bindable by keyword only.
    KeywordOnly,

    /// Variadic positional catch-all. Representable so foreign signatures
    /// can be described, but rejected at normalization.
    VarPositional,

    /// Variadic keyword catch-all. Rejected at normalization.
    VarKeyword,
}

impl ParamKind {
    /// Whether this kind is a variadic catch-all, unsupported for merging.
    pub fn is_variadic(&self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }
}

/// Closed set of coercion targets, keyed by type tag.
///
/// Coercion rules are looked up by this tag; anything outside the set is an
/// explicit unsupported-coercion error rather than a silent failure.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Integer,
    Float,
    String,
    Boolean,
    Mapping,
    List,
    /// The injected command context; always authoritative over caller input.
    Context,
    /// Per-provider choice mapping; defaults to an empty mapping when declared.
    ProviderChoices,
    /// Nested schema model, validated by the (out of scope) schema layer.
    /// Coercion only checks the mapping shape.
    Model(String),
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamType::Integer => f.write_str("integer"),
            ParamType::Float => f.write_str("float"),
            ParamType::String => f.write_str("string"),
            ParamType::Boolean => f.write_str("boolean"),
            ParamType::Mapping => f.write_str("mapping"),
            ParamType::List => f.write_str("list"),
            ParamType::Context => f.write_str("context"),
            ParamType::ProviderChoices => f.write_str("provider choices"),
            ParamType::Model(name) => write!(f, "model '{}'", name),
        }
    }
}

/// A single declared parameter: name, kind, optional default, optional type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_type: Option<ParamType>,
}

impl Parameter {
    /// An untyped positional-or-keyword parameter with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::PositionalOrKeyword,
            default: None,
            param_type: None,
        }
    }

    /// A required positional-or-keyword parameter with a declared type.
    pub fn required(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            param_type: Some(param_type),
            ..Self::new(name)
        }
    }

    /// An optional positional-or-keyword parameter with type and default.
    pub fn optional(name: impl Into<String>, param_type: ParamType, default: Value) -> Self {
        Self {
            param_type: Some(param_type),
            default: Some(default),
            ..Self::new(name)
        }
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Ordered parameter list for a command.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandSignature {
    parameters: Vec<Parameter>,
}

impl CommandSignature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// Declared parameters in order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The parameter declared with [`ParamType::Context`], if any.
    pub fn context_parameter(&self) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| matches!(p.param_type, Some(ParamType::Context)))
    }

    /// The parameter declared with [`ParamType::ProviderChoices`], if any.
    pub fn provider_choices_parameter(&self) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| matches!(p.param_type, Some(ParamType::ProviderChoices)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_builders() {
        let param = Parameter::optional("limit", ParamType::Integer, json!(100));
        assert_eq!(param.name, "limit");
        assert_eq!(param.kind, ParamKind::PositionalOrKeyword);
        assert_eq!(param.default, Some(json!(100)));
        assert_eq!(param.param_type, Some(ParamType::Integer));

        let param = Parameter::required("query", ParamType::String).with_kind(ParamKind::KeywordOnly);
        assert_eq!(param.kind, ParamKind::KeywordOnly);
        assert!(param.default.is_none());
    }

    #[test]
    fn test_signature_lookup() {
        let signature = CommandSignature::new(vec![
            Parameter::required("symbol", ParamType::String),
            Parameter::required("cc", ParamType::Context),
            Parameter::required("provider_choices", ParamType::ProviderChoices),
        ]);

        assert_eq!(signature.len(), 3);
        assert!(signature.contains("symbol"));
        assert!(!signature.contains("interval"));
        assert_eq!(signature.context_parameter().map(|p| p.name.as_str()), Some("cc"));
        assert_eq!(
            signature.provider_choices_parameter().map(|p| p.name.as_str()),
            Some("provider_choices")
        );
    }

    #[test]
    fn test_variadic_kinds() {
        assert!(ParamKind::VarPositional.is_variadic());
        assert!(ParamKind::VarKeyword.is_variadic());
        assert!(!ParamKind::PositionalOrKeyword.is_variadic());
        assert!(!ParamKind::KeywordOnly.is_variadic());
    }
}
