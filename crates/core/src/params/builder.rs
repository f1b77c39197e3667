//! Builds the final argument mapping for a command invocation.
//!
//! The pipeline runs merge → context injection → provider-choice resolution
//! → validation/coercion. Every step is a pure function of its inputs; the
//! orchestration entry point is [`ParametersBuilder::build`].

use std::sync::Arc;

use log::debug;

use super::coerce::coerce;
use crate::command::DataCommand;
use crate::constants::PROVIDER_CHOICES_PARAM;
use crate::context::{CommandContext, ExecutionContext, SystemSettings, UserSettings};
use crate::errors::DispatchError;
use crate::models::{
    CommandSignature, ParamMap, ParamType, ProviderChoice, ProviderId, Value,
};
use crate::registry::CommandMap;

/// Stateless collection of parameter-building steps.
///
/// Each step is independently callable for composition and testing;
/// [`build`](Self::build) chains them in dispatch order.
pub struct ParametersBuilder;

impl ParametersBuilder {
    /// Produce the canonical signature for a command.
    ///
    /// Decorated commands are unwrapped via [`DataCommand::inner`] down to
    /// the original command so names, kinds, and defaults are preserved
    /// exactly as declared there. Variadic catch-all parameters cannot be
    /// merged and fail with a signature error, as do duplicate names.
    pub fn normalize_signature(
        command: &dyn DataCommand,
    ) -> Result<CommandSignature, DispatchError> {
        let mut original = command;
        while let Some(inner) = original.inner() {
            original = inner;
        }
        let signature = original.signature();

        for (index, param) in signature.parameters().iter().enumerate() {
            if param.kind.is_variadic() {
                return Err(DispatchError::UnsupportedSignature {
                    parameter: param.name.clone(),
                    reason: "is a variadic catch-all".to_string(),
                });
            }
            let duplicated = signature.parameters()[..index]
                .iter()
                .any(|earlier| earlier.name == param.name);
            if duplicated {
                return Err(DispatchError::UnsupportedSignature {
                    parameter: param.name.clone(),
                    reason: "is declared more than once".to_string(),
                });
            }
        }

        Ok(signature)
    }

    /// Merge positional and keyword arguments into a raw named mapping.
    ///
    /// Resolution order: positional bind in declared order (regardless of
    /// kind) → keyword overlay (keyword wins on conflict) → defaults fill.
    /// A required parameter with no supplied value and no default is left
    /// absent here; validation surfaces it later.
    pub fn merge_args_and_kwargs(
        signature: &CommandSignature,
        args: &[Value],
        kwargs: &ParamMap,
    ) -> Result<ParamMap, DispatchError> {
        if args.len() > signature.len() {
            return Err(DispatchError::TooManyArguments {
                expected: signature.len(),
                given: args.len(),
            });
        }

        let mut merged = ParamMap::new();
        for (param, value) in signature.parameters().iter().zip(args.iter()) {
            merged.insert(param.name.clone(), value.clone());
        }
        for (name, value) in kwargs {
            merged.insert(name.clone(), value.clone());
        }
        for param in signature.parameters() {
            if !merged.contains_key(&param.name) {
                if let Some(default) = &param.default {
                    merged.insert(param.name.clone(), default.clone());
                }
            }
        }
        Ok(merged)
    }

    /// Inject a fresh command context if the signature declares one.
    ///
    /// The context is built from the given settings and inserted under the
    /// declared parameter's name, overwriting any caller-supplied value:
    /// context is always authoritative, never caller-overridable.
    pub fn inject_context(
        signature: &CommandSignature,
        mut mapping: ParamMap,
        system_settings: &SystemSettings,
        user_settings: &UserSettings,
    ) -> Result<ParamMap, DispatchError> {
        if let Some(param) = signature.context_parameter() {
            let context = CommandContext::new(system_settings, user_settings);
            mapping.insert(param.name.clone(), serde_json::to_value(&context)?);
        }
        Ok(mapping)
    }

    /// Validate explicit provider choices against the registry.
    ///
    /// This step validates rather than mutates:
    /// - a per-provider value of `null` is preserved as-is (it means "use the
    ///   system default at execution time"), never replaced by the route
    ///   default;
    /// - an entirely absent `provider_choices` entry stays absent; the route
    ///   default is informational only and never synthesized into the
    ///   mapping;
    /// - concrete provider names must be members of the registry's known
    ///   provider set, but only for routes present in the coverage map.
    pub fn resolve_provider_choices(
        command_map: &CommandMap,
        route: &str,
        mapping: ParamMap,
        route_default: Option<&ProviderId>,
    ) -> Result<ParamMap, DispatchError> {
        let Some(choices) = mapping.get(PROVIDER_CHOICES_PARAM) else {
            if let Some(default) = route_default {
                debug!(
                    "route '{}' has default provider '{}', not auto-inserting",
                    route, default
                );
            }
            return Ok(mapping);
        };

        if command_map.coverage(route).is_none() {
            return Ok(mapping);
        }

        // Non-mapping values are caught by validation, not here.
        if let Value::Object(choices) = choices {
            let available = command_map.available_providers();
            for (slot, value) in choices {
                let choice = ProviderChoice::parse(value).ok_or_else(|| {
                    DispatchError::InvalidParameter {
                        parameter: format!("{}.{}", PROVIDER_CHOICES_PARAM, slot),
                        value: value.to_string(),
                        expected: ParamType::ProviderChoices.to_string(),
                    }
                })?;
                for name in choice.names() {
                    if !available.contains(name) {
                        return Err(DispatchError::UnknownProvider {
                            provider: name.clone(),
                            route: route.to_string(),
                        });
                    }
                }
            }
        }

        Ok(mapping)
    }

    /// Validate and coerce a raw mapping into the final invocation mapping.
    ///
    /// The result contains exactly the declared parameter names: every value
    /// coerced to its declared type, absent parameters filled from declared
    /// defaults, `provider_choices` defaulted to an empty mapping whenever
    /// declared, and undeclared keys dropped. Idempotent.
    pub fn validate_and_coerce(
        signature: &CommandSignature,
        mapping: ParamMap,
    ) -> Result<ParamMap, DispatchError> {
        let mut validated = ParamMap::new();

        for param in signature.parameters() {
            let value = match mapping.get(&param.name) {
                Some(value) => value.clone(),
                None => match (&param.default, &param.param_type) {
                    (Some(default), _) => default.clone(),
                    (None, Some(ParamType::ProviderChoices)) => Value::Object(ParamMap::new()),
                    _ => {
                        return Err(DispatchError::MissingParameter {
                            parameter: param.name.clone(),
                        })
                    }
                },
            };
            let value = match &param.param_type {
                Some(param_type) => coerce(&param.name, value, param_type)?,
                None => value,
            };
            validated.insert(param.name.clone(), value);
        }

        for name in mapping.keys() {
            if !signature.contains(name) {
                debug!("dropping undeclared argument '{}'", name);
            }
        }

        Ok(validated)
    }

    /// Build the final argument mapping for a command invocation.
    ///
    /// Composes merge → context injection → provider-choice resolution →
    /// validation/coercion, using the execution context's command map and
    /// route for the provider-choice step. The returned mapping is exactly
    /// what the command is invoked with.
    pub fn build(
        args: &[Value],
        kwargs: &ParamMap,
        command: &dyn DataCommand,
        execution_context: &ExecutionContext,
        route: &str,
    ) -> Result<ParamMap, DispatchError> {
        let command_map = execution_context.command_map.as_ref();

        // Registered routes use the cached signature; unregistered commands
        // (standalone composition, tests) are normalized directly.
        let signature: Arc<CommandSignature> = match command_map.signature_for(route) {
            Ok(signature) => signature,
            Err(DispatchError::RouteNotFound { .. }) => {
                Arc::new(Self::normalize_signature(command)?)
            }
            Err(e) => return Err(e),
        };

        let route_default = command_map
            .resolve(route)
            .ok()
            .and_then(|entry| entry.default_provider.clone());

        let merged = Self::merge_args_and_kwargs(&signature, args, kwargs)?;
        let with_context = Self::inject_context(
            &signature,
            merged,
            &execution_context.system_settings,
            &execution_context.user_settings,
        )?;
        let resolved = Self::resolve_provider_choices(
            command_map,
            route,
            with_context,
            route_default.as_ref(),
        )?;
        Self::validate_and_coerce(&signature, resolved)
    }
}
