//! Route registry populated once at startup from the provider-plugin listing.
//!
//! The map is read-only during dispatch: registration happens before the
//! first `run`, after which the map is shared behind an `Arc` and never
//! mutated again.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::command::DataCommand;
use crate::errors::DispatchError;
use crate::models::{CommandSignature, ProviderId, Route};
use crate::params::ParametersBuilder;

/// A registered command plus the provider choices valid for its route.
pub struct CommandEntry {
    pub command: Arc<dyn DataCommand>,
    /// Provider choices valid for this route. An empty list means the route
    /// has no entry in the command coverage map.
    pub providers: Vec<ProviderId>,
    /// Route-specific default provider choice, informational only: it is
    /// never auto-inserted into an argument mapping.
    pub default_provider: Option<ProviderId>,
}

// The command itself is an opaque trait object; show the routing metadata.
impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("providers", &self.providers)
            .field("default_provider", &self.default_provider)
            .finish_non_exhaustive()
    }
}

/// Mapping from route to command entry, with a cache of normalized
/// signatures so each command is inspected at most once.
#[derive(Default)]
pub struct CommandMap {
    commands: HashMap<Route, CommandEntry>,
    providers: BTreeSet<ProviderId>,
    signatures: DashMap<Route, Arc<CommandSignature>>,
}

impl CommandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under a route. Startup only.
    ///
    /// The entry's providers are added to the registry-wide provider set
    /// used to validate explicit per-call selections.
    pub fn register(&mut self, route: impl Into<Route>, entry: CommandEntry) {
        for provider in &entry.providers {
            self.providers.insert(provider.clone());
        }
        self.commands.insert(route.into(), entry);
    }

    /// Convenience form of [`register`](Self::register).
    pub fn register_command(
        &mut self,
        route: impl Into<Route>,
        command: Arc<dyn DataCommand>,
        providers: Vec<ProviderId>,
        default_provider: Option<ProviderId>,
    ) {
        self.register(
            route,
            CommandEntry {
                command,
                providers,
                default_provider,
            },
        );
    }

    /// Register a provider known to the plugin listing but not routed yet.
    pub fn register_provider(&mut self, provider: impl Into<ProviderId>) {
        self.providers.insert(provider.into());
    }

    /// Look up the entry for a route.
    pub fn resolve(&self, route: &str) -> Result<&CommandEntry, DispatchError> {
        self.commands
            .get(route)
            .ok_or_else(|| DispatchError::RouteNotFound {
                route: route.to_string(),
            })
    }

    /// The command coverage map entry for a route.
    ///
    /// Returns `None` when the route is unregistered or registered with no
    /// provider choices.
    pub fn coverage(&self, route: &str) -> Option<&[ProviderId]> {
        self.commands
            .get(route)
            .filter(|entry| !entry.providers.is_empty())
            .map(|entry| entry.providers.as_slice())
    }

    /// Full set of provider identifiers registered across all routes.
    pub fn available_providers(&self) -> &BTreeSet<ProviderId> {
        &self.providers
    }

    /// Registered routes, sorted.
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Normalized signature for a route's command, computed once and cached.
    pub fn signature_for(&self, route: &str) -> Result<Arc<CommandSignature>, DispatchError> {
        if let Some(signature) = self.signatures.get(route) {
            return Ok(Arc::clone(signature.value()));
        }

        let entry = self.resolve(route)?;
        let signature = Arc::new(ParametersBuilder::normalize_signature(
            entry.command.as_ref(),
        )?);
        self.signatures
            .insert(route.to_string(), Arc::clone(&signature));
        Ok(signature)
    }
}
