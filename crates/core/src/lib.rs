//! Quotelab Core Dispatch Crate
//!
//! Command dispatch and parameter resolution for the Quotelab financial data
//! SDK. Provider plugins register callable commands with typed signatures;
//! this crate resolves which command to run for a logical route, builds a
//! validated argument mapping from heterogeneous call sites, and executes it.
//!
//! # Overview
//!
//! The dispatch core supports:
//! - Route-keyed command registration with per-route provider coverage
//! - Merging positional/keyword arguments against declared signatures
//! - Authoritative injection of the shared execution context
//! - Conservative validation of explicit per-call provider choices
//! - Type coercion driven by declared parameter types
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |      Caller      | --> |  CommandRunner   |  (run(route, args, kwargs))
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    CommandMap    |  (resolve route, coverage)
//!                          +------------------+
//!                                  |
//!                                  v
//!                         +-------------------+
//!                         | ParametersBuilder |  (merge, inject, validate)
//!                         +-------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   DataCommand    |  (provider plugin callable)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | InvocationResult |  (tagged success/failure)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CommandMap`] - Route registry, built once at startup and read-only after
//! - [`DataCommand`] - Provider plugin contract with an inspectable signature
//! - [`CommandSignature`] - Canonical parameter description, cached per route
//! - [`ParametersBuilder`] - The merge/inject/resolve/validate pipeline
//! - [`CommandRunner`] - Public entry point; never propagates raw errors
//! - [`InvocationResult`] - Uniform tagged outcome of every `run`
//!
//! # Type Aliases
//!
//! - [`Route`] - Dotted command identifier (e.g. "equity.price.historical")
//! - [`ProviderId`] - Provider identifier (e.g. "YAHOO", "CBOE")
//! - [`ParamMap`] - Named argument mapping, raw or validated

pub mod command;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod params;
pub mod registry;
pub mod runner;

// Re-export the command contract
pub use command::{CommandError, CommandResult, DataCommand, FnCommand, TracedCommand};

// Re-export context types
pub use context::{CommandContext, ExecutionContext, SystemSettings, UserSettings};

// Re-export error types
pub use errors::{DispatchError, ErrorKind};

// Re-export model types
pub use models::{
    CommandSignature, ParamKind, ParamMap, ParamType, Parameter, ProviderChoice, ProviderId,
    Route, Value,
};

// Re-export registry types
pub use registry::{CommandEntry, CommandMap};

// Re-export the parameter builder
pub use params::ParametersBuilder;

// Re-export runner types
pub use runner::{CommandRunner, InvocationResult, Outcome};
