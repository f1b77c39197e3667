//! Core value types shared across the dispatch pipeline.

mod choices;
mod signature;
mod types;

pub use choices::ProviderChoice;
pub use signature::{CommandSignature, ParamKind, ParamType, Parameter};
pub use types::{ParamMap, ProviderId, Route, Value};
