//! Parameter building: merge, context injection, provider-choice resolution,
//! validation and coercion.

mod builder;
mod coerce;

pub use builder::ParametersBuilder;
pub use coerce::coerce;
