/// Name of the per-provider choice parameter in argument mappings.
pub const PROVIDER_CHOICES_PARAM: &str = "provider_choices";
