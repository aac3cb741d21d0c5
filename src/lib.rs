// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod kind;
mod observability;
mod secondary_validation;
mod shape;
mod validation;

// This is the public API of the NIF validator library
pub use config::{NifScope, NifValidatorConfig, SCOPE_LABEL};
pub use error::ConfigError;
pub use kind::NifKind;
pub use observability::labels::Labels;
pub use observability::metrics::{MeteredNifValidator, ValidatorMetrics};
pub use secondary_validation::{
    CheckForm, SpanishCifChecksum, SpanishDniChecksum, SpanishNieChecksum,
    SpanishOtherPersonalNifChecksum, Validator,
};
pub use validation::{
    classify, is_valid, is_valid_cif, is_valid_dni, is_valid_entity, is_valid_nie,
    is_valid_other_personal_nif, is_valid_personal,
};
