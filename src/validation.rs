use crate::kind::NifKind;
use crate::secondary_validation::{
    SpanishCifChecksum, SpanishDniChecksum, SpanishNieChecksum, SpanishOtherPersonalNifChecksum,
    Validator,
};
use strum::IntoEnumIterator;

/// Checks that a candidate is any valid Spanish NIF: a DNI, NIE, K/L/M NIF or CIF.
///
/// Input must already be uppercase and 9 characters long, it is never trimmed
/// or normalized. Malformed input is simply invalid.
pub fn is_valid(candidate: &str) -> bool {
    is_valid_personal(candidate) || is_valid_entity(candidate)
}

/// Checks that a candidate identifies a person (DNI, NIE or K/L/M NIF)
pub fn is_valid_personal(candidate: &str) -> bool {
    is_valid_dni(candidate) || is_valid_nie(candidate) || is_valid_other_personal_nif(candidate)
}

/// Checks that a candidate identifies a legal entity (CIF)
pub fn is_valid_entity(candidate: &str) -> bool {
    is_valid_cif(candidate)
}

pub fn is_valid_dni(candidate: &str) -> bool {
    SpanishDniChecksum.is_valid_match(candidate)
}

pub fn is_valid_nie(candidate: &str) -> bool {
    SpanishNieChecksum.is_valid_match(candidate)
}

pub fn is_valid_other_personal_nif(candidate: &str) -> bool {
    SpanishOtherPersonalNifChecksum.is_valid_match(candidate)
}

pub fn is_valid_cif(candidate: &str) -> bool {
    SpanishCifChecksum.is_valid_match(candidate)
}

/// Returns the kind of a valid NIF, or `None` when the candidate is not valid.
pub fn classify(candidate: &str) -> Option<NifKind> {
    NifKind::iter().find(|kind| kind.validator().is_valid_match(candidate))
}
